//! GitHub Actions host layer
//!
//! Connects the version checker to the workflow runner: trigger context,
//! failure annotations and step outputs.
//!
//! # Modules
//!
//! - [`context`]: Event name, payload and ref name of the running workflow
//! - [`error`]: Host-level error wrapping check and context failures
//! - [`output`]: Step outputs written to `GITHUB_OUTPUT`
//! - [`sink`]: Failure reporting through `::error::` workflow commands

pub mod context;
pub mod error;
pub mod output;
pub mod sink;

use crate::config::CheckRequest;
use crate::version::checker::{CheckResult, compare_versions};
use crate::version::runner::CommandRunner;
use crate::version::uv::fetch_current_version;

use context::{ContextError, TriggerContext};
use error::{ActionError, error_message};
use sink::FailureSink;

/// Run one version check and report a failure to the sink
///
/// The trigger context is loaded only after `uv` has reported the current
/// version. Every error is reported exactly once and then returned, so the
/// caller stops after a failed check.
pub async fn run_check<R, S, F>(
    runner: &R,
    program: &str,
    request: &CheckRequest,
    load_context: F,
    sink: &mut S,
) -> Result<CheckResult, ActionError>
where
    R: CommandRunner + ?Sized,
    S: FailureSink + ?Sized,
    F: FnOnce() -> Result<TriggerContext, ContextError>,
{
    check(runner, program, request, load_context)
        .await
        .inspect_err(|e| sink.report(&error_message(e)))
}

async fn check<R, F>(
    runner: &R,
    program: &str,
    request: &CheckRequest,
    load_context: F,
) -> Result<CheckResult, ActionError>
where
    R: CommandRunner + ?Sized,
    F: FnOnce() -> Result<TriggerContext, ContextError>,
{
    let current = fetch_current_version(runner, program, request.package_name.as_deref()).await?;
    let context = load_context()?;
    Ok(compare_versions(
        current,
        request,
        context.requested_version(),
    )?)
}
