//! `uv version` invocation and output contract

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::version::error::CheckError;
use crate::version::runner::CommandRunner;

/// Version information reported by `uv version --output-format=json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    pub package_name: String,
    pub version: String,
    /// Commit details, `None` when `uv` reports `null`
    pub commit_info: Option<Map<String, Value>>,
}

/// Build the `uv version` arguments, scoping the query when a package is given
pub fn uv_version_args(package_name: Option<&str>) -> Vec<String> {
    let mut args = vec!["version".to_string()];
    if let Some(name) = package_name {
        args.push("--package".to_string());
        args.push(name.to_string());
    }
    args.push("--output-format=json".to_string());
    args
}

/// Run `uv version` and parse the reported version
///
/// # Arguments
/// * `runner` - Runner used to invoke the command
/// * `program` - The `uv` executable (name or path)
/// * `package_name` - Package selector; the returned package must match it
pub async fn fetch_current_version<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    package_name: Option<&str>,
) -> Result<VersionInfo, CheckError> {
    let args = uv_version_args(package_name);
    let output = runner
        .run(program, &args)
        .await
        .map_err(|source| CheckError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.success() {
        let captured = [output.stderr.trim(), output.stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .unwrap_or("no output");
        warn!("uv version exited with code {}", output.exit_code);
        return Err(CheckError::CommandFailure {
            exit_code: output.exit_code,
            output: captured.to_string(),
        });
    }

    let parsed: Value = serde_json::from_str(output.stdout.trim())?;
    let info = parse_version_info(parsed)?;

    if let Some(requested) = package_name
        && info.package_name != requested
    {
        return Err(CheckError::PackageMismatch {
            requested: requested.to_string(),
            returned: info.package_name,
        });
    }

    debug!(
        "uv reports {} {} (commit info: {})",
        info.package_name,
        info.version,
        if info.commit_info.is_some() { "present" } else { "none" }
    );

    Ok(info)
}

fn parse_version_info(value: Value) -> Result<VersionInfo, CheckError> {
    let Some(object) = value.as_object() else {
        return Err(CheckError::UnexpectedShape("expected a JSON object".to_string()));
    };

    // `commit_info` may be null but must not be missing
    if !object.contains_key("commit_info") {
        return Err(CheckError::UnexpectedShape(
            "missing `commit_info`".to_string(),
        ));
    }

    let info: VersionInfo = serde_json::from_value(value)
        .map_err(|e| CheckError::UnexpectedShape(e.to_string()))?;

    if info.package_name.is_empty() {
        return Err(CheckError::UnexpectedShape(
            "`package_name` is empty".to_string(),
        ));
    }
    if info.version.is_empty() {
        return Err(CheckError::UnexpectedShape("`version` is empty".to_string()));
    }

    Ok(info)
}
