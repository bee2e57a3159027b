use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uv_version_check::action::context::TriggerContext;
use uv_version_check::action::output::{OUTPUT_PATH_ENV, write_outputs};
use uv_version_check::action::run_check;
use uv_version_check::action::sink::{FailureSink, WorkflowCommandSink};
use uv_version_check::config::{CheckRequest, DEFAULT_STUBS_PACKAGE, DEFAULT_UV_PROGRAM};
use uv_version_check::version::runner::TokioCommandRunner;

#[derive(Parser)]
#[command(name = "uv-version-check")]
#[command(
    version,
    about = "Check that the release tag matches the version reported by uv"
)]
struct Cli {
    /// uv executable used to read the current version
    #[arg(long, global = true, default_value = DEFAULT_UV_PROGRAM)]
    uv: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check the default project package against tags like `v1.2.3`
    Project,
    /// Check a stubs package against tags like `stubs-v1.2.3` or `v1.2.3`
    Stubs {
        #[arg(long, default_value = DEFAULT_STUBS_PACKAGE)]
        package: String,
    },
    /// Check with explicit options
    Check {
        /// Package passed to `uv version --package`
        #[arg(long)]
        package: Option<String>,
        /// Prefix stripped before comparison, applied in the given order (default: `v`)
        #[arg(long = "tag-prefix")]
        tag_prefixes: Vec<String>,
        /// Failure message when no requested version is available
        #[arg(long)]
        label: Option<String>,
    },
}

impl Command {
    fn into_request(self) -> CheckRequest {
        match self {
            Command::Project => CheckRequest::project(),
            Command::Stubs { package } => CheckRequest::stubs(package),
            Command::Check {
                package,
                tag_prefixes,
                label,
            } => CheckRequest::custom(package, tag_prefixes, label),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let request = cli.command.unwrap_or(Command::Project).into_request();
    let mut sink = WorkflowCommandSink::stdout();

    match run(&cli.uv, &request, &mut sink) {
        Ok(Some(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        // Already reported by `run_check`
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            sink.report(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Run the check and return the JSON payload of a successful result
fn run(
    program: &str,
    request: &CheckRequest,
    sink: &mut WorkflowCommandSink<std::io::Stdout>,
) -> anyhow::Result<Option<String>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let Ok(result) = runtime.block_on(run_check(
        &TokioCommandRunner,
        program,
        request,
        TriggerContext::from_env,
        sink,
    )) else {
        return Ok(None);
    };

    let json = serde_json::to_string(&result).context("Failed to serialize the check result")?;

    if let Some(path) = std::env::var_os(OUTPUT_PATH_ENV).map(PathBuf::from) {
        write_outputs(&path, &result)
            .with_context(|| format!("Failed to write step outputs to {:?}", path))?;
    }

    Ok(Some(json))
}
