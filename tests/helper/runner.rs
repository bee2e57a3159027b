//! Command runner test utilities

use std::sync::Mutex;

use async_trait::async_trait;

use uv_version_check::version::runner::{CommandOutput, CommandRunner};

/// Fake `uv` returning a canned output and recording every invocation
pub struct FakeUv {
    output: CommandOutput,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeUv {
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            output: CommandOutput {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Successful `uv version` reporting the given package and version
    pub fn reporting(package_name: &str, version: &str) -> Self {
        let stdout = serde_json::json!({
            "package_name": package_name,
            "version": version,
            "commit_info": null,
        })
        .to_string();
        Self::new(0, &stdout, "")
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeUv {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(self.output.clone())
    }
}
