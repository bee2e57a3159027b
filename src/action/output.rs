//! Step outputs for later workflow steps

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::version::checker::CheckResult;

/// Environment variable naming the step output file
pub const OUTPUT_PATH_ENV: &str = "GITHUB_OUTPUT";

const OUTPUT_DELIMITER: &str = "UV_VERSION_CHECK_EOF";

/// Append the check result to the step output file
///
/// Writes `name`, `version`, `pypi_url` and `result` (the JSON payload).
pub fn write_outputs(path: &Path, result: &CheckResult) -> std::io::Result<()> {
    let json = serde_json::to_string(result)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut content = String::new();
    for (key, value) in [
        ("name", result.name.as_str()),
        ("version", result.version.as_str()),
        ("pypi_url", result.pypi_url.as_str()),
        ("result", json.as_str()),
    ] {
        content.push_str(&format_output(key, value));
    }

    file.write_all(content.as_bytes())
}

fn format_output(key: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let delimiter = delimiter_for(value);
        format!("{key}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{key}={value}\n")
    }
}

/// Pick a heredoc delimiter that does not occur in the value
fn delimiter_for(value: &str) -> String {
    let mut delimiter = OUTPUT_DELIMITER.to_string();
    let mut counter = 0u32;
    while value.contains(&delimiter) {
        counter += 1;
        delimiter = format!("{OUTPUT_DELIMITER}_{counter}");
    }
    delimiter
}
