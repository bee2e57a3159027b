//! Version comparison between the tag and the version reported by `uv`

use serde::Serialize;
use tracing::info;

use crate::config::{CheckRequest, pypi_url};
use crate::version::error::CheckError;
use crate::version::normalize::normalize_version;
use crate::version::runner::CommandRunner;
use crate::version::uv::{VersionInfo, fetch_current_version};

/// Result of a successful check, consumed by later workflow steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Package name reported by `uv`
    pub name: String,
    /// Current version exactly as reported by `uv`
    pub version: String,
    pub pypi_url: String,
}

/// Check that the current version matches the requested version
///
/// The current version is fetched first, so a failing `uv` call is reported
/// even when no requested version is available.
///
/// # Arguments
/// * `runner` - Runner used to invoke `uv`
/// * `program` - The `uv` executable
/// * `request` - Package selector, tag prefixes and failure label
/// * `requested_version` - Raw tag or input value; `None` or empty means not provided
pub async fn check_version<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    request: &CheckRequest,
    requested_version: Option<&str>,
) -> Result<CheckResult, CheckError> {
    let current = fetch_current_version(runner, program, request.package_name.as_deref()).await?;
    compare_versions(current, request, requested_version)
}

/// Compare an already fetched version against the requested version
pub fn compare_versions(
    current: VersionInfo,
    request: &CheckRequest,
    requested_version: Option<&str>,
) -> Result<CheckResult, CheckError> {
    let Some(requested_raw) = requested_version.filter(|v| !v.is_empty()) else {
        return Err(CheckError::NoRequestedVersion(
            request.requested_version_label.clone(),
        ));
    };

    let requested = normalize_version(requested_raw, &request.tag_prefixes);
    let normalized_current = normalize_version(&current.version, &request.tag_prefixes);

    if normalized_current != requested {
        return Err(CheckError::VersionMismatch {
            current: current.version,
            requested: requested_raw.to_string(),
        });
    }

    info!(
        "{} {} matches requested version {}",
        current.package_name, current.version, requested_raw
    );

    Ok(CheckResult {
        pypi_url: pypi_url(&current.package_name, &current.version),
        name: current.package_name,
        version: current.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::runner::{CommandOutput, MockCommandRunner};
    use rstest::rstest;

    const FOO_1_0_0: &str = r#"{"package_name":"foo","version":"1.0.0","commit_info":null}"#;

    fn runner_returning(exit_code: i32, stdout: &str, stderr: &str) -> MockCommandRunner {
        let output = CommandOutput {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        };
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(move |_, _| Ok(output.clone()));
        runner
    }

    #[rstest]
    #[case("v1.0.0")]
    #[case("1.0.0")]
    #[case(" v1.0.0 ")]
    #[tokio::test]
    async fn check_version_returns_result_when_versions_match(#[case] requested: &str) {
        let runner = runner_returning(0, FOO_1_0_0, "");

        let result = check_version(&runner, "uv", &CheckRequest::project(), Some(requested))
            .await
            .unwrap();

        assert_eq!(
            result,
            CheckResult {
                name: "foo".to_string(),
                version: "1.0.0".to_string(),
                pypi_url: "https://pypi.org/project/foo/1.0.0/".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn check_version_reports_both_raw_versions_on_mismatch() {
        let runner = runner_returning(0, FOO_1_0_0, "");

        let error = check_version(&runner, "uv", &CheckRequest::project(), Some("v1.0.1"))
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Current version (1.0.0) does not match requested version (v1.0.1)"
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[tokio::test]
    async fn check_version_fails_with_label_when_no_requested_version(
        #[case] requested: Option<&str>,
    ) {
        let runner = runner_returning(0, FOO_1_0_0, "");
        let request = CheckRequest::custom(None, vec![], Some("no tag given".to_string()));

        let error = check_version(&runner, "uv", &request, requested)
            .await
            .unwrap_err();

        assert!(matches!(error, CheckError::NoRequestedVersion(_)));
        assert_eq!(error.to_string(), "no tag given");
    }

    #[tokio::test]
    async fn check_version_reports_command_failure_before_missing_requested_version() {
        let runner = runner_returning(2, "", "error: No `project` table found");

        let error = check_version(&runner, "uv", &CheckRequest::project(), None)
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "uv version failed (exit 2): error: No `project` table found"
        );
    }

    #[rstest]
    #[case("stubs-v0.1.0")]
    #[case("v0.1.0")]
    #[case("0.1.0")]
    #[tokio::test]
    async fn check_version_accepts_stubs_tags(#[case] requested: &str) {
        let runner = runner_returning(
            0,
            r#"{"package_name":"pykeepass-stubs","version":"0.1.0","commit_info":null}"#,
            "",
        );

        let result = check_version(
            &runner,
            "uv",
            &CheckRequest::stubs("pykeepass-stubs"),
            Some(requested),
        )
        .await
        .unwrap();

        assert_eq!(result.name, "pykeepass-stubs");
        assert_eq!(
            result.pypi_url,
            "https://pypi.org/project/pykeepass-stubs/0.1.0/"
        );
    }

    #[tokio::test]
    async fn check_version_normalizes_current_version_too() {
        let runner = runner_returning(
            0,
            r#"{"package_name":"foo","version":"v2.0.0","commit_info":null}"#,
            "",
        );

        let result = check_version(&runner, "uv", &CheckRequest::project(), Some("2.0.0"))
            .await
            .unwrap();

        // the reported version is returned unnormalized
        assert_eq!(result.version, "v2.0.0");
    }

    #[test]
    fn compare_versions_uses_label_without_requested_version() {
        let current = VersionInfo {
            package_name: "foo".to_string(),
            version: "1.0.0".to_string(),
            commit_info: None,
        };

        let error = compare_versions(current, &CheckRequest::project(), None).unwrap_err();

        assert!(matches!(error, CheckError::NoRequestedVersion(_)));
    }

    #[tokio::test]
    async fn check_version_is_idempotent() {
        let runner = runner_returning(0, FOO_1_0_0, "");
        let request = CheckRequest::project();

        let first = check_version(&runner, "uv", &request, Some("v1.0.0"))
            .await
            .unwrap();
        let second = check_version(&runner, "uv", &request, Some("v1.0.0"))
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}
