// =============================================================================
// Command-related constants
// =============================================================================

/// Program invoked to discover the current version
pub const DEFAULT_UV_PROGRAM: &str = "uv";

/// Base URL used to build the `pypi_url` of a successful check
pub const PYPI_PROJECT_BASE_URL: &str = "https://pypi.org/project";

// =============================================================================
// Tag-related constants
// =============================================================================

/// Prefix stripped from tags like `v1.2.3`
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Prefixes stripped from stubs tags like `stubs-v1.2.3`, in order
pub const STUBS_TAG_PREFIXES: [&str; 2] = ["stubs-", "v"];

/// Package checked by the `stubs` preset unless overridden
pub const DEFAULT_STUBS_PACKAGE: &str = "pykeepass-stubs";

/// Failure message used when neither the workflow input nor the ref name is set
pub const DEFAULT_REQUESTED_VERSION_LABEL: &str =
    "No requested version was provided (input `version` or `GITHUB_REF_NAME`)";

/// Parameters of a single version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    /// Package passed to `uv version --package`; `None` checks the default project package
    pub package_name: Option<String>,
    /// Prefixes stripped from both versions before comparison, applied in order
    pub tag_prefixes: Vec<String>,
    /// Failure message when no requested version is available
    pub requested_version_label: String,
}

impl Default for CheckRequest {
    fn default() -> Self {
        Self {
            package_name: None,
            tag_prefixes: vec![DEFAULT_TAG_PREFIX.to_string()],
            requested_version_label: DEFAULT_REQUESTED_VERSION_LABEL.to_string(),
        }
    }
}

impl CheckRequest {
    /// Preset for the default project package tagged as `v1.2.3`
    pub fn project() -> Self {
        Self::default()
    }

    /// Preset for a stubs package tagged as `stubs-v1.2.3` or `v1.2.3`
    pub fn stubs(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
            tag_prefixes: STUBS_TAG_PREFIXES.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Build a request from explicit options, falling back to defaults for empty ones
    pub fn custom(
        package_name: Option<String>,
        tag_prefixes: Vec<String>,
        requested_version_label: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            package_name: package_name.filter(|name| !name.is_empty()),
            tag_prefixes: if tag_prefixes.is_empty() {
                defaults.tag_prefixes
            } else {
                tag_prefixes
            },
            requested_version_label: requested_version_label
                .unwrap_or(defaults.requested_version_label),
        }
    }
}

/// Returns the PyPI release page of a package version.
pub fn pypi_url(package_name: &str, version: &str) -> String {
    format!("{}/{}/{}/", PYPI_PROJECT_BASE_URL, package_name, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_preset_uses_default_package_and_v_prefix() {
        assert_eq!(
            CheckRequest::project(),
            CheckRequest {
                package_name: None,
                tag_prefixes: vec!["v".to_string()],
                requested_version_label: DEFAULT_REQUESTED_VERSION_LABEL.to_string(),
            }
        );
    }

    #[test]
    fn stubs_preset_strips_stubs_prefix_before_v() {
        let request = CheckRequest::stubs("pykeepass-stubs");

        assert_eq!(request.package_name.as_deref(), Some("pykeepass-stubs"));
        assert_eq!(request.tag_prefixes, vec!["stubs-", "v"]);
    }

    #[test]
    fn custom_falls_back_to_defaults_for_missing_options() {
        let request = CheckRequest::custom(Some(String::new()), vec![], None);

        assert_eq!(request, CheckRequest::default());
    }

    #[test]
    fn custom_keeps_explicit_options() {
        let request = CheckRequest::custom(
            Some("bar".to_string()),
            vec!["release-".to_string()],
            Some("no tag".to_string()),
        );

        assert_eq!(
            request,
            CheckRequest {
                package_name: Some("bar".to_string()),
                tag_prefixes: vec!["release-".to_string()],
                requested_version_label: "no tag".to_string(),
            }
        );
    }

    #[test]
    fn pypi_url_points_at_release_page() {
        assert_eq!(
            pypi_url("foo", "1.0.0"),
            "https://pypi.org/project/foo/1.0.0/"
        );
    }
}
