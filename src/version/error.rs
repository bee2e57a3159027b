use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("uv version failed (exit {exit_code}): {output}")]
    CommandFailure { exit_code: i32, output: String },

    #[error("Failed to parse uv version output as JSON")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("uv version output has an unexpected shape: {0}")]
    UnexpectedShape(String),

    #[error("uv version returned package {returned} but expected {requested}")]
    PackageMismatch { requested: String, returned: String },

    #[error("{0}")]
    NoRequestedVersion(String),

    #[error("Current version ({current}) does not match requested version ({requested})")]
    VersionMismatch { current: String, requested: String },
}
