//! Trigger context of the running workflow

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Event name of a manually dispatched workflow
pub const WORKFLOW_DISPATCH_EVENT: &str = "workflow_dispatch";

pub const EVENT_NAME_ENV: &str = "GITHUB_EVENT_NAME";
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
pub const REF_NAME_ENV: &str = "GITHUB_REF_NAME";

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to read event payload {path:?}")]
    ReadPayload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload {path:?}")]
    ParsePayload {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How the job was triggered
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerContext {
    /// Event that triggered the workflow (e.g. `push`, `workflow_dispatch`)
    pub event_name: String,
    /// Webhook payload of the event
    pub payload: Value,
    /// Branch or tag name the job runs against
    pub ref_name: Option<String>,
}

impl Default for TriggerContext {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            payload: Value::Object(Map::new()),
            ref_name: None,
        }
    }
}

impl TriggerContext {
    /// Read the context from the GitHub Actions environment
    pub fn from_env() -> Result<Self, ContextError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through an environment lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContextError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let payload = match lookup(EVENT_PATH_ENV).filter(|p| !p.is_empty()) {
            Some(path) => read_payload(Path::new(&path))?,
            None => Value::Object(Map::new()),
        };

        Ok(Self {
            event_name: lookup(EVENT_NAME_ENV).unwrap_or_default(),
            payload,
            ref_name: lookup(REF_NAME_ENV).filter(|r| !r.is_empty()),
        })
    }

    /// Resolve the version requested by the workflow trigger
    ///
    /// A manual dispatch prefers its `version` input; every other event uses
    /// the ref name.
    pub fn requested_version(&self) -> Option<&str> {
        if self.event_name == WORKFLOW_DISPATCH_EVENT
            && let Some(input) = self.dispatch_input("version")
        {
            return Some(input);
        }

        self.ref_name.as_deref()
    }

    fn dispatch_input(&self, name: &str) -> Option<&str> {
        self.payload.get("inputs")?.get(name)?.as_str()
    }
}

fn read_payload(path: &Path) -> Result<Value, ContextError> {
    if !path.exists() {
        warn!("Event payload {:?} does not exist", path);
        return Ok(Value::Object(Map::new()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ContextError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read event payload from {:?}", path);

    serde_json::from_str(&content).map_err(|source| ContextError::ParsePayload {
        path: path.to_path_buf(),
        source,
    })
}
