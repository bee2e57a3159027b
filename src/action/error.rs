use std::error::Error as StdError;

use thiserror::Error;

use crate::action::context::ContextError;
use crate::version::error::CheckError;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("Failed to read the trigger context")]
    Context(#[from] ContextError),
}

/// Join an error and its sources into one line, outermost first
pub fn error_message(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
