//! Failure reporting through GitHub workflow commands

use std::io::Write;

#[cfg(test)]
use mockall::automock;

use tracing::error;

/// Trait for reporting a failed check to the workflow host
///
/// Reporting marks the job as failed but does not stop the caller; the
/// caller still returns its error afterwards.
#[cfg_attr(test, automock)]
pub trait FailureSink {
    fn report(&mut self, message: &str);
}

/// Sink writing `::error::` workflow commands
pub struct WorkflowCommandSink<W: Write> {
    writer: W,
}

impl WorkflowCommandSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> WorkflowCommandSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FailureSink for WorkflowCommandSink<W> {
    fn report(&mut self, message: &str) {
        error!("{}", message);
        if let Err(e) = writeln!(self.writer, "::error::{}", escape_data(message)) {
            error!("Failed to write error annotation: {}", e);
        }
        if let Err(e) = self.writer.flush() {
            error!("Failed to flush error annotation: {}", e);
        }
    }
}

/// Escape a workflow command message so it stays on one line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
