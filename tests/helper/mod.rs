//! Shared test utilities

mod runner;
mod sink;

pub use runner::FakeUv;
pub use sink::RecordingSink;
