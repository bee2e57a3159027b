//! Version checking layer
//!
//! This module discovers the current package version through `uv`, normalizes
//! tag-style version strings and compares them against the requested version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Runner    │────▶│     uv      │────▶│   Checker   │
//! │ (subprocess)│     │ (JSON parse)│     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Normalize  │
//!                                         │ (prefixes)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Top-level comparison producing a [`checker::CheckResult`]
//! - [`error`]: Error type shared by every check step
//! - [`normalize`]: Tag prefix stripping
//! - [`runner`]: Command runner trait for scoped subprocess calls
//! - [`uv`]: `uv version` invocation and output contract

pub mod checker;
pub mod error;
pub mod normalize;
pub mod runner;
pub mod uv;
