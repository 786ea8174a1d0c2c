//! wlcpp backend
//!
//! Turns protocol interfaces into C++ headers. The pipeline is:
//! 1. `Interface` from `wlcpp_protocol` → [`InterfaceLowering`] → C++ node tree
//! 2. Node tree → [`cpp::Emit`] → token stream
//! 3. Token stream → [`crate::format::Printer`] → header text, written by [`HeaderGenerator`]
//!
//! ## Module Organization
//!
//! - `cpp/` - the C++ grammar node model and its emission protocol
//! - `lower/` - interface → node tree lowering
//! - `config.rs` - [`GeneratorConfig`]
//! - `generator.rs` - [`HeaderGenerator`], per-protocol header output

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod cpp;
pub mod generator;
pub mod lower;

pub use config::GeneratorConfig;
pub use generator::{GenerationError, HeaderGenerator};
pub use lower::{InterfaceLowering, LoweringError};
