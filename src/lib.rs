#![forbid(unsafe_code)]
//! wlcpp: Wayland protocol to C++ header generator
//!
//! Reads a Wayland protocol XML description and generates one waylandcpp binding header per interface.
//! This crate provides the backend (C++ node model, lowering, header generation), the printer, and the CLI.
//! Protocol parsing lives in the `wlcpp_protocol` crate, re-exported here as [`protocol`].
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod format;

pub use wlcpp_protocol as protocol;

pub use backend::{GeneratorConfig, HeaderGenerator, InterfaceLowering};
pub use format::{PrintConfig, Printer, render};
