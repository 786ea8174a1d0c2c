#![forbid(unsafe_code)]
//! Wayland protocol descriptions for the wlcpp generator
//!
//! This crate owns everything on the input side of the generator:
//!
//! - `model` - the interface/request/event/enum records the backend lowers
//! - `wire` - the closed set of argument wire types
//! - `xml` - the reader that turns a protocol XML document into a [`Protocol`]
//! - `errors` - [`ProtocolError`], the only error this crate produces

pub mod errors;
pub mod model;
pub mod wire;
pub mod xml;

pub use errors::ProtocolError;
pub use model::{Argument, Description, Entry, Enum, Event, Interface, Message, Protocol, Request};
pub use wire::WireType;
pub use xml::{parse_protocol, read_protocol};
