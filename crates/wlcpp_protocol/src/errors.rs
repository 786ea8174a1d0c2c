//! Errors raised while reading a protocol description.
//!
//! Every variant is fatal for the run: a protocol that fails to read produces no headers at all.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error while reading or interpreting a protocol XML document.
#[derive(Debug, Error, Diagnostic)]
pub enum ProtocolError {
    #[error("failed to read protocol file '{}'", path.display())]
    #[diagnostic(code(wlcpp::protocol::io), help("check the --config path"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed protocol XML: {0}")]
    #[diagnostic(code(wlcpp::protocol::xml))]
    Xml(#[from] roxmltree::Error),

    #[error("expected root element <protocol>, found <{0}>")]
    #[diagnostic(code(wlcpp::protocol::root))]
    UnexpectedRoot(String),

    #[error("<{element}> is missing required attribute '{attribute}'")]
    #[diagnostic(code(wlcpp::protocol::missing_attribute))]
    MissingAttribute { element: String, attribute: &'static str },

    #[error("<{element}> attribute '{attribute}' has invalid value '{value}'")]
    #[diagnostic(code(wlcpp::protocol::invalid_attribute))]
    InvalidAttribute {
        element: String,
        attribute: &'static str,
        value: String,
    },

    #[error("unsupported wire type '{0}'")]
    #[diagnostic(
        code(wlcpp::protocol::wire_type),
        help("supported types: new_id, object, uint, int, fixed, string, array, fd")
    )]
    UnknownWireType(String),
}
