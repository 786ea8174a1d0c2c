//! Lowering errors.

use miette::Diagnostic;
use thiserror::Error;

/// A protocol name that cannot be emitted as a C++ identifier.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum LoweringError {
    #[error("{kind} name '{name}' in interface '{interface}' is not a valid identifier")]
    #[diagnostic(
        code(wlcpp::lower::invalid_identifier),
        help("names must start with a letter or '_' and contain only ASCII letters, digits and '_'")
    )]
    InvalidIdentifier {
        interface: String,
        kind: &'static str,
        name: String,
    },

    #[error("{kind} name '{name}' in interface '{interface}' is a C++ reserved word")]
    #[diagnostic(code(wlcpp::lower::reserved))]
    ReservedIdentifier {
        interface: String,
        kind: &'static str,
        name: String,
    },

    #[error("{kind} name '{name}' is declared more than once in interface '{interface}'")]
    #[diagnostic(code(wlcpp::lower::duplicate))]
    DuplicateName {
        interface: String,
        kind: &'static str,
        name: String,
    },

    #[error("entry '{entry}' of enum '{enum_name}' in interface '{interface}' has value '{value}'")]
    #[diagnostic(
        code(wlcpp::lower::enum_value),
        help("enum values must be decimal or 0x-prefixed hexadecimal integers")
    )]
    InvalidEnumValue {
        interface: String,
        enum_name: String,
        entry: String,
        value: String,
    },
}
