//! Argument wire types.

use std::fmt;
use std::str::FromStr;

use crate::errors::ProtocolError;

/// Primitive kind of a request/event argument on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    NewId,
    Object,
    Uint,
    Int,
    Fixed,
    String,
    Array,
    Fd,
}

impl WireType {
    /// Every wire type, in declaration order.
    pub const ALL: [WireType; 8] = [
        WireType::NewId,
        WireType::Object,
        WireType::Uint,
        WireType::Int,
        WireType::Fixed,
        WireType::String,
        WireType::Array,
        WireType::Fd,
    ];

    /// The tag used for this type in protocol XML.
    pub fn as_str(self) -> &'static str {
        match self {
            WireType::NewId => "new_id",
            WireType::Object => "object",
            WireType::Uint => "uint",
            WireType::Int => "int",
            WireType::Fixed => "fixed",
            WireType::String => "string",
            WireType::Array => "array",
            WireType::Fd => "fd",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireType {
    type Err = ProtocolError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "new_id" => Ok(WireType::NewId),
            "object" => Ok(WireType::Object),
            "uint" => Ok(WireType::Uint),
            "int" => Ok(WireType::Int),
            "fixed" => Ok(WireType::Fixed),
            "string" => Ok(WireType::String),
            "array" => Ok(WireType::Array),
            "fd" => Ok(WireType::Fd),
            // Legacy protocol files tag some arguments as destructors; they travel as uint.
            "destructor" => {
                tracing::warn!("argument wire type 'destructor' treated as 'uint'");
                Ok(WireType::Uint)
            }
            other => Err(ProtocolError::UnknownWireType(other.to_string())),
        }
    }
}
