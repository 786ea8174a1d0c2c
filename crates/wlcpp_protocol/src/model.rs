//! Protocol description model
//!
//! Plain records mirroring the protocol XML. Element order is preserved within each list because the backend derives
//! opcodes and emitted layout from it.

use crate::wire::WireType;

/// A complete protocol document (`<protocol>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protocol {
    pub name: String,
    pub copyright: Option<String>,
    pub interfaces: Vec<Interface>,
}

impl Protocol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            copyright: None,
            interfaces: Vec::new(),
        }
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }
}

/// Free-form documentation attached to interfaces, messages and enums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub summary: Option<String>,
    pub text: String,
}

/// One interface (`<interface>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub version: u32,
    pub description: Option<Description>,
    /// Requests in declaration order (request opcodes follow this order)
    pub requests: Vec<Request>,
    /// Events in declaration order (event opcodes follow this order)
    pub events: Vec<Event>,
    pub enums: Vec<Enum>,
}

impl Interface {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            description: None,
            requests: Vec::new(),
            events: Vec::new(),
            enums: Vec::new(),
        }
    }

    pub fn with_request(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }
}

/// A request or an event: a named message with ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub description: Option<Description>,
    pub arguments: Vec<Argument>,
}

pub type Request = Message;
pub type Event = Message;

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// A message argument (`<arg>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub summary: Option<String>,
    pub wire_type: WireType,
    /// Enum this argument takes its values from, if any
    pub enum_ref: Option<String>,
    /// Interface of the object this argument refers to, if any
    pub interface_ref: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, wire_type: WireType) -> Self {
        Self {
            name: name.into(),
            summary: None,
            wire_type,
            enum_ref: None,
            interface_ref: None,
        }
    }
}

/// An enumeration (`<enum>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub bitfield: bool,
    pub description: Option<Description>,
    pub entries: Vec<Entry>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bitfield: false,
            description: None,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            value: value.into(),
            summary: None,
        });
        self
    }
}

/// One enum entry (`<entry>`). The value is kept verbatim (`"0"`, `"0x4"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: String,
    pub summary: Option<String>,
}
