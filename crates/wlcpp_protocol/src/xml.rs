//! Protocol XML reader.
//!
//! Walks a `roxmltree` document and builds the [`Protocol`] model. Unknown elements are skipped so newer protocol
//! files still load; missing required attributes are errors.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::errors::ProtocolError;
use crate::model::{Argument, Description, Entry, Enum, Interface, Message, Protocol};
use crate::wire::WireType;

/// Read and parse a protocol file.
pub fn read_protocol(path: &Path) -> Result<Protocol, ProtocolError> {
    let source = fs::read_to_string(path).map_err(|source| ProtocolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_protocol(&source)
}

/// Parse a protocol document from XML text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_protocol(source: &str) -> Result<Protocol, ProtocolError> {
    let document = Document::parse(source)?;
    let root = document.root_element();
    if root.tag_name().name() != "protocol" {
        return Err(ProtocolError::UnexpectedRoot(root.tag_name().name().to_string()));
    }

    let mut protocol = Protocol::new(required(root, "name")?);
    for child in elements(root) {
        match child.tag_name().name() {
            "copyright" => protocol.copyright = Some(text_of(child)),
            "interface" => protocol.interfaces.push(read_interface(child)?),
            _ => {}
        }
    }

    tracing::debug!(
        protocol = %protocol.name,
        interfaces = protocol.interfaces.len(),
        "parsed protocol"
    );
    Ok(protocol)
}

fn read_interface(node: Node<'_, '_>) -> Result<Interface, ProtocolError> {
    let version = required(node, "version")?;
    let version = version.parse::<u32>().map_err(|_| ProtocolError::InvalidAttribute {
        element: "interface".to_string(),
        attribute: "version",
        value: version.to_string(),
    })?;

    let mut interface = Interface::new(required(node, "name")?, version);
    for child in elements(node) {
        match child.tag_name().name() {
            "description" => interface.description = Some(read_description(child)),
            "request" => interface.requests.push(read_message(child)?),
            "event" => interface.events.push(read_message(child)?),
            "enum" => interface.enums.push(read_enum(child)?),
            _ => {}
        }
    }
    Ok(interface)
}

fn read_message(node: Node<'_, '_>) -> Result<Message, ProtocolError> {
    let mut message = Message::new(required(node, "name")?);
    for child in elements(node) {
        match child.tag_name().name() {
            "description" => message.description = Some(read_description(child)),
            "arg" => message.arguments.push(read_argument(child)?),
            _ => {}
        }
    }
    Ok(message)
}

fn read_argument(node: Node<'_, '_>) -> Result<Argument, ProtocolError> {
    let wire_type = required(node, "type")?.parse::<WireType>()?;
    let mut argument = Argument::new(required(node, "name")?, wire_type);
    argument.summary = optional(node, "summary");
    argument.enum_ref = optional(node, "enum");
    argument.interface_ref = optional(node, "interface");
    Ok(argument)
}

fn read_enum(node: Node<'_, '_>) -> Result<Enum, ProtocolError> {
    let mut e = Enum::new(required(node, "name")?);
    if let Some(bitfield) = node.attribute("bitfield") {
        e.bitfield = match bitfield {
            "true" => true,
            "false" => false,
            other => {
                return Err(ProtocolError::InvalidAttribute {
                    element: "enum".to_string(),
                    attribute: "bitfield",
                    value: other.to_string(),
                });
            }
        };
    }
    for child in elements(node) {
        match child.tag_name().name() {
            "description" => e.description = Some(read_description(child)),
            "entry" => e.entries.push(Entry {
                name: required(child, "name")?,
                value: required(child, "value")?,
                summary: optional(child, "summary"),
            }),
            _ => {}
        }
    }
    Ok(e)
}

fn read_description(node: Node<'_, '_>) -> Description {
    Description {
        summary: optional(node, "summary"),
        text: text_of(node),
    }
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

fn required(node: Node<'_, '_>, attribute: &'static str) -> Result<String, ProtocolError> {
    node.attribute(attribute)
        .map(str::to_string)
        .ok_or_else(|| ProtocolError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute,
        })
}

fn optional(node: Node<'_, '_>, attribute: &str) -> Option<String> {
    node.attribute(attribute).map(str::to_string)
}

fn text_of(node: Node<'_, '_>) -> String {
    node.text().map(|text| text.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<protocol name="sample">
  <copyright>
    Copyright notice
  </copyright>
  <interface name="wl_foo" version="3">
    <description summary="a foo">
      Foo objects do things.
    </description>
    <request name="bar">
      <description summary="bar it"/>
      <arg name="x" type="uint" summary="the x"/>
      <arg name="target" type="object" interface="wl_surface"/>
    </request>
    <event name="baz"/>
    <request name="quux"/>
    <enum name="mode" bitfield="true">
      <entry name="none" value="0"/>
      <entry name="default" value="0x1" summary="the default"/>
    </enum>
  </interface>
  <interface name="wl_empty" version="1"/>
</protocol>
"#;

    // ========================================
    // Happy path
    // ========================================

    #[test]
    fn test_parse_protocol_header() {
        let protocol = parse_protocol(SAMPLE).unwrap();
        assert_eq!(protocol.name, "sample");
        assert_eq!(protocol.copyright.as_deref(), Some("Copyright notice"));
        assert_eq!(protocol.interfaces.len(), 2);
    }

    #[test]
    fn test_parse_interface_members_in_order() {
        let protocol = parse_protocol(SAMPLE).unwrap();
        let foo = &protocol.interfaces[0];
        assert_eq!(foo.name, "wl_foo");
        assert_eq!(foo.version, 3);
        let requests: Vec<_> = foo.requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(requests, ["bar", "quux"]);
        assert_eq!(foo.events.len(), 1);
        assert_eq!(foo.events[0].name, "baz");
        assert!(foo.events[0].arguments.is_empty());
    }

    #[test]
    fn test_parse_description() {
        let protocol = parse_protocol(SAMPLE).unwrap();
        let description = protocol.interfaces[0].description.as_ref().unwrap();
        assert_eq!(description.summary.as_deref(), Some("a foo"));
        assert_eq!(description.text, "Foo objects do things.");
    }

    #[test]
    fn test_parse_arguments() {
        let protocol = parse_protocol(SAMPLE).unwrap();
        let bar = &protocol.interfaces[0].requests[0];
        assert_eq!(bar.arguments.len(), 2);
        assert_eq!(bar.arguments[0].name, "x");
        assert_eq!(bar.arguments[0].wire_type, WireType::Uint);
        assert_eq!(bar.arguments[0].summary.as_deref(), Some("the x"));
        assert_eq!(bar.arguments[1].wire_type, WireType::Object);
        assert_eq!(bar.arguments[1].interface_ref.as_deref(), Some("wl_surface"));
        assert_eq!(bar.arguments[1].summary, None);
    }

    #[test]
    fn test_parse_enum() {
        let protocol = parse_protocol(SAMPLE).unwrap();
        let mode = &protocol.interfaces[0].enums[0];
        assert_eq!(mode.name, "mode");
        assert!(mode.bitfield);
        assert_eq!(mode.entries.len(), 2);
        assert_eq!(mode.entries[1].name, "default");
        assert_eq!(mode.entries[1].value, "0x1");
        assert_eq!(mode.entries[1].summary.as_deref(), Some("the default"));
    }

    // ========================================
    // Failures
    // ========================================

    #[test]
    fn test_wrong_root_element() {
        let err = parse_protocol("<interface name=\"x\" version=\"1\"/>").unwrap_err();
        assert!(matches!(err, ProtocolError::UnexpectedRoot(ref name) if name == "interface"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_protocol("<protocol name=\"x\">").unwrap_err();
        assert!(matches!(err, ProtocolError::Xml(_)));
    }

    #[test]
    fn test_missing_interface_version() {
        let err = parse_protocol(r#"<protocol name="p"><interface name="i"/></protocol>"#).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MissingAttribute { ref element, attribute: "version" } if element == "interface"
        ));
    }

    #[test]
    fn test_invalid_interface_version() {
        let err =
            parse_protocol(r#"<protocol name="p"><interface name="i" version="two"/></protocol>"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAttribute { attribute: "version", .. }));
    }

    #[test]
    fn test_missing_arg_type() {
        let xml = r#"<protocol name="p"><interface name="i" version="1">
            <request name="r"><arg name="a"/></request>
        </interface></protocol>"#;
        let err = parse_protocol(xml).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingAttribute { attribute: "type", .. }));
    }

    #[test]
    fn test_unknown_wire_type() {
        let xml = r#"<protocol name="p"><interface name="i" version="1">
            <event name="e"><arg name="a" type="float"/></event>
        </interface></protocol>"#;
        let err = parse_protocol(xml).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownWireType(ref tag) if tag == "float"));
    }

    #[test]
    fn test_invalid_bitfield() {
        let xml = r#"<protocol name="p"><interface name="i" version="1">
            <enum name="e" bitfield="yes"/>
        </interface></protocol>"#;
        let err = parse_protocol(xml).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAttribute { attribute: "bitfield", .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_protocol(Path::new("/nonexistent/wlcpp/protocol.xml")).unwrap_err();
        assert!(matches!(err, ProtocolError::Io { .. }));
    }
}
