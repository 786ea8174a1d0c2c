//! Interface to C++ lowering pass.
//!
//! Builds the node tree of one generated header from one protocol interface. The class body is assembled in a
//! fixed order:
//!
//! 1. `public:` followed by one `<event>_cb_t` alias per event
//! 2. constructors (the callback overload only when the interface has events)
//! 3. one `<enum>_e` scoped enum per protocol enum
//! 4. `// Requests` and one method per request
//! 5. `// Events`, one virtual method per event, then `dispatch`
//! 6. `// Utility` and the `id()` accessor
//! 7. `protected:` opcode constants, socket, object id, registry name, callback members
//! 8. `public:` the interface name constant
//!
//! # Architecture
//!
//! - `errors` - [`LoweringError`]
//! - `names` - naming rules (opcode/callback names, enum escaping, essential interfaces)
//! - `types` - the runtime type names generated code refers to
//! - `decl` - aliases, constructors, enums, data members
//! - `stmt` - request, event and dispatcher methods

mod decl;
mod errors;
pub mod names;
pub mod types;
mod stmt;

use std::collections::HashSet;

use wlcpp_protocol::Interface;

use super::config::GeneratorConfig;
use crate::backend::cpp::{Access, Class, Comment, Declaration, Id, Include, Member, Namespace, TranslationUnit};

pub use errors::LoweringError;

/// Lowering context shared by every interface of a run.
pub struct InterfaceLowering<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> InterfaceLowering<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Lower one interface into a complete header translation unit.
    ///
    /// # Errors
    ///
    /// Returns a [`LoweringError`] if any interface, message, argument, enum or enum entry name cannot be emitted as
    /// a C++ identifier or is declared twice, or if an enum entry value is not an integer literal.
    #[tracing::instrument(skip_all, fields(interface = %interface.name))]
    pub fn lower_interface(&self, interface: &Interface) -> Result<TranslationUnit, LoweringError> {
        self.validate(interface)?;

        let namespace =
            Namespace::new(Id::from_path(&self.config.namespace)).with(Declaration::Class(self.lower_class(interface)));

        tracing::debug!(
            requests = interface.requests.len(),
            events = interface.events.len(),
            enums = interface.enums.len(),
            "lowered interface"
        );

        Ok(TranslationUnit {
            includes: self.config.includes.iter().map(|include| Include::parse(include)).collect(),
            declarations: vec![Declaration::Namespace(namespace)],
        })
    }

    /// Build the class node alone.
    pub fn lower_class(&self, interface: &Interface) -> Class {
        let mut class = Class::new(interface.name.as_str());

        class.push(Member::Access(Access::Public));
        for alias in self.callback_aliases(interface) {
            class.push(Member::Alias(alias));
        }
        for constructor in self.constructors(interface) {
            class.push(Member::Method(constructor));
        }
        for e in &interface.enums {
            class.push(Member::Enum(self.lower_enum(e)));
        }

        class.push(comment("Requests"));
        for request in &interface.requests {
            class.push(Member::Method(self.request_method(request)));
        }

        class.push(comment("Events"));
        for event in &interface.events {
            class.push(Member::Method(self.event_method(event)));
        }
        class.push(Member::Method(self.dispatcher(interface)));

        class.push(comment("Utility"));
        class.push(Member::Method(self.id_accessor()));

        class.push(Member::Access(Access::Protected));
        for field in self.fields(interface) {
            class.push(Member::Data(field));
        }

        class.push(Member::Access(Access::Public));
        class.push(Member::Data(self.interface_constant(interface)));

        class
    }

    fn validate(&self, interface: &Interface) -> Result<(), LoweringError> {
        let check = |kind: &'static str, name: &str| -> Result<(), LoweringError> {
            if !names::is_identifier(name) {
                return Err(LoweringError::InvalidIdentifier {
                    interface: interface.name.clone(),
                    kind,
                    name: name.to_string(),
                });
            }
            if names::is_reserved(name) {
                return Err(LoweringError::ReservedIdentifier {
                    interface: interface.name.clone(),
                    kind,
                    name: name.to_string(),
                });
            }
            Ok(())
        };
        let unique = |kind: &'static str, seen: &mut HashSet<String>, name: &str| -> Result<(), LoweringError> {
            if !seen.insert(name.to_string()) {
                return Err(LoweringError::DuplicateName {
                    interface: interface.name.clone(),
                    kind,
                    name: name.to_string(),
                });
            }
            Ok(())
        };

        check("interface", &interface.name)?;

        // Requests and events share one scope: both become methods and opcode constants.
        let mut messages = HashSet::new();
        for (kind, list) in [("request", &interface.requests), ("event", &interface.events)] {
            for message in list {
                check(kind, &message.name)?;
                unique(kind, &mut messages, &message.name)?;
                let mut arguments = HashSet::new();
                for argument in &message.arguments {
                    check("argument", &argument.name)?;
                    unique("argument", &mut arguments, &argument.name)?;
                }
            }
        }

        let mut enums = HashSet::new();
        for e in &interface.enums {
            check("enum", &e.name)?;
            unique("enum", &mut enums, &e.name)?;
            let mut entries = HashSet::new();
            for entry in &e.entries {
                let escaped = names::escape_enumerator(&entry.name);
                check("enum entry", &escaped)?;
                unique("enum entry", &mut entries, &escaped)?;
                if !names::is_integer_literal(&entry.value) {
                    return Err(LoweringError::InvalidEnumValue {
                        interface: interface.name.clone(),
                        enum_name: e.name.clone(),
                        entry: entry.name.clone(),
                        value: entry.value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn comment(text: &str) -> Member {
    Member::Comment(Comment(text.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::cpp::Emit;
    use crate::format::{PrintConfig, render};
    use wlcpp_protocol::{Argument, Enum, Message, WireType};

    fn foo() -> Interface {
        Interface::new("wl_foo", 1)
            .with_request(Message::new("bar").with_argument(Argument::new("x", WireType::Uint)))
            .with_event(Message::new("baz"))
    }

    fn lower(interface: &Interface) -> String {
        let config = GeneratorConfig::default();
        let unit = InterfaceLowering::new(&config).lower_interface(interface).unwrap();
        render(&unit, PrintConfig::default())
    }

    fn class_lines(interface: &Interface) -> Vec<String> {
        let config = GeneratorConfig::default();
        let class = InterfaceLowering::new(&config).lower_class(interface);
        render(&class, PrintConfig::default())
            .lines()
            .map(|line| line.trim().to_string())
            .collect()
    }

    // ========================================
    // Layout
    // ========================================

    #[test]
    fn test_header_starts_with_pragma_and_includes() {
        let text = lower(&foo());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#pragma once");
        assert_eq!(lines[1], "#include <string>");
        assert_eq!(lines[7], "#include \"waylandcpp/callback.hpp\"");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "namespace waylandcpp::interface {");
        assert!(text.ends_with("    };\n}\n"));
    }

    #[test]
    fn test_section_order() {
        let lines = class_lines(&foo());
        let position = |needle: &str| {
            lines
                .iter()
                .position(|line| line.starts_with(needle))
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        let order = [
            "public:",
            "using baz_cb_t",
            "wl_foo(",
            "// Requests",
            "void bar(",
            "// Events",
            "virtual void baz(",
            "void dispatch(",
            "// Utility",
            "auto id()",
            "protected:",
            "static constexpr",
            "wire::WLSocket &sock;",
            "const std::string interface",
        ];
        let positions: Vec<usize> = order.iter().map(|needle| position(needle)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn test_class_depth_is_balanced() {
        let config = GeneratorConfig::default();
        let unit = InterfaceLowering::new(&config).lower_interface(&foo()).unwrap();
        let mut printer = crate::format::Printer::new(PrintConfig::default());
        printer.print_all(&unit.emit());
        assert_eq!(printer.depth(), 0);
    }

    #[test]
    fn test_custom_namespace_and_includes() {
        let config = GeneratorConfig::default()
            .with_namespace("wl")
            .with_includes(vec!["<cstdint>".to_string()]);
        let unit = InterfaceLowering::new(&config).lower_interface(&foo()).unwrap();
        let text = render(&unit, PrintConfig::default());
        assert!(text.starts_with("#pragma once\n#include <cstdint>\n\nnamespace wl {\n"));
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_reserved_argument_name_is_rejected() {
        let interface = Interface::new("wl_foo", 1)
            .with_request(Message::new("bar").with_argument(Argument::new("class", WireType::Uint)));
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
        assert_eq!(
            err,
            LoweringError::ReservedIdentifier {
                interface: "wl_foo".to_string(),
                kind: "argument",
                name: "class".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_interface_name_is_rejected() {
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config)
            .lower_interface(&Interface::new("wl-foo", 1))
            .unwrap_err();
        assert!(matches!(err, LoweringError::InvalidIdentifier { kind: "interface", .. }));
    }

    #[test]
    fn test_escaped_enum_entries_are_accepted() {
        let interface = Interface::new("wl_output", 1)
            .with_enum(Enum::new("transform").with_entry("90", "1").with_entry("default", "2"));
        let config = GeneratorConfig::default();
        assert!(InterfaceLowering::new(&config).lower_interface(&interface).is_ok());
    }

    #[test]
    fn test_unescapable_enum_entry_is_rejected() {
        let interface = Interface::new("wl_output", 1).with_enum(Enum::new("transform").with_entry("class", "1"));
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
        assert!(matches!(err, LoweringError::ReservedIdentifier { kind: "enum entry", .. }));
    }

    #[test]
    fn test_malformed_enum_values_are_rejected() {
        let config = GeneratorConfig::default();
        for value in ["", "1; } int x", "0x", "-1"] {
            let interface =
                Interface::new("wl_output", 1).with_enum(Enum::new("mode").with_entry("current", value));
            let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
            assert_eq!(
                err,
                LoweringError::InvalidEnumValue {
                    interface: "wl_output".to_string(),
                    enum_name: "mode".to_string(),
                    entry: "current".to_string(),
                    value: value.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_decimal_and_hex_enum_values_are_accepted() {
        let interface = Interface::new("wl_shm", 1)
            .with_enum(Enum::new("format").with_entry("argb8888", "0").with_entry("c8", "0x20203843"));
        let text = lower(&interface);
        assert!(text.contains("c8 = 0x20203843"));
    }

    // ========================================
    // Duplicate names
    // ========================================

    #[test]
    fn test_request_and_event_with_same_name_are_rejected() {
        let interface = Interface::new("wl_foo", 1)
            .with_request(Message::new("done"))
            .with_event(Message::new("done"));
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
        assert_eq!(
            err,
            LoweringError::DuplicateName {
                interface: "wl_foo".to_string(),
                kind: "event",
                name: "done".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_argument_is_rejected() {
        let interface = Interface::new("wl_foo", 1).with_request(
            Message::new("bar")
                .with_argument(Argument::new("x", WireType::Uint))
                .with_argument(Argument::new("x", WireType::Int)),
        );
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
        assert!(matches!(err, LoweringError::DuplicateName { kind: "argument", .. }));
    }

    #[test]
    fn test_same_argument_name_in_different_messages_is_accepted() {
        let interface = Interface::new("wl_registry", 1)
            .with_event(Message::new("global").with_argument(Argument::new("name", WireType::Uint)))
            .with_event(Message::new("global_remove").with_argument(Argument::new("name", WireType::Uint)));
        let config = GeneratorConfig::default();
        assert!(InterfaceLowering::new(&config).lower_interface(&interface).is_ok());
    }

    #[test]
    fn test_entries_colliding_after_escaping_are_rejected() {
        let interface = Interface::new("wl_output", 1)
            .with_enum(Enum::new("transform").with_entry("90", "1").with_entry("_90", "2"));
        let config = GeneratorConfig::default();
        let err = InterfaceLowering::new(&config).lower_interface(&interface).unwrap_err();
        assert!(matches!(err, LoweringError::DuplicateName { kind: "enum entry", .. }));
    }
}
