//! Property-based tests for the wlcpp generator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated interfaces, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use wlcpp::backend::cpp::Emit;
use wlcpp::backend::lower::names::{escape_enumerator, is_essential, is_identifier, is_reserved};
use wlcpp::backend::{GeneratorConfig, InterfaceLowering};
use wlcpp::format::{PrintConfig, Printer, render};
use wlcpp::protocol::{Argument, Interface, Message, WireType};

// =============================================================================
// Strategies
// =============================================================================

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("reserved word", |name| !is_reserved(name))
}

fn wire_type() -> impl Strategy<Value = WireType> {
    prop::sample::select(WireType::ALL.to_vec())
}

/// Distinct request and event names; prefixes keep the two sets apart.
fn arb_interface() -> impl Strategy<Value = Interface> {
    (
        ident(),
        prop::collection::btree_set(ident(), 0..6),
        prop::collection::btree_set(ident(), 0..6),
    )
        .prop_map(|(name, requests, events)| {
            let interface = requests.into_iter().fold(Interface::new(format!("wl_{name}"), 1), |i, r| {
                i.with_request(Message::new(format!("req_{r}")))
            });
            events
                .into_iter()
                .fold(interface, |i, e| i.with_event(Message::new(format!("ev_{e}"))))
        })
}

const CLOSING: &str = "}\n";

fn lower(interface: &Interface) -> String {
    let config = GeneratorConfig::default();
    let unit = InterfaceLowering::new(&config)
        .lower_interface(interface)
        .expect("generated names are valid identifiers");
    render(&unit, PrintConfig::default())
}

// =============================================================================
// Lowering Properties
// =============================================================================

#[cfg(test)]
mod lowering_tests {
    use super::*;

    proptest! {
        /// Property: requests are numbered 0..R and events 0..E, independently and in order
        #[test]
        fn opcodes_follow_declaration_order(interface in arb_interface()) {
            let text = lower(&interface);
            for messages in [&interface.requests, &interface.events] {
                for (index, message) in messages.iter().enumerate() {
                    let constant = format!("static constexpr wire::wire_op_t {}_op = {:#04x};", message.name, index);
                    prop_assert!(text.contains(&constant), "missing `{}`", constant);
                }
            }
        }

        /// Property: only non-essential interfaces carry a registry name
        #[test]
        fn registry_name_follows_essential_rule(
            name in prop_oneof![
                Just("wl_display".to_string()),
                Just("wl_registry".to_string()),
                ident().prop_map(|name| format!("wl_{name}")),
            ],
            has_event in any::<bool>(),
        ) {
            let mut interface = Interface::new(name.as_str(), 1);
            if has_event {
                interface = interface.with_event(Message::new("done"));
            }
            let text = lower(&interface);
            prop_assert_eq!(text.contains("wire::wire_uint_t name_;"), !is_essential(&name));
            prop_assert_eq!(text.contains("&&name_ = 0x0"), !is_essential(&name));
        }

        /// Property: the dispatcher destructures exactly one local per event argument
        #[test]
        fn dispatch_destructures_every_argument(types in prop::collection::vec(wire_type(), 1..8)) {
            let event = types
                .iter()
                .enumerate()
                .fold(Message::new("changed"), |m, (i, ty)| m.with_argument(Argument::new(format!("a{i}"), *ty)));
            let text = lower(&Interface::new("wl_thing", 1).with_event(event));

            let locals: Vec<String> = (0..types.len()).map(|i| format!("a{i}_v")).collect();
            let binding = format!("auto [{}] = body.parse<", locals.join(", "));
            prop_assert!(text.contains(&binding), "missing `{}`", binding);

            let start = text.find("body.parse<").expect("parse call") + "body.parse<".len();
            let end = start + text[start..].find(">()").expect("parse call end");
            prop_assert_eq!(text[start..end].split(", ").count(), types.len());
            let call = format!("changed({});", locals.join(", "));
            prop_assert!(text.contains(&call), "missing `{}`", call);
        }

        /// Property: the callback constructor exists exactly when there are events
        #[test]
        fn callback_constructor_requires_events(interface in arb_interface()) {
            let text = lower(&interface);
            let constructors = text
                .lines()
                .filter(|line| line.trim_start().starts_with(&format!("{}(", interface.name)))
                .count();
            prop_assert_eq!(constructors, if interface.events.is_empty() { 1 } else { 2 });
        }
    }
}

// =============================================================================
// Printer Properties
// =============================================================================

#[cfg(test)]
mod printer_tests {
    use super::*;

    proptest! {
        /// Property: a complete header leaves the printer at depth 0
        #[test]
        fn header_closes_every_block(interface in arb_interface()) {
            let config = GeneratorConfig::default();
            let unit = InterfaceLowering::new(&config).lower_interface(&interface).unwrap();
            let mut printer = Printer::new(PrintConfig::default());
            printer.print_all(&unit.emit());
            prop_assert_eq!(printer.depth(), 0);
            let text = printer.finish();
            prop_assert!(text.ends_with(CLOSING), "header does not end with a closing brace");
        }

        /// Property: rendering is deterministic
        #[test]
        fn render_is_deterministic(interface in arb_interface()) {
            prop_assert_eq!(lower(&interface), lower(&interface));
        }

        /// Property: every indented line is indented by a multiple of the configured width
        #[test]
        fn indentation_uses_configured_width(interface in arb_interface(), width in 1usize..9) {
            let config = GeneratorConfig::default().with_print(PrintConfig::new().with_indent_width(width));
            let unit = InterfaceLowering::new(&config).lower_interface(&interface).unwrap();
            let text = render(&unit, config.print);
            for line in text.lines() {
                let indent = line.len() - line.trim_start_matches(' ').len();
                prop_assert_eq!(indent % width, 0, "line {:?}", line);
                prop_assert!(!line.ends_with(' '), "trailing space in {:?}", line);
            }
        }
    }
}

// =============================================================================
// Naming Properties
// =============================================================================

#[cfg(test)]
mod naming_tests {
    use super::*;

    proptest! {
        /// Property: entries starting with a digit become valid identifiers
        #[test]
        fn numeric_enum_entries_are_escaped(name in "[0-9][a-z0-9_]{0,6}") {
            let escaped = escape_enumerator(&name);
            prop_assert_eq!(escaped.clone(), format!("_{name}"));
            prop_assert!(is_identifier(&escaped));
        }

        /// Property: ordinary identifiers are left alone
        #[test]
        fn identifier_entries_are_unchanged(name in ident()) {
            prop_assume!(name != "default");
            prop_assert_eq!(escape_enumerator(&name), name);
        }
    }

    #[test]
    fn default_entry_is_escaped() {
        assert_eq!(escape_enumerator("default"), "_default");
    }
}
