//! Golden snapshot tests for generated headers
//!
//! These tests read protocol XML files from `tests/codegen_snapshots/`, render the single
//! interface each one declares, and compare the header against stored snapshots. This ensures
//! output changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use wlcpp::backend::{GeneratorConfig, HeaderGenerator};
use wlcpp::protocol::parse_protocol;

/// Render the first interface of a protocol document
fn generate_header(source: &str) -> String {
    let protocol = parse_protocol(source).expect("protocol parse failed");
    let interface = protocol.interfaces.first().expect("fixture declares no interface");
    HeaderGenerator::new("unused", GeneratorConfig::default())
        .render(interface)
        .expect("lowering failed")
}

/// Load a fixture from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.xml", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_request_and_event_codegen() {
    let source = load_test_file("wl_foo");
    let header = generate_header(&source);
    insta::assert_snapshot!("wl_foo", header);
}

#[test]
fn test_essential_interface_codegen() {
    let source = load_test_file("wl_registry");
    let header = generate_header(&source);
    insta::assert_snapshot!("wl_registry", header);
}

#[test]
fn test_enums_codegen() {
    let source = load_test_file("wl_output");
    let header = generate_header(&source);
    insta::assert_snapshot!("wl_output", header);
}

#[test]
fn test_requests_only_codegen() {
    let source = load_test_file("wl_compositor");
    let header = generate_header(&source);
    insta::assert_snapshot!("wl_compositor", header);
}
