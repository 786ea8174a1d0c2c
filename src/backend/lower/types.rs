//! Type names referenced by generated headers.
//!
//! The runtime types live in the `wire` namespace of the waylandcpp library. Each name is built once on first use
//! and shared read-only afterwards.

use std::sync::LazyLock;

use wlcpp_protocol::{Argument, WireType};

use crate::backend::cpp::{Id, QualifiedId, TypeId};

const WIRE_NAMESPACE: &str = "wire";

fn wire(name: &str) -> TypeId {
    TypeId::new(QualifiedId::new(WIRE_NAMESPACE, name))
}

static WIRE_NEW_ID: LazyLock<TypeId> = LazyLock::new(|| wire("wire_new_id_t"));
static WIRE_OBJECT_ID: LazyLock<TypeId> = LazyLock::new(|| wire("wire_object_id_t"));
static WIRE_UINT: LazyLock<TypeId> = LazyLock::new(|| wire("wire_uint_t"));
static WIRE_INT: LazyLock<TypeId> = LazyLock::new(|| wire("wire_int_t"));
static WIRE_FIXED: LazyLock<TypeId> = LazyLock::new(|| wire("wire_fixed_t"));
static WIRE_STRING: LazyLock<TypeId> = LazyLock::new(|| wire("wire_string_t"));
static WIRE_ARRAY: LazyLock<TypeId> = LazyLock::new(|| wire("wire_array_t"));
static WIRE_FD: LazyLock<TypeId> = LazyLock::new(|| wire("wire_fd_t"));

pub(super) static WIRE_OP: LazyLock<TypeId> = LazyLock::new(|| wire("wire_op_t"));
pub(super) static SOCKET: LazyLock<TypeId> = LazyLock::new(|| wire("WLSocket"));
pub(super) static OBJECT_BUILDER: LazyLock<TypeId> = LazyLock::new(|| wire("WireObjectBuilder"));
pub(super) static BUFFER_PARSER: LazyLock<TypeId> = LazyLock::new(|| wire("WireBufferParser"));
pub(super) static STD_STRING: LazyLock<TypeId> = LazyLock::new(|| TypeId::new(Id::from_path("std::string")));
pub(super) static UINT32: LazyLock<TypeId> = LazyLock::new(|| TypeId::new("uint32_t"));
pub(super) static AUTO: LazyLock<TypeId> = LazyLock::new(|| TypeId::new("auto"));
pub(super) static VOID: LazyLock<TypeId> = LazyLock::new(|| TypeId::new("void"));

const CALLBACK_TEMPLATE: &str = "callback_t";

/// Declared type of an argument with the given wire type.
pub fn wire_type_id(wire_type: WireType) -> &'static TypeId {
    match wire_type {
        WireType::NewId => &WIRE_NEW_ID,
        WireType::Object => &WIRE_OBJECT_ID,
        WireType::Uint => &WIRE_UINT,
        WireType::Int => &WIRE_INT,
        WireType::Fixed => &WIRE_FIXED,
        WireType::String => &WIRE_STRING,
        WireType::Array => &WIRE_ARRAY,
        WireType::Fd => &WIRE_FD,
    }
}

/// Declared types of `arguments`, in order.
pub fn argument_types(arguments: &[Argument]) -> Vec<TypeId> {
    arguments
        .iter()
        .map(|argument| wire_type_id(argument.wire_type).clone())
        .collect()
}

/// `callback_t<T...>` over the argument types (`callback_t<>` when there are none).
pub fn callback_type(arguments: &[Argument]) -> TypeId {
    TypeId::new(CALLBACK_TEMPLATE).with_template_args(argument_types(arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::cpp::Emit;

    fn plain(ty: &TypeId) -> String {
        ty.emit().to_plain_string()
    }

    #[test]
    fn test_every_wire_type_maps_into_wire_namespace() {
        for wire_type in WireType::ALL {
            let ty = wire_type_id(wire_type);
            assert!(plain(ty).starts_with("wire::wire_"), "{wire_type}: {}", plain(ty));
        }
    }

    #[test]
    fn test_wire_type_names() {
        assert_eq!(plain(wire_type_id(WireType::Object)), "wire::wire_object_id_t");
        assert_eq!(plain(wire_type_id(WireType::NewId)), "wire::wire_new_id_t");
        assert_eq!(plain(wire_type_id(WireType::Fd)), "wire::wire_fd_t");
    }

    #[test]
    fn test_callback_type_without_arguments() {
        assert_eq!(plain(&callback_type(&[])), "callback_t<>");
    }

    #[test]
    fn test_callback_type_preserves_argument_order() {
        let args = [
            Argument::new("x", WireType::Int),
            Argument::new("name", WireType::String),
        ];
        assert_eq!(
            plain(&callback_type(&args)),
            "callback_t<wire::wire_int_t, wire::wire_string_t>"
        );
    }

    #[test]
    fn test_fixed_names() {
        assert_eq!(plain(&SOCKET), "wire::WLSocket");
        assert_eq!(plain(&STD_STRING), "std::string");
        assert_eq!(plain(&UINT32), "uint32_t");
    }
}
