//! Naming rules for generated members.

/// Interfaces that are bound before the registry exists and therefore carry no registry `name_`.
pub const ESSENTIAL_INTERFACES: [&str; 2] = ["wl_display", "wl_registry"];

/// C++ keywords and alternative tokens; none of these may be emitted as an identifier.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval", "constexpr", "constinit",
    "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "register", "reinterpret_cast", "requires", "return", "short", "signed",
    "sizeof", "static", "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local", "throw",
    "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

pub fn is_essential(interface: &str) -> bool {
    ESSENTIAL_INTERFACES.contains(&interface)
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Decimal (`42`) or hexadecimal (`0x2a`) integer literal.
pub fn is_integer_literal(value: &str) -> bool {
    let (digits, radix) = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// Enum entries like `90` or `default` get a leading underscore.
pub fn escape_enumerator(name: &str) -> String {
    let leading_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if leading_digit || name == "default" {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

pub fn opcode_name(message: &str) -> String {
    format!("{message}_op")
}

pub fn callback_type_name(event: &str) -> String {
    format!("{event}_cb_t")
}

pub fn callback_member_name(event: &str) -> String {
    format!("{event}_cb")
}

/// Local bound to a parsed event argument in the dispatcher.
pub fn parsed_local_name(argument: &str) -> String {
    format!("{argument}_v")
}

pub fn enum_type_name(e: &str) -> String {
    format!("{e}_e")
}

/// Zero-padded two-digit hex literal: `0x00`, `0x0a`, `0x10`.
pub fn opcode_literal(opcode: usize) -> String {
    format!("{opcode:#04x}")
}
