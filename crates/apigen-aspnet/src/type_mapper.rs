use apigen_core::definition::{ArgumentDefinition, PrimitiveType, ReturnType, TypeRef};
use heck::ToUpperCamelCase;

/// Map a `TypeRef` to its C# type name.
pub fn type_ref_to_csharp(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Primitive(PrimitiveType::Int32) => "int".to_string(),
        TypeRef::Primitive(PrimitiveType::Text) => "string".to_string(),
        TypeRef::Primitive(PrimitiveType::Bool) => "bool".to_string(),
        TypeRef::Named(name) => name.clone(),
        TypeRef::ArrayOf(inner) => format!("List<{}>", type_ref_to_csharp(inner)),
        TypeRef::Any => "object".to_string(),
    }
}

/// Whether the C# type is a struct, i.e. never null.
pub fn is_value_type(type_ref: &TypeRef) -> bool {
    matches!(
        type_ref,
        TypeRef::Primitive(PrimitiveType::Int32 | PrimitiveType::Bool)
    )
}

/// Type of a model property. Reference types are nullable since any
/// property may be absent from a payload.
pub fn property_type(type_ref: &TypeRef) -> String {
    let name = type_ref_to_csharp(type_ref);
    if is_value_type(type_ref) {
        name
    } else {
        format!("{name}?")
    }
}

/// Type of a call argument; optional parameters are nullable.
pub fn argument_type(argument: &ArgumentDefinition) -> String {
    let name = type_ref_to_csharp(&argument.arg_type);
    if argument.required {
        name
    } else {
        format!("{name}?")
    }
}

/// The awaitable an operation returns: `Task`, `Task<T>` or
/// `Task<IEnumerable<T>>`.
pub fn task_type(return_type: &ReturnType) -> String {
    match return_type {
        ReturnType::None => "Task".to_string(),
        ReturnType::Single(name) => format!("Task<{name}>"),
        ReturnType::ArrayOf(name) => format!("Task<IEnumerable<{name}>>"),
    }
}

/// PascalCase member name for a JSON property, e.g. `account_holders` →
/// `AccountHolders`. A member may not share its enclosing type's name, so
/// such collisions get a `Value` suffix.
pub fn member_name(property: &str, enclosing_type: &str) -> String {
    let mut name = property.to_upper_camel_case();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if name == enclosing_type {
        name.push_str("Value");
    }
    name
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// A local identifier, `@`-escaped when it is a reserved word.
pub fn parameter_identifier(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Quote `value` as a C# string literal.
pub fn string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Single-line text safe to place inside an XML doc comment.
pub fn doc_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
