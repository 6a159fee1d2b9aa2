use apigen_core::definition::{ArgumentDefinition, ArgumentOrigin, Operation, Route};
use apigen_core::transform::name_normalizer::verb_to_identifier;
use heck::ToLowerCamelCase;
use minijinja::{Value, context};

use crate::type_mapper::{argument_type, doc_text, parameter_identifier, string_literal, task_type};

/// Template context shared by every per-operation file.
///
/// Parameter lists keep the definition's argument order, with a trailing
/// cancellation token. Optional query and header arguments are nullable and
/// flagged so templates can skip them when unset.
pub fn operation_context(route: &Route, op: &Operation) -> Value {
    let interactor = op.interactor_name(route);
    let verb_name = verb_to_identifier(op.verb.as_verb());

    let names: Vec<String> = op
        .arguments
        .iter()
        .map(|a| parameter_identifier(&a.name))
        .collect();
    let typed: Vec<String> = op
        .arguments
        .iter()
        .zip(&names)
        .map(|(a, name)| format!("{} {name}", argument_type(a)))
        .collect();
    let bound: Vec<String> = op
        .arguments
        .iter()
        .zip(&typed)
        .map(|(a, param)| format!("{} {param}", binding_attribute(a)))
        .collect();

    let by_origin = |origin: ArgumentOrigin| -> Vec<Value> {
        op.arguments
            .iter()
            .zip(&names)
            .filter(|(a, _)| a.origin == origin)
            .map(|(a, name)| {
                context! {
                    name => name,
                    wire_literal => string_literal(&a.wire_name),
                    required => a.required,
                }
            })
            .collect()
    };

    let body = op
        .body_argument()
        .map(|a| parameter_identifier(&a.name));

    context! {
        interactor => &interactor,
        field => interactor.to_lower_camel_case(),
        verb_name => &verb_name,
        http_attribute => format!("Http{verb_name}"),
        summary => op.summary.as_deref().map(doc_text),
        return_type => task_type(&op.return_type),
        referenced_type => op.return_type.referenced_type_name(),
        has_value => op.return_type.has_value(),
        is_array => op.return_type.is_array(),
        parameters => with_token(typed, "CancellationToken cancellationToken = default"),
        bound_parameters => with_token(bound, "CancellationToken cancellationToken"),
        call_arguments => with_token(names.clone(), "cancellationToken"),
        uri => uri_expression(&route.path_name, &op.arguments),
        query => by_origin(ArgumentOrigin::Query),
        headers => by_origin(ArgumentOrigin::Header),
        body => body,
    }
}

fn with_token(mut parts: Vec<String>, token: &str) -> String {
    parts.push(token.to_string());
    parts.join(", ")
}

fn binding_attribute(argument: &ArgumentDefinition) -> String {
    let wire = string_literal(&argument.wire_name);
    match argument.origin {
        ArgumentOrigin::Body => "[FromBody]".to_string(),
        ArgumentOrigin::Path => format!("[FromRoute(Name = {wire})]"),
        ArgumentOrigin::Query => format!("[FromQuery(Name = {wire})]"),
        ArgumentOrigin::Header => format!("[FromHeader(Name = {wire})]"),
    }
}

/// C# expression building the request path, with each `{param}` of the
/// template replaced by the escaped value of the matching path argument.
/// Placeholders without an argument are kept verbatim.
pub fn uri_expression(path: &str, arguments: &[ArgumentDefinition]) -> String {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len;
        let wire_name = &rest[start + 1..end];
        literal.push_str(&rest[..start]);

        let argument = arguments
            .iter()
            .find(|a| a.origin == ArgumentOrigin::Path && a.wire_name == wire_name);
        match argument {
            Some(a) => {
                if !literal.is_empty() {
                    parts.push(string_literal(&literal));
                    literal.clear();
                }
                parts.push(format!(
                    "Uri.EscapeDataString(Format({}))",
                    parameter_identifier(&a.name)
                ));
            }
            None => literal.push_str(&rest[start..=end]),
        }
        rest = &rest[end + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() || parts.is_empty() {
        parts.push(string_literal(&literal));
    }
    parts.join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_core::definition::{PrimitiveType, TypeRef};

    fn path_arg(name: &str, wire_name: &str) -> ArgumentDefinition {
        ArgumentDefinition {
            origin: ArgumentOrigin::Path,
            name: name.to_string(),
            wire_name: wire_name.to_string(),
            arg_type: TypeRef::Primitive(PrimitiveType::Int32),
            required: true,
        }
    }

    #[test]
    fn test_uri_without_parameters() {
        assert_eq!(uri_expression("/api/Todo", &[]), "\"/api/Todo\"");
    }

    #[test]
    fn test_uri_with_parameters() {
        let args = [path_arg("listId", "list_id"), path_arg("id", "id")];
        assert_eq!(
            uri_expression("/lists/{list_id}/items/{id}", &args),
            "\"/lists/\" + Uri.EscapeDataString(Format(listId)) + \"/items/\" + Uri.EscapeDataString(Format(id))"
        );
    }

    #[test]
    fn test_uri_unbound_placeholder() {
        assert_eq!(uri_expression("/a/{b}", &[]), "\"/a/{b}\"");
    }
}
