use log::{debug, info, warn};

use crate::definition::{Definition, HttpMethod, Operation, Route};
use crate::error::TransformError;
use crate::parse::operation::{Operation as SpecOperation, PathItem};
use crate::parse::ref_resolve::RefResolver;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::spec::OpenApiSpec;

use super::arguments::{build_arguments, merge_parameters};
use super::return_type::resolve_return_type;
use super::schema_definitions::generate_schema_definitions;

/// Build the complete definition for a parsed document.
///
/// Parameter, request-body and response `$ref`s are inlined first, then
/// routes and schema definitions are derived from the resolved document.
/// The result depends only on the input: the same document always yields
/// the same definition.
pub fn build_definition(spec: &OpenApiSpec) -> Result<Definition, TransformError> {
    let resolver = RefResolver::new(spec);
    let resolved = resolver.resolve_spec(spec)?;

    let routes = build_routes(&resolved)?;
    let schemas = generate_schema_definitions(&resolved)?;

    info!(
        "built definition: {} routes, {} operations, {} schemas",
        routes.len(),
        routes.iter().map(|r| r.operations.len()).sum::<usize>(),
        schemas.len()
    );

    Ok(Definition { routes, schemas })
}

fn build_routes(spec: &OpenApiSpec) -> Result<Vec<Route>, TransformError> {
    spec.paths
        .iter()
        .map(|(path_name, item)| build_route(path_name, item))
        .collect()
}

fn build_route(path_name: &str, item: &PathItem) -> Result<Route, TransformError> {
    for verb in item.unsupported_verbs() {
        warn!("{path_name}: skipping unsupported verb '{verb}'");
    }

    let operations = supported_operations(item)
        .map(|(verb, op)| build_operation(path_name, verb, item, op))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("{path_name}: {} operations", operations.len());
    Ok(Route {
        path_name: path_name.to_string(),
        operations,
    })
}

fn build_operation(
    path_name: &str,
    verb: HttpMethod,
    item: &PathItem,
    op: &SpecOperation,
) -> Result<Operation, TransformError> {
    let request_body = match &op.request_body {
        Some(RequestBodyOrRef::RequestBody(body)) => Some(body),
        Some(RequestBodyOrRef::Ref { .. }) | None => None, // Should already be resolved
    };
    let parameters = merge_parameters(&item.parameters, &op.parameters);

    Ok(Operation {
        verb,
        operation_id: op.operation_id.clone(),
        summary: op.summary.clone(),
        arguments: build_arguments(path_name, verb, request_body, &parameters)?,
        return_type: resolve_return_type(&op.responses),
    })
}

/// The operations of a path item the pipeline handles, in verb precedence
/// order (GET, POST, PUT, DELETE).
pub fn supported_operations(item: &PathItem) -> impl Iterator<Item = (HttpMethod, &SpecOperation)> + '_ {
    HttpMethod::ALL.into_iter().filter_map(move |verb| {
        let op = match verb {
            HttpMethod::Get => item.get.as_ref(),
            HttpMethod::Post => item.post.as_ref(),
            HttpMethod::Put => item.put.as_ref(),
            HttpMethod::Delete => item.delete.as_ref(),
        };
        op.map(|op| (verb, op))
    })
}
