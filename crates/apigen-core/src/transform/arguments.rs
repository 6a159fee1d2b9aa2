use crate::definition::{ArgumentDefinition, ArgumentOrigin, HttpMethod, PrimitiveType, TypeRef};
use crate::error::TransformError;
use crate::parse::parameter::{Parameter, ParameterLocation, ParameterOrRef};
use crate::parse::request_body::RequestBody;
use crate::parse::schema::SchemaOrRef;

use super::name_normalizer::{composite_identifier, header_name_to_parameter_name};
use super::shape::SchemaShape;
use super::type_resolver::require_primitive;

/// Name of the body argument, fixed for every operation.
pub const BODY_ARGUMENT_NAME: &str = "request";

/// Build the ordered call arguments for one operation.
///
/// The body argument, when the operation has a request body with at least
/// one content entry, comes first and is typed with the synthesized request
/// schema name for the first content type. Parameters follow in the order
/// given. Call sites bind arguments positionally, so the order is part of
/// the contract.
pub fn build_arguments(
    path_name: &str,
    verb: HttpMethod,
    request_body: Option<&RequestBody>,
    parameters: &[&Parameter],
) -> Result<Vec<ArgumentDefinition>, TransformError> {
    let mut arguments = Vec::with_capacity(parameters.len() + 1);

    if let Some((content_type, _)) = request_body.and_then(|rb| rb.content.first()) {
        arguments.push(ArgumentDefinition {
            origin: ArgumentOrigin::Body,
            name: BODY_ARGUMENT_NAME.to_string(),
            wire_name: BODY_ARGUMENT_NAME.to_string(),
            arg_type: TypeRef::Named(composite_identifier(&[
                path_name,
                verb.as_verb(),
                content_type,
                "Request",
            ])),
            required: true,
        });
    }

    for param in parameters {
        arguments.push(build_parameter_argument(param)?);
    }

    Ok(arguments)
}

fn build_parameter_argument(param: &Parameter) -> Result<ArgumentDefinition, TransformError> {
    let origin = match &param.location {
        ParameterLocation::Path => ArgumentOrigin::Path,
        ParameterLocation::Query => ArgumentOrigin::Query,
        ParameterLocation::Header => ArgumentOrigin::Header,
        other @ (ParameterLocation::Cookie | ParameterLocation::Other(_)) => {
            return Err(TransformError::UnsupportedParameterLocation(
                other.as_str().to_string(),
            ));
        }
    };

    Ok(ArgumentDefinition {
        origin,
        name: header_name_to_parameter_name(&param.name),
        wire_name: param.name.clone(),
        arg_type: TypeRef::Primitive(parameter_primitive(param.schema.as_ref())?),
        // A path segment can never be absent.
        required: param.required || origin == ArgumentOrigin::Path,
    })
}

/// Parameters must be scalar: object and array parameters are rejected.
fn parameter_primitive(schema: Option<&SchemaOrRef>) -> Result<PrimitiveType, TransformError> {
    let Some(schema) = schema else {
        return Err(TransformError::UnsupportedType("unspecified".to_string()));
    };
    match SchemaShape::of(schema) {
        SchemaShape::Reference(name) => Err(TransformError::UnsupportedType(name.to_string())),
        SchemaShape::Object(_) => Err(TransformError::UnsupportedType("object".to_string())),
        SchemaShape::Array(_) => Err(TransformError::UnsupportedType("array".to_string())),
        SchemaShape::Primitive(type_name) => require_primitive(type_name),
        SchemaShape::Untyped => Err(TransformError::UnsupportedType("unspecified".to_string())),
    }
}

/// Combine path-level and operation-level parameters.
///
/// Path-level parameters come first; an operation-level parameter with the
/// same name and location replaces the path-level one in place.
pub fn merge_parameters<'a>(
    path_level: &'a [ParameterOrRef],
    operation_level: &'a [ParameterOrRef],
) -> Vec<&'a Parameter> {
    let inline = |p: &'a ParameterOrRef| match p {
        ParameterOrRef::Parameter(param) => Some(param),
        ParameterOrRef::Ref { .. } => None, // Should already be resolved
    };

    let own: Vec<&Parameter> = operation_level.iter().filter_map(inline).collect();
    let mut merged: Vec<&Parameter> = Vec::with_capacity(path_level.len() + own.len());
    let mut overridden = vec![false; own.len()];

    for shared in path_level.iter().filter_map(inline) {
        match own
            .iter()
            .position(|p| p.name == shared.name && p.location == shared.location)
        {
            Some(idx) => {
                merged.push(own[idx]);
                overridden[idx] = true;
            }
            None => merged.push(shared),
        }
    }
    merged.extend(
        own.iter()
            .zip(&overridden)
            .filter(|(_, done)| !**done)
            .map(|(p, _)| *p),
    );
    merged
}
