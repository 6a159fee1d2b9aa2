use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::debug;

use crate::definition::{HttpMethod, PropertyDefinition, SchemaDefinition, TypeRef};
use crate::error::{ResolveError, TransformError};
use crate::parse::components::Components;
use crate::parse::media_type::MediaType;
use crate::parse::ref_resolve::parse_ref_name;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;
use crate::parse::spec::OpenApiSpec;

use super::definition_builder::supported_operations;
use super::name_normalizer::{composite_identifier, subtype_name};
use super::shape::{SchemaShape, is_local_model};
use super::type_resolver::{require_primitive, resolve_primitive};

/// Produce the flattened list of schema definitions for a document.
///
/// Visit order, which is also the output order:
/// 1. for each path and each supported verb, the request-body content
///    entries that are local models, then each response's local models,
///    named `{path}{Verb}{contentType}{Request|Response}`;
/// 2. every component schema under its declared name.
///
/// Each visited schema is expanded depth-first: a definition is always
/// followed by the subtypes synthesized for its anonymous properties, in
/// property order. A name is emitted once. A later schema that lands on a
/// taken name is dropped when its properties match the emitted ones and is a
/// `SchemaNameCollision` otherwise; its subtypes are checked the same way.
pub fn generate_schema_definitions(
    spec: &OpenApiSpec,
) -> Result<Vec<SchemaDefinition>, TransformError> {
    let mut generator = SchemaDefinitionGenerator::new(spec.components.as_ref());

    for (path, item) in &spec.paths {
        for (verb, op) in supported_operations(item) {
            if let Some(RequestBodyOrRef::RequestBody(body)) = &op.request_body {
                generator.visit_content(path, verb, &body.content, "Request")?;
            }
            for response in op.responses.values() {
                if let ResponseOrRef::Response(r) = response {
                    generator.visit_content(path, verb, &r.content, "Response")?;
                }
            }
        }
    }

    if let Some(components) = spec.components.as_ref() {
        for (name, schema) in &components.schemas {
            let target = generator.resolve_alias(name, schema)?;
            generator.emit(name.clone(), Some(target))?;
        }
    }

    Ok(generator.definitions)
}

struct SchemaDefinitionGenerator<'a> {
    components: Option<&'a Components>,
    /// Emitted names, mapped to their position in `definitions`.
    emitted: HashMap<String, usize>,
    definitions: Vec<SchemaDefinition>,
}

impl<'a> SchemaDefinitionGenerator<'a> {
    fn new(components: Option<&'a Components>) -> Self {
        Self {
            components,
            emitted: HashMap::new(),
            definitions: Vec::new(),
        }
    }

    fn visit_content(
        &mut self,
        path: &str,
        verb: HttpMethod,
        content: &'a IndexMap<String, MediaType>,
        suffix: &str,
    ) -> Result<(), TransformError> {
        for (content_type, media_type) in content {
            if let Some(schema) = media_type.schema.as_ref().filter(|s| is_local_model(s)) {
                let name = composite_identifier(&[path, verb.as_verb(), content_type, suffix]);
                self.emit(name, Some(schema))?;
            }
        }
        Ok(())
    }

    /// Follow a component that is itself a `$ref` to the schema it aliases.
    fn resolve_alias(
        &self,
        name: &str,
        schema: &'a SchemaOrRef,
    ) -> Result<&'a SchemaOrRef, TransformError> {
        let mut seen = HashSet::from([name.to_string()]);
        let mut current = schema;

        while let SchemaOrRef::Ref { ref_path } = current {
            let target = parse_ref_name(ref_path, "schemas")?;
            if !seen.insert(target.to_string()) {
                return Err(TransformError::CyclicSchemaReference(name.to_string()));
            }
            current = self
                .components
                .and_then(|c| c.schemas.get(target))
                .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
        }

        Ok(current)
    }

    /// Emit `name` for `schema` and, depth-first, every subtype beneath it.
    fn emit(&mut self, name: String, schema: Option<&'a SchemaOrRef>) -> Result<(), TransformError> {
        let mut pending = vec![(name, schema)];

        while let Some((name, schema)) = pending.pop() {
            let mut properties = Vec::new();
            let mut subtypes = Vec::new();
            for (prop_name, prop_schema) in schema.and_then(SchemaOrRef::properties).into_iter().flatten() {
                let (property, subtype_schema) = property_definition(&name, prop_name, prop_schema)?;
                if let Some(ref subtype) = property.subtype_name {
                    subtypes.push((subtype.clone(), subtype_schema));
                }
                properties.push(property);
            }

            if let Some(&index) = self.emitted.get(&name) {
                if self.definitions[index].properties != properties {
                    return Err(TransformError::SchemaNameCollision(name));
                }
                debug!("schema definition {name} already emitted with the same shape");
            } else {
                debug!(
                    "schema definition {name}: {} properties, {} subtypes",
                    properties.len(),
                    subtypes.len()
                );
                self.emitted.insert(name.clone(), self.definitions.len());
                self.definitions.push(SchemaDefinition { name, properties });
            }

            // Reversed so the first subtype is expanded next.
            pending.extend(subtypes.into_iter().rev());
        }

        Ok(())
    }
}

/// Resolve one property of the definition named `context`.
///
/// Also returns the schema a subtype definition is built from: the property
/// itself for an inline object, the item schema for an array.
fn property_definition<'s>(
    context: &str,
    name: &str,
    schema: &'s SchemaOrRef,
) -> Result<(PropertyDefinition, Option<&'s SchemaOrRef>), TransformError> {
    match SchemaShape::of(schema) {
        SchemaShape::Reference(target) => Ok((plain(name, TypeRef::named(target)), None)),
        SchemaShape::Object(props) if !props.is_empty() => {
            let subtype = subtype_name(context, name);
            Ok((
                PropertyDefinition {
                    name: name.to_string(),
                    declared_type: TypeRef::named(subtype.clone()),
                    creates_object_subtype: true,
                    creates_array_subtype: false,
                    subtype_name: Some(subtype),
                },
                Some(schema),
            ))
        }
        SchemaShape::Object(_) => Ok((plain(name, TypeRef::Any), None)),
        SchemaShape::Array(items) => {
            let item_shape = items.map(SchemaShape::of);
            if let Some(SchemaShape::Primitive(type_name)) = item_shape
                && let Some(primitive) = resolve_primitive(type_name)
            {
                return Ok((
                    plain(name, TypeRef::array_of(TypeRef::Primitive(primitive))),
                    None,
                ));
            }

            let subtype = subtype_name(context, name);
            let element = match item_shape {
                Some(SchemaShape::Reference(target)) => TypeRef::named(target),
                _ => TypeRef::named(subtype.clone()),
            };
            Ok((
                PropertyDefinition {
                    name: name.to_string(),
                    declared_type: TypeRef::array_of(element),
                    creates_object_subtype: false,
                    creates_array_subtype: true,
                    subtype_name: Some(subtype),
                },
                items,
            ))
        }
        SchemaShape::Primitive(type_name) => Ok((
            plain(name, TypeRef::Primitive(require_primitive(type_name)?)),
            None,
        )),
        SchemaShape::Untyped => Err(TransformError::MissingPropertyType(name.to_string())),
    }
}

fn plain(name: &str, declared_type: TypeRef) -> PropertyDefinition {
    PropertyDefinition {
        name: name.to_string(),
        declared_type,
        creates_object_subtype: false,
        creates_array_subtype: false,
        subtype_name: None,
    }
}
