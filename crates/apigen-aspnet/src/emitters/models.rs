use apigen_core::definition::{Definition, PropertyDefinition};
use apigen_core::{GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use minijinja::{Value, context};

use super::{environment, source_file};
use crate::type_mapper::{member_name, property_type, string_literal};

/// Emit one `{Schema}.cs` class per schema definition.
pub fn emit_models(
    definition: &Definition,
    namespaces: &Namespaces,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let namespace = namespaces.of(GeneratorId::Models);
    let env = environment()?;
    let tmpl = env.get_template("model.cs.j2")?;

    definition
        .schemas
        .iter()
        .map(|schema| {
            let properties: Vec<Value> = schema
                .properties
                .iter()
                .map(|p| property_context(&schema.name, p))
                .collect();
            let content = tmpl.render(context! {
                namespace => namespace,
                name => &schema.name,
                properties => properties,
            })?;
            Ok(GeneratedFile {
                path: source_file(&schema.name),
                content,
            })
        })
        .collect()
}

fn property_context(class_name: &str, property: &PropertyDefinition) -> Value {
    context! {
        json_name => string_literal(&property.name),
        member => member_name(&property.name, class_name),
        csharp_type => property_type(&property.declared_type),
    }
}
