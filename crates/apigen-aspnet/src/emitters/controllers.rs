use apigen_core::definition::Definition;
use apigen_core::{GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use minijinja::{Value, context};

use super::operation::operation_context;
use super::{environment, source_file};
use crate::type_mapper::string_literal;

/// Emit one `{Route}Controller.cs` per route that has operations. Each
/// action binds its arguments in definition order and delegates to the
/// injected interactor.
pub fn emit_controllers(
    definition: &Definition,
    namespaces: &Namespaces,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let namespace = namespaces.of(GeneratorId::Controllers);
    let imports = namespaces.imports_for(GeneratorId::Controllers);
    let env = environment()?;
    let tmpl = env.get_template("controller.cs.j2")?;

    definition
        .routes
        .iter()
        .filter(|route| !route.operations.is_empty())
        .map(|route| {
            let identifier = route.identifier();
            let operations: Vec<Value> = route
                .operations
                .iter()
                .map(|op| operation_context(route, op))
                .collect();
            let content = tmpl.render(context! {
                namespace => namespace,
                imports => &imports,
                route => &identifier,
                path => string_literal(&route.path_name),
                operations => operations,
            })?;
            Ok(GeneratedFile {
                path: source_file(&format!("{identifier}Controller")),
                content,
            })
        })
        .collect()
}
