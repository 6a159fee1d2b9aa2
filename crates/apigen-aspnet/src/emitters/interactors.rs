use apigen_core::definition::Definition;
use apigen_core::{GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use minijinja::context;

use super::operation::operation_context;
use super::{environment, source_file};

/// Emit one `I{Interactor}Interactor.cs` interface per operation.
pub fn emit_interactors(
    definition: &Definition,
    namespaces: &Namespaces,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let namespace = namespaces.of(GeneratorId::Interactors);
    let imports = namespaces.imports_for(GeneratorId::Interactors);
    let env = environment()?;
    let tmpl = env.get_template("interactor.cs.j2")?;

    let mut files = Vec::with_capacity(definition.operation_count());
    for route in &definition.routes {
        for op in &route.operations {
            let content = tmpl.render(context! {
                namespace => namespace,
                imports => &imports,
                op => operation_context(route, op),
            })?;
            files.push(GeneratedFile {
                path: source_file(&format!("I{}Interactor", op.interactor_name(route))),
                content,
            });
        }
    }
    Ok(files)
}
