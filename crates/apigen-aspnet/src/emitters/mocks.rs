use apigen_core::definition::Definition;
use apigen_core::{GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use minijinja::context;

use super::operation::operation_context;
use super::{environment, source_file};

/// Emit a `Mock{Interactor}Interactor.cs` stub per operation, returning
/// empty values.
pub fn emit_mocks(
    definition: &Definition,
    namespaces: &Namespaces,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let namespace = namespaces.of(GeneratorId::Mocks);
    let imports = namespaces.imports_for(GeneratorId::Mocks);
    let env = environment()?;
    let tmpl = env.get_template("mock.cs.j2")?;

    let mut files = Vec::with_capacity(definition.operation_count());
    for route in &definition.routes {
        for op in &route.operations {
            let content = tmpl.render(context! {
                namespace => namespace,
                imports => &imports,
                op => operation_context(route, op),
            })?;
            files.push(GeneratedFile {
                path: source_file(&format!("Mock{}Interactor", op.interactor_name(route))),
                content,
            });
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::todo_definition;

    #[test]
    fn test_mock_bodies() {
        let def = todo_definition();
        let files = emit_mocks(&def, &Namespaces::new("Todo.Api.Testing")).unwrap();
        assert_eq!(files.len(), 5);

        let list = &files[0];
        assert_eq!(list.path, "MockApiTodoGetInteractor.cs");
        assert!(list.content.contains("namespace Todo.Api.Testing;"));
        assert!(
            list.content
                .contains("public class MockApiTodoGetInteractor : IApiTodoGetInteractor")
        );
        assert!(list.content.contains(
            "return Task.FromResult<IEnumerable<ToDoItem>>(new List<ToDoItem>());"
        ));

        assert!(files[1].content.contains("return Task.FromResult(new ToDoItem());"));
        assert!(files[4].content.contains("return Task.CompletedTask;"));
    }

    #[test]
    fn test_imports_interactor_namespace() {
        let def = todo_definition();
        let namespaces = Namespaces::new("Todo.Api.Testing")
            .with_override(GeneratorId::Models, "Todo.Api")
            .with_override(GeneratorId::Interactors, "Todo.Api");
        let files = emit_mocks(&def, &namespaces).unwrap();
        // Both dependencies share one namespace, imported once.
        assert!(files[0].content.contains(
            "using System.Threading.Tasks;\nusing Todo.Api;\n\nnamespace Todo.Api.Testing;"
        ));
        assert!(files[0].content.contains("ExecuteAsync(int? pageSize, string xTenantId,"));
    }
}
