use apigen_core::definition::Definition;
use apigen_core::{GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use minijinja::{Value, context};

use super::operation::operation_context;
use super::{environment, source_file};

/// Emit one `{Route}Client.cs` per route that has operations, wrapping an
/// injected `HttpClient`.
pub fn emit_clients(
    definition: &Definition,
    namespaces: &Namespaces,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let namespace = namespaces.of(GeneratorId::Clients);
    let imports = namespaces.imports_for(GeneratorId::Clients);
    let env = environment()?;
    let tmpl = env.get_template("client.cs.j2")?;

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
                operations => operations,
            })?;
            Ok(GeneratedFile {
                path: source_file(&format!("{identifier}Client")),
                content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::todo_definition;

    #[test]
    fn test_client_methods() {
        let def = todo_definition();
        let files = emit_clients(&def, &Namespaces::new("Todo.Api.Client")).unwrap();
        assert_eq!(files.len(), 2);

        let todo = &files[0];
        assert_eq!(todo.path, "ApiTodoClient.cs");
        assert!(todo.content.contains("public ApiTodoClient(HttpClient httpClient)"));
        assert!(todo.content.contains(
            "public async Task<IEnumerable<ToDoItem>> GetAsync(int? pageSize, string xTenantId, CancellationToken cancellationToken = default)"
        ));
        assert!(todo.content.contains(
            "if (pageSize is not null)\n        {\n            queryParts.Add(\"page_size\" + \"=\" + Uri.EscapeDataString(Format(pageSize)));"
        ));
        assert!(todo.content.contains("if (queryParts.Count > 0)"));
        assert!(todo.content.contains("httpRequest.Headers.Add(\"X-Tenant-Id\", Format(xTenantId));"));
        assert!(todo.content.contains("httpRequest.Content = JsonContent.Create(request);"));
    }

    #[test]
    fn test_client_path_and_results() {
        let def = todo_definition();
        let files = emit_clients(&def, &Namespaces::new("Todo.Api.Client")).unwrap();
        let by_id = &files[1].content;

        assert!(by_id.contains(
            "var requestUri = \"/api/Todo/\" + Uri.EscapeDataString(Format(id));"
        ));
        assert!(by_id.contains("new HttpRequestMessage(HttpMethod.Delete, requestUri)"));
        assert!(by_id.contains("public async Task DeleteAsync(int id, CancellationToken cancellationToken = default)"));
        assert!(by_id.contains("ReadFromJsonAsync<ToDoItem>(cancellationToken: cancellationToken)"));
        assert!(!by_id.contains("queryParts"));
    }

    #[test]
    fn test_required_header_sent_unconditionally() {
        let def = todo_definition();
        let files = emit_clients(&def, &Namespaces::new("Todo.Api.Client")).unwrap();
        let todo = &files[0].content;
        assert!(todo.contains(
            "requestUri);\n        httpRequest.Headers.Add(\"X-Tenant-Id\", Format(xTenantId));"
        ));
        assert!(!todo.contains("if (xTenantId is not null)"));
    }
}
