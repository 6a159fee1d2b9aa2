use std::collections::HashSet;

use super::components::Components;
use super::operation::{Operation, PathItem};
use super::parameter::{Parameter, ParameterOrRef};
use super::request_body::{RequestBody, RequestBodyOrRef};
use super::response::{Response, ResponseOrRef};
use super::spec::OpenApiSpec;
use crate::error::ResolveError;

/// Inlines `$ref` pointers to reusable parameters, request bodies and
/// responses. Schema references are left in place: downstream code works on
/// component names and never expands a schema into its referrer.
pub struct RefResolver<'a> {
    components: Option<&'a Components>,
}

impl<'a> RefResolver<'a> {
    pub fn new(spec: &'a OpenApiSpec) -> Self {
        Self {
            components: spec.components.as_ref(),
        }
    }

    /// Return a copy of the document with no parameter, request-body or
    /// response references left.
    pub fn resolve_spec(&self, spec: &OpenApiSpec) -> Result<OpenApiSpec, ResolveError> {
        let mut resolved = spec.clone();
        for item in resolved.paths.values_mut() {
            self.resolve_path_item(item)?;
        }
        Ok(resolved)
    }

    fn resolve_path_item(&self, item: &mut PathItem) -> Result<(), ResolveError> {
        item.parameters = self.resolve_parameters(&item.parameters)?;

        for op in [
            &mut item.get,
            &mut item.post,
            &mut item.put,
            &mut item.delete,
            &mut item.patch,
            &mut item.options,
            &mut item.head,
            &mut item.trace,
        ]
        .into_iter()
        .flatten()
        {
            self.resolve_operation(op)?;
        }
        Ok(())
    }

    fn resolve_operation(&self, op: &mut Operation) -> Result<(), ResolveError> {
        op.parameters = self.resolve_parameters(&op.parameters)?;

        if let Some(ref body) = op.request_body {
            let resolved = self.lookup_request_body(body, &mut HashSet::new())?;
            op.request_body = Some(RequestBodyOrRef::RequestBody(resolved));
        }

        for resp in op.responses.values_mut() {
            let resolved = self.lookup_response(resp, &mut HashSet::new())?;
            *resp = ResponseOrRef::Response(resolved);
        }

        Ok(())
    }

    fn resolve_parameters(
        &self,
        params: &[ParameterOrRef],
    ) -> Result<Vec<ParameterOrRef>, ResolveError> {
        params
            .iter()
            .map(|p| {
                self.lookup_parameter(p, &mut HashSet::new())
                    .map(ParameterOrRef::Parameter)
            })
            .collect()
    }

    // Lookup helpers. Each follows reference chains and fails on a cycle.

    fn lookup_parameter(
        &self,
        param: &ParameterOrRef,
        visited: &mut HashSet<String>,
    ) -> Result<Parameter, ResolveError> {
        match param {
            ParameterOrRef::Parameter(p) => Ok(p.clone()),
            ParameterOrRef::Ref { ref_path } => {
                enter(visited, ref_path)?;
                let name = parse_ref_name(ref_path, "parameters")?;
                let target = self
                    .components
                    .and_then(|c| c.parameters.get(name))
                    .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
                self.lookup_parameter(target, visited)
            }
        }
    }

    fn lookup_request_body(
        &self,
        body: &RequestBodyOrRef,
        visited: &mut HashSet<String>,
    ) -> Result<RequestBody, ResolveError> {
        match body {
            RequestBodyOrRef::RequestBody(rb) => Ok(rb.clone()),
            RequestBodyOrRef::Ref { ref_path } => {
                enter(visited, ref_path)?;
                let name = parse_ref_name(ref_path, "requestBodies")?;
                let target = self
                    .components
                    .and_then(|c| c.request_bodies.get(name))
                    .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
                self.lookup_request_body(target, visited)
            }
        }
    }

    fn lookup_response(
        &self,
        resp: &ResponseOrRef,
        visited: &mut HashSet<String>,
    ) -> Result<Response, ResolveError> {
        match resp {
            ResponseOrRef::Response(r) => Ok(r.clone()),
            ResponseOrRef::Ref { ref_path } => {
                enter(visited, ref_path)?;
                let name = parse_ref_name(ref_path, "responses")?;
                let target = self
                    .components
                    .and_then(|c| c.responses.get(name))
                    .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
                self.lookup_response(target, visited)
            }
        }
    }
}

fn enter(visited: &mut HashSet<String>, ref_path: &str) -> Result<(), ResolveError> {
    if visited.insert(ref_path.to_string()) {
        Ok(())
    } else {
        Err(ResolveError::CircularRef(ref_path.to_string()))
    }
}

/// Parse a `$ref` path like `#/components/schemas/Foo` and extract the name.
pub fn parse_ref_name<'a>(
    ref_path: &'a str,
    expected_section: &str,
) -> Result<&'a str, ResolveError> {
    let stripped = ref_path
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let (section, name) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    if section != expected_section {
        return Err(ResolveError::InvalidRefFormat(format!(
            "expected section '{expected_section}', got '{section}' in {ref_path}"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const DOCUMENT: &str = r#"
openapi: "3.0.1"
info:
  title: Refs
  version: "1"
paths:
  /items/{id}:
    parameters:
      - $ref: '#/components/parameters/Id'
    get:
      responses:
        "200":
          $ref: '#/components/responses/ItemResponse'
    put:
      requestBody:
        $ref: '#/components/requestBodies/ItemBody'
      responses: {}
components:
  parameters:
    Id:
      name: id
      in: path
      required: true
      schema:
        type: integer
  requestBodies:
    ItemBody:
      content:
        application/json:
          schema:
            $ref: '#/components/schemas/Item'
  responses:
    ItemResponse:
      $ref: '#/components/responses/PlainItem'
    PlainItem:
      description: ok
      content:
        application/json:
          schema:
            $ref: '#/components/schemas/Item'
  schemas:
    Item:
      type: object
      properties:
        id:
          type: integer
"#;

    #[test]
    fn test_parse_ref_name() {
        assert_eq!(
            parse_ref_name("#/components/schemas/Pet", "schemas"),
            Ok("Pet")
        );
        assert!(matches!(
            parse_ref_name("#/components/responses/Pet", "schemas"),
            Err(ResolveError::InvalidRefFormat(_))
        ));
        assert!(matches!(
            parse_ref_name("other.yaml#/Pet", "schemas"),
            Err(ResolveError::InvalidRefFormat(_))
        ));
    }

    #[test]
    fn test_resolves_component_references() {
        let spec = parse::from_yaml(DOCUMENT).unwrap();
        let resolved = RefResolver::new(&spec).resolve_spec(&spec).unwrap();
        let item = &resolved.paths["/items/{id}"];

        assert!(matches!(
            &item.parameters[0],
            ParameterOrRef::Parameter(p) if p.name == "id"
        ));

        let get = item.get.as_ref().unwrap();
        match &get.responses["200"] {
            ResponseOrRef::Response(r) => {
                let schema = r.content["application/json"].schema.as_ref().unwrap();
                // Schema references are kept as names.
                assert_eq!(schema.ref_name(), Some("Item"));
            }
            ResponseOrRef::Ref { .. } => panic!("response should be inlined"),
        }

        let put = item.put.as_ref().unwrap();
        assert!(matches!(
            put.request_body,
            Some(RequestBodyOrRef::RequestBody(_))
        ));
    }

    #[test]
    fn test_missing_target() {
        let yaml = r#"
openapi: "3.0.1"
info:
  title: Refs
  version: "1"
paths:
  /a:
    get:
      parameters:
        - $ref: '#/components/parameters/Nope'
      responses: {}
"#;
        let spec = parse::from_yaml(yaml).unwrap();
        let err = RefResolver::new(&spec).resolve_spec(&spec).unwrap_err();
        assert_eq!(
            err,
            ResolveError::RefTargetNotFound("#/components/parameters/Nope".to_string())
        );
    }

    #[test]
    fn test_circular_reference() {
        let yaml = r#"
openapi: "3.0.1"
info:
  title: Refs
  version: "1"
paths:
  /a:
    get:
      responses:
        "200":
          $ref: '#/components/responses/A'
components:
  responses:
    A:
      $ref: '#/components/responses/B'
    B:
      $ref: '#/components/responses/A'
"#;
        let spec = parse::from_yaml(yaml).unwrap();
        let err = RefResolver::new(&spec).resolve_spec(&spec).unwrap_err();
        assert!(matches!(err, ResolveError::CircularRef(_)));
    }
}
