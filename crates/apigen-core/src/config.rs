use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.apigen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApigenConfig {
    /// OpenAPI document to read, relative to the working directory.
    pub input: String,
    /// Namespace used by generators that do not set their own.
    pub namespace: String,
    /// Generators to run, in the order they are listed.
    pub generators: IndexMap<GeneratorId, GeneratorConfig>,
}

impl Default for ApigenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            namespace: "Generated".to_string(),
            generators: IndexMap::new(),
        }
    }
}

impl ApigenConfig {
    /// Resolved namespaces for this run, including generators that are not
    /// configured: their types may still be referenced by the others.
    pub fn namespaces(&self) -> Namespaces {
        let mut namespaces = Namespaces::new(&self.namespace);
        for (id, generator) in &self.generators {
            if let Some(namespace) = &generator.namespace {
                namespaces = namespaces.with_override(*id, namespace);
            }
        }
        namespaces
    }
}

/// The C# namespace each generator writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    default: String,
    overrides: IndexMap<GeneratorId, String>,
}

impl Namespaces {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: IndexMap::new(),
        }
    }

    pub fn with_override(mut self, id: GeneratorId, namespace: impl Into<String>) -> Self {
        self.overrides.insert(id, namespace.into());
        self
    }

    pub fn of(&self, id: GeneratorId) -> &str {
        self.overrides.get(&id).unwrap_or(&self.default)
    }

    /// Namespaces `id`'s output has to import: those of its dependencies
    /// that differ from its own, without repeats.
    pub fn imports_for(&self, id: GeneratorId) -> Vec<&str> {
        let own = self.of(id);
        let mut imports: Vec<&str> = Vec::new();
        for dependency in id.dependencies() {
            let namespace = self.of(*dependency);
            if namespace != own && !imports.contains(&namespace) {
                imports.push(namespace);
            }
        }
        imports
    }
}

/// Identifies one emission backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorId {
    Models,
    Interactors,
    Controllers,
    Clients,
    Mocks,
}

impl GeneratorId {
    pub const ALL: [GeneratorId; 5] = [
        GeneratorId::Models,
        GeneratorId::Interactors,
        GeneratorId::Controllers,
        GeneratorId::Clients,
        GeneratorId::Mocks,
    ];

    /// Generators whose types this generator's output refers to.
    pub fn dependencies(&self) -> &'static [GeneratorId] {
        match self {
            GeneratorId::Models => &[],
            GeneratorId::Interactors | GeneratorId::Clients => &[GeneratorId::Models],
            GeneratorId::Controllers | GeneratorId::Mocks => {
                &[GeneratorId::Models, GeneratorId::Interactors]
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorId::Models => "models",
            GeneratorId::Interactors => "interactors",
            GeneratorId::Controllers => "controllers",
            GeneratorId::Clients => "clients",
            GeneratorId::Mocks => "mocks",
        }
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Output directory for this generator's files.
    pub output: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apigen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApigenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: ApigenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apigen configuration
input: openapi.yaml
namespace: Generated

generators:
  models:
    output: generated/Models
  interactors:
    output: generated/Interactors
  controllers:
    output: generated/Controllers
  clients:
    output: generated/Clients
  mocks:
    output: generated/Mocks
    # namespace: Generated.Testing
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApigenConfig::default();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.namespace, "Generated");
        assert!(config.generators.is_empty());
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api/todo.yaml
namespace: Todo.Api
generators:
  controllers:
    output: src/Controllers
  models:
    output: src/Models
    namespace: Todo.Contracts
"#;
        let config: ApigenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api/todo.yaml");
        let ids: Vec<GeneratorId> = config.generators.keys().copied().collect();
        assert_eq!(ids, [GeneratorId::Controllers, GeneratorId::Models]);

        let controllers = &config.generators[&GeneratorId::Controllers];
        assert_eq!(controllers.output, "src/Controllers");

        let namespaces = config.namespaces();
        assert_eq!(namespaces.of(GeneratorId::Controllers), "Todo.Api");
        assert_eq!(namespaces.of(GeneratorId::Models), "Todo.Contracts");
        assert_eq!(namespaces.of(GeneratorId::Interactors), "Todo.Api");
        assert_eq!(
            namespaces.imports_for(GeneratorId::Controllers),
            ["Todo.Contracts"]
        );
    }

    #[test]
    fn test_imports_follow_dependencies() {
        let namespaces = Namespaces::new("App")
            .with_override(GeneratorId::Models, "App.Models")
            .with_override(GeneratorId::Interactors, "App.Core")
            .with_override(GeneratorId::Mocks, "App.Core");

        assert!(namespaces.imports_for(GeneratorId::Models).is_empty());
        assert_eq!(namespaces.imports_for(GeneratorId::Interactors), ["App.Models"]);
        assert_eq!(
            namespaces.imports_for(GeneratorId::Controllers),
            ["App.Models", "App.Core"]
        );
        assert_eq!(namespaces.imports_for(GeneratorId::Clients), ["App.Models"]);
        // Mocks share the interactors' namespace, so only models are imported.
        assert_eq!(namespaces.imports_for(GeneratorId::Mocks), ["App.Models"]);
    }

    #[test]
    fn test_shared_namespace_needs_no_imports() {
        let namespaces = Namespaces::new("App")
            .with_override(GeneratorId::Models, "App")
            .with_override(GeneratorId::Interactors, "App");
        for id in GeneratorId::ALL {
            assert!(namespaces.imports_for(id).is_empty(), "{id}");
        }
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: ApigenConfig = serde_yaml_ng::from_str("input: api.yaml\n").unwrap();
        assert_eq!(config.input, "api.yaml");
        assert_eq!(config.namespace, "Generated");
    }

    #[test]
    fn test_default_content_parses() {
        let config: ApigenConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        let ids: Vec<GeneratorId> = config.generators.keys().copied().collect();
        assert_eq!(ids, GeneratorId::ALL);
    }

    #[test]
    fn test_unknown_generator_rejected() {
        let yaml = "generators:\n  swift:\n    output: out\n";
        assert!(serde_yaml_ng::from_str::<ApigenConfig>(yaml).is_err());
    }

    #[test]
    fn test_missing_file_is_none() {
        let loaded = load_config(Path::new("definitely/not/here/.apigen.yaml")).unwrap();
        assert!(loaded.is_none());
    }
}
