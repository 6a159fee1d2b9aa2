use std::collections::HashSet;

use apigen_core::definition::Definition;
use apigen_core::{CodeGenerator, GeneratedFile, GeneratorError, GeneratorId, Namespaces};
use log::debug;

use crate::emitters;

/// Emits a C# class per schema definition.
pub struct ModelsGenerator;

/// Emits an interactor interface per operation.
pub struct InteractorsGenerator;

/// Emits an ASP.NET Core controller per route.
pub struct ControllersGenerator;

/// Emits a typed `HttpClient` wrapper per route.
pub struct ClientsGenerator;

/// Emits a stub interactor implementation per operation.
pub struct MocksGenerator;

impl CodeGenerator for ModelsGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::Models
    }

    fn generate(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        unique_paths(self.id(), emitters::models::emit_models(definition, namespaces)?)
    }
}

impl CodeGenerator for InteractorsGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::Interactors
    }

    fn generate(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        unique_paths(self.id(), emitters::interactors::emit_interactors(definition, namespaces)?)
    }
}

impl CodeGenerator for ControllersGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::Controllers
    }

    fn generate(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        unique_paths(self.id(), emitters::controllers::emit_controllers(definition, namespaces)?)
    }
}

impl CodeGenerator for ClientsGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::Clients
    }

    fn generate(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        unique_paths(self.id(), emitters::clients::emit_clients(definition, namespaces)?)
    }
}

impl CodeGenerator for MocksGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::Mocks
    }

    fn generate(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        unique_paths(self.id(), emitters::mocks::emit_mocks(definition, namespaces)?)
    }
}

/// Reject output where two files share a path. Distinct routes or schemas
/// can normalize to the same identifier, and writing both would silently
/// keep only the last one.
fn unique_paths(
    id: GeneratorId,
    files: Vec<GeneratedFile>,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut seen = HashSet::with_capacity(files.len());
    let duplicate = files
        .iter()
        .find(|f| !seen.insert(f.path.as_str()))
        .map(|f| f.path.clone());
    drop(seen);
    if let Some(path) = duplicate {
        return Err(GeneratorError::Other(format!(
            "{id}: more than one file would be written to {path}"
        )));
    }
    debug!("{id}: {} files", files.len());
    Ok(files)
}

/// The backend registered for a generator id.
pub fn generator_for(id: GeneratorId) -> Box<dyn CodeGenerator> {
    match id {
        GeneratorId::Models => Box::new(ModelsGenerator),
        GeneratorId::Interactors => Box::new(InteractorsGenerator),
        GeneratorId::Controllers => Box::new(ControllersGenerator),
        GeneratorId::Clients => Box::new(ClientsGenerator),
        GeneratorId::Mocks => Box::new(MocksGenerator),
    }
}
