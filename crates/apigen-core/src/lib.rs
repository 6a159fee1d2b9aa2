pub mod config;
pub mod definition;
pub mod error;
pub mod parse;
pub mod transform;

pub use config::{GeneratorId, Namespaces};
pub use error::GeneratorError;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for emission backends that turn a `Definition` into files.
///
/// Implementations must treat the definition as read-only; the same value is
/// handed to every configured generator in turn. `namespaces` covers every
/// generator so output can import the namespaces of the types it uses.
pub trait CodeGenerator {
    fn id(&self) -> GeneratorId;

    fn generate(
        &self,
        definition: &definition::Definition,
        namespaces: &Namespaces,
    ) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
