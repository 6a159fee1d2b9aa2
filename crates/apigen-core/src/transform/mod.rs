pub mod arguments;
pub mod definition_builder;
pub mod name_normalizer;
pub mod return_type;
pub mod schema_definitions;
pub mod shape;
pub mod type_resolver;

pub use definition_builder::build_definition;
