pub mod clients;
pub mod controllers;
pub mod interactors;
pub mod mocks;
pub mod models;
pub mod operation;

use apigen_core::GeneratorError;
use minijinja::Environment;

/// Template environment with every backend template registered.
pub fn environment() -> Result<Environment<'static>, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("model.cs.j2", include_str!("../../templates/model.cs.j2"))?;
    env.add_template(
        "interactor.cs.j2",
        include_str!("../../templates/interactor.cs.j2"),
    )?;
    env.add_template(
        "controller.cs.j2",
        include_str!("../../templates/controller.cs.j2"),
    )?;
    env.add_template("client.cs.j2", include_str!("../../templates/client.cs.j2"))?;
    env.add_template("mock.cs.j2", include_str!("../../templates/mock.cs.j2"))?;
    Ok(env)
}

/// `{type_name}.cs`
pub fn source_file(type_name: &str) -> String {
    format!("{type_name}.cs")
}

#[cfg(test)]
pub(crate) fn todo_definition() -> apigen_core::definition::Definition {
    let yaml = include_str!("../../../apigen-core/tests/fixtures/todo.yaml");
    let spec = apigen_core::parse::from_yaml(yaml).unwrap();
    apigen_core::transform::build_definition(&spec).unwrap()
}
