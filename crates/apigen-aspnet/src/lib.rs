pub mod emitters;
pub mod generator;
pub mod type_mapper;

pub use generator::{
    ClientsGenerator, ControllersGenerator, InteractorsGenerator, MocksGenerator, ModelsGenerator,
    generator_for,
};
