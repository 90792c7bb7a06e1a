// src/factories/mod.rs

mod registry;

pub use registry::{AssemblerConstructor, AssemblerRegistry, RegistryBuilder};
