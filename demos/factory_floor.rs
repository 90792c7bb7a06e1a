//! Switches one director between assemblers and prints each computer it builds.
//!
//! Run with: cargo run --example factory_floor [config.toml]

use pcforge_core::{
    ForgeConfig, ForgeError, VARIANT_A, VARIANT_B, application::Director,
    factories::AssemblerRegistry,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ForgeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ForgeConfig::load_from(&PathBuf::from(path))?,
        None => ForgeConfig::default(),
    };
    let registry = AssemblerRegistry::from_config(&config)?;

    let variant_b = registry.lookup_shared(VARIANT_B)?;
    let variant_a = registry.lookup_shared(VARIANT_A)?;

    let mut director = Director::with_assembler(variant_b.clone());
    println!("{}", director.build()?);

    director.select(variant_a);
    println!("{}", director.build()?);

    director.select(variant_b);
    println!("{}", director.build()?);

    for id in registry.identifiers() {
        if id == VARIANT_A || id == VARIANT_B {
            continue;
        }
        director.select(registry.lookup_shared(id)?);
        println!("{}", director.build()?);
    }

    Ok(())
}
