// src/ports/mod.rs

pub use assembler::{
    Assembler, AssemblerId, AssemblyStep, STEP_ORDER, SharedAssembler, share, share_boxed,
};

pub mod assembler;
