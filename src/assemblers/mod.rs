// src/assemblers/mod.rs

mod profile_assembler;

pub use profile_assembler::ProfileAssembler;
