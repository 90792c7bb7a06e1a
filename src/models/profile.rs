use crate::ForgeError;
use serde::{Deserialize, Serialize};

pub const VARIANT_A: &str = "variant-a";
pub const VARIANT_B: &str = "variant-b";

/// The values a [`ProfileAssembler`](crate::assemblers::ProfileAssembler)
/// writes during each construction step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssemblyProfile {
    pub cores: u32,
    pub brand: String,
    pub memory_gb: u32,
    pub monitors: u32,
    pub graphics_units: u32,
}

impl AssemblyProfile {
    pub fn new<S: Into<String>>(
        cores: u32,
        brand: S,
        memory_gb: u32,
        monitors: u32,
        graphics_units: u32,
    ) -> Self {
        Self {
            cores,
            brand: brand.into(),
            memory_gb,
            monitors,
            graphics_units,
        }
    }

    pub fn variant_a() -> Self {
        Self::new(4, "BRAND-A", 8, 1, 1)
    }

    pub fn variant_b() -> Self {
        Self::new(6, "BRAND-B", 16, 1, 2)
    }

    pub fn validate(&self) -> Result<(), ForgeError> {
        if self.brand.trim().is_empty() {
            return Err(ForgeError::validation(
                "Profile brand cannot be empty or whitespace",
            ));
        }
        Ok(())
    }
}
