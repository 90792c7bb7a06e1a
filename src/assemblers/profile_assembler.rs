use crate::ports::{Assembler, AssemblerId};
use crate::{AssemblyProfile, Computer, ForgeError};

/// Assembler driven by an [`AssemblyProfile`].
///
/// The in-progress fields start empty and each step copies one value from the
/// profile, so a partial build reflects only the steps run so far.
#[derive(Debug)]
pub struct ProfileAssembler {
    id: AssemblerId,
    profile: AssemblyProfile,
    cores: u32,
    brand: String,
    memory_gb: u32,
    monitors: u32,
    graphics_units: u32,
}

impl ProfileAssembler {
    /// Creates an assembler for `profile` after validating it.
    pub fn with_profile(profile: AssemblyProfile) -> Result<Self, ForgeError> {
        profile.validate()?;
        Ok(Self::from_valid(profile))
    }

    /// Creates an assembler for the `BRAND-A` profile.
    pub fn variant_a() -> Self {
        Self::from_valid(AssemblyProfile::variant_a())
    }

    /// Creates an assembler for the `BRAND-B` profile.
    pub fn variant_b() -> Self {
        Self::from_valid(AssemblyProfile::variant_b())
    }

    /// Returns the profile this assembler copies from.
    pub fn profile(&self) -> &AssemblyProfile {
        &self.profile
    }

    pub(crate) fn from_valid(profile: AssemblyProfile) -> Self {
        Self {
            id: AssemblerId::new(),
            profile,
            cores: 0,
            brand: String::new(),
            memory_gb: 0,
            monitors: 0,
            graphics_units: 0,
        }
    }
}

// A clone is a separate instance and gets its own identity.
impl Clone for ProfileAssembler {
    fn clone(&self) -> Self {
        Self {
            id: AssemblerId::new(),
            profile: self.profile.clone(),
            cores: self.cores,
            brand: self.brand.clone(),
            memory_gb: self.memory_gb,
            monitors: self.monitors,
            graphics_units: self.graphics_units,
        }
    }
}

impl Assembler for ProfileAssembler {
    fn id(&self) -> AssemblerId {
        self.id
    }

    fn set_core(&mut self) {
        self.cores = self.profile.cores;
    }

    fn set_brand(&mut self) {
        self.brand.clone_from(&self.profile.brand);
    }

    fn set_memory(&mut self) {
        self.memory_gb = self.profile.memory_gb;
    }

    fn set_monitor(&mut self) {
        self.monitors = self.profile.monitors;
    }

    fn set_graphics_unit(&mut self) {
        self.graphics_units = self.profile.graphics_units;
    }

    fn finalize(&self) -> Computer {
        Computer::new(
            self.cores,
            self.brand.clone(),
            self.memory_gb,
            self.monitors,
            self.graphics_units,
        )
    }
}
