use serde::Serialize;
use std::fmt;

/// Computer entity representing a finished machine configuration.
///
/// Only an [`Assembler`](crate::ports::Assembler) produces a `Computer`, through
/// its finalize step. Once handed out it is a detached snapshot: building again
/// with the same assembler yields a new value and leaves this one untouched.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Computer {
    cores: u32,
    brand: String,
    memory_gb: u32,
    monitors: u32,
    graphics_units: u32,
}

impl Computer {
    pub(crate) fn new(
        cores: u32,
        brand: String,
        memory_gb: u32,
        monitors: u32,
        graphics_units: u32,
    ) -> Self {
        Self {
            cores,
            brand,
            memory_gb,
            monitors,
            graphics_units,
        }
    }

    /// Returns the core count.
    pub fn cores(&self) -> u32 {
        self.cores
    }

    /// Returns the brand label.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the memory size in gigabytes.
    pub fn memory_gb(&self) -> u32 {
        self.memory_gb
    }

    /// Returns the monitor count.
    pub fn monitors(&self) -> u32 {
        self.monitors
    }

    /// Returns the graphics unit count.
    pub fn graphics_units(&self) -> u32 {
        self.graphics_units
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Core: [{}], Mem: [{}], Graphic: [{}], Monitor: [{}]",
            self.brand, self.cores, self.memory_gb, self.graphics_units, self.monitors
        )
    }
}
