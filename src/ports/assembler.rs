use crate::Computer;
use std::fmt;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Identity of a single assembler instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssemblerId(Uuid);

impl AssemblerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssemblerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssemblerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incremental assembly of a [`Computer`].
///
/// Every step overwrites one field with an absolute value, so repeating a step
/// never accumulates. `finalize` only reads the current fields and can be called
/// any number of times.
pub trait Assembler: Send + fmt::Debug {
    fn id(&self) -> AssemblerId;

    fn set_core(&mut self);

    fn set_brand(&mut self);

    fn set_memory(&mut self);

    fn set_monitor(&mut self);

    fn set_graphics_unit(&mut self);

    fn finalize(&self) -> Computer;
}

/// An assembler that a [`Director`](crate::application::Director) and its caller
/// can hold at the same time.
pub type SharedAssembler = Arc<Mutex<dyn Assembler>>;

pub fn share<A: Assembler + 'static>(assembler: A) -> SharedAssembler {
    Arc::new(Mutex::new(assembler))
}

pub fn share_boxed(assembler: Box<dyn Assembler>) -> SharedAssembler {
    Arc::new(Mutex::new(BoxedAssembler(assembler)))
}

// Box<dyn Assembler> cannot be unsized into Mutex<dyn Assembler> directly.
#[derive(Debug)]
struct BoxedAssembler(Box<dyn Assembler>);

impl Assembler for BoxedAssembler {
    fn id(&self) -> AssemblerId {
        self.0.id()
    }

    fn set_core(&mut self) {
        self.0.set_core()
    }

    fn set_brand(&mut self) {
        self.0.set_brand()
    }

    fn set_memory(&mut self) {
        self.0.set_memory()
    }

    fn set_monitor(&mut self) {
        self.0.set_monitor()
    }

    fn set_graphics_unit(&mut self) {
        self.0.set_graphics_unit()
    }

    fn finalize(&self) -> Computer {
        self.0.finalize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyStep {
    Core,
    Brand,
    Memory,
    Monitor,
    GraphicsUnit,
}

/// The order in which a director runs the construction steps.
pub const STEP_ORDER: [AssemblyStep; 5] = [
    AssemblyStep::Core,
    AssemblyStep::Brand,
    AssemblyStep::Memory,
    AssemblyStep::Monitor,
    AssemblyStep::GraphicsUnit,
];

impl AssemblyStep {
    pub fn apply(&self, assembler: &mut dyn Assembler) {
        match self {
            Self::Core => assembler.set_core(),
            Self::Brand => assembler.set_brand(),
            Self::Memory => assembler.set_memory(),
            Self::Monitor => assembler.set_monitor(),
            Self::GraphicsUnit => assembler.set_graphics_unit(),
        }
    }
}

impl fmt::Display for AssemblyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Brand => write!(f, "brand"),
            Self::Memory => write!(f, "memory"),
            Self::Monitor => write!(f, "monitor"),
            Self::GraphicsUnit => write!(f, "graphics-unit"),
        }
    }
}
