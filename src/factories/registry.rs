// src/factories/registry.rs

use crate::assemblers::ProfileAssembler;
use crate::ports::{Assembler, SharedAssembler, share_boxed};
use crate::{AssemblyProfile, ForgeConfig, ForgeError, VARIANT_A, VARIANT_B};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Constructor stored in the registry. Each call must return a new instance.
pub type AssemblerConstructor = Arc<dyn Fn() -> Box<dyn Assembler> + Send + Sync>;

static BUILTIN: LazyLock<AssemblerRegistry> = LazyLock::new(|| {
    let mut constructors: HashMap<String, AssemblerConstructor> = HashMap::new();
    constructors.insert(VARIANT_A.to_string(), Arc::new(new_variant_a));
    constructors.insert(VARIANT_B.to_string(), Arc::new(new_variant_b));
    AssemblerRegistry { constructors }
});

fn new_variant_a() -> Box<dyn Assembler> {
    Box::new(ProfileAssembler::variant_a())
}

fn new_variant_b() -> Box<dyn Assembler> {
    Box::new(ProfileAssembler::variant_b())
}

/// Read-only mapping from assembler identifier to constructor.
///
/// A registry is assembled once through [`RegistryBuilder`] and cannot be
/// altered afterwards. Lookups never share state: every call runs the
/// constructor again, so concurrent lookups need no synchronization.
///
/// # Examples
/// ```
/// use pcforge_core::factories::AssemblerRegistry;
///
/// let registry = AssemblerRegistry::builtin();
/// assert!(registry.lookup("variant-a").is_ok());
/// assert!(registry.lookup("variant-c").is_err());
/// ```
#[derive(Clone)]
pub struct AssemblerRegistry {
    constructors: HashMap<String, AssemblerConstructor>,
}

impl AssemblerRegistry {
    /// Creates an empty registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the process-wide registry holding `variant-a` and `variant-b`.
    pub fn builtin() -> &'static AssemblerRegistry {
        &BUILTIN
    }

    /// Builds a registry from configured profiles, plus the built-in variants
    /// when `include_builtin` is set.
    pub fn from_config(config: &ForgeConfig) -> Result<Self, ForgeError> {
        config.validate()?;

        let mut builder = Self::builder();
        if config.include_builtin {
            builder = builder
                .register_profile(VARIANT_A, AssemblyProfile::variant_a())
                .register_profile(VARIANT_B, AssemblyProfile::variant_b());
        }
        for (id, profile) in &config.profiles {
            builder = builder.register_profile(id.as_str(), profile.clone());
        }
        builder.build()
    }

    /// Creates a fresh assembler for `id`.
    pub fn lookup(&self, id: &str) -> Result<Box<dyn Assembler>, ForgeError> {
        match self.constructors.get(id) {
            Some(constructor) => {
                let assembler = constructor();
                tracing::debug!(assembler = id, instance = %assembler.id(), "Assembler created");
                Ok(assembler)
            }
            None => {
                tracing::warn!(assembler = id, "Unknown assembler identifier");
                Err(ForgeError::unknown(id))
            }
        }
    }

    /// Creates a fresh assembler for `id`, ready to hand to a director.
    pub fn lookup_shared(&self, id: &str) -> Result<SharedAssembler, ForgeError> {
        self.lookup(id).map(share_boxed)
    }

    /// Checks if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// Returns registered identifiers in sorted order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for AssemblerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssemblerRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

/// Collects constructors for an [`AssemblerRegistry`].
///
/// Registration problems (blank or repeated identifiers, invalid profiles) are
/// remembered and reported by [`build`](RegistryBuilder::build).
#[derive(Default)]
pub struct RegistryBuilder {
    constructors: HashMap<String, AssemblerConstructor>,
    error: Option<ForgeError>,
}

impl RegistryBuilder {
    pub fn register<S, F>(mut self, id: S, constructor: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> Box<dyn Assembler> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.error.is_some() {
            return self;
        }
        if id.trim().is_empty() {
            self.error = Some(ForgeError::validation(
                "Assembler identifier cannot be empty or whitespace",
            ));
            return self;
        }
        if self.constructors.contains_key(&id) {
            self.error = Some(ForgeError::DuplicateAssembler(id));
            return self;
        }
        self.constructors.insert(id, Arc::new(constructor));
        self
    }

    pub fn register_profile<S: Into<String>>(mut self, id: S, profile: AssemblyProfile) -> Self {
        if let Err(e) = profile.validate() {
            if self.error.is_none() {
                self.error = Some(e);
            }
            return self;
        }
        self.register(id, move || Box::new(ProfileAssembler::from_valid(profile.clone())))
    }

    pub fn build(self) -> Result<AssemblerRegistry, ForgeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        tracing::debug!(count = self.constructors.len(), "Assembler registry built");
        Ok(AssemblerRegistry {
            constructors: self.constructors,
        })
    }
}
