use crate::{
    Computer, ForgeConfig, ForgeError, application::Director, factories::AssemblerRegistry,
};

/// Looks up assemblers by identifier and runs them through a single director.
pub struct AssemblyService {
    registry: AssemblerRegistry,
    director: Director,
}

impl AssemblyService {
    /// Creates a service over `registry` with an idle director.
    pub fn new(registry: AssemblerRegistry) -> Self {
        Self {
            registry,
            director: Director::new(),
        }
    }

    /// Creates a service over the built-in registry.
    pub fn builtin() -> Self {
        Self::new(AssemblerRegistry::builtin().clone())
    }

    /// Creates a service whose registry is built from `config`.
    pub fn from_config(config: &ForgeConfig) -> Result<Self, ForgeError> {
        Ok(Self::new(AssemblerRegistry::from_config(config)?))
    }

    /// Returns the registry.
    pub fn registry(&self) -> &AssemblerRegistry {
        &self.registry
    }

    /// Returns the director.
    pub fn director(&self) -> &Director {
        &self.director
    }

    /// Selects a fresh assembler for `id` and builds one computer with it.
    ///
    /// On an unknown identifier the previously selected assembler stays in place.
    pub fn assemble(&mut self, id: &str) -> Result<Computer, ForgeError> {
        let assembler = self.registry.lookup_shared(id)?;
        self.director.select(assembler);
        self.director.build()
    }

    /// Assembles each identifier in order, stopping at the first failure.
    pub fn assemble_all<I, S>(&mut self, ids: I) -> Result<Vec<Computer>, ForgeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| self.assemble(id.as_ref()))
            .collect()
    }
}
