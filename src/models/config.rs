use crate::{AssemblyProfile, ForgeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Registry configuration, usually read from a TOML file:
///
/// ```toml
/// include_builtin = true
///
/// [profiles.workstation]
/// cores = 16
/// brand = "BRAND-W"
/// memory_gb = 64
/// monitors = 2
/// graphics_units = 2
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Register `variant-a` and `variant-b` alongside the configured profiles.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// Additional profiles keyed by assembler identifier.
    #[serde(default)]
    pub profiles: BTreeMap<String, AssemblyProfile>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            profiles: BTreeMap::new(),
        }
    }
}

impl ForgeConfig {
    /// Adds a profile under `id`, replacing any earlier one with that id.
    pub fn with_profile<S: Into<String>>(mut self, id: S, profile: AssemblyProfile) -> Self {
        self.profiles.insert(id.into(), profile);
        self
    }

    /// Turns off the built-in variants.
    pub fn without_builtin(mut self) -> Self {
        self.include_builtin = false;
        self
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ForgeError> {
        let config: Self = toml::from_str(content).map_err(|e| ForgeError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ForgeError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ForgeError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ForgeError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::info!(
            profiles = config.profiles.len(),
            "Loaded assembler config from {}",
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ForgeError> {
        for (id, profile) in &self.profiles {
            if id.trim().is_empty() {
                return Err(ForgeError::config("Profile identifier cannot be empty"));
            }
            profile
                .validate()
                .map_err(|e| ForgeError::config(format!("profile `{}`: {}", id, e)))?;
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ForgeError> {
        toml::to_string_pretty(self).map_err(|e| ForgeError::config(e.to_string()))
    }
}
