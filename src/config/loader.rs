//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a store's
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::StoreProfile;

use super::types::{ReasonRegistry, ReasonsConfig, StoreConfig};

/// Loads and provides access to a store's configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the store profile and the absence-reasons registry.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/demo_store/
/// ├── store.yaml    # Store profile (name, working days per week)
/// └── reasons.yaml  # Absence-reasons registry
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo_store").unwrap();
/// println!("Store: {}", loader.store_profile().name);
/// println!("{} absence reasons", loader.reasons().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: StoreConfig,
    registry: ReasonRegistry,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/demo_store")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The store profile is invalid (working-day count outside 1–7)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let store_path = path.join("store.yaml");
        let store = Self::load_yaml::<StoreConfig>(&store_path)?;
        store.profile().validate()?;

        let reasons_path = path.join("reasons.yaml");
        let reasons = Self::load_yaml::<ReasonsConfig>(&reasons_path)?;

        Ok(Self {
            store,
            registry: reasons.into(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the raw store configuration.
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    /// Builds the engine-facing store profile.
    pub fn store_profile(&self) -> StoreProfile {
        self.store.profile()
    }

    /// Returns the absence-reasons registry.
    pub fn reasons(&self) -> &ReasonRegistry {
        &self.registry
    }
}
