//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the in-memory
//! absence-reasons registry built from them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{AbsenceCategory, StoreProfile};

/// Store parameters from `store.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// The display name of the store.
    pub name: String,
    /// How many weekdays per week the store works (Monday-first).
    pub working_days_per_week: u32,
}

impl StoreConfig {
    /// Builds the engine-facing store profile.
    pub fn profile(&self) -> StoreProfile {
        StoreProfile {
            name: self.name.clone(),
            working_days_per_week: self.working_days_per_week,
        }
    }
}

/// One absence reason known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbsenceReason {
    /// The abbreviation shown in grid cells (e.g. "FE").
    pub abbreviation: String,
    /// The human-readable reason label.
    pub label: String,
    /// The summary category this reason maps to.
    pub category: AbsenceCategory,
}

/// Reasons configuration file structure (`reasons.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ReasonsConfig {
    /// Map of reason id to reason details.
    pub reasons: HashMap<String, AbsenceReason>,
}

/// The absence-reasons registry: reason id → category and abbreviation.
///
/// Registries are store-specific and may have been edited after a cell was
/// created, so lookups of unknown ids return `None` and the classifier
/// falls back to the non-hour-bearing category rather than failing.
///
/// # Example
///
/// ```
/// use roster_engine::config::{AbsenceReason, ReasonRegistry};
/// use roster_engine::models::AbsenceCategory;
/// use std::collections::HashMap;
///
/// let mut reasons = HashMap::new();
/// reasons.insert(
///     "ferie".to_string(),
///     AbsenceReason {
///         abbreviation: "FE".to_string(),
///         label: "Ferie".to_string(),
///         category: AbsenceCategory::Vacation,
///     },
/// );
/// let registry = ReasonRegistry::new(reasons);
///
/// assert_eq!(registry.lookup("ferie").unwrap().category, AbsenceCategory::Vacation);
/// assert!(registry.lookup("sconosciuto").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReasonRegistry {
    reasons: HashMap<String, AbsenceReason>,
}

impl ReasonRegistry {
    /// Creates a registry from a reason map.
    pub fn new(reasons: HashMap<String, AbsenceReason>) -> Self {
        Self { reasons }
    }

    /// Looks up a reason by id.
    pub fn lookup(&self, reason_id: &str) -> Option<&AbsenceReason> {
        self.reasons.get(reason_id)
    }

    /// Returns the number of registered reasons.
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Returns true if no reasons are registered.
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl From<ReasonsConfig> for ReasonRegistry {
    fn from(config: ReasonsConfig) -> Self {
        Self::new(config.reasons)
    }
}
