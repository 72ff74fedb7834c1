//! Interpretation configuration.
//!
//! Every threshold, band size and severity normalization constant used by
//! the archetype scorer, motif detector and tension detector lives in one
//! [`InterpretationConfig`] so it can be tuned without touching rule logic.

mod loader;
mod thresholds;
pub mod validation;

pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use thresholds::{ArchetypeThresholds, MotifThresholds, TensionThresholds, TraitThresholds};

use serde::{Deserialize, Serialize};

/// Root configuration structure for symbolmap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpretationConfig {
    #[serde(default)]
    pub archetypes: ArchetypeThresholds,

    #[serde(default)]
    pub motifs: MotifThresholds,

    #[serde(default)]
    pub tensions: TensionThresholds,
}

impl InterpretationConfig {
    /// Check every threshold, reporting all problems at once.
    pub fn validate(&self) -> crate::core::errors::Result<()> {
        validation::validate_config(self)
    }

    /// Default configuration rendered as TOML, used by `symbolmap init`.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# symbolmap configuration\n"))
    }
}
