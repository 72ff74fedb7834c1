//! CLI command implementations for symbolmap.
//!
//! Available commands:
//! - **analyze**: Interpret structural extracts into archetypes, motifs and tensions
//! - **init**: Write a default configuration file
//! - **archetypes**: List the archetype taxonomy

pub mod analyze;
pub mod archetypes;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use archetypes::list_archetypes;
pub use init::init_config;
