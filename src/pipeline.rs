//! The three-stage interpretation run.
//!
//! Archetype scoring and motif detection only read the extract, so they run
//! side by side; tension detection consumes both of their results and runs
//! strictly after them.

use crate::archetype::{ArchetypeScorer, SymbolicProfile};
use crate::config::InterpretationConfig;
use crate::core::{Result, StructuralExtract};
use crate::motif::{MotifAnalysis, MotifDetector};
use crate::tension::{TensionAnalysis, TensionDetector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// Everything one run produces for one extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub profile: SymbolicProfile,
    pub motifs: MotifAnalysis,
    pub tensions: TensionAnalysis,
}

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpretationConfig,
}

impl Interpreter {
    /// Build an interpreter, rejecting configurations that fail validation.
    pub fn new(config: InterpretationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InterpretationConfig {
        &self.config
    }

    pub fn interpret(&self, extract: &StructuralExtract) -> Interpretation {
        let (profile, motifs) = rayon::join(
            || {
                let _span = info_span!("archetype_scoring").entered();
                ArchetypeScorer::new(&self.config).score(extract)
            },
            || {
                let _span = info_span!("motif_detection").entered();
                MotifDetector::new(&self.config).detect(extract)
            },
        );

        let tensions = {
            let _span = info_span!("tension_detection").entered();
            TensionDetector::new(&self.config).detect(extract, &profile, &motifs)
        };

        debug!(
            functions = extract.function_count,
            dominant = profile.dominant_archetypes.len(),
            motifs = motifs.motifs.len(),
            tensions = tensions.tensions.len(),
            "Interpretation complete"
        );

        Interpretation {
            profile,
            motifs,
            tensions,
        }
    }
}
