//! Tensions: contradictions, abandonment and engineering imbalance.

pub mod detector;

pub use detector::TensionDetector;

use serde::{Deserialize, Serialize};

/// Tension kinds in priority order; earlier kinds win severity ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionKind {
    Contradiction,
    Abandonment,
    OverEngineering,
    UnderEngineering,
}

impl TensionKind {
    pub const ALL: [TensionKind; 4] = [
        TensionKind::Contradiction,
        TensionKind::Abandonment,
        TensionKind::OverEngineering,
        TensionKind::UnderEngineering,
    ];

    /// 0 is the highest priority.
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn resolution(self) -> &'static str {
        match self {
            TensionKind::Contradiction => {
                "Reconcile the opposing impulses: decide which signal reflects the code's real intent and let the other go."
            }
            TensionKind::Abandonment => {
                "Return to what was left unfinished: resolve the marked work and give silenced failures a voice."
            }
            TensionKind::OverEngineering => {
                "Learn to trust: release the armor that guards against risks the code never meets."
            }
            TensionKind::UnderEngineering => {
                "Raise some walls: validate input and handle failure where data first arrives."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tension {
    pub kind: TensionKind,
    pub label: String,
    pub severity: f64,
    pub description: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TensionAnalysis {
    pub tensions: Vec<Tension>,
    pub overall_tension_level: f64,
    pub primary_conflict: Option<String>,
    pub resolution_suggestions: Vec<String>,
}

impl TensionAnalysis {
    /// Rank tensions and derive the summary fields.
    ///
    /// Sorting is stable, so tensions equal in severity and kind keep the
    /// order in which they were discovered.
    pub fn from_tensions(mut tensions: Vec<Tension>) -> Self {
        tensions.sort_by(|a, b| {
            b.severity
                .total_cmp(&a.severity)
                .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
        });

        let overall_tension_level = if tensions.is_empty() {
            0.0
        } else {
            let total: f64 = tensions.iter().map(|t| t.severity).sum();
            crate::core::clamp_unit(total / tensions.len() as f64, "overall tension level")
        };

        let resolution_suggestions = TensionKind::ALL
            .into_iter()
            .filter(|kind| tensions.iter().any(|t| t.kind == *kind))
            .map(|kind| kind.resolution().to_string())
            .collect();

        Self {
            primary_conflict: tensions.first().map(|t| t.label.clone()),
            overall_tension_level,
            resolution_suggestions,
            tensions,
        }
    }

    pub fn of_kind(&self, kind: TensionKind) -> impl Iterator<Item = &Tension> {
        self.tensions.iter().filter(move |t| t.kind == kind)
    }

    pub fn find(&self, label: &str) -> Option<&Tension> {
        self.tensions.iter().find(|t| t.label == label)
    }
}
