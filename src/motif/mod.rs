//! Recurring patterns across naming, structure, behavior and rhythm.

pub mod detector;
pub mod symbolism;

pub use detector::MotifDetector;

use crate::config::MotifThresholds;
use serde::{Deserialize, Serialize};

/// Motif categories in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifCategory {
    Naming,
    Structural,
    Behavioral,
    Rhythmic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motif {
    pub category: MotifCategory,
    pub label: String,
    pub occurrence_count: usize,
    pub symbolic_meaning: String,
}

impl Motif {
    pub fn new(
        category: MotifCategory,
        label: impl Into<String>,
        occurrence_count: usize,
        symbolic_meaning: impl Into<String>,
    ) -> Self {
        Self {
            category,
            label: label.into(),
            occurrence_count,
            symbolic_meaning: symbolic_meaning.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotifAnalysis {
    pub motifs: Vec<Motif>,
    /// `<nesting band>/<organization>`, e.g. `flat/procedural`
    pub rhythm_signature: String,
    pub dominant_pattern: Option<String>,
    pub pattern_diversity: f64,
}

impl MotifAnalysis {
    /// Nesting band encoded in the rhythm signature.
    pub fn nesting_band(&self) -> Option<NestingBand> {
        self.rhythm_signature
            .split('/')
            .next()
            .and_then(NestingBand::parse)
    }

    /// Organization encoded in the rhythm signature.
    pub fn organization(&self) -> Option<Organization> {
        self.rhythm_signature
            .split('/')
            .nth(1)
            .and_then(Organization::parse)
    }

    pub fn in_category(&self, category: MotifCategory) -> impl Iterator<Item = &Motif> {
        self.motifs.iter().filter(move |m| m.category == category)
    }
}

/// Bucket for a nesting depth or an average nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestingBand {
    Flat,
    Moderate,
    Deep,
}

impl NestingBand {
    pub const ALL: [NestingBand; 3] = [NestingBand::Flat, NestingBand::Moderate, NestingBand::Deep];

    pub fn classify(depth: f64, thresholds: &MotifThresholds) -> Self {
        if depth < thresholds.flat_nesting {
            NestingBand::Flat
        } else if depth > thresholds.deep_nesting {
            NestingBand::Deep
        } else {
            NestingBand::Moderate
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NestingBand::Flat => "flat",
            NestingBand::Moderate => "moderate",
            NestingBand::Deep => "deep",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.as_str() == s)
    }
}

/// How functions are distributed over classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Organization {
    /// No functions and no classes
    Vacant,
    /// Functions but no classes
    Procedural,
    FunctionHeavy,
    ClassHeavy,
    Balanced,
}

impl Organization {
    pub const ALL: [Organization; 5] = [
        Organization::Vacant,
        Organization::Procedural,
        Organization::FunctionHeavy,
        Organization::ClassHeavy,
        Organization::Balanced,
    ];

    pub fn classify(function_count: usize, class_count: usize, thresholds: &MotifThresholds) -> Self {
        if class_count == 0 {
            return if function_count == 0 {
                Organization::Vacant
            } else {
                Organization::Procedural
            };
        }

        let per_class = function_count as f64 / class_count as f64;
        if per_class > thresholds.function_heavy_ratio {
            Organization::FunctionHeavy
        } else if per_class < thresholds.class_heavy_ratio {
            Organization::ClassHeavy
        } else {
            Organization::Balanced
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Organization::Vacant => "vacant",
            Organization::Procedural => "procedural",
            Organization::FunctionHeavy => "function-heavy",
            Organization::ClassHeavy => "class-heavy",
            Organization::Balanced => "balanced",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|org| org.as_str() == s)
    }
}
