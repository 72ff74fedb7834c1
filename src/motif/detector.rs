//! Motif detection: four independent passes over one extract.
//!
//! Passes run in category order and their motifs are concatenated without
//! re-sorting, so discovery order within a category is preserved all the
//! way to the output.

use super::symbolism::{
    defensive_symbol, handler_symbol, naming_motif, nesting_symbol, organization_symbol,
    shape_symbol, LABYRINTH,
};
use super::{Motif, MotifAnalysis, MotifCategory, NestingBand, Organization};
use crate::config::{InterpretationConfig, MotifThresholds};
use crate::core::{clamp_unit, share, DefensiveKind, HandlerBody, ShapeCensus, Signals, StructuralExtract};
use tracing::debug;

pub struct MotifDetector<'a> {
    config: &'a InterpretationConfig,
}

impl<'a> MotifDetector<'a> {
    pub fn new(config: &'a InterpretationConfig) -> Self {
        Self { config }
    }

    fn thresholds(&self) -> &MotifThresholds {
        &self.config.motifs
    }

    pub fn detect(&self, extract: &StructuralExtract) -> MotifAnalysis {
        let signals = Signals::from_extract(extract, self.config.archetypes.deep_nesting_depth);

        let mut motifs = self.naming_motifs(extract);
        motifs.extend(self.structural_motifs(extract, &signals));
        motifs.extend(self.behavioral_motifs(&signals));
        motifs.extend(self.rhythmic_motifs(extract, &signals));

        let analysis = MotifAnalysis {
            rhythm_signature: self.rhythm_signature(&signals),
            dominant_pattern: dominant_pattern(&motifs),
            pattern_diversity: pattern_diversity(&motifs),
            motifs,
        };

        debug!(
            motifs = analysis.motifs.len(),
            rhythm = %analysis.rhythm_signature,
            diversity = analysis.pattern_diversity,
            "Motif analysis assembled"
        );
        analysis
    }

    /// Prefix groups then suffix groups, each in order of first appearance.
    fn naming_motifs(&self, extract: &StructuralExtract) -> Vec<Motif> {
        let prefixes = group_in_order(extract.naming_entries.iter().filter_map(|e| e.prefix.as_deref()));
        let suffixes = group_in_order(extract.naming_entries.iter().filter_map(|e| e.suffix.as_deref()));

        prefixes
            .into_iter()
            .chain(suffixes)
            .filter(|(_, count)| *count >= self.thresholds().min_occurrences)
            .map(|(tag, count)| {
                let (label, meaning) = naming_motif(tag);
                Motif::new(MotifCategory::Naming, label, count, meaning)
            })
            .collect()
    }

    fn structural_motifs(&self, extract: &StructuralExtract, signals: &Signals) -> Vec<Motif> {
        let min = self.thresholds().min_occurrences;
        let census = ShapeCensus::from_extract(extract);

        let mut motifs: Vec<Motif> = census
            .protected()
            .filter(|(_, count)| *count >= min)
            .map(|(shape, count)| {
                let (label, meaning) = shape_symbol(shape);
                Motif::new(MotifCategory::Structural, label, count, meaning)
            })
            .collect();

        if signals.deep_nesting_count >= min {
            let (label, meaning) = LABYRINTH;
            motifs.push(Motif::new(
                MotifCategory::Structural,
                label,
                signals.deep_nesting_count,
                meaning,
            ));
        }
        motifs
    }

    /// The dominant coping style, when one body kind holds a majority, then
    /// one motif per recurring defensive pattern kind.
    fn behavioral_motifs(&self, signals: &Signals) -> Vec<Motif> {
        let thresholds = self.thresholds();
        let mut motifs = Vec::new();

        let dominant_body = HandlerBody::ALL
            .into_iter()
            .fold(None, |best: Option<HandlerBody>, body| match best {
                Some(current) if signals.handlers_of(current) >= signals.handlers_of(body) => {
                    Some(current)
                }
                _ => Some(body),
            });
        if let Some(body) = dominant_body {
            let count = signals.handlers_of(body);
            if count >= thresholds.min_occurrences
                && share(count, signals.handler_count) > thresholds.behavioral_majority
            {
                let (label, meaning) = handler_symbol(body);
                motifs.push(Motif::new(MotifCategory::Behavioral, label, count, meaning));
            }
        }

        for kind in DefensiveKind::ALL {
            let count = match kind {
                DefensiveKind::NullCheck => signals.null_check_count,
                DefensiveKind::TypeCheck => signals.type_check_count,
                DefensiveKind::Assertion => signals.assertion_count,
            };
            if count >= thresholds.min_occurrences {
                let (label, meaning) = defensive_symbol(kind);
                motifs.push(Motif::new(MotifCategory::Behavioral, label, count, meaning));
            }
        }
        motifs
    }

    /// Organization and nesting rhythm; silent for codebases too small to
    /// have a rhythm.
    fn rhythmic_motifs(&self, extract: &StructuralExtract, signals: &Signals) -> Vec<Motif> {
        let thresholds = self.thresholds();
        if signals.function_count < thresholds.min_occurrences {
            return Vec::new();
        }

        let organization =
            Organization::classify(signals.function_count, signals.class_count, thresholds);
        let (label, meaning) = organization_symbol(organization);
        let mut motifs = vec![Motif::new(
            MotifCategory::Rhythmic,
            label,
            signals.function_count + signals.class_count,
            meaning,
        )];

        let band = NestingBand::classify(signals.average_nesting, thresholds);
        let in_band = extract
            .nesting_depths
            .iter()
            .filter(|&&depth| NestingBand::classify(depth as f64, thresholds) == band)
            .count();
        if in_band > 0 {
            let (label, meaning) = nesting_symbol(band);
            motifs.push(Motif::new(MotifCategory::Rhythmic, label, in_band, meaning));
        }
        motifs
    }

    /// Computed from aggregate counters alone, so it exists for every input.
    fn rhythm_signature(&self, signals: &Signals) -> String {
        let thresholds = self.thresholds();
        let band = NestingBand::classify(signals.average_nesting, thresholds);
        let organization =
            Organization::classify(signals.function_count, signals.class_count, thresholds);
        format!("{}/{}", band.as_str(), organization.as_str())
    }
}

/// Count occurrences of each tag, keeping first-appearance order.
fn group_in_order<'e>(tags: impl Iterator<Item = &'e str>) -> Vec<(&'e str, usize)> {
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for tag in tags {
        match groups.iter_mut().find(|(seen, _)| *seen == tag) {
            Some((_, count)) => *count += 1,
            None => groups.push((tag, 1)),
        }
    }
    groups
}

/// Label of the motif with the largest occurrence count; the earliest wins
/// ties, which follows category order then discovery order.
fn dominant_pattern(motifs: &[Motif]) -> Option<String> {
    motifs
        .iter()
        .fold(None, |best: Option<&Motif>, motif| match best {
            Some(current) if current.occurrence_count >= motif.occurrence_count => Some(current),
            _ => Some(motif),
        })
        .map(|motif| motif.label.clone())
}

/// `1 - largest / total`, 0 when there is nothing to compare.
fn pattern_diversity(motifs: &[Motif]) -> f64 {
    let total: usize = motifs.iter().map(|m| m.occurrence_count).sum();
    if total == 0 {
        return 0.0;
    }
    let largest = motifs
        .iter()
        .map(|m| m.occurrence_count)
        .max()
        .unwrap_or(0);
    clamp_unit(1.0 - largest as f64 / total as f64, "pattern diversity")
}
