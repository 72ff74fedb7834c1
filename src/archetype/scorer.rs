//! Archetype scorer: combines the three rule families per archetype, ranks
//! the 23 archetypes and partitions them into dominant and secondary bands.

use super::rules::{RuleContext, RuleScore};
use super::{Archetype, ArchetypeMatch, SymbolicProfile};
use crate::config::{ArchetypeThresholds, InterpretationConfig};
use crate::core::{clamp_unit, DefensiveKind, HandlerBody, ShapeCensus, Signals, StructuralExtract};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Combined score for one archetype before banding.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchetypeScore {
    pub archetype: Archetype,
    pub naming: f64,
    pub density: f64,
    pub behavioral: f64,
    pub combined: f64,
    pub evidence: Vec<String>,
}

impl ArchetypeScore {
    fn into_match(self) -> ArchetypeMatch {
        ArchetypeMatch {
            archetype: self.archetype,
            strength: self.combined,
            evidence: self.evidence,
        }
    }
}

pub struct ArchetypeScorer<'a> {
    config: &'a InterpretationConfig,
}

impl<'a> ArchetypeScorer<'a> {
    pub fn new(config: &'a InterpretationConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, extract: &StructuralExtract) -> SymbolicProfile {
        let thresholds = &self.config.archetypes;
        let signals = Signals::from_extract(extract, thresholds.deep_nesting_depth);
        let ranked = self.rank(extract, &signals);

        let (dominant, secondary) = partition(ranked, thresholds);
        let profile = SymbolicProfile {
            dominant_archetypes: dominant.into_iter().map(ArchetypeScore::into_match).collect(),
            secondary_archetypes: secondary.into_iter().map(ArchetypeScore::into_match).collect(),
            naming_themes: naming_themes(&tag_counts(extract), thresholds.max_naming_themes),
            behavioral_traits: behavioral_traits(&signals, thresholds),
        };

        debug!(
            dominant = profile.dominant_archetypes.len(),
            secondary = profile.secondary_archetypes.len(),
            themes = profile.naming_themes.len(),
            traits = profile.behavioral_traits.len(),
            "Archetype profile assembled"
        );
        profile
    }

    /// Score every archetype and rank by combined score descending. Ties keep
    /// declaration order.
    pub fn rank(&self, extract: &StructuralExtract, signals: &Signals) -> Vec<ArchetypeScore> {
        let thresholds = &self.config.archetypes;
        let tags = tag_counts(extract);
        let census = ShapeCensus::from_extract(extract);
        let ctx = RuleContext {
            signals,
            tag_counts: &tags,
            unresolved_markers: extract
                .unresolved_marker_count(&self.config.tensions.unresolved_markers),
            repeated_shape_functions: census
                .functions_in_repeated_shapes(self.config.motifs.min_occurrences),
            deep_nesting_depth: thresholds.deep_nesting_depth,
            short_function_lines: thresholds.short_function_lines,
        };

        let mut scores: Vec<ArchetypeScore> = Archetype::ALL
            .iter()
            .map(|&archetype| {
                let rule = archetype.rule();
                let names = extract
                    .naming_entries
                    .iter()
                    .filter(|entry| entry.tags().any(|tag| rule.naming.contains(&tag)))
                    .count();
                let families = [
                    rule.naming_score(names, &ctx),
                    rule.density_score(&ctx),
                    rule.behavioral_score(&ctx),
                ];
                combine(archetype, families)
            })
            .collect();

        scores.sort_by(|a, b| b.combined.total_cmp(&a.combined));
        scores
    }
}

fn combine(archetype: Archetype, families: [RuleScore; 3]) -> ArchetypeScore {
    let [naming, density, behavioral] = families;
    let mean = (naming.score + density.score + behavioral.score) / 3.0;

    ArchetypeScore {
        archetype,
        naming: naming.score,
        density: density.score,
        behavioral: behavioral.score,
        combined: clamp_unit(mean, archetype.name()),
        evidence: [naming.evidence, density.evidence, behavioral.evidence]
            .into_iter()
            .flatten()
            .collect(),
    }
}

/// Split a ranked list into the dominant and secondary bands.
///
/// Archetypes at or above the dominant threshold lead, up to the cap. When
/// none reach it, the single highest leads provided it clears the floor.
/// Everything else at or above the floor fills the secondary band.
fn partition(
    ranked: Vec<ArchetypeScore>,
    thresholds: &ArchetypeThresholds,
) -> (Vec<ArchetypeScore>, Vec<ArchetypeScore>) {
    let mut eligible = ranked
        .into_iter()
        .filter(|s| s.combined > 0.0 && s.combined >= thresholds.secondary_floor)
        .peekable();

    let above = |s: &ArchetypeScore| s.combined >= thresholds.dominant_threshold;

    let mut dominant = Vec::new();
    while dominant.len() < thresholds.max_dominant {
        match eligible.next_if(|s| above(s) || dominant.is_empty()) {
            Some(score) => {
                let leads_alone = !above(&score);
                dominant.push(score);
                if leads_alone {
                    break;
                }
            }
            None => break,
        }
    }

    let secondary = eligible.take(thresholds.max_secondary).collect();
    (dominant, secondary)
}

/// Prefix and suffix tags with their occurrence counts, in discovery order.
fn tag_counts(extract: &StructuralExtract) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for tag in extract.naming_entries.iter().flat_map(|e| e.tags()) {
        match index.get(tag) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push((tag.to_string(), 1));
            }
        }
    }
    counts
}

fn naming_themes(tags: &[(String, usize)], limit: usize) -> BTreeMap<String, usize> {
    let mut sorted: Vec<&(String, usize)> = tags.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
        .into_iter()
        .take(limit)
        .map(|(tag, count)| (tag.clone(), *count))
        .collect()
}

fn behavioral_traits(signals: &Signals, thresholds: &ArchetypeThresholds) -> Vec<String> {
    let t = &thresholds.traits;
    let mut traits = Vec::new();

    if signals.handler_count > 0 {
        let suppressed = signals.handler_share(HandlerBody::Suppressed);
        if suppressed > t.suppression_high {
            traits.push("Error-avoidant: failures are more often silenced than confronted");
        } else if suppressed < t.suppression_low {
            traits.push("Error-confronting: failures are acknowledged when caught");
        }
    }

    if signals.function_count > 0 {
        if signals.defensive_ratio > t.defensive_high {
            traits.push("Hyper-vigilant: defensive checks are everywhere");
        } else if signals.defensive_ratio < t.defensive_low {
            traits.push("Trusting: inputs are rarely second-guessed");
        }

        if signals.guard_ratio > t.guard_high {
            traits.push("Boundary-focused: functions open by turning away bad input");
        } else if signals.guard_ratio < t.guard_low {
            traits.push("Permissive: functions accept what they are given");
        }
    }

    if signals.nesting_samples > 0 {
        if signals.average_nesting > t.nesting_high {
            traits.push("Complexity-embracing: logic lives in deep nested structures");
        } else if signals.average_nesting < t.nesting_low {
            traits.push("Simplicity-seeking: control flow stays shallow");
        }
    }

    if signals.defensive_count > 0
        && signals.defensive_share(DefensiveKind::TypeCheck) > t.type_check_reliance
    {
        traits.push("High reliance on type checks");
    }

    traits.into_iter().map(String::from).collect()
}
