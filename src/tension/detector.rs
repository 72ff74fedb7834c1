//! Tension rules.
//!
//! Rules read raw counts from the extract and the sibling profile and motif
//! results. Every rule is evaluated independently; the ranking and summary
//! happen in [`TensionAnalysis::from_tensions`].

use super::{Tension, TensionAnalysis, TensionKind};
use crate::archetype::{Archetype, SymbolicProfile};
use crate::config::{InterpretationConfig, TensionThresholds};
use crate::core::{clamp_unit, ratio, Signals, StructuralExtract};
use crate::motif::{MotifAnalysis, NestingBand, Organization};
use tracing::debug;

const PROTECTIVE: [Archetype; 3] = [Archetype::Guardian, Archetype::Gatekeeper, Archetype::Sentinel];
const SHADOW: [Archetype; 2] = [Archetype::Suppressor, Archetype::Denier];

pub const GUARDIAN_WHO_CLOSES_EYES: &str = "The Guardian Who Closes Their Eyes";

pub struct TensionDetector<'a> {
    config: &'a InterpretationConfig,
}

impl<'a> TensionDetector<'a> {
    pub fn new(config: &'a InterpretationConfig) -> Self {
        Self { config }
    }

    fn thresholds(&self) -> &TensionThresholds {
        &self.config.tensions
    }

    pub fn detect(
        &self,
        extract: &StructuralExtract,
        profile: &SymbolicProfile,
        motifs: &MotifAnalysis,
    ) -> TensionAnalysis {
        let signals = Signals::from_extract(extract, self.config.archetypes.deep_nesting_depth);

        let mut tensions = Vec::new();
        tensions.extend(self.contradictions(&signals));
        tensions.extend(self.abandonment(extract, &signals, profile));
        tensions.extend(self.over_engineering(extract, &signals, profile, motifs));
        tensions.extend(self.under_engineering(&signals, motifs));

        let analysis = TensionAnalysis::from_tensions(tensions);
        debug!(
            tensions = analysis.tensions.len(),
            level = analysis.overall_tension_level,
            "Tension analysis assembled"
        );
        analysis
    }

    /// The only source of [`TensionKind::Contradiction`]: it fires exactly
    /// when guards and suppressed handlers both reach the minimum.
    fn contradictions(&self, s: &Signals) -> Vec<Tension> {
        let t = self.thresholds();
        if s.guard_count < t.contradiction_min || s.suppressed_count < t.contradiction_min {
            return Vec::new();
        }

        let severity = ((s.guard_count + s.suppressed_count) as f64
            / (2.0 * t.contradiction_normalization))
            .min(1.0);
        vec![tension(
            TensionKind::Contradiction,
            GUARDIAN_WHO_CLOSES_EYES,
            severity,
            "The code demands perfection at the door yet looks away from failures inside. \
             A desire for control wrestles with avoidance of consequences.",
            vec![
                format!("{} guard clauses", s.guard_count),
                format!("{} suppressed error handlers", s.suppressed_count),
            ],
        )]
    }

    fn abandonment(
        &self,
        extract: &StructuralExtract,
        s: &Signals,
        profile: &SymbolicProfile,
    ) -> Vec<Tension> {
        let t = self.thresholds();
        let mut found = Vec::new();
        let scaled = |count: usize| (ratio(count, s.function_count) * t.abandonment_scale).min(1.0);

        let markers = extract.unresolved_marker_count(&t.unresolved_markers);
        if markers >= t.abandonment_min {
            found.push(tension(
                TensionKind::Abandonment,
                "The Unfinished Symphony",
                scaled(markers),
                "Names still carry the marks of work in progress. \
                 Intentions were set down and never taken up again.",
                vec![format!(
                    "{} identifiers carry unresolved markers ({})",
                    markers,
                    t.unresolved_markers.join(", ")
                )],
            ));
        }

        if s.suppressed_count >= t.abandonment_min {
            found.push(tension(
                TensionKind::Abandonment,
                "The Unspoken Failures",
                scaled(s.suppressed_count),
                "Handlers catch errors and say nothing. \
                 Each one is a conversation the code chose not to have.",
                vec![format!(
                    "{} error handlers suppress the error ({} of them catch everything)",
                    s.suppressed_count, s.bare_suppressed_count
                )],
            ));
        }

        if let (Some(protector), Some(shadow)) =
            (strongest(profile, &PROTECTIVE), strongest(profile, &SHADOW))
        {
            found.push(tension(
                TensionKind::Abandonment,
                "The Divided Self",
                (protector.1 + shadow.1) / 2.0,
                "A protective nature and a shadow nature share the same body. \
                 The code guards its borders while burying what goes wrong within them.",
                vec![
                    format!("{} at strength {:.2}", protector.0, protector.1),
                    format!("{} at strength {:.2}", shadow.0, shadow.1),
                ],
            ));
        }

        found
    }

    fn over_engineering(
        &self,
        extract: &StructuralExtract,
        s: &Signals,
        profile: &SymbolicProfile,
        motifs: &MotifAnalysis,
    ) -> Vec<Tension> {
        let t = self.thresholds();
        let mut found = Vec::new();

        let descents = extract
            .nesting_depths
            .iter()
            .filter(|&&depth| depth > t.descent_depth)
            .count();
        if descents > t.descent_min {
            found.push(tension(
                TensionKind::OverEngineering,
                "The Endless Descent",
                (descents as f64 / t.descent_normalization).min(1.0),
                "The code burrows ever deeper, each condition spawning another. \
                 It adds layers where it could abstract.",
                vec![format!(
                    "{} nesting samples deeper than {} levels",
                    descents, t.descent_depth
                )],
            ));
        }

        if motifs.nesting_band() == Some(NestingBand::Deep) {
            if let Some(minimalist) = profile.strength_of(Archetype::Minimalist) {
                found.push(tension(
                    TensionKind::OverEngineering,
                    "The Minimalist in the Labyrinth",
                    (minimalist + s.deep_nesting_ratio) / 2.0,
                    "Functions are brief, yet control flow descends deep. \
                     Economy on the surface hides a maze below.",
                    vec![
                        format!("{} at strength {:.2}", Archetype::Minimalist, minimalist),
                        format!("rhythm {}", motifs.rhythm_signature),
                        format!("average nesting depth {:.1}", s.average_nesting),
                    ],
                ));
            }
        }

        if s.function_count < t.min_codebase_size {
            return found;
        }

        if s.defensive_ratio > t.over_defensive_ratio && s.deep_nesting_ratio > t.over_nesting_ratio
        {
            let defensive_excess =
                ((s.defensive_ratio - t.over_defensive_ratio) / t.over_defensive_ratio).min(1.0);
            let nesting_excess =
                (s.deep_nesting_ratio - t.over_nesting_ratio) / (1.0 - t.over_nesting_ratio);
            found.push(tension(
                TensionKind::OverEngineering,
                "The Fortress of Paranoia",
                0.4 + 0.6 * (defensive_excess + nesting_excess) / 2.0,
                "Every function bristles with checks and burrows into nested caution. \
                 The code trusts nothing and expects attack from every side.",
                vec![
                    format!(
                        "defensive-pattern ratio {:.2} exceeds {:.2}",
                        s.defensive_ratio, t.over_defensive_ratio
                    ),
                    format!(
                        "deep-nesting ratio {:.2} exceeds {:.2}",
                        s.deep_nesting_ratio, t.over_nesting_ratio
                    ),
                ],
            ));
        }

        if s.handler_ratio > t.over_handler_ratio {
            found.push(tension(
                TensionKind::OverEngineering,
                "The Fear of Failure",
                s.handler_ratio.min(1.0),
                "The code cannot take a step without preparing for failure. \
                 It behaves like something that has been burned before.",
                vec![format!(
                    "error-handler ratio {:.2} ({} handlers across {} functions)",
                    s.handler_ratio, s.handler_count, s.function_count
                )],
            ));
        }

        found
    }

    fn under_engineering(&self, s: &Signals, motifs: &MotifAnalysis) -> Vec<Tension> {
        let t = self.thresholds();
        let mut found = Vec::new();

        if s.function_count >= t.min_codebase_size
            && s.guard_ratio < t.under_guard_ratio
            && s.defensive_ratio < t.under_defensive_ratio
            && s.handler_ratio < t.under_handler_ratio
        {
            let coverage = (s.guard_ratio / t.under_guard_ratio
                + s.defensive_ratio / t.under_defensive_ratio
                + s.handler_ratio / t.under_handler_ratio)
                / 3.0;
            found.push(tension(
                TensionKind::UnderEngineering,
                "The Open Door",
                t.under_max_severity * (1.0 - coverage),
                "Nothing stands at the entrance and nothing waits to catch a fall. \
                 The code assumes the world will always be kind.",
                vec![format!(
                    "guard ratio {:.2}, defensive ratio {:.2}, handler ratio {:.2} across {} functions",
                    s.guard_ratio, s.defensive_ratio, s.handler_ratio, s.function_count
                )],
            ));
        }

        if motifs.organization() == Some(Organization::Procedural)
            && s.function_count > t.flat_world_functions
        {
            found.push(tension(
                TensionKind::UnderEngineering,
                "The Flat World",
                t.flat_world_severity,
                "The code spreads across the landscape without hierarchy. \
                 At this size the absence of structure reads as resistance to organization.",
                vec![format!("{} functions and no classes", s.function_count)],
            ));
        }

        // careful input checks next to catch-all handlers
        if s.defensive_count >= t.precision_min_defensive && s.bare_count >= t.precision_min_bare {
            let severity =
                ((s.defensive_count + s.bare_count) as f64 / t.precision_normalization).min(1.0);
            found.push(tension(
                TensionKind::UnderEngineering,
                "The Precise Imprecision",
                severity,
                "Values are checked with care, yet errors are caught with a net that holds everything. \
                 Precision about input meets vagueness about failure.",
                vec![
                    format!("{} defensive checks", s.defensive_count),
                    format!("{} bare exception catches", s.bare_count),
                ],
            ));
        }

        if let Some(per_class) = s.functions_per_class() {
            if per_class > t.overburdened_class_ratio {
                found.push(tension(
                    TensionKind::UnderEngineering,
                    "The Overburdened Classes",
                    (per_class / t.overburdened_normalization).min(1.0),
                    "The code chose classes for structure but asks each to carry far more than one purpose.",
                    vec![format!(
                        "{:.1} functions per class ({} functions, {} classes)",
                        per_class, s.function_count, s.class_count
                    )],
                ));
            }
        }

        found
    }
}

fn tension(
    kind: TensionKind,
    label: &str,
    severity: f64,
    description: &str,
    evidence: Vec<String>,
) -> Tension {
    Tension {
        kind,
        label: label.to_string(),
        severity: clamp_unit(severity, label),
        description: description.to_string(),
        evidence,
    }
}

/// Strongest profile member among `candidates`; the earlier candidate wins
/// ties.
fn strongest(profile: &SymbolicProfile, candidates: &[Archetype]) -> Option<(Archetype, f64)> {
    candidates
        .iter()
        .filter_map(|&a| profile.strength_of(a).map(|strength| (a, strength)))
        .fold(None, |best, candidate| match best {
            Some((_, strength)) if strength >= candidate.1 => best,
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeMatch;
    use crate::core::{
        DefensiveKind, DefensivePattern, ErrorHandler, ExceptionScope, GuardClause, GuardPosition,
        HandlerBody, NamingEntry,
    };

    fn detect(extract: &StructuralExtract) -> TensionAnalysis {
        detect_with(extract, &SymbolicProfile::default(), &MotifAnalysis::default())
    }

    fn detect_with(
        extract: &StructuralExtract,
        profile: &SymbolicProfile,
        motifs: &MotifAnalysis,
    ) -> TensionAnalysis {
        let config = InterpretationConfig::default();
        TensionDetector::new(&config).detect(extract, profile, motifs)
    }

    fn guards(n: usize) -> Vec<GuardClause> {
        (0..n)
            .map(|i| GuardClause::new(format!("g{}", i), GuardPosition::EarlyReturn))
            .collect()
    }

    fn handlers(n: usize, scope: ExceptionScope, body: HandlerBody) -> Vec<ErrorHandler> {
        (0..n)
            .map(|i| ErrorHandler::new(format!("h{}", i), scope, body))
            .collect()
    }

    fn matched(archetype: Archetype, strength: f64) -> ArchetypeMatch {
        ArchetypeMatch {
            archetype,
            strength,
            evidence: vec!["test".to_string()],
        }
    }

    #[test]
    fn test_guard_suppression_contradiction() {
        let extract = StructuralExtract {
            guard_clauses: guards(23),
            error_handlers: handlers(8, ExceptionScope::Typed, HandlerBody::Suppressed),
            function_count: 40,
            ..Default::default()
        };
        let analysis = detect(&extract);
        let contradiction = analysis.find(GUARDIAN_WHO_CLOSES_EYES).unwrap();

        assert_eq!(contradiction.kind, TensionKind::Contradiction);
        assert_eq!(contradiction.severity, 1.0);
    }

    #[test]
    fn test_no_contradiction_without_suppression() {
        let extract = StructuralExtract {
            guard_clauses: guards(23),
            function_count: 40,
            ..Default::default()
        };
        let analysis = detect(&extract);
        assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);
    }

    #[test]
    fn test_contradiction_severity_scales() {
        let extract = StructuralExtract {
            guard_clauses: guards(5),
            error_handlers: handlers(5, ExceptionScope::Typed, HandlerBody::Suppressed),
            function_count: 40,
            ..Default::default()
        };
        let analysis = detect(&extract);
        assert_eq!(analysis.find(GUARDIAN_WHO_CLOSES_EYES).unwrap().severity, 0.5);
    }

    #[test]
    fn test_precise_imprecision() {
        let extract = StructuralExtract {
            defensive_patterns: (0..10)
                .map(|i| DefensivePattern::new(format!("d{}", i), DefensiveKind::NullCheck))
                .collect(),
            error_handlers: handlers(5, ExceptionScope::Bare, HandlerBody::Logged),
            function_count: 10,
            ..Default::default()
        };
        let analysis = detect(&extract);
        let tension = analysis.find("The Precise Imprecision").unwrap();
        assert!((tension.severity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_overburdened_classes() {
        let extract = StructuralExtract {
            function_count: 50,
            class_count: 2,
            guard_clauses: guards(10),
            ..Default::default()
        };
        let analysis = detect(&extract);
        let tension = analysis.find("The Overburdened Classes").unwrap();
        assert_eq!(tension.kind, TensionKind::UnderEngineering);
        assert_eq!(tension.severity, 0.5);
        assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);
    }

    #[test]
    fn test_only_guard_suppression_contradicts() {
        let crowded = StructuralExtract {
            function_count: 60,
            class_count: 2,
            guard_clauses: guards(23),
            defensive_patterns: (0..12)
                .map(|i| DefensivePattern::new(format!("d{}", i), DefensiveKind::NullCheck))
                .collect(),
            error_handlers: handlers(4, ExceptionScope::Bare, HandlerBody::Logged),
            ..Default::default()
        };
        let analysis = detect(&crowded);
        assert!(analysis.find("The Overburdened Classes").is_some());
        assert!(analysis.find("The Precise Imprecision").is_some());
        assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);

        let profile = SymbolicProfile {
            dominant_archetypes: vec![matched(Archetype::Guardian, 0.6)],
            secondary_archetypes: vec![matched(Archetype::Suppressor, 0.3)],
            ..Default::default()
        };
        let deep = MotifAnalysis {
            rhythm_signature: "deep/balanced".to_string(),
            ..Default::default()
        };
        let divided = StructuralExtract {
            function_count: 20,
            guard_clauses: guards(23),
            error_handlers: handlers(2, ExceptionScope::Typed, HandlerBody::Suppressed),
            ..Default::default()
        };
        let analysis = detect_with(&divided, &profile, &deep);
        assert!(analysis.find("The Divided Self").is_some());
        assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);
    }

    #[test]
    fn test_divided_self() {
        let profile = SymbolicProfile {
            dominant_archetypes: vec![matched(Archetype::Guardian, 0.6)],
            secondary_archetypes: vec![matched(Archetype::Suppressor, 0.2)],
            ..Default::default()
        };
        let analysis = detect_with(&StructuralExtract::default(), &profile, &MotifAnalysis::default());
        let tension = analysis.find("The Divided Self").unwrap();
        assert_eq!(tension.kind, TensionKind::Abandonment);
        assert!((tension.severity - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_minimalist_in_labyrinth_needs_deep_rhythm() {
        let profile = SymbolicProfile {
            dominant_archetypes: vec![matched(Archetype::Minimalist, 0.33)],
            ..Default::default()
        };
        let shallow = MotifAnalysis {
            rhythm_signature: "moderate/procedural".to_string(),
            ..Default::default()
        };
        let deep = MotifAnalysis {
            rhythm_signature: "deep/procedural".to_string(),
            ..Default::default()
        };
        let extract = StructuralExtract::default();

        assert!(detect_with(&extract, &profile, &shallow).tensions.is_empty());
        assert_eq!(
            detect_with(&extract, &profile, &deep).primary_conflict.as_deref(),
            Some("The Minimalist in the Labyrinth")
        );
    }

    #[test]
    fn test_unfinished_symphony() {
        let extract = StructuralExtract {
            naming_entries: ["parse_todo", "hack_around", "fixme", "render"]
                .iter()
                .map(|name| NamingEntry::function(*name))
                .collect(),
            function_count: 6,
            ..Default::default()
        };
        let analysis = detect(&extract);
        assert_eq!(analysis.find("The Unfinished Symphony").unwrap().severity, 1.0);
    }

    #[test]
    fn test_test_scaffolding_names_are_unfinished_work() {
        let extract = StructuralExtract {
            naming_entries: ["test_parse", "render_test", "test", "attest", "contest_entry"]
                .iter()
                .map(|name| NamingEntry::function(*name))
                .collect(),
            function_count: 12,
            ..Default::default()
        };
        let analysis = detect(&extract);
        let tension = analysis.find("The Unfinished Symphony").unwrap();
        assert_eq!(tension.severity, 0.5);
    }

    #[test]
    fn test_unspoken_failures() {
        let extract = StructuralExtract {
            error_handlers: handlers(3, ExceptionScope::Bare, HandlerBody::Suppressed),
            function_count: 12,
            guard_clauses: guards(2),
            ..Default::default()
        };
        let analysis = detect(&extract);
        let tension = analysis.find("The Unspoken Failures").unwrap();
        assert_eq!(tension.kind, TensionKind::Abandonment);
        assert_eq!(tension.severity, 0.5);
    }

    #[test]
    fn test_fortress_of_paranoia() {
        let extract = StructuralExtract {
            defensive_patterns: (0..20)
                .map(|i| DefensivePattern::new(format!("d{}", i % 10), DefensiveKind::TypeCheck))
                .collect(),
            guard_clauses: guards(5),
            function_count: 10,
            nesting_depths: vec![6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
            ..Default::default()
        };
        let analysis = detect(&extract);
        let tension = analysis.find("The Fortress of Paranoia").unwrap();
        assert_eq!(tension.kind, TensionKind::OverEngineering);
        assert!((tension.severity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_endless_descent() {
        let shallow = StructuralExtract {
            nesting_depths: vec![6, 7, 8, 2, 5, 5],
            ..Default::default()
        };
        assert!(detect(&shallow).find("The Endless Descent").is_none());

        let deep = StructuralExtract {
            nesting_depths: vec![6, 7, 8, 9, 2, 5],
            ..Default::default()
        };
        let analysis = detect(&deep);
        let tension = analysis.find("The Endless Descent").unwrap();
        assert_eq!(tension.kind, TensionKind::OverEngineering);
        assert!((tension.severity - 0.4).abs() < 1e-9);
        assert_eq!(tension.evidence, vec!["4 nesting samples deeper than 5 levels"]);
    }

    #[test]
    fn test_small_codebase_skips_engineering_rules() {
        let extract = StructuralExtract {
            error_handlers: handlers(2, ExceptionScope::Typed, HandlerBody::Handled),
            function_count: 2,
            ..Default::default()
        };
        let analysis = detect(&extract);
        assert!(analysis.tensions.is_empty());
    }

    #[test]
    fn test_open_door_and_flat_world() {
        let extract = StructuralExtract {
            function_count: 25,
            ..Default::default()
        };
        let motifs = MotifAnalysis {
            rhythm_signature: "flat/procedural".to_string(),
            ..Default::default()
        };
        let analysis = detect_with(&extract, &SymbolicProfile::default(), &motifs);

        let labels: Vec<&str> = analysis.tensions.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["The Open Door", "The Flat World"]);
        assert_eq!(analysis.tensions[0].severity, 0.8);
        assert_eq!(analysis.resolution_suggestions.len(), 1);
    }

    #[test]
    fn test_empty_extract() {
        let analysis = detect(&StructuralExtract::default());
        assert!(analysis.tensions.is_empty());
        assert_eq!(analysis.overall_tension_level, 0.0);
        assert_eq!(analysis.primary_conflict, None);
    }
}
