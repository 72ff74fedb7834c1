mod common;

use common::{defensive, extract, guards, handlers, prefixed};
use symbolmap::{
    ArchetypeScorer, DefensiveKind, ExceptionScope, HandlerBody, InterpretationConfig,
    MotifDetector, StructuralExtract, TensionAnalysis, TensionDetector, TensionKind,
};

const GUARDIAN_WHO_CLOSES_EYES: &str = "The Guardian Who Closes Their Eyes";

fn detect(extract: &StructuralExtract) -> TensionAnalysis {
    let config = InterpretationConfig::default();
    let profile = ArchetypeScorer::new(&config).score(extract);
    let motifs = MotifDetector::new(&config).detect(extract);
    TensionDetector::new(&config).detect(extract, &profile, &motifs)
}

#[test]
fn test_guards_with_suppression_contradict() {
    let mut e = extract(40);
    e.guard_clauses = guards(23);
    e.error_handlers = handlers(8, ExceptionScope::Typed, HandlerBody::Suppressed);

    let analysis = detect(&e);
    let tension = analysis
        .find(GUARDIAN_WHO_CLOSES_EYES)
        .expect("contradiction should fire");

    assert_eq!(tension.kind, TensionKind::Contradiction);
    assert!(tension.severity > 0.0);
    assert_eq!(tension.evidence.len(), 2);
}

#[test]
fn test_guards_without_suppression_do_not_contradict() {
    let mut e = extract(40);
    e.guard_clauses = guards(23);

    let analysis = detect(&e);

    assert!(analysis.find(GUARDIAN_WHO_CLOSES_EYES).is_none());
    assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);
}

#[test]
fn test_contradiction_needs_both_minimums() {
    let mut e = extract(40);
    e.guard_clauses = guards(4);
    e.error_handlers = handlers(20, ExceptionScope::Typed, HandlerBody::Suppressed);

    assert!(detect(&e).find(GUARDIAN_WHO_CLOSES_EYES).is_none());

    e.guard_clauses = guards(5);
    assert!(detect(&e).find(GUARDIAN_WHO_CLOSES_EYES).is_some());
}

#[test]
fn test_opposed_signals_without_suppression_do_not_contradict() {
    let mut e = extract(60);
    e.class_count = 2;
    e.guard_clauses = guards(23);
    e.naming_entries = prefixed("validate_", 10);
    e.error_handlers = handlers(2, ExceptionScope::Typed, HandlerBody::Suppressed);
    e.nesting_depths = vec![7; 8];

    let analysis = detect(&e);

    assert!(analysis.find("The Overburdened Classes").is_some());
    assert!(analysis.find("The Endless Descent").is_some());
    assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 0);
}

#[test]
fn test_empty_extract() {
    let analysis = detect(&StructuralExtract::default());

    assert!(analysis.tensions.is_empty());
    assert_eq!(analysis.overall_tension_level, 0.0);
    assert_eq!(analysis.primary_conflict, None);
    assert!(analysis.resolution_suggestions.is_empty());
}

#[test]
fn test_ranking_and_summary() {
    let mut e = extract(30);
    e.class_count = 2;
    e.guard_clauses = guards(10);
    e.error_handlers = handlers(10, ExceptionScope::Bare, HandlerBody::Suppressed);
    e.defensive_patterns = defensive(12, DefensiveKind::NullCheck);
    e.naming_entries = prefixed("tmp_", 3);

    let analysis = detect(&e);

    for pair in analysis.tensions.windows(2) {
        assert!(pair[0].severity >= pair[1].severity);
    }
    assert_eq!(
        analysis.primary_conflict.as_deref(),
        analysis.tensions.first().map(|t| t.label.as_str())
    );

    let mean = analysis.tensions.iter().map(|t| t.severity).sum::<f64>()
        / analysis.tensions.len() as f64;
    assert!((analysis.overall_tension_level - mean).abs() < 1e-9);

    // one suggestion per kind that fired, in priority order
    assert_eq!(analysis.of_kind(TensionKind::Contradiction).count(), 1);
    assert!(analysis.of_kind(TensionKind::Abandonment).count() >= 2);
    assert!(analysis.find("The Precise Imprecision").is_some());
    assert_eq!(
        analysis.resolution_suggestions,
        vec![
            TensionKind::Contradiction.resolution(),
            TensionKind::Abandonment.resolution(),
            TensionKind::UnderEngineering.resolution(),
        ]
    );
}

#[test]
fn test_bare_codebase_is_under_engineered() {
    let e = extract(30);

    let analysis = detect(&e);

    assert!(analysis.find("The Open Door").is_some());
    assert!(analysis.find("The Flat World").is_some());
    for tension in &analysis.tensions {
        assert_eq!(tension.kind, TensionKind::UnderEngineering);
    }
}
