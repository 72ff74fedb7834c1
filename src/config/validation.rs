//! Validation with error accumulation for configuration.
//!
//! All checks run before reporting so a user sees every bad threshold in a
//! single pass. Each problem is prefixed with its field path, for example
//! `archetypes.secondary_floor: must not exceed dominant_threshold`.

use super::{ArchetypeThresholds, InterpretationConfig, MotifThresholds, TensionThresholds};
use crate::core::errors::{Error, Result};

/// Validate a full configuration, accumulating every problem.
pub fn validate_config(config: &InterpretationConfig) -> Result<()> {
    let mut problems = Vec::new();
    validate_archetypes(&config.archetypes, &mut problems);
    validate_motifs(&config.motifs, &mut problems);
    validate_tensions(&config.tensions, &mut problems);

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(problems.join("; ")))
    }
}

// Pure function: Check if a value is a valid ratio
fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn check_unit(field: &str, value: f64, problems: &mut Vec<String>) {
    if !is_unit(value) {
        problems.push(format!("{}: expected 0.0-1.0, got {}", field, value));
    }
}

fn check_positive(field: &str, value: f64, problems: &mut Vec<String>) {
    if !(value > 0.0 && value.is_finite()) {
        problems.push(format!("{}: must be positive, got {}", field, value));
    }
}

fn check_nonzero(field: &str, value: usize, problems: &mut Vec<String>) {
    if value == 0 {
        problems.push(format!("{}: must be at least 1", field));
    }
}

fn check_ordered(field: &str, low: f64, high: f64, problems: &mut Vec<String>) {
    if low > high {
        problems.push(format!(
            "{}: low bound {} exceeds high bound {}",
            field, low, high
        ));
    }
}

fn validate_archetypes(a: &ArchetypeThresholds, problems: &mut Vec<String>) {
    check_unit("archetypes.dominant_threshold", a.dominant_threshold, problems);
    check_unit("archetypes.secondary_floor", a.secondary_floor, problems);
    if a.secondary_floor > a.dominant_threshold {
        problems.push("archetypes.secondary_floor: must not exceed dominant_threshold".into());
    }
    check_nonzero("archetypes.max_dominant", a.max_dominant, problems);
    check_nonzero("archetypes.max_secondary", a.max_secondary, problems);
    check_positive(
        "archetypes.short_function_lines",
        a.short_function_lines,
        problems,
    );

    let t = &a.traits;
    check_unit("archetypes.traits.suppression_high", t.suppression_high, problems);
    check_unit("archetypes.traits.suppression_low", t.suppression_low, problems);
    check_unit(
        "archetypes.traits.type_check_reliance",
        t.type_check_reliance,
        problems,
    );
    check_ordered(
        "archetypes.traits.suppression",
        t.suppression_low,
        t.suppression_high,
        problems,
    );
    check_ordered(
        "archetypes.traits.defensive",
        t.defensive_low,
        t.defensive_high,
        problems,
    );
    check_ordered("archetypes.traits.guard", t.guard_low, t.guard_high, problems);
    check_ordered(
        "archetypes.traits.nesting",
        t.nesting_low,
        t.nesting_high,
        problems,
    );
}

fn validate_motifs(m: &MotifThresholds, problems: &mut Vec<String>) {
    check_nonzero("motifs.min_occurrences", m.min_occurrences, problems);
    check_unit("motifs.behavioral_majority", m.behavioral_majority, problems);
    check_ordered(
        "motifs.organization",
        m.class_heavy_ratio,
        m.function_heavy_ratio,
        problems,
    );
    check_ordered("motifs.nesting", m.flat_nesting, m.deep_nesting, problems);
}

fn validate_tensions(t: &TensionThresholds, problems: &mut Vec<String>) {
    check_positive(
        "tensions.contradiction_normalization",
        t.contradiction_normalization,
        problems,
    );
    check_positive(
        "tensions.precision_normalization",
        t.precision_normalization,
        problems,
    );
    check_positive(
        "tensions.overburdened_normalization",
        t.overburdened_normalization,
        problems,
    );
    check_positive("tensions.abandonment_scale", t.abandonment_scale, problems);
    check_positive(
        "tensions.over_defensive_ratio",
        t.over_defensive_ratio,
        problems,
    );
    check_positive("tensions.over_handler_ratio", t.over_handler_ratio, problems);
    check_positive(
        "tensions.descent_normalization",
        t.descent_normalization,
        problems,
    );
    check_positive("tensions.under_guard_ratio", t.under_guard_ratio, problems);
    check_positive(
        "tensions.under_defensive_ratio",
        t.under_defensive_ratio,
        problems,
    );
    check_positive(
        "tensions.under_handler_ratio",
        t.under_handler_ratio,
        problems,
    );
    // the nesting excess is measured against the headroom (1 - bound)
    if !(0.0..1.0).contains(&t.over_nesting_ratio) {
        problems.push(format!(
            "tensions.over_nesting_ratio: expected 0.0-1.0 (exclusive), got {}",
            t.over_nesting_ratio
        ));
    }
    check_unit("tensions.under_max_severity", t.under_max_severity, problems);
    check_unit("tensions.flat_world_severity", t.flat_world_severity, problems);
    check_nonzero("tensions.contradiction_min", t.contradiction_min, problems);
    check_nonzero("tensions.abandonment_min", t.abandonment_min, problems);
}
