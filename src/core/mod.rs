pub mod errors;
pub mod extract;
pub mod shape;
pub mod signals;

pub use errors::{Error, Result};
pub use extract::{
    DefensiveKind, DefensivePattern, ErrorHandler, ExceptionScope, GuardClause, GuardPosition,
    HandlerBody, NamingEntry, StructuralExtract, SymbolKind,
};
pub use shape::{FunctionShape, ShapeCensus};
pub use signals::Signals;

/// `count / max(total, 1)`; a zero denominator never divides by zero.
pub fn ratio(count: usize, total: usize) -> f64 {
    count as f64 / total.max(1) as f64
}

/// Share of `count` in a population, 0 for an empty population.
pub fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Clamp a strength, severity or diversity into [0, 1].
///
/// Values already in range pass through untouched. An out-of-range or NaN
/// value means a rule produced something it should not have, so the
/// correction is reported as a warning naming `context`.
pub fn clamp_unit(value: f64, context: &str) -> f64 {
    if value.is_nan() {
        tracing::warn!(context = context, "NaN score replaced with 0.0");
        return 0.0;
    }
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    let clamped = value.clamp(0.0, 1.0);
    tracing::warn!(
        context = context,
        value = value,
        clamped = clamped,
        "score outside [0, 1] clamped"
    );
    clamped
}

/// Clamp a value that is expected to exceed the unit interval (raw ratios
/// used as rule scores), without treating the overflow as a defect.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 0), 3.0);
        assert_eq!(ratio(6, 10), 0.6);
    }

    #[test]
    fn test_share_of_empty_population() {
        assert_eq!(share(0, 0), 0.0);
        assert_eq!(share(2, 4), 0.5);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(0.4, "test"), 0.4);
        assert_eq!(clamp_unit(1.7, "test"), 1.0);
        assert_eq!(clamp_unit(-0.2, "test"), 0.0);
        assert_eq!(clamp_unit(f64::NAN, "test"), 0.0);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(2.3), 1.0);
        assert_eq!(saturate(0.25), 0.25);
        assert_eq!(saturate(f64::NAN), 0.0);
    }
}
