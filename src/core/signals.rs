//! Counts and ratios derived once per run from a [`StructuralExtract`].
//!
//! Every stage computes its own `Signals` from the same extract, so stages
//! stay independent while agreeing on every number they report.

use super::extract::{
    DefensiveKind, ExceptionScope, GuardPosition, HandlerBody, StructuralExtract,
};
use super::{ratio, share};

#[derive(Debug, Clone, PartialEq)]
pub struct Signals {
    pub function_count: usize,
    pub class_count: usize,
    pub total_lines: usize,

    pub guard_count: usize,
    pub raise_guard_count: usize,

    pub handler_count: usize,
    pub suppressed_count: usize,
    pub logged_count: usize,
    pub reraised_count: usize,
    pub handled_count: usize,
    pub bare_count: usize,
    pub bare_suppressed_count: usize,

    pub defensive_count: usize,
    pub null_check_count: usize,
    pub type_check_count: usize,
    pub assertion_count: usize,

    pub nesting_samples: usize,
    pub deep_nesting_count: usize,
    pub average_nesting: f64,
    pub max_nesting: usize,

    /// Guard clauses per function
    pub guard_ratio: f64,
    /// Defensive patterns per function
    pub defensive_ratio: f64,
    /// Error handlers per function
    pub handler_ratio: f64,
    /// Share of nesting samples deeper than the configured depth
    pub deep_nesting_ratio: f64,
}

impl Signals {
    pub fn from_extract(extract: &StructuralExtract, deep_nesting_depth: usize) -> Self {
        let fc = extract.function_count;
        let handlers = &extract.error_handlers;

        let nesting_samples = extract.nesting_depths.len();
        let deep_nesting_count = extract
            .nesting_depths
            .iter()
            .filter(|&&depth| depth > deep_nesting_depth)
            .count();
        let average_nesting = share(extract.nesting_depths.iter().sum(), nesting_samples);

        Self {
            function_count: fc,
            class_count: extract.class_count,
            total_lines: extract.total_lines,

            guard_count: extract.guard_clauses.len(),
            raise_guard_count: extract.guards_at(GuardPosition::EarlyRaise),

            handler_count: handlers.len(),
            suppressed_count: extract.handlers_with(HandlerBody::Suppressed),
            logged_count: extract.handlers_with(HandlerBody::Logged),
            reraised_count: extract.handlers_with(HandlerBody::Reraised),
            handled_count: extract.handlers_with(HandlerBody::Handled),
            bare_count: handlers
                .iter()
                .filter(|h| h.scope == ExceptionScope::Bare)
                .count(),
            bare_suppressed_count: handlers
                .iter()
                .filter(|h| h.scope == ExceptionScope::Bare && h.body == HandlerBody::Suppressed)
                .count(),

            defensive_count: extract.defensive_patterns.len(),
            null_check_count: extract.defensive_with(DefensiveKind::NullCheck),
            type_check_count: extract.defensive_with(DefensiveKind::TypeCheck),
            assertion_count: extract.defensive_with(DefensiveKind::Assertion),

            nesting_samples,
            deep_nesting_count,
            average_nesting,
            max_nesting: extract.nesting_depths.iter().copied().max().unwrap_or(0),

            guard_ratio: ratio(extract.guard_clauses.len(), fc),
            defensive_ratio: ratio(extract.defensive_patterns.len(), fc),
            handler_ratio: ratio(handlers.len(), fc),
            deep_nesting_ratio: share(deep_nesting_count, nesting_samples),
        }
    }

    pub fn handlers_of(&self, body: HandlerBody) -> usize {
        match body {
            HandlerBody::Suppressed => self.suppressed_count,
            HandlerBody::Logged => self.logged_count,
            HandlerBody::Reraised => self.reraised_count,
            HandlerBody::Handled => self.handled_count,
        }
    }

    /// Share of error handlers with the given body kind.
    pub fn handler_share(&self, body: HandlerBody) -> f64 {
        share(self.handlers_of(body), self.handler_count)
    }

    /// Share of defensive patterns with the given kind.
    pub fn defensive_share(&self, kind: DefensiveKind) -> f64 {
        let count = match kind {
            DefensiveKind::NullCheck => self.null_check_count,
            DefensiveKind::TypeCheck => self.type_check_count,
            DefensiveKind::Assertion => self.assertion_count,
        };
        share(count, self.defensive_count)
    }

    /// Average lines per function, absent when there are no functions.
    pub fn average_function_lines(&self) -> Option<f64> {
        (self.function_count > 0).then(|| self.total_lines as f64 / self.function_count as f64)
    }

    /// Functions per class, absent when there are no classes.
    pub fn functions_per_class(&self) -> Option<f64> {
        (self.class_count > 0).then(|| self.function_count as f64 / self.class_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::*;

    #[test]
    fn test_empty_extract_signals_are_zero() {
        let signals = Signals::from_extract(&StructuralExtract::default(), 4);

        assert_eq!(signals.guard_ratio, 0.0);
        assert_eq!(signals.deep_nesting_ratio, 0.0);
        assert_eq!(signals.average_nesting, 0.0);
        assert_eq!(signals.handler_share(HandlerBody::Suppressed), 0.0);
        assert_eq!(signals.average_function_lines(), None);
        assert_eq!(signals.functions_per_class(), None);
    }

    #[test]
    fn test_ratios() {
        let extract = StructuralExtract {
            guard_clauses: vec![
                GuardClause::new("a", GuardPosition::EarlyRaise),
                GuardClause::new("b", GuardPosition::EarlyReturn),
            ],
            error_handlers: vec![
                ErrorHandler::new("a", ExceptionScope::Bare, HandlerBody::Suppressed),
                ErrorHandler::new("b", ExceptionScope::Typed, HandlerBody::Logged),
                ErrorHandler::new("c", ExceptionScope::Bare, HandlerBody::Logged),
                ErrorHandler::new("d", ExceptionScope::Typed, HandlerBody::Suppressed),
            ],
            function_count: 4,
            total_lines: 80,
            class_count: 2,
            nesting_depths: vec![1, 5, 6, 2],
            ..Default::default()
        };
        let signals = Signals::from_extract(&extract, 4);

        assert_eq!(signals.guard_ratio, 0.5);
        assert_eq!(signals.raise_guard_count, 1);
        assert_eq!(signals.handler_share(HandlerBody::Suppressed), 0.5);
        assert_eq!(signals.bare_suppressed_count, 1);
        assert_eq!(signals.deep_nesting_ratio, 0.5);
        assert_eq!(signals.average_nesting, 3.5);
        assert_eq!(signals.max_nesting, 6);
        assert_eq!(signals.average_function_lines(), Some(20.0));
        assert_eq!(signals.functions_per_class(), Some(2.0));
    }
}
