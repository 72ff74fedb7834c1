//! Table-driven archetype rules.
//!
//! Each archetype owns one row: the naming tags that evoke it, at most one
//! density rule (a per-function or per-sample ratio) and at most one
//! behavioral rule (a share of error handlers or defensive patterns). A rule
//! family an archetype lacks scores zero. Adding an archetype means adding a
//! row, never a new code path.

use super::Archetype;
use crate::core::{ratio, saturate, share, HandlerBody, Signals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityRule {
    /// Guard clauses per function
    GuardRatio,
    /// Null checks per function
    NullCheckRatio,
    /// Error handlers per function
    HandlerRatio,
    /// Share of functions nested deeper than the configured depth
    DeepNestingRatio,
    /// How comfortably the average function fits the short-function bound
    ShortFunctionRatio,
    /// Identifiers carrying unresolved markers per function
    UnresolvedMarkerRatio,
    /// Functions sharing a repeated protective shape per function
    RepeatedShapeRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehavioralRule {
    /// Share of error handlers with one body kind
    HandlerShare(HandlerBody),
    /// Share of error handlers that catch everything and do nothing
    BareSuppressedShare,
    /// Share of error handlers that catch everything
    BareCatchShare,
    /// Assertions plus raising guards per function
    AssertionRaiseDensity,
    /// Defensive patterns per function
    DefensiveDensity,
    /// Share of defensive patterns that are type checks
    TypeCheckShare,
}

#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub naming: &'static [&'static str],
    pub density: Option<DensityRule>,
    pub behavioral: Option<BehavioralRule>,
}

const fn row(
    archetype: Archetype,
    naming: &'static [&'static str],
    density: Option<DensityRule>,
    behavioral: Option<BehavioralRule>,
) -> ArchetypeRule {
    ArchetypeRule {
        archetype,
        naming,
        density,
        behavioral,
    }
}

use BehavioralRule as B;
use DensityRule as D;

/// One row per archetype, in declaration order.
pub const ARCHETYPE_RULES: [ArchetypeRule; 23] = [
    row(Archetype::Guardian, &["validate_", "_validator"], Some(D::GuardRatio), None),
    row(
        Archetype::Sentinel,
        &["check_"],
        Some(D::NullCheckRatio),
        Some(B::HandlerShare(HandlerBody::Logged)),
    ),
    row(Archetype::Gatekeeper, &["guard_", "_guard"], Some(D::GuardRatio), None),
    row(
        Archetype::AuthoritarianGatekeeper,
        &["assert_"],
        None,
        Some(B::AssertionRaiseDensity),
    ),
    row(Archetype::Controller, &["_manager"], None, None),
    row(Archetype::Orchestrator, &["_controller"], None, None),
    row(
        Archetype::AnxiousCaretaker,
        &["ensure_"],
        Some(D::GuardRatio),
        Some(B::DefensiveDensity),
    ),
    row(Archetype::Perfectionist, &["verify_"], None, Some(B::TypeCheckShare)),
    row(
        Archetype::OverprotectiveParent,
        &[],
        Some(D::HandlerRatio),
        Some(B::BareCatchShare),
    ),
    row(Archetype::Builder, &["create_", "_builder"], None, None),
    row(Archetype::Factory, &["make_", "_factory"], None, None),
    row(Archetype::Architect, &["build_"], None, None),
    row(
        Archetype::Helper,
        &["handle_", "_handler", "_helper", "_util"],
        None,
        Some(B::HandlerShare(HandlerBody::Handled)),
    ),
    row(Archetype::Servant, &["get_", "_service"], None, None),
    row(
        Archetype::Messenger,
        &["fetch_"],
        None,
        Some(B::HandlerShare(HandlerBody::Reraised)),
    ),
    row(
        Archetype::Suppressor,
        &[],
        None,
        Some(B::HandlerShare(HandlerBody::Suppressed)),
    ),
    row(Archetype::Denier, &[], None, Some(B::BareSuppressedShare)),
    row(Archetype::Abandoner, &[], Some(D::UnresolvedMarkerRatio), None),
    row(Archetype::Transformer, &["process_", "_processor"], None, None),
    row(Archetype::Alchemist, &["transform_", "convert_"], None, None),
    row(Archetype::LabyrinthDweller, &[], Some(D::DeepNestingRatio), None),
    row(Archetype::Minimalist, &[], Some(D::ShortFunctionRatio), None),
    row(Archetype::Ritualist, &[], Some(D::RepeatedShapeRatio), None),
];

/// Everything a rule may read, computed once per run.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub signals: &'a Signals,
    pub tag_counts: &'a [(String, usize)],
    pub unresolved_markers: usize,
    pub repeated_shape_functions: usize,
    pub deep_nesting_depth: usize,
    pub short_function_lines: f64,
}

/// A rule family's score for one archetype plus the evidence line that
/// justifies it. Zero scores carry no evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleScore {
    pub score: f64,
    pub evidence: Option<String>,
}

impl RuleScore {
    pub const ZERO: RuleScore = RuleScore {
        score: 0.0,
        evidence: None,
    };

    fn new(score: f64, evidence: impl FnOnce(f64) -> String) -> Self {
        let score = saturate(score);
        if score > 0.0 {
            Self {
                score,
                evidence: Some(evidence(score)),
            }
        } else {
            Self::ZERO
        }
    }
}

impl ArchetypeRule {
    /// Naming score: identifiers carrying any associated tag per function.
    ///
    /// `names` is the number of naming entries with at least one associated
    /// tag; an entry with both a matching prefix and suffix counts once.
    pub fn naming_score(&self, names: usize, ctx: &RuleContext<'_>) -> RuleScore {
        if self.naming.is_empty() || names == 0 {
            return RuleScore::ZERO;
        }

        let seen: Vec<&str> = self
            .naming
            .iter()
            .copied()
            .filter(|tag| {
                ctx.tag_counts
                    .iter()
                    .any(|(t, n)| t.as_str() == *tag && *n > 0)
            })
            .collect();
        let fc = ctx.signals.function_count;

        RuleScore::new(ratio(names, fc), |score| {
            format!(
                "{} identifiers named with {} across {} functions (naming score {:.2})",
                names,
                seen.join(", "),
                fc,
                score
            )
        })
    }

    pub fn density_score(&self, ctx: &RuleContext<'_>) -> RuleScore {
        self.density
            .map(|rule| rule.evaluate(ctx))
            .unwrap_or(RuleScore::ZERO)
    }

    pub fn behavioral_score(&self, ctx: &RuleContext<'_>) -> RuleScore {
        self.behavioral
            .map(|rule| rule.evaluate(ctx))
            .unwrap_or(RuleScore::ZERO)
    }
}

impl DensityRule {
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> RuleScore {
        let s = ctx.signals;
        let fc = s.function_count;

        match self {
            DensityRule::GuardRatio => RuleScore::new(s.guard_ratio, |score| {
                format!(
                    "guard-clause ratio {:.2} ({} guards across {} functions)",
                    score, s.guard_count, fc
                )
            }),
            DensityRule::NullCheckRatio => {
                RuleScore::new(ratio(s.null_check_count, fc), |score| {
                    format!(
                        "null-check ratio {:.2} ({} null checks across {} functions)",
                        score, s.null_check_count, fc
                    )
                })
            }
            DensityRule::HandlerRatio => RuleScore::new(s.handler_ratio, |score| {
                format!(
                    "error-handler ratio {:.2} ({} handlers across {} functions)",
                    score, s.handler_count, fc
                )
            }),
            DensityRule::DeepNestingRatio => RuleScore::new(s.deep_nesting_ratio, |score| {
                format!(
                    "{} of {} functions nest deeper than {} (ratio {:.2})",
                    s.deep_nesting_count, s.nesting_samples, ctx.deep_nesting_depth, score
                )
            }),
            DensityRule::ShortFunctionRatio => match s.average_function_lines() {
                Some(average) => {
                    let score = if average <= ctx.short_function_lines {
                        1.0
                    } else {
                        ctx.short_function_lines / average
                    };
                    RuleScore::new(score, |score| {
                        format!(
                            "average function length {:.1} lines (short-function score {:.2})",
                            average, score
                        )
                    })
                }
                None => RuleScore::ZERO,
            },
            DensityRule::UnresolvedMarkerRatio => {
                RuleScore::new(ratio(ctx.unresolved_markers, fc), |score| {
                    format!(
                        "{} identifiers carry unresolved markers (ratio {:.2})",
                        ctx.unresolved_markers, score
                    )
                })
            }
            DensityRule::RepeatedShapeRatio => {
                RuleScore::new(ratio(ctx.repeated_shape_functions, fc), |score| {
                    format!(
                        "{} of {} functions share a repeated protective shape (ratio {:.2})",
                        ctx.repeated_shape_functions, fc, score
                    )
                })
            }
        }
    }
}

impl BehavioralRule {
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> RuleScore {
        let s = ctx.signals;

        match self {
            BehavioralRule::HandlerShare(body) => RuleScore::new(s.handler_share(body), |score| {
                format!(
                    "{} of {} error handlers are {} (share {:.2})",
                    s.handlers_of(body),
                    s.handler_count,
                    body.as_str(),
                    score
                )
            }),
            BehavioralRule::BareSuppressedShare => {
                RuleScore::new(share(s.bare_suppressed_count, s.handler_count), |score| {
                    format!(
                        "{} of {} error handlers catch everything and do nothing (share {:.2})",
                        s.bare_suppressed_count, s.handler_count, score
                    )
                })
            }
            BehavioralRule::BareCatchShare => {
                RuleScore::new(share(s.bare_count, s.handler_count), |score| {
                    format!(
                        "bare exception catches in {} of {} handlers (share {:.2})",
                        s.bare_count, s.handler_count, score
                    )
                })
            }
            BehavioralRule::AssertionRaiseDensity => RuleScore::new(
                ratio(s.assertion_count + s.raise_guard_count, s.function_count),
                |score| {
                    format!(
                        "{} assertions and {} raising guards across {} functions (density {:.2})",
                        s.assertion_count, s.raise_guard_count, s.function_count, score
                    )
                },
            ),
            BehavioralRule::DefensiveDensity => RuleScore::new(s.defensive_ratio, |score| {
                format!(
                    "defensive-pattern ratio {:.2} ({} checks across {} functions)",
                    score, s.defensive_count, s.function_count
                )
            }),
            BehavioralRule::TypeCheckShare => {
                RuleScore::new(share(s.type_check_count, s.defensive_count), |score| {
                    format!(
                        "type checks are {} of {} defensive patterns (share {:.2})",
                        s.type_check_count, s.defensive_count, score
                    )
                })
            }
        }
    }
}
