use serde::{Deserialize, Serialize};

/// Archetype scoring thresholds and band sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeThresholds {
    /// Combined score at or above which an archetype is dominant
    #[serde(default = "default_dominant_threshold")]
    pub dominant_threshold: f64,

    #[serde(default = "default_max_dominant")]
    pub max_dominant: usize,

    /// Combined score below which an archetype is dropped entirely
    #[serde(default = "default_secondary_floor")]
    pub secondary_floor: f64,

    #[serde(default = "default_max_secondary")]
    pub max_secondary: usize,

    /// Nesting depth above which a function counts as deeply nested
    #[serde(default = "default_deep_nesting_depth")]
    pub deep_nesting_depth: usize,

    /// Average lines per function at or below which functions count as short
    #[serde(default = "default_short_function_lines")]
    pub short_function_lines: f64,

    #[serde(default = "default_max_naming_themes")]
    pub max_naming_themes: usize,

    #[serde(default)]
    pub traits: TraitThresholds,
}

impl Default for ArchetypeThresholds {
    fn default() -> Self {
        Self {
            dominant_threshold: default_dominant_threshold(),
            max_dominant: default_max_dominant(),
            secondary_floor: default_secondary_floor(),
            max_secondary: default_max_secondary(),
            deep_nesting_depth: default_deep_nesting_depth(),
            short_function_lines: default_short_function_lines(),
            max_naming_themes: default_max_naming_themes(),
            traits: TraitThresholds::default(),
        }
    }
}

fn default_dominant_threshold() -> f64 {
    0.5
}
fn default_max_dominant() -> usize {
    3
}
fn default_secondary_floor() -> f64 {
    0.15
}
fn default_max_secondary() -> usize {
    4
}
fn default_deep_nesting_depth() -> usize {
    4
}
fn default_short_function_lines() -> f64 {
    15.0
}
fn default_max_naming_themes() -> usize {
    10
}

/// Bounds for the behavioral trait phrases attached to a profile.
///
/// Each pair is a high/low bound: above the high bound selects one phrase,
/// below the low bound selects its opposite, anything between selects none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitThresholds {
    #[serde(default = "default_suppression_high")]
    pub suppression_high: f64,
    #[serde(default = "default_suppression_low")]
    pub suppression_low: f64,
    #[serde(default = "default_defensive_high")]
    pub defensive_high: f64,
    #[serde(default = "default_defensive_low")]
    pub defensive_low: f64,
    #[serde(default = "default_guard_high")]
    pub guard_high: f64,
    #[serde(default = "default_guard_low")]
    pub guard_low: f64,
    /// Average nesting depth bounds (not ratios)
    #[serde(default = "default_nesting_high")]
    pub nesting_high: f64,
    #[serde(default = "default_nesting_low")]
    pub nesting_low: f64,
    /// Share of defensive patterns that are type checks
    #[serde(default = "default_type_check_reliance")]
    pub type_check_reliance: f64,
}

impl Default for TraitThresholds {
    fn default() -> Self {
        Self {
            suppression_high: default_suppression_high(),
            suppression_low: default_suppression_low(),
            defensive_high: default_defensive_high(),
            defensive_low: default_defensive_low(),
            guard_high: default_guard_high(),
            guard_low: default_guard_low(),
            nesting_high: default_nesting_high(),
            nesting_low: default_nesting_low(),
            type_check_reliance: default_type_check_reliance(),
        }
    }
}

fn default_suppression_high() -> f64 {
    0.3
}
fn default_suppression_low() -> f64 {
    0.1
}
fn default_defensive_high() -> f64 {
    0.5
}
fn default_defensive_low() -> f64 {
    0.1
}
fn default_guard_high() -> f64 {
    0.4
}
fn default_guard_low() -> f64 {
    0.1
}
fn default_nesting_high() -> f64 {
    3.0
}
fn default_nesting_low() -> f64 {
    1.5
}
fn default_type_check_reliance() -> f64 {
    0.4
}

/// Motif detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifThresholds {
    /// Minimum group size for a pattern to count as recurring
    #[serde(default = "default_min_occurrences")]
    pub min_occurrences: usize,

    /// Share of all handlers one body kind must exceed to define a coping style
    #[serde(default = "default_behavioral_majority")]
    pub behavioral_majority: f64,

    /// Functions per class above which organization is function-heavy
    #[serde(default = "default_function_heavy_ratio")]
    pub function_heavy_ratio: f64,

    /// Functions per class below which organization is class-heavy
    #[serde(default = "default_class_heavy_ratio")]
    pub class_heavy_ratio: f64,

    /// Average nesting below which the rhythm is flat
    #[serde(default = "default_flat_nesting")]
    pub flat_nesting: f64,

    /// Average nesting above which the rhythm is deep
    #[serde(default = "default_deep_nesting")]
    pub deep_nesting: f64,
}

impl Default for MotifThresholds {
    fn default() -> Self {
        Self {
            min_occurrences: default_min_occurrences(),
            behavioral_majority: default_behavioral_majority(),
            function_heavy_ratio: default_function_heavy_ratio(),
            class_heavy_ratio: default_class_heavy_ratio(),
            flat_nesting: default_flat_nesting(),
            deep_nesting: default_deep_nesting(),
        }
    }
}

fn default_min_occurrences() -> usize {
    3
}
fn default_behavioral_majority() -> f64 {
    0.6
}
fn default_function_heavy_ratio() -> f64 {
    10.0
}
fn default_class_heavy_ratio() -> f64 {
    3.0
}
fn default_flat_nesting() -> f64 {
    2.0
}
fn default_deep_nesting() -> f64 {
    3.0
}

/// Tension detection thresholds and severity normalization constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionThresholds {
    /// Minimum guard count and suppressed-handler count for the
    /// guard/suppression contradiction
    #[serde(default = "default_contradiction_min")]
    pub contradiction_min: usize,
    #[serde(default = "default_contradiction_normalization")]
    pub contradiction_normalization: f64,

    #[serde(default = "default_precision_min_defensive")]
    pub precision_min_defensive: usize,
    #[serde(default = "default_precision_min_bare")]
    pub precision_min_bare: usize,
    #[serde(default = "default_precision_normalization")]
    pub precision_normalization: f64,

    /// Functions per class above which classes are overburdened
    #[serde(default = "default_overburdened_class_ratio")]
    pub overburdened_class_ratio: f64,
    #[serde(default = "default_overburdened_normalization")]
    pub overburdened_normalization: f64,

    #[serde(default = "default_abandonment_min")]
    pub abandonment_min: usize,
    /// Multiplier applied to occurrences-per-function for abandonment severity
    #[serde(default = "default_abandonment_scale")]
    pub abandonment_scale: f64,

    /// Function count below which engineering-balance rules stay silent
    #[serde(default = "default_min_codebase_size")]
    pub min_codebase_size: usize,

    #[serde(default = "default_over_defensive_ratio")]
    pub over_defensive_ratio: f64,
    #[serde(default = "default_over_nesting_ratio")]
    pub over_nesting_ratio: f64,
    #[serde(default = "default_over_handler_ratio")]
    pub over_handler_ratio: f64,
    /// Nesting samples deeper than this count toward the endless descent
    #[serde(default = "default_descent_depth")]
    pub descent_depth: usize,
    /// The endless descent needs more than this many such samples
    #[serde(default = "default_descent_min")]
    pub descent_min: usize,
    #[serde(default = "default_descent_normalization")]
    pub descent_normalization: f64,

    #[serde(default = "default_under_guard_ratio")]
    pub under_guard_ratio: f64,
    #[serde(default = "default_under_defensive_ratio")]
    pub under_defensive_ratio: f64,
    #[serde(default = "default_under_handler_ratio")]
    pub under_handler_ratio: f64,
    #[serde(default = "default_under_max_severity")]
    pub under_max_severity: f64,

    #[serde(default = "default_flat_world_functions")]
    pub flat_world_functions: usize,
    #[serde(default = "default_flat_world_severity")]
    pub flat_world_severity: f64,

    /// Lowercase words that mark an identifier as unfinished work
    #[serde(default = "default_unresolved_markers")]
    pub unresolved_markers: Vec<String>,
}

impl Default for TensionThresholds {
    fn default() -> Self {
        Self {
            contradiction_min: default_contradiction_min(),
            contradiction_normalization: default_contradiction_normalization(),
            precision_min_defensive: default_precision_min_defensive(),
            precision_min_bare: default_precision_min_bare(),
            precision_normalization: default_precision_normalization(),
            overburdened_class_ratio: default_overburdened_class_ratio(),
            overburdened_normalization: default_overburdened_normalization(),
            abandonment_min: default_abandonment_min(),
            abandonment_scale: default_abandonment_scale(),
            min_codebase_size: default_min_codebase_size(),
            over_defensive_ratio: default_over_defensive_ratio(),
            over_nesting_ratio: default_over_nesting_ratio(),
            over_handler_ratio: default_over_handler_ratio(),
            descent_depth: default_descent_depth(),
            descent_min: default_descent_min(),
            descent_normalization: default_descent_normalization(),
            under_guard_ratio: default_under_guard_ratio(),
            under_defensive_ratio: default_under_defensive_ratio(),
            under_handler_ratio: default_under_handler_ratio(),
            under_max_severity: default_under_max_severity(),
            flat_world_functions: default_flat_world_functions(),
            flat_world_severity: default_flat_world_severity(),
            unresolved_markers: default_unresolved_markers(),
        }
    }
}

fn default_contradiction_min() -> usize {
    5
}
fn default_contradiction_normalization() -> f64 {
    10.0
}
fn default_precision_min_defensive() -> usize {
    10
}
fn default_precision_min_bare() -> usize {
    3
}
fn default_precision_normalization() -> f64 {
    25.0
}
fn default_overburdened_class_ratio() -> f64 {
    20.0
}
fn default_overburdened_normalization() -> f64 {
    50.0
}
fn default_abandonment_min() -> usize {
    3
}
fn default_abandonment_scale() -> f64 {
    2.0
}
fn default_min_codebase_size() -> usize {
    10
}
fn default_over_defensive_ratio() -> f64 {
    1.0
}
fn default_over_nesting_ratio() -> f64 {
    0.3
}
fn default_over_handler_ratio() -> f64 {
    0.8
}
fn default_descent_depth() -> usize {
    5
}
fn default_descent_min() -> usize {
    3
}
fn default_descent_normalization() -> f64 {
    10.0
}
fn default_under_guard_ratio() -> f64 {
    0.1
}
fn default_under_defensive_ratio() -> f64 {
    0.1
}
fn default_under_handler_ratio() -> f64 {
    0.1
}
fn default_under_max_severity() -> f64 {
    0.8
}
fn default_flat_world_functions() -> usize {
    20
}
fn default_flat_world_severity() -> f64 {
    0.4
}
fn default_unresolved_markers() -> Vec<String> {
    ["todo", "fixme", "hack", "xxx", "temp", "tmp", "debug", "test"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
