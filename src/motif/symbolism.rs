//! Fixed tables mapping recurring patterns to labels and symbolic meanings.

use super::{NestingBand, Organization};
use crate::core::{DefensiveKind, FunctionShape, HandlerBody};

/// Label stem and meaning for a naming tag, e.g. `get_` -> "Retrieval".
pub fn naming_symbol(tag: &str) -> Option<(&'static str, &'static str)> {
    let symbol = match tag {
        "get_" => ("Retrieval", "Reaching out to bring back what is needed. The code seeks external resources."),
        "set_" => ("Assignment", "Placing value with intention. The code asserts state."),
        "is_" => ("Inquiry", "A question about identity and nature. The code probes what exists."),
        "has_" => ("Possession", "A check for ownership. The code asks what it contains."),
        "can_" => ("Capability", "A question of potential. The code explores what might be."),
        "do_" => ("Action", "A call to motion. The code commands change."),
        "make_" => ("Creation", "The primal act of bringing forth. The code generates."),
        "create_" => ("Genesis", "Deliberate creation of something new. The code initiates."),
        "build_" => ("Construction", "Assembly piece by piece. The code erects structures."),
        "init_" => ("Awakening", "The first breath of a thing. The code brings state into being."),
        "validate_" => ("Judgment", "Testing worth before acceptance. The code pronounces verdicts."),
        "check_" => ("Vigilance", "The watchful eye that never rests. The code maintains awareness."),
        "ensure_" => ("Assurance", "Insisting that conditions hold. The code seeks certainty."),
        "verify_" => ("Scrutiny", "Demanding proof. The code trusts only what it has confirmed."),
        "process_" => ("Transformation", "A journey through change. The code shepherds data through metamorphosis."),
        "transform_" | "convert_" => ("Transmutation", "One form becomes another. The code translates between kinds."),
        "handle_" => ("Stewardship", "Careful management of responsibility. The code accepts duty."),
        "fetch_" => ("Errand", "Going out and returning with word. The code carries messages."),
        "_" => ("Privacy", "The hidden and internal, kept from outside gaze. The code guards secrets."),
        "_handler" => ("Responsibility", "One who takes charge. This pattern accepts the burden of action."),
        "_manager" => ("Authority", "One who directs. This pattern claims control."),
        "_factory" => ("Production", "A place of systematic making. This pattern produces."),
        "_builder" => ("Craftsmanship", "One who builds with care. This pattern constructs."),
        "_validator" => ("Judgment", "One who determines worth. This pattern evaluates."),
        "_processor" => ("Alchemy", "One who transforms through process. This pattern transmutes."),
        "_helper" => ("Service", "One who assists. This pattern aids."),
        "_util" => ("Utility", "The practical and the useful. This pattern serves function."),
        "_service" => ("Devotion", "One who provides on request. This pattern fulfills needs."),
        "_controller" => ("Direction", "One who guides. This pattern steers."),
        "_guard" => ("Threshold", "One who stands at the door. This pattern bars passage."),
        "_impl" => ("Manifestation", "The concrete reality behind an idea. This pattern realizes."),
        "_base" => ("Foundation", "What others stand upon. This pattern supports."),
        "_error" => ("Failure", "Naming what went wrong. This pattern acknowledges problems."),
        "_exception" => ("Interruption", "The breaking of normal flow. This pattern signals disruption."),
        _ => return None,
    };
    Some(symbol)
}

/// Motif label and meaning for a naming tag, falling back to a generic
/// rendering for tags the table does not know.
pub fn naming_motif(tag: &str) -> (String, String) {
    match naming_symbol(tag) {
        Some((name, meaning)) => (format!("The {} Pattern", name), meaning.to_string()),
        None => (
            format!("The {} Pattern", capitalize(tag.trim_matches('_'))),
            format!("A recurring invocation of '{}'", tag),
        ),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn shape_symbol(shape: FunctionShape) -> (&'static str, &'static str) {
    match (shape.guarded, shape.handled, shape.defended) {
        (true, false, false) => (
            "The Gate",
            "Functions open by turning away what does not belong before any work begins.",
        ),
        (false, true, false) => (
            "The Safety Net",
            "Functions work above a net, catching whatever falls.",
        ),
        (false, false, true) => (
            "The Watchtower",
            "Functions scan their inputs from within, checking as they go.",
        ),
        (true, true, false) => (
            "The Fortress",
            "Functions build walls at the gate and keep a net behind them.",
        ),
        (true, false, true) => (
            "The Checkpoint",
            "Functions inspect at the threshold and again inside.",
        ),
        (false, true, true) => (
            "The Bunker",
            "Functions dig in, checking every value and catching every failure.",
        ),
        (true, true, true) => (
            "The Citadel",
            "Functions carry every layer of protection at once.",
        ),
        (false, false, false) => ("The Open Field", "Functions stand without protection."),
    }
}

pub const LABYRINTH: (&str, &str) = (
    "The Labyrinth",
    "The code burrows deep, creating passages within passages.",
);

/// Coping style named by the dominant error-handler body.
pub fn handler_symbol(body: HandlerBody) -> (&'static str, &'static str) {
    match body {
        HandlerBody::Suppressed => (
            "The Silencing",
            "Errors are caught and silenced. The code prefers peace to truth.",
        ),
        HandlerBody::Logged => (
            "The Recording",
            "Errors are caught and written down. The code keeps the record.",
        ),
        HandlerBody::Reraised => (
            "The Amplification",
            "Errors are caught and thrown again with their message intact. The code believes in transparency.",
        ),
        HandlerBody::Handled => (
            "The Resolution",
            "Errors are caught and addressed. The code takes responsibility.",
        ),
    }
}

pub fn defensive_symbol(kind: DefensiveKind) -> (&'static str, &'static str) {
    match kind {
        DefensiveKind::NullCheck => (
            "The Void Watch",
            "The code guards against nothingness, checking for absence at every turn.",
        ),
        DefensiveKind::TypeCheck => (
            "The Identity Verification",
            "The code demands proof of type, questioning the nature of all that enters.",
        ),
        DefensiveKind::Assertion => (
            "The Truth Demand",
            "The code asserts what must be true and halts if reality disagrees.",
        ),
    }
}

pub fn organization_symbol(organization: Organization) -> (&'static str, &'static str) {
    match organization {
        Organization::Vacant => ("The Silence", "There is nothing yet to keep time."),
        Organization::Procedural => (
            "The Procedural Rhythm",
            "The code tells its story through functions alone, eschewing class structure.",
        ),
        Organization::FunctionHeavy => (
            "The Function-Heavy Rhythm",
            "Many functions gather under few classes, a crowd around a handful of houses.",
        ),
        Organization::ClassHeavy => (
            "The Class-Heavy Rhythm",
            "The code organizes into many small classes, a society of specialists.",
        ),
        Organization::Balanced => (
            "The Balanced Rhythm",
            "Classes and functions mix in measured proportion.",
        ),
    }
}

pub fn nesting_symbol(band: NestingBand) -> (&'static str, &'static str) {
    match band {
        NestingBand::Flat => (
            "The Flat Cadence",
            "The code spreads flat and open, simple to traverse.",
        ),
        NestingBand::Moderate => (
            "The Moderate Cadence",
            "The code descends a few levels and returns, a measured rise and fall.",
        ),
        NestingBand::Deep => (
            "The Deep Cadence",
            "The code moves in long descents, each level a further step from daylight.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_naming_tags() {
        assert_eq!(naming_motif("get_").0, "The Retrieval Pattern");
        let (label, meaning) = naming_motif("_adapter");
        assert_eq!(label, "The Adapter Pattern");
        assert_eq!(meaning, "A recurring invocation of '_adapter'");
    }

    #[test]
    fn test_every_protected_shape_has_distinct_label() {
        let labels: std::collections::HashSet<&str> = FunctionShape::PROTECTED
            .iter()
            .map(|shape| shape_symbol(*shape).0)
            .collect();
        assert_eq!(labels.len(), FunctionShape::PROTECTED.len());
    }
}
