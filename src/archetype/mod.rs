//! Symbolic archetypes and the profile assembled from them.
//!
//! The taxonomy is closed: 23 archetypes, each scored by the table-driven
//! rules in [`rules`] and ranked by [`ArchetypeScorer`]. Declaration order
//! below is the tie-break order used when two archetypes score the same.

pub mod rules;
pub mod scorer;

pub use rules::{ArchetypeRule, BehavioralRule, DensityRule, ARCHETYPE_RULES};
pub use scorer::ArchetypeScorer;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    // protective
    Guardian,
    Sentinel,
    Gatekeeper,
    // control
    AuthoritarianGatekeeper,
    Controller,
    Orchestrator,
    // caretaking
    AnxiousCaretaker,
    Perfectionist,
    OverprotectiveParent,
    // creation
    Builder,
    Factory,
    Architect,
    // service
    Helper,
    Servant,
    Messenger,
    // shadow
    Suppressor,
    Denier,
    Abandoner,
    // transformation
    Transformer,
    Alchemist,
    // structure
    LabyrinthDweller,
    Minimalist,
    Ritualist,
}

impl Archetype {
    pub const ALL: [Archetype; 23] = [
        Archetype::Guardian,
        Archetype::Sentinel,
        Archetype::Gatekeeper,
        Archetype::AuthoritarianGatekeeper,
        Archetype::Controller,
        Archetype::Orchestrator,
        Archetype::AnxiousCaretaker,
        Archetype::Perfectionist,
        Archetype::OverprotectiveParent,
        Archetype::Builder,
        Archetype::Factory,
        Archetype::Architect,
        Archetype::Helper,
        Archetype::Servant,
        Archetype::Messenger,
        Archetype::Suppressor,
        Archetype::Denier,
        Archetype::Abandoner,
        Archetype::Transformer,
        Archetype::Alchemist,
        Archetype::LabyrinthDweller,
        Archetype::Minimalist,
        Archetype::Ritualist,
    ];

    /// Position in declaration order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Guardian => "The Guardian",
            Archetype::Sentinel => "The Sentinel",
            Archetype::Gatekeeper => "The Gatekeeper",
            Archetype::AuthoritarianGatekeeper => "The Authoritarian Gatekeeper",
            Archetype::Controller => "The Controller",
            Archetype::Orchestrator => "The Orchestrator",
            Archetype::AnxiousCaretaker => "The Anxious Caretaker",
            Archetype::Perfectionist => "The Perfectionist",
            Archetype::OverprotectiveParent => "The Overprotective Parent",
            Archetype::Builder => "The Builder",
            Archetype::Factory => "The Factory",
            Archetype::Architect => "The Architect",
            Archetype::Helper => "The Helper",
            Archetype::Servant => "The Servant",
            Archetype::Messenger => "The Messenger",
            Archetype::Suppressor => "The Suppressor",
            Archetype::Denier => "The Denier",
            Archetype::Abandoner => "The Abandoner",
            Archetype::Transformer => "The Transformer",
            Archetype::Alchemist => "The Alchemist",
            Archetype::LabyrinthDweller => "The Labyrinth Dweller",
            Archetype::Minimalist => "The Minimalist",
            Archetype::Ritualist => "The Ritualist",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Archetype::Guardian => {
                "Stands at the threshold and lets only the worthy pass. The code validates and verifies before it proceeds."
            }
            Archetype::Sentinel => {
                "Keeps watch and records what happens. The code stays aware, logging the flow of data and events."
            }
            Archetype::Gatekeeper => {
                "Controls access with strict conditions. The code draws clear boundaries and turns away what fails them."
            }
            Archetype::AuthoritarianGatekeeper => {
                "Rules by raising. The code asserts its expectations and tolerates no deviation."
            }
            Archetype::Controller => {
                "Seeks to manage and direct every part of the system. The code expresses a need for order."
            }
            Archetype::Orchestrator => {
                "Conducts many components toward one performance. The code coordinates interactions with care."
            }
            Archetype::AnxiousCaretaker => {
                "Worries endlessly, checking and checking again. The code reveals deep concern about what might go wrong."
            }
            Archetype::Perfectionist => {
                "Accepts nothing less than flawless input. The code pursues correctness through exhaustive verification."
            }
            Archetype::OverprotectiveParent => {
                "Shields its charges from every harm, catching everything that moves. The code wraps itself in safety, perhaps too much."
            }
            Archetype::Builder => {
                "Brings new structures into being with purpose. The code is generative."
            }
            Archetype::Factory => {
                "Produces instances by established procedure. The code creates through standardized means."
            }
            Archetype::Architect => {
                "Designs foundations for others to build upon. The code lays out frameworks with vision."
            }
            Archetype::Helper => {
                "Serves without ego, providing utility to others. The code exists to support and assist."
            }
            Archetype::Servant => {
                "Answers requests with diligence. The code retrieves and mediates between systems."
            }
            Archetype::Messenger => {
                "Carries word between realms. The code propagates signals so they reach their destination."
            }
            Archetype::Suppressor => {
                "Silences errors and buries them in the dark. The code hides problems rather than confronting them."
            }
            Archetype::Denier => {
                "Refuses to acknowledge what has happened. The code behaves as if failures never occurred."
            }
            Archetype::Abandoner => {
                "Leaves tasks unfinished and paths unexplored. The code begins journeys it does not complete."
            }
            Archetype::Transformer => {
                "Turns one form into another. The code moves data through processes of change."
            }
            Archetype::Alchemist => {
                "Works conversions between kinds. The code transmutes representations into something new."
            }
            Archetype::LabyrinthDweller => {
                "Thrives in nested passages. The code embraces deep structures that resist navigation."
            }
            Archetype::Minimalist => {
                "Achieves with economy, using only what is needed. The code finds elegance in brevity."
            }
            Archetype::Ritualist => {
                "Repeats the same forms with devotion. The code follows established ceremonies and finds meaning in repetition."
            }
        }
    }

    pub fn rule(self) -> &'static ArchetypeRule {
        &ARCHETYPE_RULES[self.ordinal()]
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scored archetype and the evidence that placed it in the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub archetype: Archetype,
    pub strength: f64,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolicProfile {
    pub dominant_archetypes: Vec<ArchetypeMatch>,
    pub secondary_archetypes: Vec<ArchetypeMatch>,
    pub naming_themes: BTreeMap<String, usize>,
    pub behavioral_traits: Vec<String>,
}

impl SymbolicProfile {
    /// Dominant then secondary matches.
    pub fn matches(&self) -> impl Iterator<Item = &ArchetypeMatch> {
        self.dominant_archetypes
            .iter()
            .chain(self.secondary_archetypes.iter())
    }

    /// Strength of an archetype if it made either band.
    pub fn strength_of(&self, archetype: Archetype) -> Option<f64> {
        self.matches()
            .find(|m| m.archetype == archetype)
            .map(|m| m.strength)
    }

    pub fn is_dominant(&self, archetype: Archetype) -> bool {
        self.dominant_archetypes
            .iter()
            .any(|m| m.archetype == archetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, archetype) in Archetype::ALL.iter().enumerate() {
            assert_eq!(archetype.ordinal(), index);
        }
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_string(&Archetype::AuthoritarianGatekeeper).unwrap();
        assert_eq!(json, "\"authoritarian_gatekeeper\"");
    }

    #[test]
    fn test_every_archetype_has_rule_row() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.rule().archetype, archetype);
        }
    }
}
