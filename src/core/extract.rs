//! Structural extract: the fixed-shape bundle of counts and entries produced
//! by the syntax-tree collaborator and consumed read-only by every stage of
//! the interpretation engine.
//!
//! Sequence fields may be omitted from serialized input and default to
//! empty. The four aggregate counters are required: an extract that omits
//! one is rejected with [`Error::Configuration`] instead of being silently
//! defaulted.

use super::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kind of a named definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Class,
}

/// A named definition and the conventional prefix/suffix it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingEntry {
    pub identifier: String,
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl NamingEntry {
    pub fn function(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: SymbolKind::Function,
            prefix: None,
            suffix: None,
        }
    }

    pub fn class(identifier: impl Into<String>) -> Self {
        Self {
            kind: SymbolKind::Class,
            ..Self::function(identifier)
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Prefix and suffix tags in that order, skipping absent ones.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.prefix
            .as_deref()
            .into_iter()
            .chain(self.suffix.as_deref())
    }
}

/// How a guard clause leaves the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardPosition {
    EarlyReturn,
    EarlyRaise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardClause {
    pub function_id: String,
    pub condition_kind: String,
    pub position: GuardPosition,
}

impl GuardClause {
    pub fn new(function_id: impl Into<String>, position: GuardPosition) -> Self {
        Self {
            function_id: function_id.into(),
            condition_kind: "comparison".to_string(),
            position,
        }
    }
}

/// Breadth of the exceptions an error handler catches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionScope {
    Bare,
    Typed,
}

/// What an error handler does with the error it caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerBody {
    Suppressed,
    Logged,
    Reraised,
    Handled,
}

impl HandlerBody {
    pub const ALL: [HandlerBody; 4] = [
        HandlerBody::Suppressed,
        HandlerBody::Logged,
        HandlerBody::Reraised,
        HandlerBody::Handled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HandlerBody::Suppressed => "suppressed",
            HandlerBody::Logged => "logged",
            HandlerBody::Reraised => "reraised",
            HandlerBody::Handled => "handled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorHandler {
    pub function_id: String,
    pub scope: ExceptionScope,
    pub body: HandlerBody,
}

impl ErrorHandler {
    pub fn new(function_id: impl Into<String>, scope: ExceptionScope, body: HandlerBody) -> Self {
        Self {
            function_id: function_id.into(),
            scope,
            body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveKind {
    NullCheck,
    TypeCheck,
    Assertion,
}

impl DefensiveKind {
    pub const ALL: [DefensiveKind; 3] = [
        DefensiveKind::NullCheck,
        DefensiveKind::TypeCheck,
        DefensiveKind::Assertion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DefensiveKind::NullCheck => "null check",
            DefensiveKind::TypeCheck => "type check",
            DefensiveKind::Assertion => "assertion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensivePattern {
    pub function_id: String,
    pub kind: DefensiveKind,
}

impl DefensivePattern {
    pub fn new(function_id: impl Into<String>, kind: DefensiveKind) -> Self {
        Self {
            function_id: function_id.into(),
            kind,
        }
    }
}

/// Aggregated structural information for one codebase.
///
/// Entries referencing a `function_id` are trusted to refer to a function
/// counted in `function_count`; no cross-validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralExtract {
    #[serde(default)]
    pub naming_entries: Vec<NamingEntry>,
    #[serde(default)]
    pub guard_clauses: Vec<GuardClause>,
    #[serde(default)]
    pub error_handlers: Vec<ErrorHandler>,
    #[serde(default)]
    pub defensive_patterns: Vec<DefensivePattern>,
    pub function_count: usize,
    pub class_count: usize,
    pub file_count: usize,
    pub total_lines: usize,
    #[serde(default)]
    pub nesting_depths: Vec<usize>,
}

impl StructuralExtract {
    /// Decode an extract from JSON.
    ///
    /// Missing aggregate counters are reported as configuration errors that
    /// name the offending field; other decoding failures are parse errors.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| {
            let message = e.to_string();
            if message.starts_with("missing field") {
                Error::configuration(format!("structural extract is incomplete: {}", message))
            } else {
                Error::parse("structural extract", e)
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.function_count == 0
            && self.class_count == 0
            && self.naming_entries.is_empty()
            && self.guard_clauses.is_empty()
            && self.error_handlers.is_empty()
            && self.defensive_patterns.is_empty()
            && self.nesting_depths.is_empty()
    }

    pub fn handlers_with(&self, body: HandlerBody) -> usize {
        self.error_handlers.iter().filter(|h| h.body == body).count()
    }

    pub fn defensive_with(&self, kind: DefensiveKind) -> usize {
        self.defensive_patterns
            .iter()
            .filter(|p| p.kind == kind)
            .count()
    }

    /// Naming entries whose identifier contains one of `markers` as an
    /// underscore-separated word (case-insensitive), e.g. `parse_todo`.
    pub fn unresolved_marker_count(&self, markers: &[String]) -> usize {
        self.naming_entries
            .iter()
            .filter(|entry| {
                let lowered = entry.identifier.to_lowercase();
                lowered
                    .split('_')
                    .any(|word| markers.iter().any(|marker| marker == word))
            })
            .count()
    }

    pub fn guards_at(&self, position: GuardPosition) -> usize {
        self.guard_clauses
            .iter()
            .filter(|g| g.position == position)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_from_json_defaults_sequences() {
        let extract = StructuralExtract::from_json(indoc! {r#"
            {
                "function_count": 4,
                "class_count": 1,
                "file_count": 2,
                "total_lines": 120
            }
        "#})
        .unwrap();

        assert_eq!(extract.function_count, 4);
        assert!(extract.naming_entries.is_empty());
        assert!(extract.nesting_depths.is_empty());
    }

    #[test]
    fn test_from_json_rejects_missing_counter() {
        let err = StructuralExtract::from_json(indoc! {r#"
            {
                "function_count": 4,
                "class_count": 1,
                "file_count": 2
            }
        "#})
        .unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("total_lines"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = StructuralExtract::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_entry_decoding() {
        let extract = StructuralExtract::from_json(indoc! {r#"
            {
                "naming_entries": [
                    {"identifier": "validate_user", "kind": "function", "prefix": "validate_"}
                ],
                "guard_clauses": [
                    {"function_id": "a", "condition_kind": "is_none", "position": "early_raise"}
                ],
                "error_handlers": [
                    {"function_id": "a", "scope": "bare", "body": "suppressed"}
                ],
                "defensive_patterns": [
                    {"function_id": "a", "kind": "type_check"}
                ],
                "function_count": 1,
                "class_count": 0,
                "file_count": 1,
                "total_lines": 10,
                "nesting_depths": [2]
            }
        "#})
        .unwrap();

        assert_eq!(extract.naming_entries[0].prefix.as_deref(), Some("validate_"));
        assert_eq!(extract.guards_at(GuardPosition::EarlyRaise), 1);
        assert_eq!(extract.handlers_with(HandlerBody::Suppressed), 1);
        assert_eq!(extract.defensive_with(DefensiveKind::TypeCheck), 1);
    }

    #[test]
    fn test_unresolved_markers_match_whole_words() {
        let extract = StructuralExtract {
            naming_entries: vec![
                NamingEntry::function("parse_todo"),
                NamingEntry::function("FIXME_later"),
                NamingEntry::function("attempt_connect"),
                NamingEntry::function("tmp"),
            ],
            ..Default::default()
        };
        let markers = vec!["todo".to_string(), "fixme".to_string(), "temp".to_string(), "tmp".to_string()];

        assert_eq!(extract.unresolved_marker_count(&markers), 3);
    }

    #[test]
    fn test_naming_tags_order() {
        let entry = NamingEntry::function("get_user_service")
            .with_prefix("get_")
            .with_suffix("_service");
        assert_eq!(entry.tags().collect::<Vec<_>>(), vec!["get_", "_service"]);
    }
}
