//! Coarse per-function shape signatures.
//!
//! A function's shape records which kinds of protective structure it carries:
//! guard clauses, error handlers, defensive checks. Functions never mentioned
//! by any entry are plain. Shapes are derived from `function_id` references
//! only, so the census is identical no matter which stage asks for it.

use super::extract::StructuralExtract;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionShape {
    pub guarded: bool,
    pub handled: bool,
    pub defended: bool,
}

impl FunctionShape {
    /// Every non-plain shape, in reporting order.
    pub const PROTECTED: [FunctionShape; 7] = [
        FunctionShape::new(true, false, false),
        FunctionShape::new(false, true, false),
        FunctionShape::new(false, false, true),
        FunctionShape::new(true, true, false),
        FunctionShape::new(true, false, true),
        FunctionShape::new(false, true, true),
        FunctionShape::new(true, true, true),
    ];

    pub const fn new(guarded: bool, handled: bool, defended: bool) -> Self {
        Self {
            guarded,
            handled,
            defended,
        }
    }

    pub fn is_plain(&self) -> bool {
        !(self.guarded || self.handled || self.defended)
    }

    /// Compact signature such as `guard+handler`.
    pub fn signature(&self) -> String {
        let parts: Vec<&str> = [
            (self.guarded, "guard"),
            (self.handled, "handler"),
            (self.defended, "defensive"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, name)| *name)
        .collect();

        if parts.is_empty() {
            "plain".to_string()
        } else {
            parts.join("+")
        }
    }
}

/// How many functions share each shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeCensus {
    counts: BTreeMap<FunctionShape, usize>,
    plain: usize,
}

impl ShapeCensus {
    pub fn from_extract(extract: &StructuralExtract) -> Self {
        let mut shapes: BTreeMap<&str, FunctionShape> = BTreeMap::new();

        for guard in &extract.guard_clauses {
            shapes.entry(guard.function_id.as_str()).or_default().guarded = true;
        }
        for handler in &extract.error_handlers {
            shapes.entry(handler.function_id.as_str()).or_default().handled = true;
        }
        for pattern in &extract.defensive_patterns {
            shapes.entry(pattern.function_id.as_str()).or_default().defended = true;
        }

        let mut counts = BTreeMap::new();
        for shape in shapes.values() {
            *counts.entry(*shape).or_insert(0) += 1;
        }

        Self {
            counts,
            plain: extract.function_count.saturating_sub(shapes.len()),
        }
    }

    pub fn count(&self, shape: FunctionShape) -> usize {
        if shape.is_plain() {
            self.plain
        } else {
            self.counts.get(&shape).copied().unwrap_or(0)
        }
    }

    pub fn plain(&self) -> usize {
        self.plain
    }

    /// Non-plain shapes with their counts, in reporting order, skipping
    /// shapes no function has.
    pub fn protected(&self) -> impl Iterator<Item = (FunctionShape, usize)> + '_ {
        FunctionShape::PROTECTED
            .iter()
            .map(|shape| (*shape, self.count(*shape)))
            .filter(|(_, count)| *count > 0)
    }

    /// Functions whose protected shape is shared by at least `min` functions.
    pub fn functions_in_repeated_shapes(&self, min: usize) -> usize {
        self.protected()
            .filter(|(_, count)| *count >= min)
            .map(|(_, count)| count)
            .sum()
    }
}
