// Export modules for library usage
pub mod archetype;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod motif;
pub mod pipeline;
pub mod tension;

// Re-export commonly used types
pub use crate::core::{
    DefensiveKind, DefensivePattern, Error, ErrorHandler, ExceptionScope, GuardClause,
    GuardPosition, HandlerBody, NamingEntry, Result, StructuralExtract, SymbolKind,
};

pub use crate::archetype::{Archetype, ArchetypeMatch, ArchetypeScorer, SymbolicProfile};
pub use crate::config::InterpretationConfig;
pub use crate::motif::{Motif, MotifAnalysis, MotifCategory, MotifDetector};
pub use crate::pipeline::{Interpretation, Interpreter};
pub use crate::tension::{Tension, TensionAnalysis, TensionDetector, TensionKind};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
