//! Extract builders shared by the integration tests.
#![allow(dead_code)]

use symbolmap::{
    DefensiveKind, DefensivePattern, ErrorHandler, ExceptionScope, GuardClause, GuardPosition,
    HandlerBody, NamingEntry, StructuralExtract,
};

pub fn extract(function_count: usize) -> StructuralExtract {
    StructuralExtract {
        function_count,
        file_count: 1,
        total_lines: function_count * 20,
        ..Default::default()
    }
}

pub fn prefixed(prefix: &str, n: usize) -> Vec<NamingEntry> {
    (0..n)
        .map(|i| NamingEntry::function(format!("{}{}", prefix, i)).with_prefix(prefix))
        .collect()
}

pub fn guards(n: usize) -> Vec<GuardClause> {
    (0..n)
        .map(|i| GuardClause::new(format!("guarded_{}", i), GuardPosition::EarlyReturn))
        .collect()
}

pub fn handlers(n: usize, scope: ExceptionScope, body: HandlerBody) -> Vec<ErrorHandler> {
    (0..n)
        .map(|i| ErrorHandler::new(format!("handler_{}", i), scope, body))
        .collect()
}

pub fn defensive(n: usize, kind: DefensiveKind) -> Vec<DefensivePattern> {
    (0..n)
        .map(|i| DefensivePattern::new(format!("defended_{}", i), kind))
        .collect()
}
