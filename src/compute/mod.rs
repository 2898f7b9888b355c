pub mod analyzer;
pub mod parser;
pub mod query;

pub use query::{CommandId, Query};

use crate::context::RequestScope;
use crate::error::DbResult;

/// Text-to-query front half of the pipeline: parse, then analyze.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compute;

impl Compute {
    pub fn new() -> Self {
        Compute
    }

    /// Errors from either stage are returned as-is.
    pub fn handle_query(&self, scope: &RequestScope, raw: &str) -> DbResult<Query> {
        let tokens = parser::parse(scope, raw)?;
        analyzer::analyze(scope, &tokens)
    }
}
