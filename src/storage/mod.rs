pub mod engine;
pub mod table;

pub use engine::Engine;
pub use table::{HashTable, OrderedTable, Table, TableKind};

use crate::context::RequestScope;
use crate::error::DbResult;
use tracing::debug;

/// Storage layer: rejects requests whose scope has already ended before
/// they reach the engine.
#[derive(Debug)]
pub struct Storage {
    engine: Engine,
}

impl Storage {
    pub fn new(engine: Engine) -> Self {
        Storage { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub async fn set(&self, scope: &RequestScope, key: &str, value: &str) -> DbResult<()> {
        check_scope(scope)?;
        self.engine.set(scope, key, value).await;
        Ok(())
    }

    /// A missing key reads as an empty value.
    pub async fn get(&self, scope: &RequestScope, key: &str) -> DbResult<String> {
        check_scope(scope)?;
        Ok(self.engine.get(scope, key).await.unwrap_or_default())
    }

    pub async fn del(&self, scope: &RequestScope, key: &str) -> DbResult<()> {
        check_scope(scope)?;
        self.engine.del(scope, key).await;
        Ok(())
    }
}

fn check_scope(scope: &RequestScope) -> DbResult<()> {
    scope.err().inspect_err(|e| {
        debug!(tx = scope.tx_id(), reason = %e, "query canceled");
    })
}
