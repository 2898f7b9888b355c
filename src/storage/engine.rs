use super::table::Table;
use crate::context::RequestScope;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory engine: the sole owner of the table and of the lock around it.
#[derive(Debug)]
pub struct Engine {
    table: RwLock<Box<dyn Table>>,
}

impl Engine {
    pub fn new(table: Box<dyn Table>) -> Self {
        Engine {
            table: RwLock::new(table),
        }
    }

    pub async fn set(&self, scope: &RequestScope, key: &str, value: &str) {
        self.table
            .write()
            .await
            .set(key.to_string(), value.to_string());
        debug!(tx = scope.tx_id(), "success set query");
    }

    /// Look up a key. `None` means the key is absent.
    pub async fn get(&self, scope: &RequestScope, key: &str) -> Option<String> {
        let value = self.table.read().await.get(key).map(str::to_string);
        debug!(tx = scope.tx_id(), found = value.is_some(), "success get query");
        value
    }

    pub async fn del(&self, scope: &RequestScope, key: &str) {
        let existed = self.table.write().await.del(key);
        debug!(tx = scope.tx_id(), existed, "success del query");
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::table::{HashTable, TableKind};

    #[tokio::test]
    async fn test_set_and_get() {
        let engine = Engine::new(Box::new(HashTable::new()));
        let scope = RequestScope::new(555);

        engine.set(&scope, "key_1", "value_1").await;
        assert_eq!(engine.get(&scope, "key_1").await, Some("value_1".to_string()));
        assert_eq!(engine.get(&scope, "key_2").await, None);
    }

    #[tokio::test]
    async fn test_del() {
        let engine = Engine::new(TableKind::Ordered.build());
        let scope = RequestScope::new(555);

        engine.set(&scope, "key_1", "value_1").await;
        engine.del(&scope, "key_1").await;
        assert_eq!(engine.get(&scope, "key_1").await, None);
        assert!(engine.is_empty().await);

        // Deleting a missing key is not an error.
        engine.del(&scope, "key_1").await;
        assert!(engine.is_empty().await);
    }

    #[tokio::test]
    async fn test_engine_ignores_cancellation() {
        let engine = Engine::new(Box::new(HashTable::new()));
        let scope = RequestScope::new(555);
        scope.cancel();

        engine.set(&scope, "k", "v").await;
        assert_eq!(engine.len().await, 1);
    }
}
