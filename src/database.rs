use crate::compute::{CommandId, Compute, Query};
use crate::context::RequestScope;
use crate::error::{DbError, DbResult};
use crate::storage::{Engine, Storage, TableKind};
use tracing::error;

/// Top of the pipeline: raw request text in, reply text out.
///
/// Every failure is rendered as an `[error] <message>` reply; nothing
/// escapes as an error value.
#[derive(Debug)]
pub struct Database {
    compute: Compute,
    storage: Storage,
}

impl Database {
    pub fn new(compute: Compute, storage: Storage) -> Self {
        Database { compute, storage }
    }

    /// Build the full stack over a fresh table of the given kind.
    pub fn with_table(kind: TableKind) -> Self {
        Self::new(Compute::new(), Storage::new(Engine::new(kind.build())))
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub async fn handle_query(&self, scope: &RequestScope, raw: &str) -> String {
        let query = match self.compute.handle_query(scope, raw) {
            Ok(query) => query,
            Err(e) => return e.to_reply(),
        };

        match self.execute(scope, &query).await {
            Ok(Some(value)) => format!("[ok] {value}"),
            Ok(None) => "[ok]".to_string(),
            Err(e) => e.to_reply(),
        }
    }

    async fn execute(&self, scope: &RequestScope, query: &Query) -> DbResult<Option<String>> {
        match (query.command_id(), query.arguments()) {
            (CommandId::Set, [key, value]) => {
                self.storage.set(scope, key, value).await?;
                Ok(None)
            }
            (CommandId::Get, [key]) => self.storage.get(scope, key).await.map(Some),
            (CommandId::Del, [key]) => {
                self.storage.del(scope, key).await?;
                Ok(None)
            }
            _ => {
                error!(tx = scope.tx_id(), ?query, "unexpected query at dispatch");
                Err(DbError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_db() -> Database {
        Database::with_table(TableKind::Hash)
    }

    #[tokio::test]
    async fn test_handle_set_query() {
        let db = new_db();
        let scope = RequestScope::new(555);
        assert_eq!(db.handle_query(&scope, "SET one 1").await, "[ok]");
        assert_eq!(db.handle_query(&scope, "GET one").await, "[ok] 1");
    }

    #[tokio::test]
    async fn test_unknown_command_at_dispatch() {
        let db = new_db();
        let scope = RequestScope::new(555);
        let query = Query::new(CommandId::Unknown, vec![]);

        let result = db.execute(&scope, &query).await;
        assert_eq!(result, Err(DbError::Internal));
        assert_eq!(result.unwrap_err().to_reply(), "[error] internal error");
    }

    #[tokio::test]
    async fn test_wrong_arity_at_dispatch() {
        let db = new_db();
        let scope = RequestScope::new(555);

        for query in [
            Query::new(CommandId::Set, vec!["key".to_string()]),
            Query::new(CommandId::Get, vec![]),
            Query::new(CommandId::Del, vec!["a".to_string(), "b".to_string()]),
        ] {
            assert_eq!(db.execute(&scope, &query).await, Err(DbError::Internal));
        }
        assert!(db.storage().engine().is_empty().await);
    }

    #[tokio::test]
    async fn test_storage_error_becomes_reply() {
        let db = new_db();
        let scope = RequestScope::new(555);
        scope.cancel();

        assert_eq!(db.handle_query(&scope, "SET one 1").await, "[error] context canceled");
        assert_eq!(db.handle_query(&scope, "GET one").await, "[error] context canceled");
        assert_eq!(db.handle_query(&scope, "DEL one").await, "[error] context canceled");
        assert!(db.storage().engine().is_empty().await);
    }

    #[tokio::test]
    async fn test_compute_error_checked_before_scope() {
        let db = new_db();
        let scope = RequestScope::new(555);
        scope.cancel();

        assert_eq!(db.handle_query(&scope, "GET %").await, "[error] invalid symbol");
    }
}
