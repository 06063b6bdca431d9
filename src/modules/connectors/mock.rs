//! In-memory mock connector
//!
//! The reference adapter for the connector contract. It holds its tables
//! in memory, enforces the session state machine, and streams rows the
//! same way a real adapter would, which makes it the substitute of choice
//! in tests instead of a runtime-patched stand-in.

use async_trait::async_trait;
use dataport_core::{policy, ConnectionConfig, DataportError};
use dataport_types::{row_from_pairs, Backend, Row, Schema, SessionState};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

use super::traits::{DatabasePort, RowStream};

/// One in-memory table: column layout plus rows in insertion order
#[derive(Debug, Clone)]
struct MockTable {
    schema: Schema,
    rows: Vec<Row>,
}

/// In-memory reference connector
pub struct MockConnector {
    config: ConnectionConfig,
    state: SessionState,
    tables: HashMap<String, MockTable>,
}

impl MockConnector {
    /// Create a new mock connector seeded with the default dataset
    ///
    /// The seed contains a `users` table (Alice and Bob) and a `products`
    /// table, so tests have something to query without any setup.
    pub fn new(config: ConnectionConfig) -> Self {
        let mut tables = HashMap::new();

        tables.insert(
            "users".to_string(),
            MockTable {
                schema: Schema::from([
                    ("id".to_string(), "INTEGER".to_string()),
                    ("name".to_string(), "TEXT".to_string()),
                ]),
                rows: vec![
                    row_from_pairs(&[("id", json!(1)), ("name", json!("Alice"))]),
                    row_from_pairs(&[("id", json!(2)), ("name", json!("Bob"))]),
                ],
            },
        );

        tables.insert(
            "products".to_string(),
            MockTable {
                schema: Schema::from([
                    ("id".to_string(), "INTEGER".to_string()),
                    ("name".to_string(), "TEXT".to_string()),
                    ("price".to_string(), "REAL".to_string()),
                ]),
                rows: vec![
                    row_from_pairs(&[
                        ("id", json!(101)),
                        ("name", json!("Widget")),
                        ("price", json!(9.99)),
                    ]),
                    row_from_pairs(&[
                        ("id", json!(102)),
                        ("name", json!("Gadget")),
                        ("price", json!(19.99)),
                    ]),
                ],
            },
        );

        Self {
            config,
            state: SessionState::Unconnected,
            tables,
        }
    }

    /// Replace or register a table, for tests needing custom data
    pub fn with_table(mut self, name: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Self {
        self.tables.insert(name.into(), MockTable { schema, rows });
        self
    }

    /// The configuration this connector was built from
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn ensure_connected(&self, operation: &str) -> Result<(), DataportError> {
        if self.state.can_query() {
            Ok(())
        } else {
            Err(DataportError::state(operation, self.state))
        }
    }

    /// Extract the table name following `FROM`
    ///
    /// Deliberately naive: the policy layer is an allow-list, not a SQL
    /// parser, and the mock follows suit.
    fn target_table(query: &str) -> Option<String> {
        let mut tokens = query.split_whitespace();
        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("from") {
                return tokens
                    .next()
                    .map(|t| t.trim_end_matches(';').to_lowercase());
            }
        }
        None
    }
}

#[async_trait]
impl DatabasePort for MockConnector {
    async fn connect(&mut self) -> Result<(), DataportError> {
        match self.state {
            // Already holding the one session; nothing to leak
            SessionState::Connected => Ok(()),
            SessionState::Closed => Err(DataportError::state("connect", self.state)),
            SessionState::Unconnected => {
                debug!(backend = %self.backend(), "mock session established");
                self.state = SessionState::Connected;
                Ok(())
            }
        }
    }

    async fn close(&mut self) -> Result<(), DataportError> {
        if self.state == SessionState::Connected {
            debug!(backend = %self.backend(), "mock session closed");
        }
        self.tables.clear();
        self.state = SessionState::Closed;
        Ok(())
    }

    async fn execute_query_stream(&mut self, query: &str) -> Result<RowStream, DataportError> {
        self.ensure_connected("execute_query_stream")?;

        // Policy check happens before any table access
        policy::validate_query(query)?;

        let table = Self::target_table(query).ok_or_else(|| {
            DataportError::QueryExecution(format!("no FROM target in query: {}", query))
        })?;

        let rows = self
            .tables
            .get(&table)
            .ok_or_else(|| {
                DataportError::QueryExecution(format!("relation '{}' does not exist", table))
            })?
            .rows
            .clone();

        Ok(Box::pin(tokio_stream::iter(rows.into_iter().map(Ok))))
    }

    async fn fetch_schema(&mut self, target: &str) -> Result<Schema, DataportError> {
        self.ensure_connected("fetch_schema")?;

        self.tables
            .get(&target.to_lowercase())
            .map(|t| t.schema.clone())
            .ok_or_else(|| DataportError::NotFound(target.to_string()))
    }

    fn backend(&self) -> Backend {
        Backend::Mock
    }

    fn state(&self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn connector() -> MockConnector {
        MockConnector::new(ConnectionConfig::new(Backend::Mock))
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let mut mock = connector();
        assert_eq!(mock.state(), SessionState::Unconnected);

        mock.connect().await.unwrap();
        assert_eq!(mock.state(), SessionState::Connected);

        mock.close().await.unwrap();
        assert_eq!(mock.state(), SessionState::Closed);
    }

    #[tokio::test]
    async fn test_connect_twice_is_noop() {
        let mut mock = connector();
        mock.connect().await.unwrap();
        mock.connect().await.unwrap();
        assert_eq!(mock.state(), SessionState::Connected);
    }

    #[tokio::test]
    async fn test_connect_after_close_fails() {
        let mut mock = connector();
        mock.connect().await.unwrap();
        mock.close().await.unwrap();

        let err = mock.connect().await.unwrap_err();
        assert!(matches!(err, DataportError::State { .. }));
    }

    #[tokio::test]
    async fn test_close_before_connect_never_errors() {
        let mut mock = connector();
        mock.close().await.unwrap();
        assert_eq!(mock.state(), SessionState::Closed);
    }

    #[test]
    fn test_config_accessor() {
        let mock = MockConnector::new(ConnectionConfig::new(Backend::Mock).with_read_only(true));
        assert!(mock.config().read_only);
    }

    #[tokio::test]
    async fn test_query_unknown_table() {
        let mut mock = connector();
        mock.connect().await.unwrap();

        let err = mock
            .execute_query_stream("SELECT * FROM missing_table")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, DataportError::QueryExecution(_)));
    }

    #[tokio::test]
    async fn test_query_without_from_target() {
        let mut mock = connector();
        mock.connect().await.unwrap();

        let err = mock.execute_query_stream("SELECT 1").await.err().unwrap();
        assert!(matches!(err, DataportError::QueryExecution(_)));
    }

    #[tokio::test]
    async fn test_fetch_schema() {
        let mut mock = connector();
        mock.connect().await.unwrap();

        let schema = mock.fetch_schema("users").await.unwrap();
        assert_eq!(schema.get("id").map(String::as_str), Some("INTEGER"));
        assert_eq!(schema.get("name").map(String::as_str), Some("TEXT"));
    }

    #[tokio::test]
    async fn test_fetch_schema_not_found() {
        let mut mock = connector();
        mock.connect().await.unwrap();

        let err = mock.fetch_schema("no_such_view").await.unwrap_err();
        match err {
            DataportError::NotFound(target) => assert_eq!(target, "no_such_view"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_schema_before_connect() {
        let mut mock = connector();
        let err = mock.fetch_schema("users").await.unwrap_err();
        assert!(matches!(err, DataportError::State { .. }));
    }

    #[tokio::test]
    async fn test_with_table() {
        let schema = Schema::from([("total".to_string(), "INTEGER".to_string())]);
        let rows = vec![row_from_pairs(&[("total", json!(7))])];
        let mut mock = connector().with_table("orders", schema, rows);

        mock.connect().await.unwrap();
        let results: Vec<Row> = mock
            .execute_query_stream("SELECT total FROM orders")
            .await
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get("total"), Some(&json!(7)));
    }

    #[test]
    fn test_target_table_extraction() {
        assert_eq!(
            MockConnector::target_table("SELECT * FROM users"),
            Some("users".to_string())
        );
        assert_eq!(
            MockConnector::target_table("select id from Products;"),
            Some("products".to_string())
        );
        assert_eq!(MockConnector::target_table("SELECT 1"), None);
    }
}
