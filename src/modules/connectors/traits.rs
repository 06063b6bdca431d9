//! Connector contract definition

use async_trait::async_trait;
use dataport_core::DataportError;
use dataport_types::{Backend, Row, Schema, SessionState};
use futures::Stream;
use std::pin::Pin;

/// Lazy, forward-only stream of result rows
///
/// Rows are produced incrementally so large result sets are never
/// materialized in full. The stream cannot be restarted; polling after
/// exhaustion yields nothing. Dropping it cancels production and releases
/// whatever the producer held.
pub type RowStream = Pin<Box<dyn Stream<Item = Result<Row, DataportError>> + Send>>;

/// Capability contract every backend adapter implements
///
/// One instance owns one logical session and moves through
/// `Unconnected -> Connected -> Closed`. A single instance is not required
/// to be safe under concurrent calls; callers needing concurrent queries
/// use separate instances or a [`crate::ConnectorManager`].
#[async_trait]
pub trait DatabasePort: Send {
    /// Establish the underlying session
    ///
    /// Fails with a `Connection` error if the backend is unreachable or
    /// credentials are rejected. Calling on an already-connected instance
    /// must not leak a second session. `Closed` is terminal: the adapter
    /// either fails or the caller builds a fresh instance, the old session
    /// is never resurrected.
    async fn connect(&mut self) -> Result<(), DataportError>;

    /// Release all resources associated with the session
    ///
    /// Safe to call repeatedly, and safe to call even if `connect` never
    /// succeeded. Never errors for "already closed".
    async fn close(&mut self) -> Result<(), DataportError>;

    /// Validate and execute a query, streaming the result rows
    ///
    /// The query is checked against the read-only policy before any
    /// backend I/O; a rejected query fails with `Validation`. A query the
    /// backend rejects after validation passed fails with
    /// `QueryExecution`. Outside `Connected` this fails with `State`.
    ///
    /// # Arguments
    /// * `query` - The statement to execute
    ///
    /// # Returns
    /// A lazy stream of rows in whatever order the backend yields them
    async fn execute_query_stream(&mut self, query: &str) -> Result<RowStream, DataportError>;

    /// Fetch the column layout of a named table or view
    ///
    /// Fails with `NotFound` if the target does not exist, and with
    /// `State` outside `Connected`.
    async fn fetch_schema(&mut self, target: &str) -> Result<Schema, DataportError>;

    /// The backend kind this adapter serves
    fn backend(&self) -> Backend;

    /// Current lifecycle state of the session
    fn state(&self) -> SessionState;
}
