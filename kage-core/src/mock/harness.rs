//! MockHarness - Deterministic Request Mocking
//!
//! `mock` turns a logical request into the fixed network reply for
//! everything that follows: reset the interception layer, execute the
//! document to completion, register the full response as the wildcard
//! reply, hand the response back. Engine errors travel inside the payload,
//! not as control flow.

use std::sync::Arc;

use async_graphql::Response;
use tracing::debug;

use crate::graphql::{execute, GraphQlRequest, KageSchema};

use super::intercept::InterceptLayer;

/// Errors minting the registered reply body.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// The engine response could not be serialized into a reply body.
    #[error("failed to serialize response body: {0}")]
    ReplySerialize(#[from] serde_json::Error),
}

/// Drives the execution adapter and feeds the interception layer.
#[derive(Clone)]
pub struct MockHarness {
    schema: KageSchema,
    net: Arc<InterceptLayer>,
}

impl MockHarness {
    /// Create a harness over an executable schema and an interception layer.
    #[must_use]
    pub fn new(schema: KageSchema, net: Arc<InterceptLayer>) -> Self {
        Self { schema, net }
    }

    /// Produce the fixed reply for `request`.
    ///
    /// Prior rules are cleared first, and the new rule is registered only
    /// after execution settles, so no call can observe a half-prepared
    /// mock and no stale reply survives.
    ///
    /// # Errors
    /// [`MockError::ReplySerialize`] if the response body cannot be
    /// serialized. Execution errors are data: they are registered and
    /// returned like any successful payload.
    pub async fn mock(&self, request: &GraphQlRequest) -> Result<Response, MockError> {
        self.net.reset().await;

        let response = execute(&self.schema, request).await;

        let body = serde_json::to_value(&response)?;
        self.net.reply_any(body).await;
        debug!(errors = response.errors.len(), "mocked query request");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{seed_store, FixtureConfig};
    use crate::graphql::build_schema;
    use crate::mock::OutboundCall;
    use crate::store::FixtureStore;

    async fn harness() -> (MockHarness, Arc<InterceptLayer>) {
        let store = Arc::new(FixtureStore::new());
        seed_store(&store, &FixtureConfig::default()).await.expect("seeding succeeds");
        let net = Arc::new(InterceptLayer::new());
        let harness = MockHarness::new(build_schema(store), Arc::clone(&net));
        (harness, net)
    }

    #[tokio::test]
    async fn test_mock_registers_exactly_one_rule() {
        let (harness, net) = harness().await;

        let response = harness
            .mock(&GraphQlRequest::new("{ authors { name } }"))
            .await
            .expect("mock succeeds");

        assert!(response.is_ok());
        assert_eq!(net.rule_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_reply_matches_returned_response() {
        let (harness, net) = harness().await;

        let response = harness
            .mock(&GraphQlRequest::new("{ posts { title } }"))
            .await
            .expect("mock succeeds");

        let reply = net
            .handle(&OutboundCall::new("POST", "https://example.test/graphql"))
            .await
            .expect("wildcard matches");

        assert_eq!(reply.body, serde_json::to_value(&response).expect("response serializes"));
    }

    #[tokio::test]
    async fn test_mock_registers_engine_errors_as_payload() {
        let (harness, net) = harness().await;

        let response = harness
            .mock(&GraphQlRequest::new("{ nonsense }"))
            .await
            .expect("mock succeeds even when execution fails");

        assert!(!response.errors.is_empty());
        assert_eq!(net.rule_count().await, 1);
        let reply = net
            .handle(&OutboundCall::new("POST", "https://example.test/graphql"))
            .await
            .expect("wildcard matches");
        assert!(reply.body.get("errors").is_some());
    }
}
