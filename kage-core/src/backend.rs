//! FixtureBackend - Wired-Up Test Backend
//!
//! One store, one schema, one interception layer, assembled per instance.
//! Backends are fully isolated from each other; there is no process-global
//! state anywhere in the crate.

use std::sync::Arc;

use async_graphql::Response;

use crate::fixture::{seed_store, FixtureConfig};
use crate::graphql::{build_schema, execute, GraphQlRequest, KageSchema};
use crate::mock::{InterceptLayer, MockError, MockHarness};
use crate::store::{FixtureStore, StoreResult};

/// The in-process substitute for a remote GraphQL service.
pub struct FixtureBackend {
    store: Arc<FixtureStore>,
    schema: KageSchema,
    net: Arc<InterceptLayer>,
    harness: MockHarness,
}

impl FixtureBackend {
    /// Backend over an empty store.
    #[must_use]
    pub fn empty() -> Self {
        let store = Arc::new(FixtureStore::new());
        let schema = build_schema(Arc::clone(&store));
        let net = Arc::new(InterceptLayer::new());
        let harness = MockHarness::new(schema.clone(), Arc::clone(&net));
        Self { store, schema, net, harness }
    }

    /// Backend seeded with the default dataset: seed 666, 2 authors with
    /// 4 posts each.
    ///
    /// # Errors
    /// Propagates store errors from seeding.
    pub async fn seeded() -> StoreResult<Self> {
        Self::with_config(FixtureConfig::default()).await
    }

    /// Backend seeded under an explicit configuration.
    ///
    /// # Errors
    /// Propagates store errors from seeding.
    pub async fn with_config(config: FixtureConfig) -> StoreResult<Self> {
        let backend = Self::empty();
        seed_store(&backend.store, &config).await?;
        Ok(backend)
    }

    /// The shared store.
    #[must_use]
    pub fn store(&self) -> &Arc<FixtureStore> {
        &self.store
    }

    /// The executable schema.
    #[must_use]
    pub fn schema(&self) -> &KageSchema {
        &self.schema
    }

    /// The interception layer code under test should route outbound calls
    /// through.
    #[must_use]
    pub fn net(&self) -> &Arc<InterceptLayer> {
        &self.net
    }

    /// Execute a request; the engine's result comes back verbatim.
    pub async fn execute(&self, request: &GraphQlRequest) -> Response {
        execute(&self.schema, request).await
    }

    /// Execute a request and register its response as the fixed reply for
    /// any subsequent outbound call.
    ///
    /// # Errors
    /// [`MockError::ReplySerialize`] if the response body cannot be
    /// serialized.
    pub async fn mock(&self, request: &GraphQlRequest) -> Result<Response, MockError> {
        self.harness.mock(request).await
    }
}
