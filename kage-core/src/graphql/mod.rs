//! GraphQL - Schema, Resolver Bindings, Execution Adapter
//!
//! The schema is derived from the record types; document parsing,
//! validation, variable coercion, and execution all belong to the engine.
//! This module binds field names to store operations and forwards
//! `(document, variables)` pairs — nothing else. No caching, no retries.

pub mod documents;

mod fields;
mod mutation;
mod query;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Request, Response, Schema, Variables};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::FixtureStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema of the fixture backend.
pub type KageSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// A query/mutation request in transport shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest {
    /// The document text.
    pub query: String,
    /// Variable values; JSON null means none.
    #[serde(default)]
    pub variables: serde_json::Value,
    /// Operation to run when the document contains several.
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    /// Request with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: serde_json::Value::Null,
            operation_name: None,
        }
    }

    /// Attach variable values.
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = variables;
        self
    }
}

/// Build the executable schema with `store` injected as engine context data.
#[must_use]
pub fn build_schema(store: Arc<FixtureStore>) -> KageSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Execute `request` against `schema` and return the engine's result
/// verbatim — data and/or errors. Errors are part of the payload, not
/// control flow.
pub async fn execute(schema: &KageSchema, request: &GraphQlRequest) -> Response {
    let mut engine_request = Request::new(request.query.as_str())
        .variables(Variables::from_json(request.variables.clone()));
    if let Some(operation_name) = &request.operation_name {
        engine_request = engine_request.operation_name(operation_name.as_str());
    }

    debug!(operation_name = request.operation_name.as_deref(), "execute document");
    schema.execute(engine_request).await
}
