//! Kage Core - Deterministic GraphQL Fixture Backend
//!
//! An in-process substitute for a remote GraphQL service, used to exercise
//! client code without a network or a database. It seeds a small relational
//! dataset, binds it to a schema, executes documents against it, and can
//! replay the resulting response through an interception layer so that code
//! issuing outbound calls receives fixed, reproducible answers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   FixtureBackend                      │
//! ├──────────────────────────────────────────────────────┤
//! │  FixtureStore    │ authors + posts behind one lock    │
//! │  KageSchema      │ resolver bindings, engine-executed │
//! │  InterceptLayer  │ wildcard reply rules               │
//! │  MockHarness     │ reset → execute → register         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use kage_core::{documents, FixtureBackend, GraphQlRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let backend = FixtureBackend::seeded().await?;
//!
//! // Execute and register the response as the reply for any outbound call.
//! let response = backend.mock(&GraphQlRequest::new(documents::AUTHORS)).await?;
//! assert!(response.is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! Seeds are logged for reproducibility: a dataset can always be
//! regenerated from its seed, though record ids are minted fresh each run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod constants;
pub mod fixture;
pub mod graphql;
pub mod mock;
pub mod store;

// Re-export common types
pub use backend::FixtureBackend;
pub use constants::*;
pub use fixture::{seed_store, DeterministicRng, FixtureConfig};
pub use graphql::{
    build_schema, documents, execute, GraphQlRequest, KageSchema, MutationRoot, QueryRoot,
};
pub use mock::{InterceptLayer, MockError, MockHarness, MockReply, NetError, OutboundCall};
pub use store::{
    new_record_id, Author, AuthorPatch, FixtureStore, Post, PostPatch, StoreError, StoreResult,
};
