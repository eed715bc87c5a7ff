//! Root query resolvers.
//!
//! Each field is a direct translation to a store read; absence surfaces as
//! null, never as an error.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::store::{Author, FixtureStore, Post};

/// Root of the read operations.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single author by id.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.author(id.as_str()).await)
    }

    /// Every author, in insertion order.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.authors().await)
    }

    /// A single post by id.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.post(id.as_str()).await)
    }

    /// Every post, in insertion order.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.posts().await)
    }
}
