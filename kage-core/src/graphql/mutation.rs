//! Root mutation resolvers.
//!
//! Create operations always mint the id (no id argument exists); update
//! operations never change it. A missing target yields null; a referential
//! violation yields an error entry in the response.

use std::sync::Arc;

use async_graphql::{Context, Error, Object, Result, ID};

use crate::store::{Author, AuthorPatch, FixtureStore, Post, PostPatch};

/// Root of the write operations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an author with a fresh id.
    async fn create_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.create_author(name).await)
    }

    /// Update an author's fields; null when no author has the id.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
    ) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.update_author(id.as_str(), AuthorPatch { name }).await)
    }

    /// Delete an author and every post referencing it.
    ///
    /// Returns the pre-deletion snapshot, or null when no author has the id.
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.delete_author(id.as_str()).await)
    }

    /// Create a post with a fresh id. The referenced author must exist.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        author: ID,
    ) -> Result<Post> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        store.create_post(title, body, author).await.map_err(Error::new_with_source)
    }

    /// Update a post's fields; null when no post has the id. Retargeting
    /// `author` requires the new author to exist.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        body: Option<String>,
        author: Option<ID>,
    ) -> Result<Option<Post>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        store
            .update_post(id.as_str(), PostPatch { title, body, author })
            .await
            .map_err(Error::new_with_source)
    }

    /// Delete a post; returns the pre-deletion snapshot, or null.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.delete_post(id.as_str()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{build_schema, execute, GraphQlRequest};
    use serde_json::json;

    fn empty_schema() -> (Arc<FixtureStore>, crate::graphql::KageSchema) {
        let store = Arc::new(FixtureStore::new());
        let schema = build_schema(Arc::clone(&store));
        (store, schema)
    }

    #[tokio::test]
    async fn test_create_author_mints_id() {
        let (store, schema) = empty_schema();

        let response = execute(
            &schema,
            &GraphQlRequest::new(r#"mutation { createAuthor(name: "Ada") { id name } }"#),
        )
        .await;

        assert!(response.is_ok());
        let data = response.data.into_json().expect("data is json");
        let id = data["createAuthor"]["id"].as_str().expect("id is a string");
        assert!(!id.is_empty());
        assert!(store.author(id).await.is_some());
    }

    #[tokio::test]
    async fn test_update_author_missing_target_is_null() {
        let (_store, schema) = empty_schema();

        let response = execute(
            &schema,
            &GraphQlRequest::new(r#"mutation { updateAuthor(id: "ghost", name: "X") { name } }"#),
        )
        .await;

        assert!(response.is_ok());
        let data = response.data.into_json().expect("data is json");
        assert!(data["updateAuthor"].is_null());
    }

    #[tokio::test]
    async fn test_create_post_unknown_author_is_an_error() {
        let (store, schema) = empty_schema();

        let response = execute(
            &schema,
            &GraphQlRequest::new(
                r#"mutation { createPost(title: "T", body: "B", author: "ghost") { id } }"#,
            ),
        )
        .await;

        assert!(!response.errors.is_empty());
        assert!(response.errors[0].message.contains("unknown author"));
        assert_eq!(store.counts().await, (0, 0));
    }

    #[tokio::test]
    async fn test_delete_author_returns_pre_deletion_snapshot() {
        let (store, schema) = empty_schema();
        let ada = store.create_author("Ada".to_string()).await;

        let response = execute(
            &schema,
            &GraphQlRequest::new("mutation($id: ID!) { deleteAuthor(id: $id) { id name } }")
                .with_variables(json!({ "id": ada.id.as_str() })),
        )
        .await;

        assert!(response.is_ok());
        let data = response.data.into_json().expect("data is json");
        assert_eq!(data["deleteAuthor"]["name"].as_str(), Some("Ada"));
        assert!(store.author(ada.id.as_str()).await.is_none());
    }
}
