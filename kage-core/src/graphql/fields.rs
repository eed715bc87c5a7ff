//! Relationship field resolvers.
//!
//! `Author.posts` is recomputed from the post collection on every
//! resolution, so it never goes stale after post mutations. `Post.author`
//! resolves the foreign key; a dangling reference resolves to null, never
//! an error.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Result};

use crate::store::{Author, FixtureStore, Post};

#[ComplexObject]
impl Author {
    /// Posts written by this author, in insertion order.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.posts_by_author(self.id.as_str()).await)
    }
}

#[ComplexObject]
impl Post {
    /// The author this post references.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<FixtureStore>>()?;
        Ok(store.author(self.author.as_str()).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixture::{seed_store, FixtureConfig};
    use crate::graphql::{build_schema, execute, GraphQlRequest};
    use crate::store::FixtureStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_post_author_resolves_foreign_key() {
        let store = Arc::new(FixtureStore::new());
        seed_store(&store, &FixtureConfig::default()).await.expect("seeding succeeds");
        let schema = build_schema(Arc::clone(&store));

        let response =
            execute(&schema, &GraphQlRequest::new("{ posts { author { id } } }")).await;

        assert!(response.is_ok());
        let data = response.data.into_json().expect("data is json");
        let posts = data["posts"].as_array().expect("posts is a list");
        let stored = store.posts().await;
        assert_eq!(posts.len(), stored.len());
        for (resolved, post) in posts.iter().zip(stored) {
            assert_eq!(resolved["author"]["id"].as_str(), Some(post.author.as_str()));
        }
    }

    #[tokio::test]
    async fn test_author_posts_reflects_later_mutations() {
        let store = Arc::new(FixtureStore::new());
        let schema = build_schema(Arc::clone(&store));
        let ada = store.create_author("Ada".to_string()).await;

        // The relationship is recomputed per resolution: a post created
        // after the author still shows up.
        store
            .create_post("Title".to_string(), "Body".to_string(), ada.id.clone())
            .await
            .expect("author exists");

        let response = execute(
            &schema,
            &GraphQlRequest::new("{ authors { posts { title } } }"),
        )
        .await;

        assert!(response.is_ok());
        let data = response.data.into_json().expect("data is json");
        assert_eq!(data["authors"][0]["posts"][0]["title"].as_str(), Some("Title"));
    }
}
