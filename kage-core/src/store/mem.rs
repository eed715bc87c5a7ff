//! FixtureStore - In-Memory Relational Store
//!
//! TigerStyle: single lock, snapshot-then-mutate, referential integrity
//! enforced at the write boundary.
//!
//! Pass the store explicitly (`Arc`) wherever it is needed; there is no
//! global instance, so isolated test backends never interfere.

use async_graphql::ID;
use tokio::sync::RwLock;
use tracing::debug;

use super::collection::Collection;
use super::error::{StoreError, StoreResult};
use super::record::{new_record_id, Author, AuthorPatch, Post, PostPatch};

#[derive(Debug, Default)]
struct Tables {
    authors: Collection<Author>,
    posts: Collection<Post>,
}

/// The in-memory relational fixture store.
///
/// Holds the author and post collections and exposes the schema-bound
/// read/write operations the resolver bindings translate to. Both tables
/// sit behind one `RwLock` so a cascading delete is atomic.
#[derive(Debug, Default)]
pub struct FixtureStore {
    tables: RwLock<Tables>,
}

impl FixtureStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Find an author by id.
    pub async fn author(&self, id: &str) -> Option<Author> {
        self.tables.read().await.authors.find(|a| a.id.as_str() == id)
    }

    /// Every author, in insertion order.
    pub async fn authors(&self) -> Vec<Author> {
        self.tables.read().await.authors.filter(|_| true)
    }

    /// Find a post by id.
    pub async fn post(&self, id: &str) -> Option<Post> {
        self.tables.read().await.posts.find(|p| p.id.as_str() == id)
    }

    /// Every post, in insertion order.
    pub async fn posts(&self) -> Vec<Post> {
        self.tables.read().await.posts.filter(|_| true)
    }

    /// Every post referencing the given author, in insertion order.
    ///
    /// This is the derived `Author.posts` relationship, recomputed on every
    /// call so it can never go stale.
    pub async fn posts_by_author(&self, author_id: &str) -> Vec<Post> {
        self.tables.read().await.posts.filter(|p| p.author.as_str() == author_id)
    }

    /// (author count, post count).
    pub async fn counts(&self) -> (usize, usize) {
        let tables = self.tables.read().await;
        (tables.authors.len(), tables.posts.len())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a pre-built author.
    ///
    /// # Panics
    /// Panics if the id is already present. Ids are unique and never reused.
    pub async fn insert_author(&self, author: Author) {
        let mut tables = self.tables.write().await;
        assert!(
            tables.authors.find(|a| a.id == author.id).is_none(),
            "duplicate author id: {}",
            author.id.as_str()
        );

        debug!(id = author.id.as_str(), "insert author");
        tables.authors.insert(author);
    }

    /// Insert a pre-built post.
    ///
    /// # Errors
    /// [`StoreError::UnknownAuthor`] if the referenced author does not exist.
    ///
    /// # Panics
    /// Panics if the id is already present.
    pub async fn insert_post(&self, post: Post) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        assert!(
            tables.posts.find(|p| p.id == post.id).is_none(),
            "duplicate post id: {}",
            post.id.as_str()
        );
        if tables.authors.find(|a| a.id == post.author).is_none() {
            return Err(StoreError::UnknownAuthor { id: post.author.to_string() });
        }

        debug!(id = post.id.as_str(), author = post.author.as_str(), "insert post");
        tables.posts.insert(post);
        Ok(())
    }

    /// Create an author with a freshly minted id.
    pub async fn create_author(&self, name: String) -> Author {
        let author = Author::new(new_record_id(), name);
        self.insert_author(author.clone()).await;
        author
    }

    /// Create a post with a freshly minted id.
    ///
    /// # Errors
    /// [`StoreError::UnknownAuthor`] if `author` does not exist.
    pub async fn create_post(&self, title: String, body: String, author: ID) -> StoreResult<Post> {
        let post = Post::new(new_record_id(), title, body, author);
        self.insert_post(post.clone()).await?;
        Ok(post)
    }

    /// Merge a patch into the author with the given id.
    ///
    /// Returns the updated record, or `None` when no author matched
    /// (nothing updated — not an error). The id is never changed.
    pub async fn update_author(&self, id: &str, patch: AuthorPatch) -> Option<Author> {
        let mut tables = self.tables.write().await;
        let updated = tables.authors.update(|a| a.id.as_str() == id, |a| patch.apply(a));
        if updated.is_some() {
            debug!(id, "update author");
        }
        updated
    }

    /// Merge a patch into the post with the given id.
    ///
    /// Returns the updated record, or `None` when no post matched.
    ///
    /// # Errors
    /// [`StoreError::UnknownAuthor`] if the patch retargets the post to an
    /// author that does not exist. The post is left untouched in that case.
    pub async fn update_post(&self, id: &str, patch: PostPatch) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        if let Some(author_id) = &patch.author {
            if tables.authors.find(|a| &a.id == author_id).is_none() {
                return Err(StoreError::UnknownAuthor { id: author_id.to_string() });
            }
        }

        let updated = tables.posts.update(|p| p.id.as_str() == id, |p| patch.apply(p));
        if updated.is_some() {
            debug!(id, "update post");
        }
        Ok(updated)
    }

    /// Delete the author with the given id, cascading to every post that
    /// references it. Dangling posts must never persist.
    ///
    /// Returns the pre-deletion snapshot, or `None` when no author matched.
    pub async fn delete_author(&self, id: &str) -> Option<Author> {
        let mut tables = self.tables.write().await;
        let author = tables.authors.remove(|a| a.id.as_str() == id)?;
        let cascaded = tables.posts.remove_all(|p| p.author.as_str() == id);

        debug!(id, cascaded = cascaded.len(), "delete author");
        Some(author)
    }

    /// Delete the post with the given id.
    ///
    /// Returns the pre-deletion snapshot, or `None` when no post matched.
    pub async fn delete_post(&self, id: &str) -> Option<Post> {
        let mut tables = self.tables.write().await;
        let post = tables.posts.remove(|p| p.id.as_str() == id);
        if post.is_some() {
            debug!(id, "delete post");
        }
        post
    }
}

// =============================================================================
// Tests
// =============================================================================
