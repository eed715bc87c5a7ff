//! Author and Post records.
//!
//! The records double as the schema's object types: `SimpleObject` derives
//! expose the stored fields, and the relationship resolvers in
//! `graphql::fields` add `Author.posts` and `Post.author` on top.
//!
//! TigerStyle: explicit fields, assert-guarded constructors.

use async_graphql::{SimpleObject, ID};
use serde::{Deserialize, Serialize};

use crate::constants::{AUTHOR_NAME_BYTES_MAX, POST_BODY_BYTES_MAX, POST_TITLE_BYTES_MAX};

/// Mint a fresh record identifier (UUID v4, stringified).
///
/// Ids are deliberately outside the seeded fixture stream: reproducibility
/// is guaranteed for content fields only.
#[must_use]
pub fn new_record_id() -> ID {
    ID(uuid::Uuid::new_v4().to_string())
}

// =============================================================================
// Author
// =============================================================================

/// A writer of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    /// Unique, stable identifier.
    pub id: ID,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Create an author.
    ///
    /// # Panics
    /// Panics if `name` exceeds [`AUTHOR_NAME_BYTES_MAX`].
    #[must_use]
    pub fn new(id: ID, name: String) -> Self {
        assert!(
            name.len() <= AUTHOR_NAME_BYTES_MAX,
            "name {} bytes exceeds max {}",
            name.len(),
            AUTHOR_NAME_BYTES_MAX
        );

        Self { id, name }
    }
}

// =============================================================================
// Post
// =============================================================================

/// A post referencing exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Post {
    /// Unique identifier.
    pub id: ID,
    /// Headline.
    pub title: String,
    /// Main text.
    pub body: String,
    /// Id of the author this post belongs to. Reached through the
    /// `Post.author` relationship resolver rather than as a raw id.
    #[graphql(skip)]
    pub author: ID,
}

impl Post {
    /// Create a post.
    ///
    /// # Panics
    /// Panics if `title` or `body` exceed their byte limits.
    #[must_use]
    pub fn new(id: ID, title: String, body: String, author: ID) -> Self {
        assert!(
            title.len() <= POST_TITLE_BYTES_MAX,
            "title {} bytes exceeds max {}",
            title.len(),
            POST_TITLE_BYTES_MAX
        );
        assert!(
            body.len() <= POST_BODY_BYTES_MAX,
            "body {} bytes exceeds max {}",
            body.len(),
            POST_BODY_BYTES_MAX
        );

        Self { id, title, body, author }
    }
}

// =============================================================================
// Patches
// =============================================================================

/// Partial update for an author. Fields left `None` are untouched.
///
/// Only the known fields exist, so an unknown field cannot be merged; the
/// record id is never part of a patch.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    /// New display name.
    pub name: Option<String>,
}

impl AuthorPatch {
    pub(crate) fn apply(self, author: &mut Author) {
        if let Some(name) = self.name {
            assert!(
                name.len() <= AUTHOR_NAME_BYTES_MAX,
                "name {} bytes exceeds max {}",
                name.len(),
                AUTHOR_NAME_BYTES_MAX
            );
            author.name = name;
        }
    }
}

/// Partial update for a post. Fields left `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    /// New headline.
    pub title: Option<String>,
    /// New main text.
    pub body: Option<String>,
    /// Retarget the post to another author. The store validates the new
    /// author exists before the patch is applied.
    pub author: Option<ID>,
}

impl PostPatch {
    pub(crate) fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            assert!(
                title.len() <= POST_TITLE_BYTES_MAX,
                "title {} bytes exceeds max {}",
                title.len(),
                POST_TITLE_BYTES_MAX
            );
            post.title = title;
        }
        if let Some(body) = self.body {
            assert!(
                body.len() <= POST_BODY_BYTES_MAX,
                "body {} bytes exceeds max {}",
                body.len(),
                POST_BODY_BYTES_MAX
            );
            post.body = body;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
