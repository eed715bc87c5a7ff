//! Fixture generation.
//!
//! Content draws follow a fixed order (every author's name first, then each
//! author's posts in author insertion order), so two runs with the same
//! seed produce identical text in identical positions.

use tracing::info;

use crate::constants::{FIXTURE_AUTHORS_COUNT_MAX, FIXTURE_POSTS_PER_AUTHOR_COUNT_MAX};
use crate::store::{new_record_id, Author, FixtureStore, Post, StoreResult};

use super::config::FixtureConfig;
use super::content;
use super::rng::DeterministicRng;

/// Populate `store` with `config.authors` authors carrying
/// `config.posts_per_author` posts each.
///
/// # Errors
/// Propagates store errors. Referential checks cannot fail here: every post
/// references an author created in the same run.
///
/// # Panics
/// Panics if the config exceeds the generation bounds.
pub async fn seed_store(store: &FixtureStore, config: &FixtureConfig) -> StoreResult<()> {
    // Preconditions
    assert!(
        config.authors <= FIXTURE_AUTHORS_COUNT_MAX,
        "authors {} exceeds max {}",
        config.authors,
        FIXTURE_AUTHORS_COUNT_MAX
    );
    assert!(
        config.posts_per_author <= FIXTURE_POSTS_PER_AUTHOR_COUNT_MAX,
        "posts_per_author {} exceeds max {}",
        config.posts_per_author,
        FIXTURE_POSTS_PER_AUTHOR_COUNT_MAX
    );

    let mut rng = DeterministicRng::with_seed(config.seed);

    let mut authors = Vec::with_capacity(config.authors);
    for _ in 0..config.authors {
        let author = Author::new(new_record_id(), content::full_name(&mut rng));
        store.insert_author(author.clone()).await;
        authors.push(author);
    }

    for author in &authors {
        for _ in 0..config.posts_per_author {
            let post = Post::new(
                new_record_id(),
                content::title(&mut rng),
                content::short_description(&mut rng),
                author.id.clone(),
            );
            store.insert_post(post).await?;
        }
    }

    info!(
        seed = config.seed,
        authors = config.authors,
        posts_per_author = config.posts_per_author,
        "seeded fixture store"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_store_default_shape() {
        let store = FixtureStore::new();

        seed_store(&store, &FixtureConfig::default()).await.expect("seeding succeeds");

        assert_eq!(store.counts().await, (2, 8));
        for author in store.authors().await {
            assert_eq!(store.posts_by_author(author.id.as_str()).await.len(), 4);
        }
    }

    #[tokio::test]
    async fn test_seed_store_content_is_reproducible() {
        let store_a = FixtureStore::new();
        let store_b = FixtureStore::new();
        let config = FixtureConfig::default();

        seed_store(&store_a, &config).await.expect("seeding succeeds");
        seed_store(&store_b, &config).await.expect("seeding succeeds");

        let names_a: Vec<String> = store_a.authors().await.into_iter().map(|a| a.name).collect();
        let names_b: Vec<String> = store_b.authors().await.into_iter().map(|a| a.name).collect();
        assert_eq!(names_a, names_b);

        let text_a: Vec<(String, String)> =
            store_a.posts().await.into_iter().map(|p| (p.title, p.body)).collect();
        let text_b: Vec<(String, String)> =
            store_b.posts().await.into_iter().map(|p| (p.title, p.body)).collect();
        assert_eq!(text_a, text_b);
    }

    #[tokio::test]
    async fn test_seed_store_ids_are_not_part_of_the_seeded_stream() {
        let store_a = FixtureStore::new();
        let store_b = FixtureStore::new();
        let config = FixtureConfig::default();

        seed_store(&store_a, &config).await.expect("seeding succeeds");
        seed_store(&store_b, &config).await.expect("seeding succeeds");

        let ids_a: Vec<String> =
            store_a.authors().await.into_iter().map(|a| a.id.to_string()).collect();
        let ids_b: Vec<String> =
            store_b.authors().await.into_iter().map(|a| a.id.to_string()).collect();
        assert_ne!(ids_a, ids_b);
    }

    #[tokio::test]
    async fn test_seed_store_custom_shape() {
        let store = FixtureStore::new();
        let config = FixtureConfig { seed: 42, authors: 3, posts_per_author: 1 };

        seed_store(&store, &config).await.expect("seeding succeeds");

        assert_eq!(store.counts().await, (3, 3));
    }

    #[tokio::test]
    #[should_panic(expected = "authors")]
    async fn test_seed_store_rejects_oversized_config() {
        let store = FixtureStore::new();
        let config =
            FixtureConfig { seed: 1, authors: FIXTURE_AUTHORS_COUNT_MAX + 1, posts_per_author: 1 };
        let _ = seed_store(&store, &config).await;
    }
}
