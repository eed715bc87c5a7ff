//! Constants for the fixture backend.
//!
//! TigerStyle: every limit and default is named, bounded, and lives here.

// =============================================================================
// Fixture Generation
// =============================================================================

/// Default seed for fixture content generation.
///
/// Two stores seeded with the same value produce byte-identical names,
/// titles, and bodies in the same order. Ids are minted outside the seeded
/// stream and are not reproducible.
pub const FIXTURE_SEED_DEFAULT: u64 = 666;

/// Number of authors the default generation run seeds.
pub const FIXTURE_AUTHORS_COUNT: usize = 2;

/// Number of posts seeded per author.
pub const FIXTURE_POSTS_PER_AUTHOR_COUNT: usize = 4;

/// Upper bound on authors per generation run.
pub const FIXTURE_AUTHORS_COUNT_MAX: usize = 64;

/// Upper bound on posts per author per generation run.
pub const FIXTURE_POSTS_PER_AUTHOR_COUNT_MAX: usize = 64;

// =============================================================================
// Record Limits
// =============================================================================

/// Maximum author name length in bytes.
pub const AUTHOR_NAME_BYTES_MAX: usize = 256;

/// Maximum post title length in bytes.
pub const POST_TITLE_BYTES_MAX: usize = 512;

/// Maximum post body length in bytes.
pub const POST_BODY_BYTES_MAX: usize = 16_384;

// =============================================================================
// Interception
// =============================================================================

/// Status implied for every intercepted reply.
pub const MOCK_REPLY_STATUS_OK: u16 = 200;
