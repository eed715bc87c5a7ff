//! Canned query and mutation documents.
//!
//! The documents client-library tests exercise most often, kept in one
//! place so tests and downstream callers share a single copy.

/// Both root collections with their nested relationships.
pub const POSTS_AND_AUTHORS: &str = r"
query {
    posts {
        title
        body
        author {
            name
        }
    }

    authors {
        name
        posts {
            title
            body
        }
    }
}
";

/// A single post by id.
pub const POST: &str = r"
query($id: ID!) {
    post(id: $id) {
        title
        body
        author {
            name
        }
    }
}
";

/// Every post with its author.
pub const POSTS: &str = r"
query {
    posts {
        title
        body
        author {
            name
        }
    }
}
";

/// A single author by id.
pub const AUTHOR: &str = r"
query($id: ID!) {
    author(id: $id) {
        name
        posts {
            title
            body
        }
    }
}
";

/// Every author with their posts.
pub const AUTHORS: &str = r"
query {
    authors {
        name
        posts {
            title
            body
        }
    }
}
";

/// Create an author by name.
pub const CREATE_AUTHOR: &str = r"
mutation($name: String!) {
    createAuthor(name: $name) {
        name
    }
}
";

/// Delete an author (and, by cascade, their posts).
pub const DELETE_AUTHOR: &str = r"
mutation($id: ID!) {
    deleteAuthor(id: $id) {
        name
    }
}
";
