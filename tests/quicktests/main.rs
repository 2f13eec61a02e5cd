//! Property tests against the public API.

mod bound;
mod traversal;
