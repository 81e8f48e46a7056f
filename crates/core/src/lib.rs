//! Shared domain layer for the memopad workspace.
//!
//! No I/O lives here -- only the types, errors, palette, and validation
//! rules that the `db` and `api` crates agree on.

pub mod accounts;
pub mod error;
pub mod folders;
pub mod notes;
pub mod palette;
pub mod types;
