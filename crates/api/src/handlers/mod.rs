//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `memopad_core`, delegate to the
//! corresponding repository in `memopad_db` scoped to the
//! authenticated account, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod folders;
pub mod notes;
