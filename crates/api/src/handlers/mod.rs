//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `stampa_db`, enforce the
//! authorization policy from `stampa_core::policy`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod design;
pub mod product;
pub mod review;
pub mod upload;
