//! Middleware Module
//!
//! Request-pipeline middleware for the backend server.
//!
//! - **`auth`** - session cookie verification for protected routes

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser};
