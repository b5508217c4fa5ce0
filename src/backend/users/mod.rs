//! Users
//!
//! Schemaless user records with an optional admin role flag.

/// Store operations
pub mod db;

/// HTTP handlers
pub mod handlers;
