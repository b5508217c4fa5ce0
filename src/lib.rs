//! Portfolio backend library
//!
//! A small backend for a personal portfolio site: project link CRUD,
//! user records with an admin role flag, contact messages with email
//! notification, and cookie-based session issuance. See the `backend`
//! module for the full layout.

pub mod backend;
