//! Authentication Module
//!
//! Session token issuance and verification.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── sessions.rs - Token signing and verification
//! └── handlers.rs - POST /jwt handler (token-as-cookie issuance)
//! ```
//!
//! # Flow
//!
//! 1. Client POSTs an identity object to `/jwt`
//! 2. The object is signed into a one-hour token, returned as the
//!    `token` cookie
//! 3. The auth middleware verifies the cookie on gated routes
//!
//! Tokens are stateless; the only way to invalidate one early is to
//! drop the cookie client-side.

/// Token signing and verification
pub mod sessions;

/// Session issuance handler
pub mod handlers;

// Re-export commonly used items
pub use handlers::{issue_session, TOKEN_COOKIE};
pub use sessions::{issue_token, verify_token, Claims};
