//! Backend Module
//!
//! All server-side code for the portfolio backend: an Axum HTTP server
//! exposing CRUD endpoints over the portfolio document store, with
//! cookie-based session issuance and an auth gate over the protected
//! routes.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports
//! ├── server/      - Configuration, state, initialization
//! ├── routes/      - Route configuration
//! ├── store/       - Document store handle
//! ├── auth/        - Session token issuance and verification
//! ├── middleware/  - Auth gate
//! ├── projects/    - Project link CRUD
//! ├── users/       - User records and admin promotion
//! ├── contact/     - Contact messages and notification email
//! └── error/       - Error types
//! ```
//!
//! # Request Flow
//!
//! client request -> CORS layer -> auth gate (protected routes) ->
//! handler -> store / mailer -> response
//!
//! State is one injected bundle (`AppState`) holding the store handle,
//! the mailer, and the loaded configuration; handlers extract the part
//! they need via `FromRef`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Document store handle
pub mod store;

/// Session tokens
pub mod auth;

/// Request middleware
pub mod middleware;

/// Project link CRUD
pub mod projects;

/// User records
pub mod users;

/// Contact messages and notifications
pub mod contact;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppConfig, AppState};
pub use store::Store;
