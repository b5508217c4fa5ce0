//! Contact
//!
//! Contact form submissions and the owner notification email.
//!
//! ```text
//! contact/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Message model and store operations
//! ├── handlers.rs - HTTP handlers
//! └── mailer.rs   - SMTP notification dispatcher
//! ```

/// Message model and store operations
pub mod db;

/// HTTP handlers
pub mod handlers;

/// SMTP notification dispatcher
pub mod mailer;

pub use db::ContactMessage;
pub use mailer::Mailer;
