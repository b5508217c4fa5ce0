/**
 * Server Configuration
 *
 * Loads the runtime configuration from environment variables once at
 * startup. `main` calls `dotenv` before this runs, so a local `.env`
 * file works for development.
 *
 * # Variables
 *
 * - `PORT` - listening port (default 5000)
 * - `MONGODB_URI` - store connection string (default local instance)
 * - `DATABASE_NAME` - store database name (default `portfolioDB`)
 * - `ACCESS_TOKEN_SECRET` - session token signing secret (required)
 * - `CORS_ORIGIN` - the single allowed browser origin
 * - `COOKIE_SECURE` - mark the session cookie `Secure` (default false,
 *   suitable only for local development)
 * - `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD` - notification email
 *   account
 * - `CONTACT_RECIPIENT` - notification destination (defaults to the
 *   SMTP account itself)
 */

use crate::backend::error::BackendError;

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port
    pub port: u16,
    /// Store connection string
    pub mongodb_uri: String,
    /// Store database name
    pub database_name: String,
    /// Session token signing secret
    pub token_secret: String,
    /// The single allowed CORS origin
    pub cors_origin: String,
    /// Whether the session cookie carries the `Secure` attribute
    pub cookie_secure: bool,
    /// Notification email settings
    pub smtp: SmtpConfig,
}

/// Notification email account settings
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Destination for contact notifications
    pub recipient: String,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Fails only when `ACCESS_TOKEN_SECRET` is missing; everything else
    /// falls back to a development default.
    pub fn from_env() -> Result<Self, BackendError> {
        let token_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| BackendError::config("ACCESS_TOKEN_SECRET must be set"))?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);

        let smtp_username = env_or("SMTP_USERNAME", "");
        if smtp_username.is_empty() {
            tracing::warn!("SMTP_USERNAME not set; contact notifications will fail to send");
        }
        let recipient = std::env::var("CONTACT_RECIPIENT").unwrap_or_else(|_| smtp_username.clone());

        Ok(Self {
            port,
            mongodb_uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            database_name: env_or("DATABASE_NAME", "portfolioDB"),
            token_secret,
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:5173"),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|value| flag(&value))
                .unwrap_or(false),
            smtp: SmtpConfig {
                host: env_or("SMTP_HOST", "smtp.gmail.com"),
                username: smtp_username,
                password: env_or("SMTP_PASSWORD", ""),
                recipient,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean environment flag
fn flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_truthy_values() {
        assert!(flag("1"));
        assert!(flag("true"));
        assert!(flag("TRUE"));
        assert!(flag(" yes "));
        assert!(flag("on"));
    }

    #[test]
    fn test_flag_falsy_values() {
        assert!(!flag("0"));
        assert!(!flag("false"));
        assert!(!flag(""));
        assert!(!flag("off"));
        assert!(!flag("nonsense"));
    }
}
