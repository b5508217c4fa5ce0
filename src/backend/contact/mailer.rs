/**
 * Contact Notification Mailer
 *
 * Sends the site owner an email for each contact form submission over
 * SMTP. The transport is built once from configuration and injected
 * through application state.
 */

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::backend::error::BackendError;
use crate::backend::server::config::SmtpConfig;

/// Notification email dispatcher
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    recipient: String,
}

impl Mailer {
    /// Build the SMTP transport from configuration
    ///
    /// No connection is made here; the transport connects per send.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, BackendError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|err| BackendError::Email(err.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender: config.username.clone(),
            recipient: config.recipient.clone(),
        })
    }

    /// Send a contact notification to the configured recipient
    ///
    /// The submitter's address goes into Reply-To so the owner can
    /// answer directly from their mailbox.
    pub async fn send_contact_notification(
        &self,
        name: &str,
        reply_to: &str,
        body: &str,
    ) -> Result<(), BackendError> {
        let email = Message::builder()
            .from(parse_mailbox(&self.sender)?)
            .to(parse_mailbox(&self.recipient)?)
            .reply_to(parse_mailbox(reply_to)?)
            .subject(format!("New message from {name}"))
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|err| BackendError::Email(err.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|err| BackendError::Email(err.to_string()))?;

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, BackendError> {
    address
        .parse()
        .map_err(|_| BackendError::Email(format!("invalid email address: {address}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mailbox() {
        assert!(parse_mailbox("owner@example.com").is_ok());
        assert!(parse_mailbox("Owner <owner@example.com>").is_ok());
        assert!(parse_mailbox("not an address").is_err());
        assert!(parse_mailbox("").is_err());
    }

    #[tokio::test]
    async fn test_from_config_builds_transport() {
        let config = SmtpConfig {
            host: "smtp.example.com".to_string(),
            username: "portfolio@example.com".to_string(),
            password: "secret".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        assert!(Mailer::from_config(&config).is_ok());
    }
}
