//! SmtpMailer -- [`Mailer`] over lettre's async SMTP transport.
//!
//! One pooled transport per process, built at startup from [`MailConfig`].
//! The SMTP credential is wrapped in [`secrecy::SecretString`] and exposed
//! only while constructing the transport.

use std::time::Duration;

use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use lovewall_core::notify::{Mailer, OutboundEmail};
use lovewall_types::config::MailConfig;
use lovewall_types::error::NotifyError;

/// Display name used on both outbound emails.
const SENDER_NAME: &str = "Testimonial Wall";

/// Async SMTP mail transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Build a relay transport from mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| {
                NotifyError::Config(format!("invalid smtp relay '{}': {e}", config.smtp_host))
            })?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.expose_secret().to_string(),
            ))
            .timeout(Some(Duration::from_secs(10)))
            .build();

        let sender = format!("{SENDER_NAME} <{}>", config.username)
            .parse()
            .map_err(|e| {
                NotifyError::Config(format!("invalid sender address '{}': {e}", config.username))
            })?;

        Ok(Self { transport, sender })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), NotifyError> {
        let message = build_message(&self.sender, email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}

/// Assemble the lettre message for one outbound email.
fn build_message(sender: &Mailbox, email: &OutboundEmail) -> Result<Message, NotifyError> {
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| NotifyError::Delivery(format!("invalid recipient '{}': {e}", email.to)))?;

    let mut builder = Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(email.subject.clone());

    if let Some(reply_to) = &email.reply_to {
        let reply_to: Mailbox = reply_to.parse().map_err(|e| {
            NotifyError::Delivery(format!("invalid reply-to '{reply_to}': {e}"))
        })?;
        builder = builder.reply_to(reply_to);
    }

    builder
        .singlepart(SinglePart::html(email.html_body.clone()))
        .map_err(|e| NotifyError::Delivery(format!("failed to build message: {e}")))
}
