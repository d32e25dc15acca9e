//! Contact notification dispatcher.
//!
//! Two independent email sends per contact submission: a primary
//! notification to the operator (reply-to pointed at the submitter) and a
//! secondary confirmation echoed back to the submitter. The failure
//! semantics are asymmetric and deliberate: a failed primary send fails the
//! whole operation because it represents lost business signal; a failed
//! confirmation is logged and swallowed because the business-critical event
//! already succeeded. Do not "fix" this into all-or-nothing failure.

use lovewall_types::contact::ContactMessage;
use lovewall_types::error::NotifyError;

/// An email ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Outbound mail transport seam. The SMTP implementation lives in
/// `lovewall-infra`; tests supply recording doubles.
pub trait Mailer: Send + Sync {
    fn send(
        &self,
        email: &OutboundEmail,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

/// Dispatches the dual-email contact notification.
pub struct ContactNotifier<M: Mailer> {
    mailer: M,
    /// Operator address receiving the primary notification.
    recipient: String,
    /// Public site URL for the confirmation footer, when configured.
    site_url: Option<String>,
}

impl<M: Mailer> ContactNotifier<M> {
    pub fn new(mailer: M, recipient: String, site_url: Option<String>) -> Self {
        Self {
            mailer,
            recipient,
            site_url,
        }
    }

    /// Deliver both emails for one contact submission.
    ///
    /// The primary send runs strictly first; the confirmation is never
    /// attempted when it fails. A confirmation failure is observed for
    /// logging only and cannot fail the operation.
    pub async fn notify_contact(&self, msg: &ContactMessage) -> Result<(), NotifyError> {
        let notification = operator_notification(&self.recipient, msg);
        self.mailer.send(&notification).await?;
        tracing::info!(from = %msg.email, "operator notification sent");

        let confirmation = submitter_confirmation(msg, self.site_url.as_deref());
        if let Err(err) = self.mailer.send(&confirmation).await {
            tracing::warn!(to = %msg.email, error = %err, "confirmation email failed");
        } else {
            tracing::info!(to = %msg.email, "confirmation email sent");
        }

        Ok(())
    }
}

/// The primary notification delivered to the operator.
fn operator_notification(recipient: &str, msg: &ContactMessage) -> OutboundEmail {
    let name = escape_html(&msg.name);
    let email = escape_html(&msg.email);
    let body = html_multiline(&msg.message);

    OutboundEmail {
        to: recipient.to_string(),
        reply_to: Some(msg.email.clone()),
        subject: format!("Testimonial wall feedback from {} ({})", msg.name, msg.email),
        html_body: format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {name}</p>\
             <p><strong>Email (Reply-To):</strong> {email}</p>\
             <hr>\
             <p><strong>Message:</strong></p>\
             <p>{body}</p>"
        ),
    }
}

/// The secondary confirmation echoed back to the submitter.
fn submitter_confirmation(msg: &ContactMessage, site_url: Option<&str>) -> OutboundEmail {
    let name = escape_html(&msg.name);
    let email = escape_html(&msg.email);
    let body = html_multiline(&msg.message);
    let footer = site_url
        .map(|url| {
            let href = escape_html(url);
            let label = escape_html(url.trim_start_matches("https://").trim_start_matches("http://"));
            format!("<p><a href=\"{href}\">{label}</a></p>")
        })
        .unwrap_or_default();

    OutboundEmail {
        to: msg.email.clone(),
        reply_to: None,
        subject: "Thanks for getting in touch!".to_string(),
        html_body: format!(
            "<p>Hi {name},</p>\
             <p>Thank you for reaching out! Your message has been received \
             and you can expect a reply within 24-48 hours.</p>\
             <p>For your records, here's a copy of what you sent:</p>\
             <blockquote>\
             <p><strong>Name:</strong> {name}</p>\
             <p><strong>Email:</strong> {email}</p>\
             <p><strong>Message:</strong></p>\
             <p>{body}</p>\
             </blockquote>{footer}"
        ),
    }
}

/// Escape user-supplied text for embedding in generated HTML.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then render newlines as `<br>`.
fn html_multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Mailer double recording every attempt, failing the call whose index
    /// matches `fail_call`.
    #[derive(Clone, Default)]
    struct ScriptedMailer {
        sent: Arc<Mutex<Vec<OutboundEmail>>>,
        fail_call: Option<usize>,
    }

    impl Mailer for ScriptedMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), NotifyError> {
            let mut sent = self.sent.lock().unwrap();
            let index = sent.len();
            sent.push(email.clone());
            if self.fail_call == Some(index) {
                return Err(NotifyError::Delivery("smtp 550".to_string()));
            }
            Ok(())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Line one\nLine two".to_string(),
        }
    }

    #[tokio::test]
    async fn both_sends_succeed() {
        let mailer = ScriptedMailer::default();
        let notifier = ContactNotifier::new(
            mailer.clone(),
            "owner@example.com".to_string(),
            Some("https://wall.example.com".to_string()),
        );

        notifier.notify_contact(&message()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(sent[1].to, "jane@example.com");
        assert_eq!(sent[1].reply_to, None);
        assert!(sent[1].html_body.contains("wall.example.com"));
    }

    #[tokio::test]
    async fn primary_failure_is_fatal_and_skips_confirmation() {
        let mailer = ScriptedMailer {
            fail_call: Some(0),
            ..Default::default()
        };
        let notifier =
            ContactNotifier::new(mailer.clone(), "owner@example.com".to_string(), None);

        let err = notifier.notify_contact(&message()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Delivery(_)));

        // The confirmation send was never attempted.
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn confirmation_failure_is_tolerated() {
        let mailer = ScriptedMailer {
            fail_call: Some(1),
            ..Default::default()
        };
        let notifier =
            ContactNotifier::new(mailer.clone(), "owner@example.com".to_string(), None);

        notifier.notify_contact(&message()).await.unwrap();
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn primary_send_runs_before_confirmation() {
        let mailer = ScriptedMailer::default();
        let notifier =
            ContactNotifier::new(mailer.clone(), "owner@example.com".to_string(), None);

        notifier.notify_contact(&message()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[1].to, "jane@example.com");
    }

    #[test]
    fn user_text_is_escaped_and_newlines_become_breaks() {
        let msg = ContactMessage {
            name: "<script>".to_string(),
            email: "jane@example.com".to_string(),
            message: "a & b\nc".to_string(),
        };
        let email = operator_notification("owner@example.com", &msg);
        assert!(email.html_body.contains("&lt;script&gt;"));
        assert!(email.html_body.contains("a &amp; b<br>c"));
        assert!(!email.html_body.contains("<script>"));
    }
}
