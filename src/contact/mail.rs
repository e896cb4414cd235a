use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::validate::ContactSubmission;

/// SMTP settings, read from the environment (see `config::AppConfig`).
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

/// Outbound mail for contact form submissions. A `Mailer` without a
/// configured transport reports every send as failed; the public handler
/// only ever shows the generic message, details stay in the log.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
    to: Option<Mailbox>,
}

impl Mailer {
    pub fn from_config(config: Option<&MailConfig>) -> Self {
        let Some(cfg) = config else {
            log::warn!("SMTP_HOST not set — contact mail sending is disabled");
            return Self::disabled();
        };

        let from = match cfg.from.parse::<Mailbox>() {
            Ok(mb) => mb,
            Err(e) => {
                log::error!("MAIL_FROM '{}' is not a valid mailbox: {e}", cfg.from);
                return Self::disabled();
            }
        };
        let to = match cfg.to.parse::<Mailbox>() {
            Ok(mb) => mb,
            Err(e) => {
                log::error!("MAIL_TO '{}' is not a valid mailbox: {e}", cfg.to);
                return Self::disabled();
            }
        };

        let builder = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host) {
            Ok(b) => b,
            Err(e) => {
                log::error!("Invalid SMTP relay '{}': {e}", cfg.host);
                return Self::disabled();
            }
        };
        let transport = builder
            .port(cfg.port)
            .credentials(Credentials::new(cfg.username.clone(), cfg.password.clone()))
            .build();

        Self {
            transport: Some(transport),
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: None,
            to: None,
        }
    }

    /// Send one contact submission. Single attempt, no retry; `Err` carries
    /// an internal description for the log, never shown to the visitor.
    pub async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), String> {
        let (Some(transport), Some(from), Some(to)) = (&self.transport, &self.from, &self.to)
        else {
            return Err("mail transport not configured".to_string());
        };

        let mut builder = Message::builder()
            .from(from.clone())
            .to(to.clone())
            .subject(format!("Kontaktanfrage: {}", submission.subject.trim()))
            .header(ContentType::TEXT_PLAIN);

        // Reply-To lets the volunteers answer directly, but only when the
        // visitor's address parses as a mailbox.
        if let Ok(reply_to) = submission.email.trim().parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let body = render_body(submission);
        let email = builder.body(body).map_err(|e| format!("build mail: {e}"))?;

        transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|e| format!("smtp send: {e}"))
    }
}

fn render_body(submission: &ContactSubmission) -> String {
    let mut body = format!(
        "Neue Kontaktanfrage über die Website ({})\n\n\
         Name: {}\n\
         E-Mail: {}\n\
         Betreff: {}\n\n\
         Nachricht:\n{}\n",
        Local::now().format("%Y-%m-%d %H:%M"),
        submission.name.trim(),
        submission.email.trim(),
        submission.subject.trim(),
        submission.message.trim(),
    );
    let details = submission.details.trim();
    if !details.is_empty() {
        body.push_str(&format!("\nTechnische Angaben:\n{details}\n"));
    }
    body
}
