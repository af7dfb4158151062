use std::str::FromStr;

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::ExposeSecret;

use crate::configuration::EmailSettings;
use crate::domain::EmailAddress;

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct SendEmailError(pub String);

#[derive(Clone)]
pub struct EmailClient {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailClient {
    pub fn from_settings(settings: &EmailSettings) -> Self {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose_secret().clone(),
        );

        // The transport-level timeout bounds every outbound call: a slow
        // provider must not stall a serving thread indefinitely.
        let mailer = SmtpTransport::relay(&settings.relay)
            .expect("Invalid SMTP relay in email settings")
            .credentials(credentials)
            .timeout(Some(settings.timeout()))
            .build();

        let from =
            Mailbox::from_str(settings.from.as_str()).expect("Invalid 'from' in email settings");

        Self { mailer, from }
    }

    /// Sends a multipart (plain text + HTML) email. No retries: a failed
    /// attempt is reported once and abandoned.
    pub fn send_email(
        &self,
        to: &EmailAddress,
        reply_to: Option<&EmailAddress>,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), SendEmailError> {
        let to = Mailbox::from_str(to.as_ref())
            .map_err(|e| SendEmailError(format!("Invalid recipient address: {}", e)))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject);
        if let Some(reply_to) = reply_to {
            let reply_to = Mailbox::from_str(reply_to.as_ref())
                .map_err(|e| SendEmailError(format!("Invalid reply-to address: {}", e)))?;
            builder = builder.reply_to(reply_to);
        }

        let email = builder
            .multipart(MultiPart::alternative_plain_html(
                text_body.to_string(),
                html_body.to_string(),
            ))
            .map_err(|e| SendEmailError(format!("Could not build email: {}", e)))?;

        self.mailer
            .send(&email)
            .map_err(|e| SendEmailError(format!("Could not send email through SMTP: {}", e)))?;

        Ok(())
    }
}
