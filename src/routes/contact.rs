use actix_web::web::{Either, Form, Json};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::{ContactMessage, ContactName, EmailAddress, FieldErrors, NewContact};
use crate::email_client::EmailClient;
use crate::notifications;
use crate::persistence;
use crate::startup::AdminEmail;
use crate::utils::ApiResponse;

// All fields optional at the transport layer so that a missing field becomes
// a field-level validation error instead of a bare deserialization 400.
#[derive(serde::Deserialize)]
pub struct ContactFormData {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
    phone: Option<String>,
    company: Option<String>,
}

impl TryFrom<ContactFormData> for NewContact {
    type Error = FieldErrors;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::parse(form.name.unwrap_or_default());
        let email = EmailAddress::parse(form.email.unwrap_or_default());
        let message = ContactMessage::parse(form.message.unwrap_or_default());

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(NewContact {
                name,
                email,
                message,
                subject: normalize_optional(form.subject),
                phone: normalize_optional(form.phone),
                company: normalize_optional(form.company),
            }),
            (name, email, message) => {
                let mut errors = FieldErrors::default();
                if let Err(e) = name {
                    errors.push("name", e);
                }
                if let Err(e) = email {
                    errors.push("email", e);
                }
                if let Err(e) = message {
                    errors.push("message", e);
                }
                Err(errors)
            }
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The contact submission pipeline: validate, persist (best-effort), notify
/// (best-effort), respond. The only hard failure is invalid input; a
/// submission must never be lost to a transient store or provider outage.
#[tracing::instrument(name = "Handling a contact submission", skip_all)]
pub async fn submit_contact(
    form: Either<Form<ContactFormData>, Json<ContactFormData>>,
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    admin_email: web::Data<AdminEmail>,
) -> HttpResponse {
    let contact = match NewContact::try_from(form.into_inner()) {
        Ok(contact) => contact,
        Err(errors) => return ApiResponse::validation_failure(errors.summary(), errors),
    };
    tracing::info!(contact_email = %contact.email, "Received a valid contact submission");

    if let Err(e) = persistence::insert_contact(&pool, &contact).await {
        tracing::warn!(
            error = ?e,
            "Failed to persist contact submission, continuing with notification"
        );
    }

    match notifications::send_admin_notification(&email_client, &admin_email.0, &contact) {
        Ok(()) => {
            if let Err(e) = notifications::send_auto_reply(&email_client, &contact) {
                tracing::warn!(error = ?e, "Failed to send auto-reply");
            }
        }
        Err(e) => tracing::error!(error = ?e, "Failed to send admin notification"),
    }

    ApiResponse::success("Thank you for your message! We will get back to you soon.")
}
