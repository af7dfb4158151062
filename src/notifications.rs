use chrono::Utc;

use crate::domain::{EmailAddress, NewContact};
use crate::email_client::EmailClient;
use crate::errors::InfrastructureError;

/// Notifies the admin of a new contact submission. Reply-to is set to the
/// submitter so the admin can answer directly.
#[tracing::instrument(name = "Sending admin notification", skip_all, fields(admin = %admin))]
pub fn send_admin_notification(
    client: &EmailClient,
    admin: &EmailAddress,
    contact: &NewContact,
) -> Result<(), InfrastructureError> {
    let subject = format!("New Contact Form Submission - {}", contact.name.as_ref());
    let (html, text) = admin_notification_body(contact);
    client.send_email(admin, Some(&contact.email), &subject, &html, &text)?;
    tracing::info!("Contact notification email sent");
    Ok(())
}

/// Acknowledges the submission to the person who sent it.
#[tracing::instrument(name = "Sending auto-reply", skip_all, fields(recipient = %contact.email))]
pub fn send_auto_reply(
    client: &EmailClient,
    contact: &NewContact,
) -> Result<(), InfrastructureError> {
    let (html, text) = auto_reply_body(contact);
    client.send_email(
        &contact.email,
        None,
        "Thank you for contacting BizzPulse",
        &html,
        &text,
    )?;
    tracing::info!("Auto-reply sent");
    Ok(())
}

fn escape(s: &str) -> String {
    htmlescape::encode_minimal(s)
}

fn submitted_at() -> String {
    Utc::now().format("%B %d, %Y at %H:%M UTC").to_string()
}

fn html_row(label: &str, value: &str) -> String {
    format!(
        "<tr><td style=\"padding: 4px 12px 4px 0; font-weight: bold;\">{}</td>\
         <td style=\"padding: 4px 0;\">{}</td></tr>\n",
        label, value
    )
}

fn admin_notification_body(contact: &NewContact) -> (String, String) {
    let submitted = submitted_at();

    let mut rows = String::new();
    rows.push_str(&html_row("Name:", &escape(contact.name.as_ref())));
    rows.push_str(&html_row(
        "Email:",
        &format!(
            "<a href=\"mailto:{email}\">{email}</a>",
            email = escape(contact.email.as_ref())
        ),
    ));
    if let Some(phone) = &contact.phone {
        rows.push_str(&html_row("Phone:", &escape(phone)));
    }
    if let Some(company) = &contact.company {
        rows.push_str(&html_row("Company:", &escape(company)));
    }
    if let Some(subject) = &contact.subject {
        rows.push_str(&html_row("Subject:", &escape(subject)));
    }
    rows.push_str(&html_row("Submitted:", &submitted));

    let message_html = escape(contact.message.as_ref()).replace('\n', "<br>");

    let html = format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h1 style="color: #2c5282;">BizzPulse Admin Notification</h1>
    <p>A potential client has submitted a contact form. Here are the details:</p>
    <table style="border-collapse: collapse;">
{rows}    </table>
    <h3>Message</h3>
    <div style="background-color: #f7fafc; padding: 15px; border-left: 4px solid #3182ce;">
        {message_html}
    </div>
</body>
</html>"#
    );

    let mut text = String::new();
    text.push_str("BIZZPULSE ADMIN NOTIFICATION\n");
    text.push_str("New Contact Form Submission\n\n");
    text.push_str(&format!("- Name: {}\n", contact.name.as_ref()));
    text.push_str(&format!("- Email: {}\n", contact.email.as_ref()));
    if let Some(phone) = &contact.phone {
        text.push_str(&format!("- Phone: {}\n", phone));
    }
    if let Some(company) = &contact.company {
        text.push_str(&format!("- Company: {}\n", company));
    }
    if let Some(subject) = &contact.subject {
        text.push_str(&format!("- Subject: {}\n", subject));
    }
    text.push_str(&format!("- Submitted: {}\n\n", submitted));
    text.push_str("MESSAGE:\n");
    text.push_str(contact.message.as_ref());
    text.push('\n');

    (html, text)
}

fn auto_reply_body(contact: &NewContact) -> (String, String) {
    let submitted = submitted_at();
    let subject = contact.subject.as_deref().unwrap_or("General Inquiry");

    let html = format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h1 style="color: #2c5282;">BizzPulse</h1>
    <h2>Thank You for Your Message</h2>
    <p>Dear {name},</p>
    <p>Thank you for reaching out to BizzPulse. We have received your message and
       appreciate your interest in our services. Our team will review it within
       24 hours and get back to you.</p>
    <p><strong>Subject:</strong> {subject}<br>
       <strong>Submitted:</strong> {submitted}</p>
    <p>Best regards,<br><strong>The BizzPulse Team</strong></p>
</body>
</html>"#,
        name = escape(contact.name.as_ref()),
        subject = escape(subject),
    );

    let text = format!(
        "Dear {name},\n\n\
         Thank you for reaching out to BizzPulse. We have received your message \
         and appreciate your interest in our services. Our team will review it \
         within 24 hours and get back to you.\n\n\
         Subject: {subject}\n\
         Submitted: {submitted}\n\n\
         Best regards,\n\
         The BizzPulse Team\n",
        name = contact.name.as_ref(),
    );

    (html, text)
}
