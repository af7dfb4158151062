use crate::domain::contact_email::EmailAddress;
use crate::domain::contact_message::ContactMessage;
use crate::domain::contact_name::ContactName;

/// A contact submission that has passed validation. Optional fields are
/// trimmed; empty strings are normalized to `None`.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: ContactName,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: ContactMessage,
    pub phone: Option<String>,
    pub company: Option<String>,
}
