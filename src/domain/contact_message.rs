/// The body of a contact submission. Must be non-blank after trimming.
#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("This field is required.".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
