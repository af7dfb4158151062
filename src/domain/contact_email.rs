/// A normalized email address: trimmed, lowercased and syntactically valid.
///
/// Normalization happens in `parse`, so every `EmailAddress` in the system is
/// already in the form used as the uniqueness key for newsletter
/// subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err("This field is required.".to_string());
        }
        if validator::validate_email(&normalized) {
            Ok(Self(normalized))
        } else {
            Err("Invalid email address.".to_string())
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
