/// The submitter's name: required and non-blank after trimming. No character
/// or length restrictions beyond that; names flow into HTML bodies through
/// escaping, not through input rejection.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("This field is required.".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
