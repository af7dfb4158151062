use serde::ser::SerializeMap;

/// Field name -> list of human-readable validation messages, serialized as a
/// plain JSON object in 400 responses. Fields keep the order they were pushed
/// in, so the aggregated summary reads in form-declaration order.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        match self.0.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.0.push((field.to_string(), vec![message.into()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One aggregated message for the whole set, e.g.
    /// "Please correct the following errors: Email: Invalid email address."
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{}: {}", capitalize(field), message))
            })
            .collect();
        format!(
            "Please correct the following errors: {}",
            parts.join("; ")
        )
    }

    /// The bare messages, without field prefixes.
    pub fn messages(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|(_, messages)| messages.iter().cloned())
            .collect()
    }
}

impl serde::Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, messages) in &self.0 {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
