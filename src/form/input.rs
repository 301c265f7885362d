//! Form input record
//!
//! Raw, untrusted field values of one submission.

use serde::Deserialize;

/// One submission's field values, exactly as typed or selected by the user.
///
/// Missing keys deserialize as empty values so they fail the presence rule
/// instead of the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub country: String,
    #[serde(rename = "techStack", alias = "tech_stack")]
    pub tech_stack: Vec<String>,
    pub address: String,
    pub telephone: String,
    pub email: String,
}

impl FormInput {
    /// Trim the free-text fields.
    ///
    /// `gender`, `country` and the technology values come from fixed
    /// controls and are kept as given.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            age: self.age.trim().to_string(),
            address: self.address.trim().to_string(),
            telephone: self.telephone.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_text_fields() {
        let input = FormInput {
            name: "  Ada  ".into(),
            age: " 36\n".into(),
            gender: " F ".into(),
            address: "\n1 St\nLondon  ".into(),
            ..Default::default()
        }
        .normalized();

        assert_eq!(input.name, "Ada");
        assert_eq!(input.age, "36");
        assert_eq!(input.gender, " F ");
        assert_eq!(input.address, "1 St\nLondon");
    }

    #[test]
    fn test_deserialize_browser_field_names() {
        let input: FormInput = serde_json::from_str(
            r#"{"name":"A","techStack":["Go","Rust"],"email":"a@b.com"}"#,
        )
        .unwrap();

        assert_eq!(input.tech_stack, vec!["Go", "Rust"]);
        assert_eq!(input.email, "a@b.com");
        assert!(input.age.is_empty());
    }
}
