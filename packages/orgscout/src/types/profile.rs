//! Structured profile fields produced by the model.

use serde_json::{Map, Value};

/// JSON keys the model is asked to fill, in prompt order.
pub const PROFILE_FIELDS: [&str; 5] = ["Name", "WebsiteUrl", "NteeCode", "NteeDescription", "ZipCode"];

/// Profile fields extracted from a page.
///
/// Every field is optional: a field the model left out (or set to `null`)
/// stays `None`, and what to do about it is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub ntee_code: Option<String>,
    pub ntee_description: Option<String>,
    pub zip_code: Option<String>,
}

impl ExtractedProfile {
    /// Read the profile fields out of a parsed JSON object.
    ///
    /// Strings are taken as-is; numbers and booleans are rendered to text
    /// (zip codes often come back as numbers). Arrays, objects and `null`
    /// count as absent. Unknown keys are ignored.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let field = |key: &str| object.get(key).and_then(scalar_to_string);

        Self {
            name: field("Name"),
            website_url: field("WebsiteUrl"),
            ntee_code: field("NteeCode"),
            ntee_description: field("NteeDescription"),
            zip_code: field("ZipCode"),
        }
    }

    /// True when the model returned none of the fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.website_url.is_none()
            && self.ntee_code.is_none()
            && self.ntee_description.is_none()
            && self.zip_code.is_none()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object_reads_all_fields() {
        let value = json!({
            "Name": "Acme Aid",
            "WebsiteUrl": "https://acme.org",
            "NteeCode": "P20",
            "NteeDescription": "Human Services",
            "ZipCode": "10001"
        });

        let profile = ExtractedProfile::from_json_object(value.as_object().unwrap());

        assert_eq!(profile.name.as_deref(), Some("Acme Aid"));
        assert_eq!(profile.website_url.as_deref(), Some("https://acme.org"));
        assert_eq!(profile.ntee_code.as_deref(), Some("P20"));
        assert_eq!(profile.ntee_description.as_deref(), Some("Human Services"));
        assert_eq!(profile.zip_code.as_deref(), Some("10001"));
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let value = json!({ "Name": "Acme Aid", "ZipCode": null, "Extra": "ignored" });

        let profile = ExtractedProfile::from_json_object(value.as_object().unwrap());

        assert_eq!(profile.name.as_deref(), Some("Acme Aid"));
        assert_eq!(profile.zip_code, None);
        assert_eq!(profile.website_url, None);
    }

    #[test]
    fn test_numeric_zip_is_rendered() {
        let value = json!({ "ZipCode": 55401 });

        let profile = ExtractedProfile::from_json_object(value.as_object().unwrap());

        assert_eq!(profile.zip_code.as_deref(), Some("55401"));
    }

    #[test]
    fn test_is_empty() {
        assert!(ExtractedProfile::default().is_empty());
        assert!(ExtractedProfile::from_json_object(&Map::new()).is_empty());
    }
}
