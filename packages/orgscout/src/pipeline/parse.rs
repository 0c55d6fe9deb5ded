//! Parsing of model output.
//!
//! Model text is untrusted. Everything here resolves to either a structured
//! value or `ExtractionError::MalformedModelOutput` carrying the raw text;
//! nothing panics and nothing is coerced to a default.
//!
//! Tolerated: surrounding whitespace and a single wrapping markdown code
//! fence. Not tolerated: prose before or after the JSON.

use serde_json::Value;

use crate::error::{ExtractionError, Result};
use crate::types::profile::ExtractedProfile;

/// Parse a ranking response: a JSON array of URL strings.
pub fn parse_rank_response(raw: &str) -> Result<Vec<String>> {
    let urls: Vec<String> =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| ExtractionError::malformed(raw, e))?;
    Ok(urls)
}

/// Parse a profile response: a JSON object with the profile keys.
pub fn parse_profile_response(raw: &str) -> Result<ExtractedProfile> {
    let value: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| ExtractionError::malformed(raw, e))?;

    match value {
        Value::Object(object) => Ok(ExtractedProfile::from_json_object(&object)),
        other => Err(ExtractionError::malformed(
            raw,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
    }
}

/// Remove a wrapping ```` ```json ```` / ```` ``` ```` fence, if the whole
/// response is one.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
