//! core::validate::top_level
//!
//! Top-level shape checks for a cfbs.json manifest.
//!
//! Checks run in a fixed order and fail fast: required keys first, then
//! the `index`-type coupling, then types and values of each field.

use serde_json::Value;

use super::ValidationError;
use crate::core::document::{Document, TOP_LEVEL_KEYS};

/// Validate the top-level structure of a manifest.
///
/// # Errors
///
/// Returns a document-scoped [`ValidationError`] for the first violation
/// found.
pub fn validate_top_level(document: &Document) -> Result<(), ValidationError> {
    let raw = document.raw();

    // Required fields must be present:

    const REQUIRED_FIELDS: [&str; 3] = ["name", "type", "description"];

    for field in REQUIRED_FIELDS {
        assert!(TOP_LEVEL_KEYS.contains(&field));
        if !raw.contains_key(field) {
            return Err(ValidationError::Document(format!(
                "The \"{field}\" field is required in a cfbs.json file"
            )));
        }
    }

    // Specific error checking for "index" type files:

    if raw.get("type").is_some_and(|t| *t == "index") {
        match raw.get("index") {
            None => {
                return Err(ValidationError::Document(String::from(
                    "For a cfbs.json with \"index\" as type, put modules in the index by adding them to an \"index\" field",
                )))
            }
            Some(Value::Object(_)) => {}
            Some(_) => {
                return Err(ValidationError::Document(String::from(
                    "For a cfbs.json with \"index\" as type, the \"index\" field must be an object",
                )))
            }
        }
    }

    // Further check types / values of the required fields:

    match raw.get("name") {
        Some(Value::String(name)) if !name.is_empty() => {}
        _ => {
            return Err(ValidationError::Document(String::from(
                "The \"name\" field must be a non-empty string",
            )))
        }
    }

    match raw.get("type").and_then(Value::as_str) {
        Some("policy-set" | "index" | "module") => {}
        _ => {
            return Err(ValidationError::Document(String::from(
                "The \"type\" field must be \"policy-set\", \"index\", or \"module\"",
            )))
        }
    }

    if !raw.get("description").is_some_and(Value::is_string) {
        return Err(ValidationError::Document(String::from(
            "The \"description\" field must be a string",
        )));
    }

    // Check types / values of other optional fields:

    if let Some(git) = raw.get("git") {
        if !git.is_boolean() {
            return Err(ValidationError::Document(String::from(
                "The \"git\" field must be true or false",
            )));
        }
    }

    if let Some(index) = raw.get("index") {
        validate_index_field(index)?;
    }

    Ok(())
}

/// The `index` field is either an inline index (object) or a reference
/// to one: an HTTPS URL or a relative path, ending in `.json`.
fn validate_index_field(index: &Value) -> Result<(), ValidationError> {
    let reference = match index {
        Value::Object(_) => return Ok(()),
        Value::String(reference) => reference,
        _ => {
            return Err(ValidationError::Document(String::from(
                "The \"index\" field must either be a URL / path (string) or an inline index (object)",
            )))
        }
    };

    if reference.trim().is_empty() {
        return Err(ValidationError::Document(format!(
            "The \"index\" string must be a URL / path, not \"{reference}\""
        )));
    }
    if !reference.ends_with(".json") {
        return Err(ValidationError::Document(String::from(
            "The \"index\" string must refer to a JSON file / URL (ending in .json)",
        )));
    }
    if !reference.starts_with("https://") && !reference.starts_with("./") {
        return Err(ValidationError::Document(String::from(
            "The \"index\" string must be a URL (starting with https://) or relative path (starting with ./)",
        )));
    }
    if reference.starts_with("https://") && reference.contains(char::is_whitespace) {
        return Err(ValidationError::Document(String::from(
            "The \"index\" URL must not contain spaces",
        )));
    }

    Ok(())
}
