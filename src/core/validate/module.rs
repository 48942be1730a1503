//! core::validate::module
//!
//! Validation of a single module object.
//!
//! # Steps
//!
//! 1. Alias short-circuit: an `alias` entry is a pure redirect and must
//!    carry no other key; when it checks out, validation ends there
//! 2. Required fields for the mode ([`required_fields`])
//! 3. Per-field checks, applied to every field present regardless of
//!    mode
//!
//! The per-field checks are a table from field name to check function,
//! invoked only for fields actually present. Adding a field means adding
//! a row, not touching the control flow.

use serde_json::{Map, Value};

use super::{module_error, required_fields, Collection, Mode, ModuleId, ValidationError};
use crate::core::document::MODULE_KEYS;
use crate::core::refs::{is_commit_reference, is_module_version};

/// One module under validation, with the collection its references
/// resolve against.
struct Entry<'a> {
    id: &'a ModuleId,
    module: &'a Map<String, Value>,
    collection: &'a Collection,
}

type FieldCheck = fn(&Entry, &Value) -> Result<(), ValidationError>;

/// Field name to check function, invoked for fields actually present.
const FIELD_CHECKS: &[(&str, FieldCheck)] = &[
    ("name", check_name),
    ("description", check_description),
    ("tags", check_tags),
    ("repo", check_repo),
    ("by", check_by),
    ("dependencies", check_dependencies),
    ("version", check_version),
    ("commit", check_commit),
    ("subdirectory", check_subdirectory),
    ("steps", check_steps),
    ("website", check_website),
    ("documentation", check_documentation),
];

/// Validate one module object in the given mode.
///
/// `id` is used only for error attribution. `collection` is the full
/// mapping the module lives in (for `build` entries, the document's
/// index mapping), used to resolve `alias` and `dependencies`.
///
/// # Errors
///
/// Returns a module-scoped [`ValidationError`] for the first violation;
/// validation of the entry stops there.
pub fn validate_module(
    mode: Mode,
    id: &ModuleId,
    module: &Value,
    collection: &Collection,
) -> Result<(), ValidationError> {
    let Some(object) = module.as_object() else {
        return Err(module_error(id, "module must be an object"));
    };
    let entry = Entry {
        id,
        module: object,
        collection,
    };

    // Step 1 - Handle the alias special case:

    if let Some(alias) = object.get("alias") {
        return match mode {
            Mode::Index | Mode::Provides => check_alias(&entry, alias),
            Mode::Build => Err(module_error(id, "\"alias\" is not supported in \"build\"")),
        };
    }

    // Step 2 - Check for required fields:

    for field in required_fields(mode) {
        assert!(MODULE_KEYS.contains(field));
        if !object.contains_key(*field) {
            return Err(module_error(
                id,
                format!("\"{field}\" field is required, but missing"),
            ));
        }
    }

    // Step 3 - Validate fields that are present:

    for (field, check) in FIELD_CHECKS {
        if let Some(value) = object.get(*field) {
            check(&entry, value)?;
        }
    }

    Ok(())
}

/// An alias is a pure redirect: no other keys, and the target must be a
/// present, non-alias module in the same collection.
fn check_alias(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    if entry.module.len() != 1 {
        return Err(module_error(
            entry.id,
            "\"alias\" cannot be used with other attributes",
        ));
    }
    let Some(alias) = value.as_str() else {
        return Err(module_error(entry.id, "\"alias\" must be of type string"));
    };
    if alias.is_empty() {
        return Err(module_error(entry.id, "\"alias\" must be non-empty"));
    }
    let Some(target) = entry.collection.get(alias) else {
        return Err(module_error(
            entry.id,
            "\"alias\" must reference another module",
        ));
    };
    if target.get("alias").is_some() {
        return Err(module_error(
            entry.id,
            "\"alias\" cannot reference another alias",
        ));
    }
    Ok(())
}

fn check_name(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(name) = value.as_str() else {
        return Err(module_error(entry.id, "\"name\" must be of type string"));
    };
    if name.is_empty() {
        return Err(module_error(entry.id, "\"name\" must be non-empty"));
    }
    if let ModuleId::Name(key) = entry.id {
        if name != key {
            return Err(module_error(
                entry.id,
                "\"name\" must match the key the module is stored under",
            ));
        }
    }
    Ok(())
}

fn check_description(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_non_empty_string(entry, value, "description")
}

fn check_tags(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(tags) = value.as_array() else {
        return Err(module_error(entry.id, "\"tags\" must be of type list"));
    };
    for tag in tags {
        if !tag.is_string() {
            return Err(module_error(entry.id, "\"tags\" must be a list of strings"));
        }
    }
    Ok(())
}

fn check_repo(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_non_empty_string(entry, value, "repo")
}

fn check_by(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_non_empty_string(entry, value, "by")
}

/// Every dependency must name a present, non-alias module in the
/// collection.
fn check_dependencies(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(dependencies) = value.as_array() else {
        return Err(module_error(
            entry.id,
            "Value of attribute \"dependencies\" must be of type list",
        ));
    };
    for dependency in dependencies {
        let Some(dependency) = dependency.as_str() else {
            return Err(module_error(
                entry.id,
                "\"dependencies\" must be a list of strings",
            ));
        };
        let Some(target) = entry.collection.get(dependency) else {
            return Err(module_error(
                entry.id,
                "\"dependencies\" must reference other modules",
            ));
        };
        if target.get("alias").is_some() {
            return Err(module_error(
                entry.id,
                "\"dependencies\" cannot reference an alias",
            ));
        }
    }
    Ok(())
}

fn check_version(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(version) = value.as_str() else {
        return Err(module_error(entry.id, "\"version\" must be of type string"));
    };
    if !is_module_version(version) {
        return Err(module_error(
            entry.id,
            "\"version\" must be of the form \"major.minor.patch\" with an optional \"-prerelease\" number",
        ));
    }
    Ok(())
}

fn check_commit(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(commit) = value.as_str() else {
        return Err(module_error(entry.id, "\"commit\" must be of type string"));
    };
    if !is_commit_reference(commit) {
        return Err(module_error(entry.id, "\"commit\" must be a commit reference"));
    }
    Ok(())
}

fn check_subdirectory(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_non_empty_string(entry, value, "subdirectory")
}

fn check_steps(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    let Some(steps) = value.as_array() else {
        return Err(module_error(entry.id, "\"steps\" must be of type list"));
    };
    if steps.is_empty() {
        return Err(module_error(entry.id, "\"steps\" must be non-empty"));
    }
    for step in steps {
        let Some(step) = step.as_str() else {
            return Err(module_error(entry.id, "\"steps\" must be a list of strings"));
        };
        if step.is_empty() {
            return Err(module_error(
                entry.id,
                "\"steps\" must be a list of non-empty strings",
            ));
        }
    }
    Ok(())
}

fn check_website(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_url(entry, value, "website")
}

fn check_documentation(entry: &Entry, value: &Value) -> Result<(), ValidationError> {
    check_url(entry, value, "documentation")
}

/// URL fields must use HTTPS; an empty string is treated as absent.
fn check_url(entry: &Entry, value: &Value, field: &str) -> Result<(), ValidationError> {
    let Some(url) = value.as_str() else {
        return Err(module_error(
            entry.id,
            format!("\"{field}\" must be of type string"),
        ));
    };
    if !url.is_empty() && !url.starts_with("https://") {
        return Err(module_error(
            entry.id,
            format!("\"{field}\" must be an HTTPS URL"),
        ));
    }
    Ok(())
}

fn check_non_empty_string(entry: &Entry, value: &Value, field: &str) -> Result<(), ValidationError> {
    let Some(string) = value.as_str() else {
        return Err(module_error(
            entry.id,
            format!("\"{field}\" must be of type string"),
        ));
    };
    if string.is_empty() {
        return Err(module_error(entry.id, format!("\"{field}\" must be non-empty")));
    }
    Ok(())
}
