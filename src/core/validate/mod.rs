//! core::validate
//!
//! The cfbs.json validation engine.
//!
//! # Flow
//!
//! [`validate_document`] is the driver, consumed top to bottom:
//!
//! 1. Top-level shape ([`top_level::validate_top_level`])
//! 2. Build-field preconditions, when a build is requested or the
//!    manifest carries a non-empty `build` list
//! 3. Every `index` entry, mode [`Mode::Index`]
//! 4. Every `provides` entry, mode [`Mode::Provides`]
//! 5. Every `build` entry, mode [`Mode::Build`], resolving references
//!    against the `index` mapping
//!
//! The first violation found anywhere aborts the whole process and is
//! the driver's result. Nothing is mutated; repeated calls on the same
//! document are deterministic.

pub mod module;
pub mod top_level;

pub use module::validate_module;
pub use top_level::validate_top_level;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::document::Document;

/// The mapping of module name to module object used to resolve `alias`
/// and `dependencies` references.
pub type Collection = Map<String, Value>;

/// Identifies the module an error is attributed to: the key it is stored
/// under, or its position in the `build` list when it has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleId {
    Name(String),
    Index(usize),
}

/// The context a module object appears in. Determines which fields are
/// mandatory and whether `alias` is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A reusable entry in an `index` mapping.
    Index,
    /// A declared entry in a `provides` mapping.
    Provides,
    /// A concrete step in a `build` list.
    Build,
}

/// The fields a module must carry in the given mode.
///
/// Pure lookup table; the rule data lives here, not in the control flow.
pub fn required_fields(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Build => &["steps", "name"],
        Mode::Provides => &["steps", "description"],
        Mode::Index => &[
            "steps",
            "description",
            "tags",
            "repo",
            "by",
            "version",
            "commit",
        ],
    }
}

/// Errors from manifest validation.
///
/// The display string is the full user-facing message; callers surface
/// it verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A top-level field is missing, mistyped, or out of its allowed set.
    #[error("Error in cfbs.json: {0}")]
    Document(String),

    /// A module field failed validation, attributed by module name.
    #[error("Error in cfbs.json for module '{name}': {message}")]
    Module { name: String, message: String },

    /// A module field failed validation, attributed by build-list position.
    #[error("Error in cfbs.json for module at index {index}: {message}")]
    ModuleAt { index: usize, message: String },

    /// A command-level precondition failed before any per-module
    /// inspection. Phrased as actionable guidance, surfaced unprefixed.
    #[error("{0}")]
    Precondition(String),
}

/// Build a module-scoped error attributed to `id`.
pub(crate) fn module_error(id: &ModuleId, message: impl Into<String>) -> ValidationError {
    let message = message.into();
    match id {
        ModuleId::Name(name) => ValidationError::Module {
            name: name.clone(),
            message,
        },
        ModuleId::Index(index) => ValidationError::ModuleAt {
            index: *index,
            message,
        },
    }
}

/// Validate a whole manifest.
///
/// When `for_build` is true the `build` field is required, as the build
/// and download commands need it. When false, a present and non-empty
/// `build` list is still validated (a non-empty build list implies a
/// forthcoming build); a missing or empty one is accepted.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_document(document: &Document, for_build: bool) -> Result<(), ValidationError> {
    validate_top_level(document)?;

    let check_build = for_build
        || document
            .get("build")
            .is_some_and(|build| *build != Value::Array(Vec::new()));

    if check_build {
        validate_build_preconditions(document)?;
    }

    if let Some(Value::Object(index)) = document.get("index") {
        for (name, module) in index {
            validate_module(Mode::Index, &ModuleId::Name(name.clone()), module, index)?;
        }
    }

    if let Some(Value::Object(provides)) = document.get("provides") {
        for (name, module) in provides {
            validate_module(
                Mode::Provides,
                &ModuleId::Name(name.clone()),
                module,
                provides,
            )?;
        }
    }

    if check_build {
        validate_build_entries(document)?;
    }

    Ok(())
}

/// Command-level checks on the `build` field itself, before any
/// per-module inspection.
fn validate_build_preconditions(document: &Document) -> Result<(), ValidationError> {
    let Some(build) = document.get("build") else {
        return Err(ValidationError::Precondition(String::from(
            "A \"build\" field is missing in ./cfbs.json \
             - the build command loops through all modules in this list to find build steps to perform",
        )));
    };
    let Some(entries) = build.as_array() else {
        return Err(ValidationError::Precondition(String::from(
            "The \"build\" field in ./cfbs.json must be a list (of modules involved in the build)",
        )));
    };
    if entries.is_empty() {
        return Err(ValidationError::Precondition(String::from(
            "The \"build\" field in ./cfbs.json is empty - add modules with the add command",
        )));
    }
    Ok(())
}

/// Validate every `build` entry against the `index` mapping.
///
/// Dependency and alias references in build steps resolve against the
/// index, so the index mapping must exist.
fn validate_build_entries(document: &Document) -> Result<(), ValidationError> {
    let Some(Value::Array(build)) = document.get("build") else {
        // Preconditions already established presence and shape.
        return Ok(());
    };

    let Some(Value::Object(index)) = document.get("index") else {
        return Err(ValidationError::Document(String::from(
            "validating the \"build\" field requires an inline \"index\" (object) to resolve modules against",
        )));
    };

    for (position, module) in build.iter().enumerate() {
        let id = match module.get("name").and_then(Value::as_str) {
            Some(name) => ModuleId::Name(name.to_string()),
            None => ModuleId::Index(position),
        };
        validate_module(Mode::Build, &id, module, index)?;
    }

    Ok(())
}
