//! core::document
//!
//! The cfbs.json document model and recognized key registries.
//!
//! # Design
//!
//! [`Document`] wraps the raw top-level JSON object exactly as it was
//! parsed from the file. The validation engine must see precisely what
//! the user wrote, so no coercion or typed deserialization happens here.
//!
//! The key registries ([`TOP_LEVEL_KEYS`], [`MODULE_KEYS`]) enumerate the
//! keys cfbs recognizes. Keys outside the registries are never errors;
//! they only feed the warning pass in [`Document::unknown_key_warnings`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Top-level keys recognized in a cfbs.json file.
pub const TOP_LEVEL_KEYS: &[&str] = &[
    "name",
    "description",
    "type",
    "git",
    "index",
    "provides",
    "build",
];

/// Keys recognized in a module object (index entry, provides entry, or
/// build step).
pub const MODULE_KEYS: &[&str] = &[
    "alias",
    "name",
    "description",
    "tags",
    "repo",
    "by",
    "version",
    "commit",
    "subdirectory",
    "dependencies",
    "steps",
    "website",
    "documentation",
];

/// Errors from loading a manifest file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("the top level of '{path}' must be a JSON object")]
    NotAnObject { path: PathBuf },
}

/// A parsed cfbs.json manifest.
///
/// Offers key membership/lookup and access to the raw nested structure.
/// Read-only: validation produces accept/reject decisions, never
/// mutations.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Map<String, Value>,
}

impl Document {
    /// Load and parse a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if the file cannot be read, is not valid
    /// JSON, or its top level is not an object.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| DocumentError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_value(value).ok_or_else(|| DocumentError::NotAnObject {
            path: path.to_path_buf(),
        })
    }

    /// Wrap an already-parsed JSON value.
    ///
    /// Returns `None` unless the top level is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(raw) => Some(Self { raw }),
            _ => None,
        }
    }

    /// The raw top-level object, exactly as parsed.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Top-level key membership.
    pub fn contains(&self, key: &str) -> bool {
        self.raw.contains_key(key)
    }

    /// Collect warnings for keys outside the recognized registries.
    ///
    /// Covers the top level, every module in the `index` and `provides`
    /// mappings, and every entry in the `build` list. Unknown keys are
    /// warnings, never errors, so this pass does not affect validation.
    pub fn unknown_key_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for key in self.raw.keys() {
            if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
                warnings.push(format!("Unknown key \"{key}\" in cfbs.json"));
            }
        }

        for section in ["index", "provides"] {
            if let Some(Value::Object(modules)) = self.raw.get(section) {
                for (name, module) in modules {
                    collect_module_warnings(&mut warnings, &format!("module \"{name}\""), module);
                }
            }
        }

        if let Some(Value::Array(build)) = self.raw.get("build") {
            for (position, module) in build.iter().enumerate() {
                let label = match module.get("name").and_then(Value::as_str) {
                    Some(name) => format!("module \"{name}\""),
                    None => format!("module at index {position}"),
                };
                collect_module_warnings(&mut warnings, &label, module);
            }
        }

        warnings
    }
}

fn collect_module_warnings(warnings: &mut Vec<String>, label: &str, module: &Value) {
    let Some(object) = module.as_object() else {
        // Not an object at all; validation will reject it with an error.
        return;
    };
    for key in object.keys() {
        if !MODULE_KEYS.contains(&key.as_str()) {
            warnings.push(format!("Unknown key \"{key}\" in {label}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_requires_object() {
        assert!(Document::from_value(json!({"name": "x"})).is_some());
        assert!(Document::from_value(json!([1, 2, 3])).is_none());
        assert!(Document::from_value(json!("just a string")).is_none());
    }

    #[test]
    fn load_reads_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfbs.json");
        std::fs::write(&path, r#"{"name": "x", "type": "module"}"#).unwrap();

        let document = Document::load(&path).unwrap();
        assert_eq!(document.get("name"), Some(&json!("x")));
        assert!(document.contains("type"));
        assert!(!document.contains("description"));
    }

    #[test]
    fn load_rejects_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Document::load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(DocumentError::Read { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            Document::load(&bad),
            Err(DocumentError::Parse { .. })
        ));

        let array = dir.path().join("array.json");
        std::fs::write(&array, "[]").unwrap();
        assert!(matches!(
            Document::load(&array),
            Err(DocumentError::NotAnObject { .. })
        ));
    }

    #[test]
    fn warns_about_unknown_top_level_keys() {
        let document = Document::from_value(json!({
            "name": "x",
            "type": "module",
            "description": "d",
            "colour": "teal"
        }))
        .unwrap();

        let warnings = document.unknown_key_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("colour"));
    }

    #[test]
    fn warns_about_unknown_module_keys_in_every_section() {
        let document = Document::from_value(json!({
            "name": "x",
            "type": "index",
            "description": "d",
            "index": {"a": {"steps": ["s"], "flavor": "mild"}},
            "provides": {"b": {"steps": ["s"], "season": "late"}},
            "build": [{"name": "a", "steps": ["s"], "extra": true}]
        }))
        .unwrap();

        let warnings = document.unknown_key_warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("flavor") && w.contains("\"a\"")));
        assert!(warnings.iter().any(|w| w.contains("season") && w.contains("\"b\"")));
        assert!(warnings.iter().any(|w| w.contains("extra") && w.contains("\"a\"")));
    }

    #[test]
    fn build_entries_without_name_warn_by_position() {
        let document = Document::from_value(json!({
            "build": [{"steps": ["s"], "mystery": 1}]
        }))
        .unwrap();

        let warnings = document.unknown_key_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("index 0"));
    }

    #[test]
    fn recognized_keys_produce_no_warnings() {
        let document = Document::from_value(json!({
            "name": "x",
            "type": "index",
            "description": "d",
            "git": true,
            "index": {
                "a": {
                    "description": "d",
                    "tags": [],
                    "repo": "r",
                    "by": "me",
                    "version": "1.0.0",
                    "commit": "abcdef1234567890abcdef1234567890abcdef12",
                    "steps": ["s"],
                    "website": "https://example.com",
                    "documentation": "https://example.com/docs",
                    "subdirectory": "sub",
                    "dependencies": []
                }
            }
        }))
        .unwrap();

        assert!(document.unknown_key_warnings().is_empty());
    }
}
