//! core::refs
//!
//! Reference-shaped string predicates used by the module validator.
//!
//! # Predicates
//!
//! - [`is_module_version`] - Strict `major.minor.patch` version grammar
//! - [`is_commit_reference`] - Commit-hash-shaped strings
//!
//! Both are pure character-level checks; invalid strings are rejected,
//! never normalized.

/// Check a module version string.
///
/// Accepts `major.minor.patch` with an optional `-prerelease` suffix.
/// Each of the three numeric components is `0` or a digit sequence with
/// no leading zero. The prerelease suffix, if present, is a bare
/// non-negative integer (leading zeros allowed there).
///
/// # Example
///
/// ```
/// use cfbs_check::core::refs::is_module_version;
///
/// assert!(is_module_version("1.0.0"));
/// assert!(is_module_version("0.0.1-1"));
/// assert!(!is_module_version("1.0"));
/// assert!(!is_module_version("v1.0.0"));
/// assert!(!is_module_version("01.0.0"));
/// ```
pub fn is_module_version(version: &str) -> bool {
    let (core, prerelease) = match version.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (version, None),
    };

    let mut components = core.split('.');
    let (major, minor, patch) = match (
        components.next(),
        components.next(),
        components.next(),
        components.next(),
    ) {
        (Some(major), Some(minor), Some(patch), None) => (major, minor, patch),
        _ => return false,
    };

    if ![major, minor, patch].iter().all(|c| is_version_number(c)) {
        return false;
    }

    match prerelease {
        Some(suffix) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// `0`, or digits with no leading zero.
fn is_version_number(component: &str) -> bool {
    match component.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(|b| b.is_ascii_digit()),
    }
}

/// Check whether a string is commit-hash-shaped.
///
/// Accepts lowercase hex strings of SHA-1 (40) or SHA-256 (64) length.
///
/// # Example
///
/// ```
/// use cfbs_check::core::refs::is_commit_reference;
///
/// assert!(is_commit_reference("abcdef1234567890abcdef1234567890abcdef12"));
/// assert!(!is_commit_reference("main"));
/// ```
pub fn is_commit_reference(commit: &str) -> bool {
    (commit.len() == 40 || commit.len() == 64)
        && commit
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_accepted() {
        assert!(is_module_version("1.0.0"));
        assert!(is_module_version("0.0.1-1"));
        assert!(is_module_version("10.20.30"));
        assert!(is_module_version("1.2.3-007"));
    }

    #[test]
    fn versions_rejected() {
        assert!(!is_module_version("1.0"));
        assert!(!is_module_version("v1.0.0"));
        assert!(!is_module_version("01.0.0"));
        assert!(!is_module_version("1.0.0.0"));
        assert!(!is_module_version("1.0.0-"));
        assert!(!is_module_version("1.0.0-rc1"));
        assert!(!is_module_version("1..0"));
        assert!(!is_module_version(""));
        assert!(!is_module_version("1.0.-1"));
    }

    #[test]
    fn commit_references() {
        // SHA-1 length
        assert!(is_commit_reference(
            "abcdef1234567890abcdef1234567890abcdef12"
        ));
        // SHA-256 length
        assert!(is_commit_reference(
            "abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890"
        ));
        // Wrong length, uppercase, non-hex
        assert!(!is_commit_reference("abcdef1"));
        assert!(!is_commit_reference(
            "ABCDEF1234567890ABCDEF1234567890ABCDEF12"
        ));
        assert!(!is_commit_reference(
            "zzzdef1234567890abcdef1234567890abcdef12"
        ));
        assert!(!is_commit_reference(""));
    }
}
