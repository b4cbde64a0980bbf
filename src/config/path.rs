//! Parsing of `file/group/.../key` setting paths.
//!
//! A setting path addresses one key inside a KDE config file:
//!
//! ```text
//! /Group 1/Group 2/Key            no file alias, nested groups
//! kcminputrc/Mouse/cursorTheme    alias "kcminputrc"
//! ```
use crate::error::PathError;

/// Separator placed between nested group names in a KDE section header.
///
/// The groups `["Group 1", "Group 2"]` live in the section `[Group 1][Group 2]`,
/// whose header text is `Group 1][Group 2`.
pub const GROUP_SEPARATOR: &str = "][";

/// A parsed setting path.
///
/// # Examples
///
/// ```
/// use kcfg::config::path::KeyPath;
///
/// let path = KeyPath::parse("kwinrc/Windows/Placement/Policy").unwrap();
/// assert_eq!(path.alias.as_deref(), Some("kwinrc"));
/// assert_eq!(path.groups, ["Windows", "Placement"]);
/// assert_eq!(path.key, "Policy");
/// assert_eq!(path.section(), "Windows][Placement");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    /// File alias given before the first slash, if any. Kept verbatim.
    pub alias: Option<String>,
    /// Enclosing groups, outermost first. Never empty.
    pub groups: Vec<String>,
    /// Key name.
    pub key: String,
}

impl KeyPath {
    /// Parse a raw path argument.
    ///
    /// Runs of slashes collapse to one and a trailing slash is ignored. Group
    /// and key segments are trimmed of surrounding whitespace. A key always
    /// needs at least one enclosing group.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] when the path has no slash, consists of only an
    /// alias, names a key without a group, has a blank group or key, or has
    /// a name that cannot be written to an INI file.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let path = normalize(raw);

        if !path.contains('/') {
            return Err(PathError::Invalid { path });
        }

        let mut segments: Vec<&str> = path.split('/').collect();
        if let [_, second] = segments.as_slice()
            && second.is_empty()
        {
            return Err(PathError::MissingGroupAndKey { path });
        }

        let alias = segments.remove(0);

        let missing_key = match segments.as_slice() {
            [] | [_] => true,
            [_, key] => key.is_empty(),
            _ => false,
        };
        if missing_key {
            return Err(PathError::MissingKey { path });
        }

        let mut groups: Vec<String> = segments.iter().map(|s| s.trim().to_string()).collect();
        let key = groups.pop().unwrap_or_default();
        if key.is_empty() {
            return Err(PathError::MissingKey { path });
        }
        if groups.iter().any(String::is_empty) {
            return Err(PathError::EmptyGroup { path });
        }
        if groups.iter().any(|group| has_control(group)) || !is_storable_key(&key) {
            return Err(PathError::UnstorableName { path });
        }

        Ok(Self {
            alias: (!alias.is_empty()).then(|| alias.to_string()),
            groups,
            key,
        })
    }

    /// Section header text for the groups, e.g. `Group 1][Group 2`.
    #[must_use]
    pub fn section(&self) -> String {
        self.groups.join(GROUP_SEPARATOR)
    }
}

fn has_control(name: &str) -> bool {
    name.chars().any(char::is_control)
}

/// A key that would not read back as the same `key=value` line.
fn is_storable_key(key: &str) -> bool {
    !has_control(key) && !key.contains('=') && !key.starts_with(['#', ';', '['])
}

/// Collapse repeated slashes and drop a trailing one (but never reduce `/` to
/// an empty string).
fn normalize(raw: &str) -> String {
    let mut path = raw.to_string();
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> (Vec<String>, Option<String>) {
        let path = KeyPath::parse(raw).expect("path should parse");
        let mut segments = path.groups;
        segments.push(path.key);
        (segments, path.alias)
    }

    #[test]
    fn parse_without_alias() {
        assert_eq!(
            parts("/Group/Key"),
            (vec!["Group".to_string(), "Key".to_string()], None)
        );
    }

    #[test]
    fn parse_with_alias_and_nested_groups() {
        let path = KeyPath::parse("File/Group/Group 2/Key").unwrap();
        assert_eq!(path.alias.as_deref(), Some("File"));
        assert_eq!(path.groups, ["Group", "Group 2"]);
        assert_eq!(path.key, "Key");
    }

    #[test]
    fn parse_with_alias_single_group() {
        assert_eq!(
            parts("File/Group/Key"),
            (
                vec!["Group".to_string(), "Key".to_string()],
                Some("File".to_string())
            )
        );
    }

    #[test]
    fn parse_keeps_inner_spaces() {
        let path =
            KeyPath::parse("Really Long File Name/Group With Spaces/Even Key With Spaces").unwrap();
        assert_eq!(path.alias.as_deref(), Some("Really Long File Name"));
        assert_eq!(path.groups, ["Group With Spaces"]);
        assert_eq!(path.key, "Even Key With Spaces");
    }

    #[test]
    fn parse_trims_segments() {
        let path = KeyPath::parse("/  Group 1 /\tKey ").unwrap();
        assert_eq!(path.groups, ["Group 1"]);
        assert_eq!(path.key, "Key");
    }

    #[test]
    fn blank_key_is_missing_key() {
        assert_eq!(
            KeyPath::parse("/G/ "),
            Err(PathError::MissingKey {
                path: "/G/ ".to_string()
            })
        );
        assert!(matches!(
            KeyPath::parse("kwinrc/Windows/\t"),
            Err(PathError::MissingKey { .. })
        ));
    }

    #[test]
    fn blank_group_is_rejected() {
        assert_eq!(
            KeyPath::parse("/ /K"),
            Err(PathError::EmptyGroup {
                path: "/ /K".to_string()
            })
        );
        assert!(matches!(
            KeyPath::parse("/Group 1/  /Key"),
            Err(PathError::EmptyGroup { .. })
        ));
    }

    #[test]
    fn names_that_break_ini_lines_are_rejected() {
        for raw in [
            "/Group/Key=Value",
            "/Group/#Key",
            "/Group/;Key",
            "/Group/[Key]",
            "/Group/Ke\ny",
            "/Gro\nup/Key",
            "/Group 1/Group\t2/Key",
        ] {
            assert!(
                matches!(KeyPath::parse(raw), Err(PathError::UnstorableName { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn punctuation_inside_names_is_allowed() {
        let path = KeyPath::parse("/Colors:Window/Key#1 [x]").unwrap();
        assert_eq!(path.section(), "Colors:Window");
        assert_eq!(path.key, "Key#1 [x]");
    }

    #[test]
    fn section_joins_groups_with_brackets() {
        let path = KeyPath::parse("/Group 1/Group 2/Group 3/Key2").unwrap();
        assert_eq!(path.section(), "Group 1][Group 2][Group 3");
    }

    #[test]
    fn duplicate_slashes_are_collapsed() {
        assert_eq!(
            parts("//////One////////Two////////"),
            (vec!["One".to_string(), "Two".to_string()], None)
        );
    }

    #[test]
    fn normalized_input_parses_identically() {
        let messy = KeyPath::parse("kwinrc//Windows///Policy/").unwrap();
        let clean = KeyPath::parse("kwinrc/Windows/Policy").unwrap();
        assert_eq!(messy, clean);
    }

    #[test]
    fn invalid_paths_are_rejected() {
        let paths = [
            "Group",
            "Group/",
            "/Group",
            "File/Group/",
            "/",
            "",
            "@",
            "?",
            " ",
            "\t",
        ];
        for raw in paths {
            let err = KeyPath::parse(raw).expect_err("path should be rejected");
            let shown = if raw.len() > 1 {
                raw.strip_suffix('/').unwrap_or(raw)
            } else {
                raw
            };
            assert!(
                err.to_string().starts_with(&format!("Invalid path '{shown}'")),
                "unexpected message for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn missing_key_after_group() {
        assert_eq!(
            KeyPath::parse("/Group"),
            Err(PathError::MissingKey {
                path: "/Group".to_string()
            })
        );
    }

    #[test]
    fn alias_only_is_missing_group_and_key() {
        assert_eq!(
            KeyPath::parse("/"),
            Err(PathError::MissingGroupAndKey {
                path: "/".to_string()
            })
        );
    }

    #[test]
    fn odd_run_of_slashes_is_rejected() {
        let err = KeyPath::parse(&"/".repeat(11)).unwrap_err();
        assert!(err.to_string().starts_with("Invalid path '/'"));
    }

    #[test]
    fn even_run_of_slashes_is_rejected() {
        let err = KeyPath::parse(&"/".repeat(10)).unwrap_err();
        assert!(err.to_string().starts_with("Invalid path '/'"));
    }
}
