//! In-memory model of a KDE config file and the get/set/delete operations on it.
//!
//! Sections and entries keep their insertion order so that rewriting a file
//! only changes the lines that were actually modified.

/// A `[header]` section with its key-value entries.
///
/// The header is the raw text between the outer brackets, so nested KDE
/// groups appear as `Group 1][Group 2`.
///
/// # Examples
///
/// ```
/// use kcfg::config::document::Section;
///
/// let section = Section {
///     header: "Group 1][Group 2".to_string(),
///     entries: vec![("Key".to_string(), "Value".to_string())],
/// };
/// assert_eq!(section.get("Key"), Some("Value"));
/// assert_eq!(section.get("key"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Raw section header, case preserved.
    pub header: String,
    /// Key-value entries in file order. Keys are unique and case-sensitive.
    pub entries: Vec<(String, String)>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            entries: Vec::new(),
        }
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or overwrite `key`, returning the replaced value.
    pub fn set(&mut self, key: &str, value: &str) -> Option<String> {
        if let Some((_, current)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            return Some(std::mem::replace(current, value.to_string()));
        }
        self.entries.push((key.to_string(), value.to_string()));
        None
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }
}

/// A whole config file: an ordered list of uniquely named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// `true` when the document has no sections at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Look up a section by its exact header.
    #[must_use]
    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.header == header)
    }

    /// Append an empty section unless one with this header already exists.
    pub fn insert_section(&mut self, header: &str) {
        if self.section(header).is_none() {
            self.sections.push(Section::new(header));
        }
    }

    /// Value at `[section] key`, or `None` when the section or key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use kcfg::config::document::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set("General", "ColorScheme", "BreezeDark");
    /// assert_eq!(doc.get("General", "ColorScheme"), Some("BreezeDark"));
    /// assert_eq!(doc.get("General", "Missing").unwrap_or("fallback"), "fallback");
    /// ```
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Store `value` at `[section] key`, creating the section if needed.
    ///
    /// Returns the previous value when the key already existed. Other keys in
    /// the section are left alone.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Option<String> {
        if let Some(existing) = self.sections.iter_mut().find(|s| s.header == section) {
            return existing.set(key, value);
        }
        let mut created = Section::new(section);
        created.set(key, value);
        self.sections.push(created);
        None
    }

    /// Remove `[section] key`, returning its previous value.
    ///
    /// A missing section or key is not an error and yields `None`. The section
    /// itself is kept even when its last key is removed.
    pub fn delete(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections
            .iter_mut()
            .find(|s| s.header == section)?
            .remove(key)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.set("Group 1][Group 2", "Key1", "One");
        doc.set("Group 1][Group 2", "Key2", "Two");
        doc
    }

    #[test]
    fn new_document_is_empty() {
        assert!(Document::new().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn get_existing_value() {
        assert_eq!(sample().get("Group 1][Group 2", "Key2"), Some("Two"));
    }

    #[test]
    fn get_missing_section_or_key_is_none() {
        let doc = sample();
        assert_eq!(doc.get("Nope", "Key1"), None);
        assert_eq!(doc.get("Group 1][Group 2", "Key3"), None);
    }

    #[test]
    fn get_is_case_sensitive() {
        assert_eq!(sample().get("Group 1][Group 2", "key1"), None);
    }

    #[test]
    fn set_returns_previous_value() {
        let mut doc = sample();
        assert_eq!(
            doc.set("Group 1][Group 2", "Key2", "Three"),
            Some("Two".to_string())
        );
        assert_eq!(doc.get("Group 1][Group 2", "Key2"), Some("Three"));
    }

    #[test]
    fn set_new_key_returns_none_and_keeps_siblings() {
        let mut doc = sample();
        assert_eq!(doc.set("Group 1][Group 2", "Key3", "Three"), None);
        let section = doc.section("Group 1][Group 2").expect("section should exist");
        assert_eq!(
            section.entries,
            vec![
                ("Key1".to_string(), "One".to_string()),
                ("Key2".to_string(), "Two".to_string()),
                ("Key3".to_string(), "Three".to_string()),
            ]
        );
    }

    #[test]
    fn set_overwrite_keeps_position() {
        let mut doc = sample();
        doc.set("Group 1][Group 2", "Key1", "Uno");
        let section = doc.section("Group 1][Group 2").unwrap();
        assert_eq!(section.entries[0], ("Key1".to_string(), "Uno".to_string()));
    }

    #[test]
    fn set_creates_missing_section() {
        let mut doc = sample();
        assert_eq!(doc.set("Other", "Key", "Value"), None);
        let headers: Vec<&str> = doc.sections().map(|s| s.header.as_str()).collect();
        assert_eq!(headers, ["Group 1][Group 2", "Other"]);
    }

    #[test]
    fn set_then_delete_then_get_is_none() {
        let mut doc = Document::new();
        doc.set("General", "Key", "Value");
        assert_eq!(doc.delete("General", "Key"), Some("Value".to_string()));
        assert_eq!(doc.get("General", "Key"), None);
    }

    #[test]
    fn delete_keeps_other_keys_and_empty_section() {
        let mut doc = sample();
        doc.delete("Group 1][Group 2", "Key1");
        doc.delete("Group 1][Group 2", "Key2");
        let section = doc.section("Group 1][Group 2").expect("section should remain");
        assert!(section.entries.is_empty());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut doc = sample();
        let before = doc.clone();
        assert_eq!(doc.delete("Nope", "Key1"), None);
        assert_eq!(doc.delete("Group 1][Group 2", "Nope"), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn insert_section_is_idempotent() {
        let mut doc = sample();
        doc.insert_section("Group 1][Group 2");
        doc.insert_section("Empty");
        doc.insert_section("Empty");
        let headers: Vec<&str> = doc.sections().map(|s| s.header.as_str()).collect();
        assert_eq!(headers, ["Group 1][Group 2", "Empty"]);
        assert_eq!(doc.get("Group 1][Group 2", "Key1"), Some("One"));
    }
}
