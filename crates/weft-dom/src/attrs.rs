//! Element Attributes
//!
//! Valued attributes keep insertion order for deterministic output;
//! flag (valueless) attributes collapse duplicates in first-seen order.

use std::collections::HashMap;

/// Single valued attribute
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Attribute collection for one element
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    attrs: Vec<Attr>,
    by_name: HashMap<String, usize>,
    flags: Vec<String>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the key.
    ///
    /// A flag previously set under the same key is evicted: a key is
    /// either valued or a flag, never both.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        debug_assert!(is_valid_name(&key), "invalid attribute name: {key:?}");
        self.flags.retain(|flag| *flag != key);
        if let Some(&index) = self.by_name.get(&key) {
            self.attrs[index].value = value;
        } else {
            self.by_name.insert(key.clone(), self.attrs.len());
            self.attrs.push(Attr { name: key, value });
        }
    }

    /// Merge a value into an attribute, separated by a single space.
    pub fn merge_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.merge_attribute_with(key, value, " ");
    }

    /// Merge a value into an attribute with an explicit separator.
    ///
    /// If the key is absent this behaves like [`AttrMap::set_attribute`].
    pub fn merge_attribute_with(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        separator: &str,
    ) {
        let key = key.into();
        let value = value.into();
        debug_assert!(is_valid_name(&key), "invalid attribute name: {key:?}");
        self.flags.retain(|flag| *flag != key);
        if let Some(&index) = self.by_name.get(&key) {
            let existing = &mut self.attrs[index].value;
            existing.push_str(separator);
            existing.push_str(&value);
        } else {
            self.by_name.insert(key.clone(), self.attrs.len());
            self.attrs.push(Attr { name: key, value });
        }
    }

    /// Record a valueless (boolean) attribute such as `disabled`.
    ///
    /// Setting the same flag twice keeps a single occurrence. A valued
    /// attribute previously set under the same key is evicted.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        let key = key.into();
        debug_assert!(is_valid_name(&key), "invalid attribute name: {key:?}");
        if self.by_name.remove(&key).is_some() {
            self.attrs.retain(|attr| attr.name != key);
            self.reindex();
        }
        if !self.flags.contains(&key) {
            self.flags.push(key);
        }
    }

    /// Remove valued and flag attributes matching any of the given keys.
    pub fn remove_attributes(&mut self, keys: &[&str]) {
        self.attrs.retain(|attr| !keys.contains(&attr.name.as_str()));
        self.flags.retain(|flag| !keys.contains(&flag.as_str()));
        self.reindex();
    }

    /// Get an attribute value, `None` if it was never set.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.by_name
            .get(key)
            .map(|&index| self.attrs[index].value.as_str())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.by_name.contains_key(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.iter().any(|flag| flag == key)
    }

    /// Valued attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }

    /// Flag attributes in first-seen order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.flags.is_empty()
    }

    fn reindex(&mut self) {
        self.by_name.clear();
        for (index, attr) in self.attrs.iter().enumerate() {
            self.by_name.insert(attr.name.clone(), index);
        }
    }
}

// Names are emitted without escaping, so anything that could break
// out of the tag must never get stored.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut attrs = AttrMap::new();
        attrs.set_attribute("class", "btn");
        attrs.set_attribute("class", "btn-primary");

        assert_eq!(attrs.get_attribute("class"), Some("btn-primary"));
    }

    #[test]
    fn test_merge_concatenates() {
        let mut attrs = AttrMap::new();
        attrs.merge_attribute("class", "btn");
        attrs.merge_attribute("class", "large");

        assert_eq!(attrs.get_attribute("class"), Some("btn large"));
    }

    #[test]
    fn test_merge_with_separator() {
        let mut attrs = AttrMap::new();
        attrs.merge_attribute_with("style", "color: red", "; ");
        attrs.merge_attribute_with("style", "margin: 0", "; ");

        assert_eq!(attrs.get_attribute("style"), Some("color: red; margin: 0"));
    }

    #[test]
    fn test_flag_dedup() {
        let mut attrs = AttrMap::new();
        attrs.set_flag("checked");
        attrs.set_flag("checked");

        assert_eq!(attrs.flags().count(), 1);
        assert!(attrs.has_flag("checked"));
    }

    #[test]
    fn test_flag_and_value_are_exclusive() {
        let mut attrs = AttrMap::new();
        attrs.set_flag("disabled");
        attrs.set_attribute("disabled", "x");

        assert!(!attrs.has_flag("disabled"));
        assert_eq!(attrs.get_attribute("disabled"), Some("x"));

        attrs.set_flag("disabled");
        assert_eq!(attrs.get_attribute("disabled"), None);
        assert!(attrs.has_flag("disabled"));
        assert_eq!(attrs.flags().count(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid attribute name")]
    fn test_malformed_attribute_name_is_rejected() {
        let mut attrs = AttrMap::new();
        attrs.set_attribute("bad name\"", "x");
    }

    #[test]
    fn test_absent_attribute_is_none() {
        let attrs = AttrMap::new();
        assert_eq!(attrs.get_attribute("missing"), None);
        assert!(!attrs.has_flag("missing"));
    }

    #[test]
    fn test_remove_valued_and_flags() {
        let mut attrs = AttrMap::new();
        attrs.set_attribute("href", "/");
        attrs.set_attribute("target", "_blank");
        attrs.set_flag("download");
        attrs.remove_attributes(&["href", "download"]);

        assert_eq!(attrs.get_attribute("href"), None);
        assert!(!attrs.has_flag("download"));
        // Surviving attributes stay addressable after reindexing
        assert_eq!(attrs.get_attribute("target"), Some("_blank"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = AttrMap::new();
        attrs.set_attribute("b", "2");
        attrs.set_attribute("a", "1");
        attrs.set_attribute("c", "3");

        let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
