//! Registry of finalized category domains.
//!
//! Later export stages read the registered domain of a feature to validate or
//! decorate incoming values. The registry is passed explicitly to every
//! expansion; callers serialize expansions that share one instance.

use std::collections::BTreeMap;

/// Sink for category domains produced by encoders.
pub trait FeatureMapper {
    /// Record the ordered category labels of feature `name`.
    fn update_value_space(&mut self, name: &str, categories: Vec<String>);
}

/// In-memory registry keyed by feature name. Later writes replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueSpaceRegistry {
    entries: BTreeMap<String, Vec<String>>,
}

impl ValueSpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered domain of `name`, if any.
    pub fn value_space(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in feature-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, categories)| (name.as_str(), categories.as_slice()))
    }
}

impl FeatureMapper for ValueSpaceRegistry {
    fn update_value_space(&mut self, name: &str, categories: Vec<String>) {
        self.entries.insert(name.to_string(), categories);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_lookup() {
        let mut registry = ValueSpaceRegistry::new();
        assert!(registry.is_empty());

        registry.update_value_space("color", vec!["red".into(), "blue".into()]);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("color"));
        assert_eq!(
            registry.value_space("color").unwrap(),
            &["red".to_string(), "blue".to_string()]
        );
        assert!(registry.value_space("size").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = ValueSpaceRegistry::new();
        registry.update_value_space("origin", vec!["1".into()]);
        registry.update_value_space("origin", vec!["2".into(), "3".into()]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.value_space("origin").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_domain_is_registered() {
        let mut registry = ValueSpaceRegistry::new();
        registry.update_value_space("empty", Vec::new());
        assert!(registry.contains("empty"));
        assert!(registry.value_space("empty").unwrap().is_empty());
    }

    #[test]
    fn test_iter_in_name_order() {
        let mut registry = ValueSpaceRegistry::new();
        registry.update_value_space("b", vec![]);
        registry.update_value_space("a", vec![]);

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
