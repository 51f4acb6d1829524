use std::collections::HashSet;

use tracing::debug;

/// Fully-qualified type names that always resolve to `Custom` nodes.
///
/// Mutation needs `&mut`, so it cannot overlap a generation call on the
/// same generator; sharing one across threads is the owner's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTypeRegistry {
    names: HashSet<String>,
}

impl CustomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already registered.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        debug!(%name, "registering custom type");
        self.names.insert(name)
    }

    /// Returns `false` if the name was not registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        debug!(%name, "unregistering custom type");
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for CustomTypeRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.register(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CustomTypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
