//! An in-memory `TypeMetadataProvider`.
//!
//! Embedders that cannot introspect at runtime (or tests) describe their
//! types up front, either in code or as JSON:
//!
//! ```json
//! {
//!   "types": {
//!     "com.example.Color": { "kind": "enumeration", "constants": ["RED", "GREEN"] },
//!     "java.util.List":    { "kind": "collection" },
//!     "com.example.Page":  {
//!       "kind": "complex",
//!       "type_variables": ["T"],
//!       "fields": [{ "name": "items", "type": "java.util.List<T>" }],
//!       "methods": [{ "name": "getTotal", "returns": "long" }]
//!     }
//!   }
//! }
//! ```
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::metadata::{FieldSignature, MethodSignature, TypeCategory, TypeMetadataProvider};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    types: IndexMap<String, CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Enumeration { constants: Vec<String> },
    Collection,
    Map,
    Complex(ComplexEntry),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComplexEntry {
    pub type_variables: Vec<String>,
    pub fields: Vec<FieldSignature>,
    pub methods: Vec<MethodSignature>,
}

const JAVA_COLLECTIONS: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "java.util.Queue",
    "java.util.Deque",
];

const JAVA_MAPS: &[&str] = &[
    "java.util.Map",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.TreeMap",
    "java.util.SortedMap",
];

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        from_json_with_path(src)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&src)
    }

    /// Register the common `java.util` collection and map types, under both
    /// their qualified and short names.
    pub fn with_java_collections(mut self) -> Self {
        let short = |name: &'static str| name.rsplit('.').next().unwrap_or(name);
        for &name in JAVA_COLLECTIONS {
            self.insert(name, CatalogEntry::Collection);
            self.insert(short(name), CatalogEntry::Collection);
        }
        for &name in JAVA_MAPS {
            self.insert(name, CatalogEntry::Map);
            self.insert(short(name), CatalogEntry::Map);
        }
        self
    }

    /// Returns the entry previously stored under `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.types.insert(name.into(), entry)
    }

    pub fn with(mut self, name: impl Into<String>, entry: CatalogEntry) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn with_enumeration<I, S>(self, name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let constants = constants.into_iter().map(Into::into).collect();
        self.with(name, CatalogEntry::Enumeration { constants })
    }

    pub fn with_complex(self, name: impl Into<String>, entry: ComplexEntry) -> Self {
        self.with(name, CatalogEntry::Complex(entry))
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn complex(&self, name: &str) -> Option<&ComplexEntry> {
        match self.types.get(name) {
            Some(CatalogEntry::Complex(entry)) => Some(entry),
            _ => None,
        }
    }
}

impl ComplexEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_variables = variables.into_iter().map(Into::into).collect();
        self
    }

    pub fn field(mut self, name: impl Into<String>, signature: impl Into<String>) -> Self {
        self.fields.push(FieldSignature::new(name, signature));
        self
    }

    pub fn method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }
}

impl TypeMetadataProvider for Catalog {
    fn category(&self, name: &str) -> anyhow::Result<Option<TypeCategory>> {
        Ok(self.types.get(name).map(|entry| match entry {
            CatalogEntry::Enumeration { constants } => TypeCategory::Enumeration(constants.clone()),
            CatalogEntry::Collection => TypeCategory::Collection,
            CatalogEntry::Map => TypeCategory::Map,
            CatalogEntry::Complex(_) => TypeCategory::Complex,
        }))
    }

    fn type_variables(&self, name: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.complex(name).map(|c| c.type_variables.clone()).unwrap_or_default())
    }

    fn declared_fields(&self, name: &str) -> anyhow::Result<Vec<FieldSignature>> {
        Ok(self.complex(name).map(|c| c.fields.clone()).unwrap_or_default())
    }

    fn methods(&self, name: &str) -> anyhow::Result<Vec<MethodSignature>> {
        Ok(self.complex(name).map(|c| c.methods.clone()).unwrap_or_default())
    }
}

/// Deserialize with JSON-path context in error messages.
pub(crate) fn from_json_with_path<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| LoadError::Json {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_every_entry_kind() {
        let src = json!({
            "types": {
                "com.example.Color": { "kind": "enumeration", "constants": ["RED", "GREEN"] },
                "java.util.List": { "kind": "collection" },
                "java.util.Map": { "kind": "map" },
                "com.example.Page": {
                    "kind": "complex",
                    "type_variables": ["T"],
                    "fields": [{ "name": "items", "type": "java.util.List<T>" }],
                    "methods": [
                        { "name": "getTotal", "returns": "long" },
                        { "name": "setTotal", "parameters": ["long"] }
                    ]
                }
            }
        })
        .to_string();

        let catalog = Catalog::from_json_str(&src).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.category("com.example.Color").unwrap(),
            Some(TypeCategory::Enumeration(vec!["RED".into(), "GREEN".into()]))
        );
        assert_eq!(catalog.category("java.util.Map").unwrap(), Some(TypeCategory::Map));
        assert_eq!(catalog.category("com.example.Page").unwrap(), Some(TypeCategory::Complex));
        assert_eq!(catalog.type_variables("com.example.Page").unwrap(), ["T"]);
        assert_eq!(
            catalog.declared_fields("com.example.Page").unwrap(),
            [FieldSignature::new("items", "java.util.List<T>")]
        );
        assert_eq!(
            catalog.methods("com.example.Page").unwrap(),
            [MethodSignature::getter("getTotal", "long"), MethodSignature::setter("setTotal", "long")]
        );
    }

    #[test]
    fn missing_names_are_not_errors() {
        let catalog = Catalog::new();
        assert_eq!(catalog.category("nope").unwrap(), None);
        assert!(catalog.declared_fields("nope").unwrap().is_empty());
        assert!(catalog.type_variables("nope").unwrap().is_empty());
    }

    #[test]
    fn json_errors_carry_their_path() {
        let src = r#"{ "types": { "a.B": { "kind": "complex", "fields": [{ "name": 3 }] } } }"#;
        let err = Catalog::from_json_str(src).unwrap_err();
        let LoadError::Json { path, .. } = &err else { panic!("expected a JSON error, got {err}") };
        assert!(path.starts_with("types.a.B"), "path was {path}");

        let src = r#"{ "types": { "a.B": { "kind": "tuple" } } }"#;
        assert!(Catalog::from_json_str(src).is_err());
    }

    #[test]
    fn java_collections_register_short_names() {
        let catalog = Catalog::new().with_java_collections();
        assert_eq!(catalog.category("List").unwrap(), Some(TypeCategory::Collection));
        assert_eq!(catalog.category("java.util.HashMap").unwrap(), Some(TypeCategory::Map));
        assert_eq!(catalog.category("Map").unwrap(), Some(TypeCategory::Map));
    }

    #[test]
    fn unreadable_file() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
