//! The introspection boundary.
//!
//! The generator never inspects types itself. It asks a
//! `TypeMetadataProvider` a handful of narrow questions about a type name
//! and builds the tree from the answers.
use serde::Deserialize;

use crate::node::SimpleType;

/// What kind of non-simple type a name refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCategory {
    /// Constant names in declaration order.
    Enumeration(Vec<String>),
    /// Element type is the first type parameter.
    Collection,
    /// Key and value types are the first two type parameters.
    Map,
    /// Anything with fields.
    Complex,
}

/// A declared field: its name and the signature text of its type, written
/// in terms of the owning type's generic variables (e.g. `List<T>`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSignature {
    pub name: String,
    #[serde(rename = "type")]
    pub signature: String,
}

/// A public method, as far as accessor discovery needs to know it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Return type signature; `void` when the method returns nothing.
    #[serde(default = "void")]
    pub returns: String,
}

fn void() -> String {
    "void".to_string()
}

pub trait TypeMetadataProvider {
    /// Fixed scalar kinds. Providers normally keep the built-in table.
    fn simple_type(&self, name: &str) -> Option<SimpleType> {
        SimpleType::from_type_name(name)
    }

    /// `Ok(None)` means the name is not known at all.
    fn category(&self, name: &str) -> anyhow::Result<Option<TypeCategory>>;

    /// Declared generic-variable names, in declaration order.
    fn type_variables(&self, name: &str) -> anyhow::Result<Vec<String>>;

    fn declared_fields(&self, name: &str) -> anyhow::Result<Vec<FieldSignature>>;

    /// Candidates for accessor-derived fields. Qualification is decided by
    /// the generator, not the provider.
    fn methods(&self, _name: &str) -> anyhow::Result<Vec<MethodSignature>> {
        Ok(Vec::new())
    }
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for &P {
    fn simple_type(&self, name: &str) -> Option<SimpleType> {
        (**self).simple_type(name)
    }

    fn category(&self, name: &str) -> anyhow::Result<Option<TypeCategory>> {
        (**self).category(name)
    }

    fn type_variables(&self, name: &str) -> anyhow::Result<Vec<String>> {
        (**self).type_variables(name)
    }

    fn declared_fields(&self, name: &str) -> anyhow::Result<Vec<FieldSignature>> {
        (**self).declared_fields(name)
    }

    fn methods(&self, name: &str) -> anyhow::Result<Vec<MethodSignature>> {
        (**self).methods(name)
    }
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, parameters: Vec<String>, returns: impl Into<String>) -> Self {
        Self { name: name.into(), parameters, returns: returns.into() }
    }

    pub fn getter(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self::new(name, Vec::new(), returns)
    }

    pub fn setter(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::new(name, vec![parameter.into()], void())
    }
}

impl FieldSignature {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self { name: name.into(), signature: signature.into() }
    }
}
