//! Parsed type signatures.
//!
//! A `TypeDescriptor` is the value the rest of the crate passes around
//! instead of raw signature text: a root name, an array dimension and the
//! ordered type parameters, e.g. `Map<String, List<Integer>>[]`.
mod parse;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::node::OBJECT_TYPE_NAME;

static TYPE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s<>\[\]]+$").expect("type name pattern is valid")
});

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    array_dimension: usize,
    type_parameters: Arc<[TypeDescriptor]>,
}

/// Formal generic-variable name → actual signature text.
///
/// Lookups match the whole trimmed signature only; `T` is replaced in
/// `List<T>` because the parser reaches `T` on its own while descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNameSubstitution {
    mappings: HashMap<String, String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeDescriptor {
    /// Build a descriptor from explicit parts.
    pub fn from_parts(
        name: impl Into<String>,
        type_parameters: Vec<TypeDescriptor>,
        array_dimension: isize,
    ) -> Result<Self, ValidationError> {
        let array_dimension = usize::try_from(array_dimension)
            .map_err(|_| ValidationError::NegativeArrayDimension(array_dimension))?;
        Self::checked(name.into(), type_parameters, array_dimension)
    }

    /// A bare name with no parameters and no array dimension.
    pub fn named(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::checked(name.into(), Vec::new(), 0)
    }

    /// The generic object type, `java.lang.Object`.
    pub fn object() -> Self {
        Self {
            name: OBJECT_TYPE_NAME.to_owned(),
            array_dimension: 0,
            type_parameters: Vec::new().into(),
        }
    }

    /// Parse signature text with no name substitution.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        parse::parse_signature(text, None)
    }

    /// Parse signature text, replacing any (sub-)signature that exactly
    /// matches a key of `substitution`.
    pub fn parse_with(
        text: &str,
        substitution: &TypeNameSubstitution,
    ) -> Result<Self, ValidationError> {
        parse::parse_signature(text, Some(substitution))
    }

    pub(crate) fn checked(
        name: String,
        type_parameters: Vec<TypeDescriptor>,
        array_dimension: usize,
    ) -> Result<Self, ValidationError> {
        if !TYPE_NAME.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self {
            name,
            array_dimension,
            type_parameters: type_parameters.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn array_dimension(&self) -> usize {
        self.array_dimension
    }

    pub fn type_parameters(&self) -> &[TypeDescriptor] {
        &self.type_parameters
    }

    pub fn is_array(&self) -> bool {
        self.array_dimension > 0
    }

    /// The same descriptor with one array level removed, or `None` when this
    /// is not an array. Type parameters are shared, not copied.
    pub fn element(&self) -> Option<TypeDescriptor> {
        let array_dimension = self.array_dimension.checked_sub(1)?;
        Some(Self {
            name: self.name.clone(),
            array_dimension,
            type_parameters: Arc::clone(&self.type_parameters),
        })
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some((first, rest)) = self.type_parameters.split_first() {
            write!(f, "<{first}")?;
            for parameter in rest {
                write!(f, ", {parameter}")?;
            }
            f.write_str(">")?;
        }
        for _ in 0..self.array_dimension {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl FromStr for TypeDescriptor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl TypeNameSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair declared generic-variable names with the actual parameters given
    /// at a use site. Extra names or extra parameters are left unmapped.
    pub fn zip<S: AsRef<str>>(variables: &[S], actual: &[TypeDescriptor]) -> Self {
        variables
            .iter()
            .zip(actual)
            .map(|(variable, parameter)| (variable.as_ref().to_owned(), parameter.to_string()))
            .collect()
    }

    pub fn insert(&mut self, variable: impl Into<String>, signature: impl Into<String>) {
        self.mappings.insert(variable.into(), signature.into());
    }

    pub fn get(&self, variable: &str) -> Option<&str> {
        self.mappings.get(variable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl FromIterator<(String, String)> for TypeNameSubstitution {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { mappings: iter.into_iter().collect() }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
