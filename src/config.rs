//! Generator configuration.
use serde::Deserialize;

use crate::catalog::from_json_with_path;
use crate::error::LoadError;

/// Which accessor methods contribute fields to complex types, on top of the
/// declared fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldExtraction {
    None,
    Getters,
    Setters,
    #[default]
    Both,
}

/// What to do with a name the metadata provider does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTypeHandling {
    /// Fail the whole generation with `UnknownTypeError`.
    #[default]
    ThrowError,
    /// Emit a `Custom` node for it.
    TreatAsCustom,
    /// Emit an `Unknown` node for it.
    DistinctToken,
}

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub field_extraction: FieldExtraction,
    pub unknown_type_handling: UnknownTypeHandling,
    /// Deepest nesting a single generation may reach before it is aborted.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            field_extraction: FieldExtraction::default(),
            unknown_type_handling: UnknownTypeHandling::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        from_json_with_path(src)
    }

    pub fn with_field_extraction(mut self, field_extraction: FieldExtraction) -> Self {
        self.field_extraction = field_extraction;
        self
    }

    pub fn with_unknown_type_handling(mut self, handling: UnknownTypeHandling) -> Self {
        self.unknown_type_handling = handling;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl FieldExtraction {
    pub fn getters(self) -> bool {
        matches!(self, FieldExtraction::Getters | FieldExtraction::Both)
    }

    pub fn setters(self) -> bool {
        matches!(self, FieldExtraction::Setters | FieldExtraction::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.field_extraction, FieldExtraction::Both);
        assert_eq!(config.unknown_type_handling, UnknownTypeHandling::ThrowError);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "unknown_type_handling": "distinct_token" }"#)
            .unwrap();
        assert_eq!(config.unknown_type_handling, UnknownTypeHandling::DistinctToken);
        assert_eq!(config.field_extraction, FieldExtraction::Both);

        let config = GeneratorConfig::from_json_str(r#"{ "field_extraction": "none", "max_depth": 8 }"#)
            .unwrap();
        assert_eq!(config.field_extraction, FieldExtraction::None);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn bad_policy_names_are_reported() {
        let err = GeneratorConfig::from_json_str(r#"{ "field_extraction": "all" }"#).unwrap_err();
        assert!(err.to_string().contains("field_extraction"), "{err}");
    }

    #[test]
    fn extraction_flags() {
        assert!(FieldExtraction::Both.getters() && FieldExtraction::Both.setters());
        assert!(FieldExtraction::Getters.getters() && !FieldExtraction::Getters.setters());
        assert!(!FieldExtraction::None.getters() && !FieldExtraction::None.setters());
    }
}
