//! The generated type tree.
//!
//! A `TypeNode` is one of eight closed kinds. Trees are built once per
//! generation call and never mutated afterwards; children are owned
//! top-down and no node points back at its parent.
mod simple;

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::TypeDescriptor;

pub use simple::{OBJECT_TYPE_NAME, SimpleType};

/// Named fields of a complex node, in first-seen insertion order.
///
/// Overwriting an existing name replaces its node but keeps its original
/// position, so renderers see a deterministic order.
pub type ComplexFields = IndexMap<String, TypeNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeNode {
    Simple(SimpleType),
    /// Constant names in declaration order.
    Enum(Vec<String>),
    Array(Box<TypeNode>),
    Collection(Box<TypeNode>),
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    Complex(ComplexFields),
    /// Registered to bypass metadata resolution (or an unknown type under
    /// the treat-as-custom policy).
    Custom(TypeDescriptor),
    Unknown(TypeDescriptor),
}

impl TypeNode {
    pub fn array(element: TypeNode) -> Self {
        TypeNode::Array(Box::new(element))
    }

    pub fn collection(element: TypeNode) -> Self {
        TypeNode::Collection(Box::new(element))
    }

    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        TypeNode::Map { key: Box::new(key), value: Box::new(value) }
    }

    pub fn complex<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeNode)>,
        S: Into<String>,
    {
        TypeNode::Complex(fields.into_iter().map(|(name, node)| (name.into(), node)).collect())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::Simple(_) => "simple",
            TypeNode::Enum(_) => "enum",
            TypeNode::Array(_) => "array",
            TypeNode::Collection(_) => "collection",
            TypeNode::Map { .. } => "map",
            TypeNode::Complex(_) => "complex",
            TypeNode::Custom(_) => "custom",
            TypeNode::Unknown(_) => "unknown",
        }
    }

    pub fn fields(&self) -> Option<&ComplexFields> {
        match self {
            TypeNode::Complex(fields) => Some(fields),
            _ => None,
        }
    }

    /// Nodes with no children to descend into.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeNode::Simple(_) | TypeNode::Enum(_) | TypeNode::Custom(_) | TypeNode::Unknown(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut fields = ComplexFields::new();
        fields.insert("a".into(), TypeNode::Simple(SimpleType::Int));
        fields.insert("b".into(), TypeNode::Simple(SimpleType::Int));
        fields.insert("a".into(), TypeNode::Simple(SimpleType::String));
        let names: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(fields["a"], TypeNode::Simple(SimpleType::String));
    }

    #[test]
    fn serialized_shape() {
        let node = TypeNode::complex([
            ("ids", TypeNode::array(TypeNode::Simple(SimpleType::Long))),
            ("tags", TypeNode::map(
                TypeNode::Simple(SimpleType::String),
                TypeNode::Enum(vec!["RED".into(), "GREEN".into()]),
            )),
            ("blob", TypeNode::Custom(TypeDescriptor::parse("com.example.Blob<int>").unwrap())),
        ]);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "kind": "complex",
                "of": {
                    "ids": { "kind": "array", "of": { "kind": "simple", "of": "long" } },
                    "tags": {
                        "kind": "map",
                        "of": {
                            "key": { "kind": "simple", "of": "string" },
                            "value": { "kind": "enum", "of": ["RED", "GREEN"] }
                        }
                    },
                    "blob": { "kind": "custom", "of": "com.example.Blob<int>" }
                }
            })
        );
    }

    #[test]
    fn leaves() {
        assert!(TypeNode::Enum(vec![]).is_leaf());
        assert!(!TypeNode::collection(TypeNode::Simple(SimpleType::Int)).is_leaf());
        assert_eq!(TypeNode::complex(Vec::<(String, TypeNode)>::new()).kind_name(), "complex");
    }
}
