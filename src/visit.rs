//! Gated traversal of a `TypeNode` tree.
//!
//! The node drives the walk and calls back into a `TypeVisitor` in a fixed
//! order per kind:
//!
//! - leaves (`Simple`, `Enum`, `Custom`, `Unknown`): a single `visit_*` call.
//! - `Array` / `Collection`: `visit_before_element`, then the element only if
//!   `should_visit_element` says so, then `visit_after_element`.
//! - `Map`: the key is finished (before / gate / after) before the value starts.
//! - `Complex`: `visit_before_all_fields`; if `should_visit_fields`, every field
//!   in order gets `visit_before_field`, a gated `should_visit_field_type`
//!   descent and `visit_after_field`; finally `visit_after_all_fields`.
//!
//! Gates are ordinary callbacks and may have side effects. They run even when
//! they answer `false`. An `Err` from any callback stops the walk immediately.
use crate::descriptor::TypeDescriptor;
use crate::node::{SimpleType, TypeNode};

/// Which single-child container is being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Array,
    Collection,
}

pub trait TypeVisitor {
    type Error;

    fn visit_simple(&mut self, simple: SimpleType) -> Result<(), Self::Error>;

    fn visit_enum(&mut self, constants: &[String]) -> Result<(), Self::Error>;

    fn visit_custom(&mut self, descriptor: &TypeDescriptor) -> Result<(), Self::Error>;

    fn visit_unknown(&mut self, descriptor: &TypeDescriptor) -> Result<(), Self::Error>;

    fn visit_before_element(&mut self, _kind: ContainerKind) -> Result<(), Self::Error> {
        Ok(())
    }

    fn should_visit_element(&mut self, _kind: ContainerKind) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_after_element(&mut self, _kind: ContainerKind) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_before_key(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn should_visit_key(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_after_key(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_before_value(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn should_visit_value(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_after_value(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_before_all_fields(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn should_visit_fields(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_before_field(&mut self, _name: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn should_visit_field_type(&mut self, _name: &str) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_after_field(&mut self, _name: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_after_all_fields(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl TypeNode {
    /// Walk this node (and, as the gates allow, its descendants) with `visitor`.
    pub fn accept<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: TypeVisitor + ?Sized,
    {
        match self {
            TypeNode::Simple(simple) => visitor.visit_simple(*simple),
            TypeNode::Enum(constants) => visitor.visit_enum(constants),
            TypeNode::Custom(descriptor) => visitor.visit_custom(descriptor),
            TypeNode::Unknown(descriptor) => visitor.visit_unknown(descriptor),
            TypeNode::Array(element) => visit_element(visitor, ContainerKind::Array, element),
            TypeNode::Collection(element) => {
                visit_element(visitor, ContainerKind::Collection, element)
            }
            TypeNode::Map { key, value } => {
                conditional_visit(
                    visitor,
                    |v| v.visit_before_key(),
                    |v| v.should_visit_key(),
                    |v| key.accept(v),
                    |v| v.visit_after_key(),
                )?;
                conditional_visit(
                    visitor,
                    |v| v.visit_before_value(),
                    |v| v.should_visit_value(),
                    |v| value.accept(v),
                    |v| v.visit_after_value(),
                )
            }
            TypeNode::Complex(fields) => conditional_visit(
                visitor,
                |v| v.visit_before_all_fields(),
                |v| v.should_visit_fields(),
                |v| {
                    for (name, node) in fields {
                        conditional_visit(
                            v,
                            |v| v.visit_before_field(name),
                            |v| v.should_visit_field_type(name),
                            |v| node.accept(v),
                            |v| v.visit_after_field(name),
                        )?;
                    }
                    Ok(())
                },
                |v| v.visit_after_all_fields(),
            ),
        }
    }
}

fn visit_element<V>(visitor: &mut V, kind: ContainerKind, element: &TypeNode) -> Result<(), V::Error>
where
    V: TypeVisitor + ?Sized,
{
    conditional_visit(
        visitor,
        |v| v.visit_before_element(kind),
        |v| v.should_visit_element(kind),
        |v| element.accept(v),
        |v| v.visit_after_element(kind),
    )
}

/// before → (gate ? body) → after
fn conditional_visit<V, B, G, F, A>(
    visitor: &mut V,
    before: B,
    gate: G,
    body: F,
    after: A,
) -> Result<(), V::Error>
where
    V: TypeVisitor + ?Sized,
    B: FnOnce(&mut V) -> Result<(), V::Error>,
    G: FnOnce(&mut V) -> Result<bool, V::Error>,
    F: FnOnce(&mut V) -> Result<(), V::Error>,
    A: FnOnce(&mut V) -> Result<(), V::Error>,
{
    before(visitor)?;
    if gate(visitor)? {
        body(visitor)?;
    }
    after(visitor)
}
