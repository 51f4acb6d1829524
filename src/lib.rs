//! Type trees from type signatures.
//!
//! Parse a generic signature such as `Map<String, List<Integer>>[]` into a
//! [`TypeDescriptor`], turn it into a [`TypeNode`] tree with a
//! [`TypeTreeGenerator`] backed by any [`TypeMetadataProvider`], and walk the
//! result with a [`TypeVisitor`] that can prune whole subtrees through its
//! gate callbacks.
//!
//! ```
//! use type_tree::{Catalog, ComplexEntry, SimpleType, TypeNode, TypeTreeGenerator};
//!
//! let catalog = Catalog::new()
//!     .with_java_collections()
//!     .with_complex("demo.Page", ComplexEntry::new()
//!         .type_variables(["T"])
//!         .field("items", "java.util.List<T>"));
//!
//! let tree = TypeTreeGenerator::new(catalog)
//!     .generate_signature("demo.Page<java.lang.Long>")
//!     .unwrap();
//!
//! assert_eq!(
//!     tree,
//!     TypeNode::complex([("items", TypeNode::collection(TypeNode::Simple(SimpleType::BoxedLong)))])
//! );
//! ```
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod node;
pub mod visit;

pub use catalog::{Catalog, CatalogEntry, ComplexEntry};
pub use config::{FieldExtraction, GeneratorConfig, UnknownTypeHandling};
pub use descriptor::{TypeDescriptor, TypeNameSubstitution};
pub use error::{GenerateError, LoadError, UnknownTypeError, ValidationError};
pub use generator::{CustomTypeRegistry, TypeTreeGenerator};
pub use metadata::{FieldSignature, MethodSignature, TypeCategory, TypeMetadataProvider};
pub use node::{ComplexFields, SimpleType, TypeNode};
pub use visit::{ContainerKind, TypeVisitor};
