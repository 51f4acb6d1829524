//! Descriptor → `TypeNode` resolution.
//!
//! Resolution order for one descriptor, first match wins:
//!
//! 1. array dimension > 0 → `Array` of the same descriptor one level down
//! 2. fixed simple-name table → `Simple`
//! 3. custom registry → `Custom` (beats anything the provider would say)
//! 4. provider category: unknown (per policy), enumeration, collection,
//!    map, or complex
//!
//! Complex types are expanded with their generic variables substituted by
//! the actual parameters of the descriptor being resolved. Fields come from
//! declarations, then getters, then setters; a later field with the same name
//! replaces the earlier node but keeps its position.
mod accessors;
mod registry;

use std::borrow::Borrow;
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::{GeneratorConfig, UnknownTypeHandling};
use crate::descriptor::{TypeDescriptor, TypeNameSubstitution};
use crate::error::{GenerateError, UnknownTypeError};
use crate::metadata::{TypeCategory, TypeMetadataProvider};
use crate::node::{ComplexFields, TypeNode};

pub use registry::CustomTypeRegistry;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone)]
pub struct TypeTreeGenerator<P> {
    provider: P,
    config: GeneratorConfig,
    registry: CustomTypeRegistry,
}

/// Per-call state: complex signatures currently being expanded, and depth.
#[derive(Debug, Default)]
struct Walk {
    expanding: HashSet<String>,
    depth: usize,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl<P: TypeMetadataProvider> TypeTreeGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, GeneratorConfig::default())
    }

    pub fn with_config(provider: P, config: GeneratorConfig) -> Self {
        Self { provider, config, registry: CustomTypeRegistry::new() }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn registry(&self) -> &CustomTypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CustomTypeRegistry {
        &mut self.registry
    }

    pub fn register_custom_type(&mut self, name: impl Into<String>) -> bool {
        self.registry.register(name)
    }

    pub fn unregister_custom_type(&mut self, name: &str) -> bool {
        self.registry.unregister(name)
    }

    /// Build the tree for one descriptor. Any failure aborts the whole call.
    pub fn generate(&self, descriptor: &TypeDescriptor) -> Result<TypeNode, GenerateError> {
        debug!(signature = %descriptor, "generating type tree");
        self.descend(descriptor, &mut Walk::default())
    }

    /// Parse `signature` (no substitution) and generate its tree.
    pub fn generate_signature(&self, signature: &str) -> Result<TypeNode, GenerateError> {
        self.generate(&TypeDescriptor::parse(signature)?)
    }

    /// Build one synthetic `Complex` node from several named roots.
    ///
    /// A root that resolves to a complex node has its fields spliced into the
    /// result and its own name dropped; any other root becomes a single named
    /// field. Later roots overwrite same-named fields of earlier ones.
    pub fn generate_all<I, K, D>(&self, roots: I) -> Result<TypeNode, GenerateError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: Borrow<TypeDescriptor>,
    {
        let mut fields = ComplexFields::new();
        for (name, descriptor) in roots {
            match self.generate(descriptor.borrow())? {
                TypeNode::Complex(inner) => fields.extend(inner),
                node => {
                    fields.insert(name.as_ref().to_owned(), node);
                }
            }
        }
        Ok(TypeNode::Complex(fields))
    }

    fn descend(&self, descriptor: &TypeDescriptor, walk: &mut Walk) -> Result<TypeNode, GenerateError> {
        if walk.depth >= self.config.max_depth {
            debug!(signature = %descriptor, limit = self.config.max_depth, "type tree too deep");
            return Err(GenerateError::DepthLimitExceeded {
                limit: self.config.max_depth,
                signature: descriptor.to_string(),
            });
        }
        walk.depth += 1;
        let node = self.resolve(descriptor, walk);
        walk.depth -= 1;
        node
    }

    fn resolve(&self, descriptor: &TypeDescriptor, walk: &mut Walk) -> Result<TypeNode, GenerateError> {
        trace!(signature = %descriptor, depth = walk.depth, "resolving");

        if let Some(element) = descriptor.element() {
            return Ok(TypeNode::array(self.descend(&element, walk)?));
        }

        let name = descriptor.name();
        if let Some(simple) = self.provider.simple_type(name) {
            return Ok(TypeNode::Simple(simple));
        }
        if self.registry.contains(name) {
            return Ok(TypeNode::Custom(descriptor.clone()));
        }

        let category = self.provider.category(name).map_err(|source| metadata_error(name, source))?;
        match category {
            None => self.unknown(descriptor),
            Some(TypeCategory::Enumeration(constants)) => Ok(TypeNode::Enum(constants)),
            Some(TypeCategory::Collection) => {
                let element = parameter_or_object(descriptor, 0);
                Ok(TypeNode::collection(self.descend(&element, walk)?))
            }
            Some(TypeCategory::Map) => {
                let key = self.descend(&parameter_or_object(descriptor, 0), walk)?;
                let value = self.descend(&parameter_or_object(descriptor, 1), walk)?;
                Ok(TypeNode::map(key, value))
            }
            Some(TypeCategory::Complex) => self.complex(descriptor, walk).map(TypeNode::Complex),
        }
    }

    fn unknown(&self, descriptor: &TypeDescriptor) -> Result<TypeNode, GenerateError> {
        let handling = self.config.unknown_type_handling;
        debug!(signature = %descriptor, ?handling, "unknown type");
        match handling {
            UnknownTypeHandling::ThrowError => {
                Err(UnknownTypeError { name: descriptor.name().to_owned() }.into())
            }
            UnknownTypeHandling::TreatAsCustom => Ok(TypeNode::Custom(descriptor.clone())),
            UnknownTypeHandling::DistinctToken => Ok(TypeNode::Unknown(descriptor.clone())),
        }
    }

    fn complex(&self, descriptor: &TypeDescriptor, walk: &mut Walk) -> Result<ComplexFields, GenerateError> {
        let signature = descriptor.to_string();
        if !walk.expanding.insert(signature.clone()) {
            debug!(%signature, "cyclic type");
            return Err(GenerateError::CyclicType { signature });
        }
        let fields = self.complex_fields(descriptor, walk);
        walk.expanding.remove(&signature);
        fields
    }

    fn complex_fields(
        &self,
        descriptor: &TypeDescriptor,
        walk: &mut Walk,
    ) -> Result<ComplexFields, GenerateError> {
        let name = descriptor.name();
        let variables = self
            .provider
            .type_variables(name)
            .map_err(|source| metadata_error(name, source))?;
        let substitution = TypeNameSubstitution::zip(&variables, descriptor.type_parameters());

        let mut fields = ComplexFields::new();
        let declared = self
            .provider
            .declared_fields(name)
            .map_err(|source| metadata_error(name, source))?;
        for field in declared {
            let node = self.field(&field.signature, &substitution, walk)?;
            fields.insert(field.name, node);
        }

        let extraction = self.config.field_extraction;
        if !(extraction.getters() || extraction.setters()) {
            return Ok(fields);
        }
        let methods = self.provider.methods(name).map_err(|source| metadata_error(name, source))?;
        if extraction.getters() {
            for (field_name, signature) in accessors::getter_fields(&methods) {
                let node = self.field(signature, &substitution, walk)?;
                fields.insert(field_name, node);
            }
        }
        if extraction.setters() {
            for (field_name, signature) in accessors::setter_fields(&methods) {
                let node = self.field(signature, &substitution, walk)?;
                fields.insert(field_name, node);
            }
        }
        Ok(fields)
    }

    fn field(
        &self,
        signature: &str,
        substitution: &TypeNameSubstitution,
        walk: &mut Walk,
    ) -> Result<TypeNode, GenerateError> {
        let descriptor = TypeDescriptor::parse_with(signature, substitution)?;
        self.descend(&descriptor, walk)
    }
}

fn parameter_or_object(descriptor: &TypeDescriptor, index: usize) -> TypeDescriptor {
    descriptor
        .type_parameters()
        .get(index)
        .cloned()
        .unwrap_or_else(TypeDescriptor::object)
}

fn metadata_error(name: &str, source: anyhow::Error) -> GenerateError {
    GenerateError::Metadata { name: name.to_owned(), source }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
