use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Scalar kinds that resolve without asking the metadata provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleType {
    Byte,
    Short,
    Int,
    Long,
    Bigint,
    Float,
    Double,
    Decimal,
    Char,
    String,
    Boolean,
    Object,
    Void,
    BoxedByte,
    BoxedShort,
    BoxedInt,
    BoxedLong,
    BoxedFloat,
    BoxedDouble,
    BoxedChar,
    BoxedBoolean,
    BoxedVoid,
}

/// Signature name of the generic "object" type, used when a collection or
/// map is referenced without its type parameters.
pub const OBJECT_TYPE_NAME: &str = "java.lang.Object";

static SIMPLE_TYPE_NAMES: Lazy<HashMap<&'static str, SimpleType>> = Lazy::new(|| {
    use SimpleType::*;
    let mut table = HashMap::new();
    for (name, kind) in [
        ("byte", Byte),
        ("short", Short),
        ("int", Int),
        ("long", Long),
        ("float", Float),
        ("double", Double),
        ("char", Char),
        ("boolean", Boolean),
        ("void", Void),
    ] {
        table.insert(name, kind);
    }
    for (qualified, short, kind) in [
        ("java.lang.Byte", "Byte", BoxedByte),
        ("java.lang.Short", "Short", BoxedShort),
        ("java.lang.Integer", "Integer", BoxedInt),
        ("java.lang.Long", "Long", BoxedLong),
        ("java.lang.Float", "Float", BoxedFloat),
        ("java.lang.Double", "Double", BoxedDouble),
        ("java.lang.Character", "Character", BoxedChar),
        ("java.lang.Boolean", "Boolean", BoxedBoolean),
        ("java.lang.Void", "Void", BoxedVoid),
        ("java.lang.String", "String", String),
        (OBJECT_TYPE_NAME, "Object", Object),
        ("java.math.BigInteger", "BigInteger", Bigint),
        ("java.math.BigDecimal", "BigDecimal", Decimal),
    ] {
        table.insert(qualified, kind);
        table.insert(short, kind);
    }
    table
});

impl SimpleType {
    /// Look a signature name up in the fixed table. Both `java.lang.Integer`
    /// and `Integer` resolve to `BoxedInt`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        SIMPLE_TYPE_NAMES.get(name).copied()
    }

    pub fn is_boxed(self) -> bool {
        use SimpleType::*;
        matches!(
            self,
            BoxedByte
                | BoxedShort
                | BoxedInt
                | BoxedLong
                | BoxedFloat
                | BoxedDouble
                | BoxedChar
                | BoxedBoolean
                | BoxedVoid
        )
    }

    pub fn is_void(self) -> bool {
        matches!(self, SimpleType::Void | SimpleType::BoxedVoid)
    }
}
