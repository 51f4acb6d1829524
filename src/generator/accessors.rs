//! Fields synthesized from accessor methods.
use crate::metadata::MethodSignature;
use crate::node::SimpleType;

const GETTER_PREFIXES: &[&str] = &["get", "is"];
const SETTER_PREFIX: &str = "set";

/// The accessor every object has for its own class token; never a field.
const IDENTITY_ACCESSOR: &str = "getClass";

/// `(field name, field type signature)` for each qualifying getter:
/// `get*`/`is*`, no parameters, non-void return.
pub(super) fn getter_fields(methods: &[MethodSignature]) -> impl Iterator<Item = (String, &str)> {
    methods
        .iter()
        .filter(|m| m.parameters.is_empty() && !is_void(&m.returns) && m.name != IDENTITY_ACCESSOR)
        .filter_map(|m| {
            let rest = GETTER_PREFIXES.iter().find_map(|prefix| m.name.strip_prefix(prefix))?;
            Some((field_name(rest)?, m.returns.as_str()))
        })
}

/// `(field name, field type signature)` for each qualifying setter:
/// `set*`, exactly one parameter, void return.
pub(super) fn setter_fields(methods: &[MethodSignature]) -> impl Iterator<Item = (String, &str)> {
    methods
        .iter()
        .filter(|m| m.parameters.len() == 1 && is_void(&m.returns))
        .filter_map(|m| {
            let rest = m.name.strip_prefix(SETTER_PREFIX)?;
            Some((field_name(rest)?, m.parameters[0].as_str()))
        })
}

/// `Name` → `name`, `URL` → `uRL`, `X` → `x`. Empty remainders yield nothing.
fn field_name(rest: &str) -> Option<String> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if chars.as_str().is_empty() {
        return Some(rest.to_lowercase());
    }
    Some(first.to_lowercase().chain(chars).collect())
}

fn is_void(signature: &str) -> bool {
    SimpleType::from_type_name(signature.trim()).is_some_and(SimpleType::is_void)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(fields: impl Iterator<Item = (String, &'a str)>) -> Vec<(String, String)> {
        fields.map(|(n, s)| (n, s.to_string())).collect()
    }

    #[test]
    fn naming() {
        assert_eq!(field_name("Name").as_deref(), Some("name"));
        assert_eq!(field_name("URL").as_deref(), Some("uRL"));
        assert_eq!(field_name("X").as_deref(), Some("x"));
        assert_eq!(field_name("firstName").as_deref(), Some("firstName"));
        assert_eq!(field_name(""), None);
    }

    #[test]
    fn getters_qualify_on_shape_and_prefix() {
        let methods = vec![
            MethodSignature::getter("getField1", "int"),
            MethodSignature::getter("isActive", "boolean"),
            MethodSignature::getter("getClass", "java.lang.Class<?>"),
            MethodSignature::getter("getNothing", "void"),
            MethodSignature::getter("getBoxedNothing", "java.lang.Void"),
            MethodSignature::new("getWrongGetterSignature", vec!["byte".into()], "byte"),
            MethodSignature::getter("size", "int"),
            MethodSignature::getter("get", "int"),
        ];
        assert_eq!(
            names(getter_fields(&methods)),
            [("field1".to_string(), "int".to_string()), ("active".to_string(), "boolean".to_string())]
        );
    }

    #[test]
    fn setters_qualify_on_shape_and_prefix() {
        let methods = vec![
            MethodSignature::setter("setField3", "java.lang.Object"),
            MethodSignature::setter("setField4", "java.lang.Long"),
            MethodSignature::new("setWrongSetterSignature", vec!["Short".into()], "Short"),
            MethodSignature::new("setTwo", vec!["int".into(), "int".into()], "void"),
            MethodSignature::setter("reset", "int"),
        ];
        assert_eq!(
            names(setter_fields(&methods)),
            [
                ("field3".to_string(), "java.lang.Object".to_string()),
                ("field4".to_string(), "java.lang.Long".to_string()),
            ]
        );
    }
}
