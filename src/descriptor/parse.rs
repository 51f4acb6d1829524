use super::{TypeDescriptor, TypeNameSubstitution};
use crate::error::ValidationError;

const ARRAY_SUFFIX: &str = "[]";

/// `None` means "no substitution", which is also what replacement text is
/// parsed with: a replaced signature is never substituted a second time.
pub(super) fn parse_signature(
    text: &str,
    substitution: Option<&TypeNameSubstitution>,
) -> Result<TypeDescriptor, ValidationError> {
    let trimmed = text.trim();
    let (text, substitution) = match substitution.and_then(|s| s.get(trimmed)) {
        Some(replacement) => (replacement.trim(), None),
        None => (trimmed, substitution),
    };

    let array_dimension = count_array_suffixes(text);
    let (head, parameter_list) = match text.split_once('<') {
        Some((head, rest)) => (head, Some(rest)),
        None => (text, None),
    };
    let name = if array_dimension > 0 { strip_array_suffixes(head) } else { head };

    let type_parameters = match parameter_list {
        None => Vec::new(),
        Some(list) => split_top_level(strip_closing_diamond(list))
            .into_iter()
            .map(|parameter| parse_signature(parameter, substitution))
            .collect::<Result<Vec<_>, _>>()?,
    };

    TypeDescriptor::checked(name.to_owned(), type_parameters, array_dimension)
}

fn count_array_suffixes(mut text: &str) -> usize {
    let mut dimension = 0;
    while let Some(rest) = text.strip_suffix(ARRAY_SUFFIX) {
        text = rest;
        dimension += 1;
    }
    dimension
}

fn strip_array_suffixes(mut text: &str) -> &str {
    while let Some(rest) = text.strip_suffix(ARRAY_SUFFIX) {
        text = rest;
    }
    text
}

/// Drop one trailing `>` together with any `[]` that follow it. Text without
/// that shape is returned untouched.
fn strip_closing_diamond(list: &str) -> &str {
    strip_array_suffixes(list).strip_suffix('>').unwrap_or(list)
}

/// Split on commas that are not nested inside `<...>`.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (index, ch) in list.char_indices() {
        match ch {
            ',' if depth == 0 => {
                parts.push(&list[start..index]);
                start = index + 1;
            }
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}
