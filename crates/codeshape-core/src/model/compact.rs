//! The compact single-line `"<TypeFullName> <name>"` form shared by
//! Expression, Parameter and Property.
//!
//! Known limitation: a type name containing whitespace (e.g. a generic
//! argument list written as `Dictionary<int, string>`) splits into more
//! than two tokens and is rejected with a format error rather than guessed.

use super::TypeRef;
use crate::errors::{CodeShapeError, Result};

/// Split a compact string into its type and name.
///
/// Tokens are separated by single spaces, so `"Type "` keeps its type and
/// carries an empty name.
///
/// - `""` (or only whitespace) → `None`, the caller's `Empty` sentinel
/// - `"name"` → empty type, `name`
/// - `"Type name"` → parsed type, `name`
/// - anything longer → [`CodeShapeError::CompactFormat`]
pub fn parse_compact(text: &str) -> Result<Option<(TypeRef, String)>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let tokens: Vec<&str> = text.split(' ').collect();
    match tokens.as_slice() {
        [name] => Ok(Some((TypeRef::empty(), (*name).to_string()))),
        [type_name, name] => Ok(Some((TypeRef::parse(type_name), (*name).to_string()))),
        _ => Err(CodeShapeError::CompactFormat {
            value: text.to_string(),
            tokens: tokens.len(),
        }),
    }
}

/// Render the compact form. An empty type renders as the bare name.
pub fn format_compact(type_ref: &TypeRef, name: &str) -> String {
    if type_ref.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", type_ref.full_name(), name)
    }
}

/// Check that a type and name survive [`format_compact`] followed by
/// [`parse_compact`] unchanged.
///
/// # Errors
///
/// Returns [`CodeShapeError::CompactFormat`] when either part contains
/// whitespace.
pub fn ensure_compact(type_ref: &TypeRef, name: &str) -> Result<()> {
    if type_ref.full_name().contains(char::is_whitespace) || name.contains(char::is_whitespace) {
        let value = format_compact(type_ref, name);
        let tokens = value.split(' ').count();
        return Err(CodeShapeError::CompactFormat { value, tokens });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_tokens() {
        let (t, name) = parse_compact("System.String Title").unwrap().unwrap();
        assert_eq!(t.full_name(), "System.String");
        assert_eq!(name, "Title");
    }

    #[test]
    fn test_parse_one_token_is_name_only() {
        let (t, name) = parse_compact("value").unwrap().unwrap();
        assert!(t.is_empty());
        assert_eq!(name, "value");
    }

    #[test]
    fn test_parse_blank_is_empty_sentinel() {
        assert!(parse_compact("").unwrap().is_none());
        assert!(parse_compact("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_three_tokens_is_format_error() {
        let err = parse_compact("Dictionary<int, string> lookup").unwrap_err();
        assert_eq!(
            err,
            CodeShapeError::CompactFormat {
                value: "Dictionary<int, string> lookup".to_string(),
                tokens: 3,
            }
        );
    }

    #[test]
    fn test_parse_keeps_type_when_name_is_empty() {
        let (t, name) = parse_compact("NS.Money ").unwrap().unwrap();
        assert_eq!(t.full_name(), "NS.Money");
        assert_eq!(name, "");
    }

    #[test]
    fn test_ensure_compact_rejects_whitespace() {
        assert!(ensure_compact(&TypeRef::new("NS", "T"), "").is_ok());
        assert!(ensure_compact(&TypeRef::empty(), "a b").is_err());
        assert!(ensure_compact(&TypeRef::new("", "Dictionary<int, string>"), "x").is_err());
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(&TypeRef::new("NS", "T"), "x"), "NS.T x");
        assert_eq!(format_compact(&TypeRef::empty(), "x"), "x");
    }
}
