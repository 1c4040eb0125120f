//! Representación textual de escalares JSON.

use serde_json::Value;

use super::number_text::number_text;

/// Texto canónico de un escalar:
/// - strings sin comillas ni escapes
/// - números según [`number_text`] sobre el literal original (`42` -> `"42"`,
///   `1e10` -> `"1.0E10"`)
/// - booleanos `true`/`false`, `null` -> `"null"`
///
/// Devuelve `None` para objetos y arrays.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // con `arbitrary_precision`, `to_string` devuelve el literal tal cual
        Value::Number(n) => Some(number_text(&n.to_string())),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::scalar_text;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert_eq!(scalar_text(&json!(null)).as_deref(), Some("null"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(scalar_text(&json!(-7)).as_deref(), Some("-7"));
        assert_eq!(scalar_text(&json!(3.5)).as_deref(), Some("3.5"));
        assert_eq!(scalar_text(&json!("hola")).as_deref(), Some("hola"));
    }

    #[test]
    fn test_numbers_from_document() {
        for (literal, text) in [
            ("12345678.5", "1.23456785E7"),
            ("1e10", "1.0E10"),
            ("1.5e-7", "1.5E-7"),
            ("99999999999999999999", "99999999999999999999"),
            ("100000000.0", "1.0E8"),
            ("1.0", "1.0"),
        ] {
            let v: serde_json::Value = serde_json::from_str(literal).unwrap();
            assert_eq!(scalar_text(&v).as_deref(), Some(text), "literal {literal}");
        }
    }

    #[test]
    fn test_string_is_not_quoted() {
        assert_eq!(scalar_text(&json!("a \"b\"")).as_deref(), Some("a \"b\""));
    }

    #[test]
    fn test_containers() {
        assert_eq!(scalar_text(&json!([1, 2])), None);
        assert_eq!(scalar_text(&json!({ "a": 1 })), None);
    }
}
