use serde_json::{Number, Value};

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn v_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    v_path(root, path).and_then(|v| v.as_array())
}

/// First entry of `choices`, or `None` when the field is missing, not an array, or empty.
pub fn first_choice(response: &Value) -> Option<&Value> {
    v_array(response, &["choices"]).and_then(|choices| choices.first())
}

/// `message` object of a choice.
pub fn choice_message(choice: &Value) -> Option<&Value> {
    v_path(choice, &["message"]).filter(|m| !m.is_null())
}

/// Loose string form of a JSON field, as a JavaScript string conversion renders it.
///
/// A missing field is `undefined`, `null` is `null`, strings are taken as-is, arrays
/// join their elements with commas (null elements become empty) and objects collapse
/// to `[object Object]`.
pub fn js_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => js_number(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn js_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Structured `error.message` from an upstream error body, if the body has one.
pub fn upstream_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    v_str(&parsed, &["error", "message"]).map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v_path_nested() {
        let v = json!({"a": {"b": {"c": 1}}});
        assert_eq!(v_path(&v, &["a", "b", "c"]), Some(&json!(1)));
        assert!(v_path(&v, &["a", "x"]).is_none());
    }

    #[test]
    fn test_first_choice_message() {
        let v = json!({"choices": [
            {"message": {"role": "assistant", "content": "[1]"}},
            {"message": {"role": "assistant", "content": "[2]"}}
        ]});
        let message = choice_message(first_choice(&v).unwrap()).unwrap();
        assert_eq!(message["content"], "[1]");
    }

    #[test]
    fn test_first_choice_missing_or_empty() {
        assert!(first_choice(&json!({"choices": []})).is_none());
        assert!(first_choice(&json!({})).is_none());
        assert!(first_choice(&json!("plain text")).is_none());
    }

    #[test]
    fn test_choice_without_message() {
        assert!(choice_message(&json!({"finish_reason": "stop"})).is_none());
        assert!(choice_message(&json!({"message": null})).is_none());
    }

    #[test]
    fn test_js_string_forms() {
        assert_eq!(js_string(None), "undefined");
        assert_eq!(js_string(Some(&json!(null))), "null");
        assert_eq!(js_string(Some(&json!("Rust"))), "Rust");
        assert_eq!(js_string(Some(&json!(42))), "42");
        assert_eq!(js_string(Some(&json!(1.5))), "1.5");
        assert_eq!(js_string(Some(&json!(2.0))), "2");
        assert_eq!(js_string(Some(&json!(true))), "true");
        assert_eq!(js_string(Some(&json!(["a", 1, null]))), "a,1,");
        assert_eq!(js_string(Some(&json!({"k": "v"}))), "[object Object]");
    }

    #[test]
    fn test_upstream_error_message() {
        let body = r#"{"error": {"message": "Invalid API key", "type": "invalid_request_error"}}"#;
        assert_eq!(
            upstream_error_message(body).as_deref(),
            Some("Invalid API key")
        );
        assert!(upstream_error_message("<html>bad gateway</html>").is_none());
        assert!(upstream_error_message(r#"{"error": "flat"}"#).is_none());
    }
}
