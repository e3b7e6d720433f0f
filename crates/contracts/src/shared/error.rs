use serde_json::Value;

/// Error surfaced by the HTTP layer to the UI.
///
/// `status` is absent for transport failures (network down, timeout).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self { status: Some(status), message: message.into() }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Flatten a Django serializer error body into one readable string.
///
/// Handles the three shapes the backend emits:
/// `{"detail": "..."}`, `{"non_field_errors": [...]}`, and field-keyed
/// `{field: ["msg", ...]}` maps. Anything else collapses to a generic
/// "Validation failed".
pub fn flatten_error_body(body: &Value) -> String {
    if body.is_null() {
        return "Unknown error".to_string();
    }

    if let Some(detail) = body.get("detail") {
        return value_to_text(detail);
    }

    if let Some(Value::Array(errors)) = body.get("non_field_errors") {
        return errors.iter().map(value_to_text).collect::<Vec<_>>().join(", ");
    }

    if let Value::Object(fields) = body {
        let mut parts = Vec::new();
        for (field, val) in fields {
            match val {
                Value::Array(msgs) => {
                    let joined = msgs.iter().map(value_to_text).collect::<Vec<_>>().join(", ");
                    parts.push(format!("{field}: {joined}"));
                }
                Value::String(msg) => parts.push(format!("{field}: {msg}")),
                _ => {}
            }
        }
        if !parts.is_empty() {
            return parts.join(" | ");
        }
    }

    "Validation failed".to_string()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_detail_shape() {
        let body = json!({"detail": "Not found."});
        assert_eq!(flatten_error_body(&body), "Not found.");
    }

    #[test]
    fn flattens_non_field_errors() {
        let body = json!({"non_field_errors": ["Slot already booked", "Try another"]});
        assert_eq!(flatten_error_body(&body), "Slot already booked, Try another");
    }

    #[test]
    fn flattens_field_keyed_map() {
        let body = json!({
            "mobile": ["This field is required."],
            "scheduled_date": ["Date cannot be in the past.", "Invalid format."]
        });
        let flat = flatten_error_body(&body);
        assert!(flat.contains("mobile: This field is required."));
        assert!(flat.contains("scheduled_date: Date cannot be in the past., Invalid format."));
        assert!(flat.contains(" | "));
    }

    #[test]
    fn falls_back_on_unrecognized_bodies() {
        assert_eq!(flatten_error_body(&json!(null)), "Unknown error");
        assert_eq!(flatten_error_body(&json!({"weird": 42})), "Validation failed");
        assert_eq!(flatten_error_body(&json!([1, 2])), "Validation failed");
    }
}
