use validator::ValidationErrors;

/// Flattens `validator` output into `field: message` pairs, sorted by field name.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match &*err.code {
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    "custom" => "custom validation failed".to_string(),
                    _ => "invalid value".to_string(),
                });

            parts.push(format!("{field}: {message}"));
        }
    }

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.sort();
        parts.join(", ")
    }
}
