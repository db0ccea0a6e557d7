use serde_json::Value;

use crate::error::ClientError;

/// Pretty JSON with a two-space indent, as shown in the console panels.
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Panel text for a finished request: the JSON dump, or the error message.
pub fn render_result(result: &Result<Value, ClientError>) -> String {
    match result {
        Ok(value) => render_json(value),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn two_space_indent() {
        let rendered = render_json(&json!({ "status": "ok", "users": { "total": 3 } }));
        assert_eq!(
            rendered,
            "{\n  \"status\": \"ok\",\n  \"users\": {\n    \"total\": 3\n  }\n}"
        );
    }

    #[test]
    fn empty_array_stays_compact() {
        assert_eq!(render_json(&json!([])), "[]");
    }

    #[test]
    fn errors_render_their_message() {
        assert_eq!(render_result(&Err(ClientError::LoginFailed)), "Login failed");
    }
}
