use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::models::ContactPayload;

/// Parse a request body into a contact payload based on the Content-Type header.
/// Anything that is not a JSON object of string (or null) fields is rejected.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<ContactPayload, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactPayload::default());
    }

    let ct = content_type.unwrap_or("application/json");

    let value = if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))?
    };

    into_payload(value)
}

fn into_payload(value: Value) -> Result<ContactPayload, String> {
    if !value.is_object() {
        return Err("Expected a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("Invalid field value: {e}"))
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k, Value::String(v));
    }
    Ok(Value::Object(map))
}
