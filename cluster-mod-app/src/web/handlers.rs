//! Cluster app request handlers

use axum::{body::Bytes, extract::State};
use fixture_common::{detach, ResponseBody};
use serde_json::Value;
use tracing::debug;

use crate::constants::body;
use crate::registry::Registration;
use crate::web::AppState;

pub async fn index() -> ResponseBody {
    ResponseBody::text(body::INDEX)
}

pub async fn get_cluster_port(State(state): State<AppState>) -> ResponseBody {
    ResponseBody::from_optional(state.options.cluster_port.map(Value::from))
}

pub async fn get_hosts(State(state): State<AppState>) -> ResponseBody {
    match state.val.read().await.as_ref() {
        Some(entries) => ResponseBody::text(
            entries
                .iter()
                .map(|entry| entry.host.as_str())
                .collect::<Vec<_>>()
                .join(","),
        ),
        None => ResponseBody::Empty,
    }
}

/// Publish a provider for the posted `value` and answer without waiting.
pub async fn publish(State(state): State<AppState>, payload: Bytes) -> ResponseBody {
    let address = publish_value(&payload);
    debug!("Publishing provider for {}", address);

    let registration = Registration::provider(&address);
    let registry_client = state.registry_client.clone();
    detach("registry publish", async move {
        registry_client.publish(registration).await
    });

    ResponseBody::text(body::OK)
}

/// The `value` field of the request body as it interpolates into a string.
/// A missing body or field reads as `undefined`.
pub fn publish_value(payload: &[u8]) -> String {
    let value = serde_json::from_slice::<Value>(payload)
        .ok()
        .and_then(|body| body.get("value").cloned());

    match value {
        Some(value) => interpolated(&value),
        None => "undefined".to_string(),
    }
}

/// Render a JSON value the way string interpolation does in the client's
/// runtime: arrays join their elements with `,` (null elements become empty),
/// objects collapse to `[object Object]`, whole numbers drop the fraction.
fn interpolated(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => interpolated_float(float),
            _ => number.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => interpolated(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Bool(_) | Value::Null => value.to_string(),
    }
}

fn interpolated_float(float: f64) -> String {
    if float == 0.0 {
        "0".to_string()
    } else if float.fract() == 0.0 && float.abs() < 1e21 {
        format!("{:.0}", float)
    } else {
        float.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(br#"{"value":"1.2.3.4"}"#.as_slice(), "1.2.3.4")]
    #[case(br#"{"value":8080}"#.as_slice(), "8080")]
    #[case(br#"{"value":null}"#.as_slice(), "null")]
    #[case(br#"{"value":true}"#.as_slice(), "true")]
    #[case(br#"{"value":1e3}"#.as_slice(), "1000")]
    #[case(br#"{"value":-0.0}"#.as_slice(), "0")]
    #[case(br#"{"value":1.5}"#.as_slice(), "1.5")]
    #[case(br#"{"value":["a","b"]}"#.as_slice(), "a,b")]
    #[case(br#"{"value":["1.2.3.4",null,[5,6]]}"#.as_slice(), "1.2.3.4,,5,6")]
    #[case(br#"{"value":[]}"#.as_slice(), "")]
    #[case(br#"{"value":{"h":1}}"#.as_slice(), "[object Object]")]
    #[case(br#"{"other":"x"}"#.as_slice(), "undefined")]
    #[case(b"".as_slice(), "undefined")]
    #[case(b"not json".as_slice(), "undefined")]
    fn test_publish_value(#[case] payload: &[u8], #[case] expected: &str) {
        assert_eq!(publish_value(payload), expected);
    }
}
