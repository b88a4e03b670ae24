//! HTTP request handlers for the agent app

use axum::extract::State;
use fixture_common::{detach, HandlerResult, ResponseBody};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::Topic;
use crate::constants::{body, DATA_KEY, SAVE_VALUE, SUBSCRIBE_DELAY, SUBSCRIBE_TOPIC_ID};
use crate::subscribe::subscribe_once;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubscriptionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foo: Option<Value>,
    pub first: Value,
    pub second: Value,
}

// === Pass-through handlers ===

pub async fn get_data(State(state): State<AppState>) -> HandlerResult {
    let value = state.client.get_data(DATA_KEY).await?;
    Ok(ResponseBody::from_value(value))
}

pub async fn get_data_generator(State(state): State<AppState>) -> HandlerResult {
    let value = state.client.get_data_generator(DATA_KEY).await?;
    Ok(ResponseBody::from_value(value))
}

// === Intercepted failures ===

pub async fn get_error(State(state): State<AppState>) -> ResponseBody {
    match state.client.get_error().await {
        // Nothing assigned on success
        Ok(_) => ResponseBody::Unset,
        Err(e) => {
            debug!("getError rejected: {}", e);
            ResponseBody::text(e.to_string())
        }
    }
}

pub async fn timeout(State(state): State<AppState>) -> ResponseBody {
    match state.client.get_timeout().await {
        Ok(_) => ResponseBody::text(body::OK),
        Err(e) => {
            info!("getTimeout failed: {}", e);
            ResponseBody::text(body::TIMEOUT)
        }
    }
}

// === Subscribe sequence ===

/// Subscribe, wait out the delay, subscribe again. The two steps never overlap.
pub async fn sub(State(state): State<AppState>) -> HandlerResult {
    let topic = Topic::new(SUBSCRIBE_TOPIC_ID);

    let first = subscribe_once(state.client.as_ref(), topic.clone()).await?;
    tokio::time::sleep(SUBSCRIBE_DELAY).await;
    let second = subscribe_once(state.client.as_ref(), topic).await?;

    let report = SubscriptionReport {
        foo: state.foo.clone(),
        first,
        second,
    };
    Ok(ResponseBody::Json(serde_json::to_value(report)?))
}

// === Fire-and-forget ===

pub async fn save(State(state): State<AppState>) -> ResponseBody {
    let client = state.client.clone();
    detach("saveAsync", async move {
        client.save_async(DATA_KEY, SAVE_VALUE).await
    });
    ResponseBody::text(body::OK)
}
