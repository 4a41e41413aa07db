#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use shared::TwitterCredentials;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_tracing() {
    INIT.call_once(|| {
        let _ = shared::observability::init_logging("debug");
    });
}

pub fn credentials() -> TwitterCredentials {
    TwitterCredentials {
        consumer_key: "consumer-key".to_string(),
        consumer_secret: "consumer-secret".to_string(),
        access_token: "access-token".to_string(),
        access_token_secret: "access-token-secret".to_string(),
    }
}

pub fn words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A v1.1 timeline entry as the API returns it with `tweet_mode=extended`
pub fn status_json(id: &str, text: &str, created_at: DateTime<Utc>) -> Value {
    json!({
        "id": id.parse::<u64>().unwrap_or(0),
        "id_str": id,
        "full_text": text,
        "created_at": created_at.format("%a %b %d %H:%M:%S %z %Y").to_string(),
        "truncated": false,
    })
}

pub fn completion_json(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
