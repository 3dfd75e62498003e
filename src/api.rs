use crate::{
    config::get_config,
    errors::{InspectorError, InspectorResult},
    logging::log_api_call,
    models::ApiCallLog,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

// Default endpoint and model for the Gemini generateContent API
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// A text part of a turn.
pub fn text_part(text: &str) -> Value {
    json!({ "text": text })
}

/// An inline PNG image part of a turn.
pub fn image_part(png_bytes: &[u8]) -> Value {
    json!({
        "inline_data": {
            "mime_type": "image/png",
            "data": BASE64.encode(png_bytes),
        }
    })
}

/// Wraps parts into a user turn for the `contents` array.
pub fn user_turn(parts: Vec<Value>) -> Value {
    json!({ "role": "user", "parts": parts })
}

/// Wraps a model reply so it can be folded back into the history.
pub fn model_turn(text: &str) -> Value {
    json!({ "role": "model", "parts": [{ "text": text }] })
}

/// Submits the full conversation history to the Gemini generateContent
/// endpoint and returns the reply text. Every call carries the configured
/// generation parameters and a request deadline; a hung connection surfaces
/// as a `Transport` error instead of blocking the UI forever.
pub async fn generate_content(
    api_key: &str,
    contents: &[Value],
    request_summary: &str,
) -> InspectorResult<String> {
    let config = get_config();
    let url = format!(
        "{}/models/{}:generateContent",
        config.api_base_url.trim_end_matches('/'),
        config.model
    );

    let payload = json!({
        "contents": contents,
        "generationConfig": {
            "temperature": config.temperature,
            "topP": config.top_p,
            "topK": config.top_k,
            "maxOutputTokens": config.max_output_tokens,
        }
    });

    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| InspectorError::transport(format!("Failed to build HTTP client: {}", e)))?;

    let start_time = Instant::now();

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&payload)
        .send()
        .await
        .map_err(|e| InspectorError::transport(format!("Request failed: {}", e)))?;

    let status = response.status();

    log_api_call(&ApiCallLog {
        timestamp: Utc::now(),
        endpoint: url.clone(),
        request_summary: request_summary.to_string(),
        response_status: status.as_u16(),
        response_time_ms: start_time.elapsed().as_millis(),
    });

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(InspectorError::transport(format!(
            "API returned error: {} - {}",
            status, error_text
        )));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| InspectorError::transport(format!("Failed to parse API response: {}", e)))?;

    // A 200 can still carry an error object
    if let Some(error) = body["error"].as_object() {
        return Err(InspectorError::transport(format!(
            "{}: {}",
            error.get("status").and_then(Value::as_str).unwrap_or("unknown"),
            error.get("message").and_then(Value::as_str).unwrap_or("no message")
        )));
    }

    let text = body["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
            return Err(InspectorError::transport(format!(
                "Request was blocked by the service: {}",
                reason
            )));
        }
        return Err(InspectorError::transport(
            "Response missing expected content",
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{replace_config, Config, TEST_GUARD};
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn image_part_carries_base64_inline_data() {
        let part = image_part(&[1, 2, 3]);
        assert_eq!(part["inline_data"]["mime_type"], "image/png");
        assert_eq!(part["inline_data"]["data"], BASE64.encode([1, 2, 3]));
    }

    #[test]
    fn turns_are_role_tagged() {
        let turn = user_turn(vec![text_part("hello")]);
        assert_eq!(turn["role"], "user");
        assert_eq!(turn["parts"][0]["text"], "hello");
        assert_eq!(model_turn("hi")["role"], "model");
    }

    #[tokio::test]
    async fn generate_content_round_trip_and_error_mapping() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let mock_server = MockServer::start().await;
        let mut config = Config::default();
        config.api_base_url = mock_server.uri();
        replace_config(config);

        Mock::given(method("POST"))
            .and(path(format!(
                "/models/{}:generateContent",
                DEFAULT_MODEL
            )))
            .and(query_param("key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Foundation stage, "}, {"text": "15% complete"}]
                    },
                    "finishReason": "STOP"
                }]
            })))
            .mount(&mock_server)
            .await;

        let contents = vec![user_turn(vec![text_part("analyze")])];
        let reply = generate_content("test-api-key", &contents, "test")
            .await
            .unwrap();
        assert_eq!(reply, "Foundation stage, 15% complete");

        // Non-2xx responses become Transport errors embedding the body
        mock_server.reset().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string("API key not valid"),
            )
            .mount(&mock_server)
            .await;

        let err = generate_content("test-api-key", &contents, "test")
            .await
            .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("403"), "got: {text}");
        assert!(text.contains("API key not valid"), "got: {text}");
    }

    #[tokio::test]
    async fn blocked_prompt_is_reported_with_reason() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let mock_server = MockServer::start().await;
        let mut config = Config::default();
        config.api_base_url = mock_server.uri();
        replace_config(config);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&mock_server)
            .await;

        let contents = vec![user_turn(vec![text_part("analyze")])];
        let err = generate_content("test-api-key", &contents, "test")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }
}
