use crate::config::get_config;
use crate::errors::{InspectorError, InspectorResult};
use crate::models::ImageAsset;
use crate::session::RemoteChatSession;
use crate::{api, image_prep, prompt};
use std::env;

/// Client for the Gemini-backed construction inspector.
///
/// `analyze` and `send` never fail outward: any configuration, decode or
/// transport problem comes back as a diagnostic string, because the UI
/// renders every assistant turn the same way and a broken turn must not
/// break the loop.
pub struct InspectorClient {
    api_key: Option<String>,
}

impl InspectorClient {
    /// Credential lookup order: explicit argument, then the process
    /// environment (`GEMINI_API_KEY`, dotenv-loaded at startup), then the
    /// persisted config file. No key still constructs a client; calls made
    /// in that state explain what is missing.
    pub fn new(credential: Option<String>) -> Self {
        let api_key = credential
            .filter(|key| !key.trim().is_empty())
            .or_else(|| env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()))
            .or_else(|| {
                let key = get_config().api_key;
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            });
        InspectorClient { api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Starts a new empty-history conversation. `None` signals a degraded
    /// state the caller renders around, not an error to propagate.
    pub fn start_session(&self) -> Option<RemoteChatSession> {
        Some(RemoteChatSession::new())
    }

    /// Analyzes a construction site photo as the first turn of the session
    /// and returns the report text.
    pub async fn analyze(&self, asset: &ImageAsset, session: &mut RemoteChatSession) -> String {
        match self.try_analyze(asset, session).await {
            Ok(report) => report,
            Err(e) => format!(
                "Error analyzing image: {}\nDetails: please ensure your API key is valid and the image format is supported.",
                e
            ),
        }
    }

    /// Sends a text-only follow-up turn into the session's history.
    pub async fn send(&self, session: &mut RemoteChatSession, message: &str) -> String {
        match self.try_send(session, message).await {
            Ok(reply) => reply,
            Err(e) => format!("Error sending message: {}", e),
        }
    }

    async fn try_analyze(
        &self,
        asset: &ImageAsset,
        session: &mut RemoteChatSession,
    ) -> InspectorResult<String> {
        let api_key = self.require_key()?;
        let processed = image_prep::prepare(asset.image.clone());
        let png = image_prep::encode_png(&processed)?;
        let parts = vec![api::text_part(prompt::ANALYSIS_PROMPT), api::image_part(&png)];
        session.submit(api_key, parts, "analyze_image").await
    }

    async fn try_send(
        &self,
        session: &mut RemoteChatSession,
        message: &str,
    ) -> InspectorResult<String> {
        let api_key = self.require_key()?;
        let parts = vec![api::text_part(message)];
        session.submit(api_key, parts, "send_message").await
    }

    fn require_key(&self) -> InspectorResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            InspectorError::config(
                "no Gemini API key configured (set GEMINI_API_KEY or add one to the config file)",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{replace_config, Config, TEST_GUARD};
    use image::{DynamicImage, ImageBuffer, Rgb};
    use serde_json::json;
    use std::path::Path;
    use wiremock::{
        matchers::method,
        Mock, MockServer, ResponseTemplate,
    };

    fn test_asset() -> ImageAsset {
        let image =
            DynamicImage::ImageRgb8(ImageBuffer::from_pixel(4, 4, Rgb([100u8, 100, 100])));
        ImageAsset::new(image, Path::new("site.png"))
    }

    #[tokio::test]
    async fn unconfigured_client_reports_missing_key_as_content() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var("GEMINI_API_KEY");
        replace_config(Config::default());

        let client = InspectorClient::new(None);
        assert!(!client.is_configured());

        let mut session = client.start_session().unwrap();
        let report = client.analyze(&test_asset(), &mut session).await;
        assert!(report.starts_with("Error analyzing image:"), "got: {report}");
        assert!(report.contains("API key"), "got: {report}");

        let reply = client.send(&mut session, "what stage is this?").await;
        assert!(reply.starts_with("Error sending message:"), "got: {reply}");
    }

    #[tokio::test]
    async fn explicit_credential_wins_over_environment() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("GEMINI_API_KEY", "env-key");
        let client = InspectorClient::new(Some("explicit-key".to_string()));
        assert!(client.is_configured());
        env::remove_var("GEMINI_API_KEY");

        // Blank explicit credentials fall through to the environment
        env::set_var("GEMINI_API_KEY", "env-key");
        let client = InspectorClient::new(Some("   ".to_string()));
        assert_eq!(client.api_key.as_deref(), Some("env-key"));
        env::remove_var("GEMINI_API_KEY");
    }

    #[tokio::test]
    async fn transport_failure_on_send_is_returned_not_raised() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let mock_server = MockServer::start().await;
        let mut config = Config::default();
        config.api_base_url = mock_server.uri();
        replace_config(config);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .mount(&mock_server)
            .await;

        let client = InspectorClient::new(Some("test-key".to_string()));
        let mut session = client.start_session().unwrap();
        let reply = client.send(&mut session, "hello?").await;
        assert!(reply.starts_with("Error sending message:"), "got: {reply}");
        assert!(reply.contains("backend unavailable"), "got: {reply}");
    }

    #[tokio::test]
    async fn analyze_returns_report_text_on_success() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let mock_server = MockServer::start().await;
        let mut config = Config::default();
        config.api_base_url = mock_server.uri();
        replace_config(config);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "CONSTRUCTION SITE INSPECTION REPORT"}]}
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = InspectorClient::new(Some("test-key".to_string()));
        let mut session = client.start_session().unwrap();
        let report = client.analyze(&test_asset(), &mut session).await;
        assert_eq!(report, "CONSTRUCTION SITE INSPECTION REPORT");
    }
}
