use crate::api;
use crate::errors::InspectorResult;
use serde_json::Value;
use uuid::Uuid;

/// Opaque handle to one multi-turn Gemini conversation.
///
/// The wire history lives in here and nowhere else; the transcript the user
/// sees is `ConversationStore`'s business and is never reconstructed from
/// this state. A reset discards the whole handle and creates a new one.
#[derive(Debug)]
pub struct RemoteChatSession {
    id: Uuid,
    contents: Vec<Value>,
}

impl RemoteChatSession {
    pub(crate) fn new() -> Self {
        RemoteChatSession {
            id: Uuid::new_v4(),
            contents: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Submits one user turn and folds the model reply into the held history.
    /// A failed turn leaves the history untouched, so only successful calls
    /// mutate the conversation.
    pub(crate) async fn submit(
        &mut self,
        api_key: &str,
        parts: Vec<Value>,
        request_summary: &str,
    ) -> InspectorResult<String> {
        let mut contents = self.contents.clone();
        contents.push(api::user_turn(parts.clone()));

        let reply = api::generate_content(api_key, &contents, request_summary).await?;

        self.contents.push(api::user_turn(parts));
        self.contents.push(api::model_turn(&reply));
        Ok(reply)
    }

    /// Ends the conversation. The handle owns no remote resources beyond the
    /// held history, so closing is local and infallible.
    pub fn close(self) {
        log::debug!("closing chat session {}", self.id);
    }

    #[cfg(test)]
    pub(crate) fn turn_count(&self) -> usize {
        self.contents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{replace_config, Config, TEST_GUARD};
    use serde_json::json;
    use wiremock::{
        matchers::method,
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn fresh_sessions_have_distinct_ids() {
        let a = RemoteChatSession::new();
        let b = RemoteChatSession::new();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn failed_submit_leaves_history_untouched() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let mock_server = MockServer::start().await;
        let mut config = Config::default();
        config.api_base_url = mock_server.uri();
        replace_config(config);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let mut session = RemoteChatSession::new();
        let result = session
            .submit("k", vec![api::text_part("hello")], "test")
            .await;
        assert!(result.is_err());
        assert_eq!(session.turn_count(), 0);

        // A successful turn records both sides of the exchange
        mock_server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "ok"}]}}]
            })))
            .mount(&mock_server)
            .await;

        let reply = session
            .submit("k", vec![api::text_part("hello")], "test")
            .await
            .unwrap();
        assert_eq!(reply, "ok");
        assert_eq!(session.turn_count(), 2);
    }
}
