use crate::client::InspectorClient;
use crate::conversation::ConversationStore;
use crate::errors::InspectorResult;
use crate::image_prep;
use crate::models::ImageAsset;
use crate::session::RemoteChatSession;
use std::path::Path;
use uuid::Uuid;

/// Where the interaction currently stands. Derived from the held state, so
/// it can never disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectPhase {
    NoImage,
    ImageLoaded,
    Analyzed,
}

/// Drives the upload → analyze → follow-up loop.
///
/// One analysis per image: once the flag is set, further analyze requests
/// are rejected here, before the client is ever involved. Follow-up input
/// is only accepted after an analysis has run. Reset discards the session
/// and the transcript together so they cannot drift apart.
pub struct InteractionController {
    client: InspectorClient,
    session: Option<RemoteChatSession>,
    store: ConversationStore,
    asset: Option<ImageAsset>,
    analyzed: bool,
}

impl InteractionController {
    /// Starts with a fresh session so the first analysis needs no extra
    /// initialization step.
    pub fn new(client: InspectorClient) -> Self {
        let session = client.start_session();
        InteractionController {
            client,
            session,
            store: ConversationStore::new(),
            asset: None,
            analyzed: false,
        }
    }

    pub fn phase(&self) -> InspectPhase {
        match (&self.asset, self.analyzed) {
            (None, _) => InspectPhase::NoImage,
            (Some(_), false) => InspectPhase::ImageLoaded,
            (Some(_), true) => InspectPhase::Analyzed,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn image(&self) -> Option<&ImageAsset> {
        self.asset.as_ref()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id())
    }

    /// Loads a new photo, replacing the current one. The analyzed flag drops
    /// with it: the new asset has not been analyzed yet.
    pub fn load_image(&mut self, path: &Path) -> InspectorResult<()> {
        let asset = image_prep::load(path)?;
        self.asset = Some(asset);
        self.analyzed = false;
        Ok(())
    }

    pub fn can_analyze(&self) -> bool {
        self.phase() == InspectPhase::ImageLoaded
    }

    /// Runs the one-shot analysis for the current photo and appends the
    /// report to the transcript. Returns false without touching anything if
    /// there is no photo or it was already analyzed.
    pub async fn analyze(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }

        let report = match (self.asset.as_ref(), self.session.as_mut()) {
            (Some(asset), Some(session)) => self.client.analyze(asset, session).await,
            _ => no_session_diagnostic(),
        };

        self.store.push_assistant(report);
        self.analyzed = true;
        true
    }

    /// Submits a follow-up question about the analyzed photo. A no-op unless
    /// an analysis has run; the transcript length is unchanged when rejected.
    pub async fn ask(&mut self, question: &str) -> bool {
        if self.phase() != InspectPhase::Analyzed || question.trim().is_empty() {
            return false;
        }

        self.store.push_user(question);
        let reply = match self.session.as_mut() {
            Some(session) => self.client.send(session, question).await,
            None => no_session_diagnostic(),
        };
        self.store.push_assistant(reply);
        true
    }

    /// Discards the transcript and the chat session together and starts a
    /// fresh session immediately. A still-loaded photo is kept and may be
    /// analyzed again.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            session.close();
        }
        self.store.clear();
        self.analyzed = false;
        self.session = self.client.start_session();
    }

    pub fn write_transcript(&self, path: &Path) -> InspectorResult<()> {
        self.store.write_transcript(path)
    }
}

fn no_session_diagnostic() -> String {
    "Error: no active chat session; the conversation could not be started. \
     Reset to start a new session."
        .to_string()
}
