// src/conversation.rs

use crate::errors::InspectorResult;
use crate::models::{Message, Role};
use std::fs;
use std::path::Path;

/// Default file name offered for the plain-text transcript export.
pub const EXPORT_FILE_NAME: &str = "construction_analysis.txt";

/// The UI-side mirror of the conversation: an append-only, ordered sequence
/// of role-tagged messages. Insertion order is display order. Lives and dies
/// with the UI session; cleared only by an explicit reset.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn new() -> Self {
        ConversationStore {
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Message::assistant(content));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Renders the transcript as repeated `ROLE: content` blocks separated
    /// by blank lines.
    pub fn export_transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.label(), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn write_transcript(&self, path: &Path) -> InspectorResult<()> {
        fs::write(path, self.export_transcript())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_formats_roles_uppercased_and_blank_line_separated() {
        let mut store = ConversationStore::new();
        store.push_user("Q1");
        store.push_assistant("A1");
        assert_eq!(store.export_transcript(), "USER: Q1\n\nASSISTANT: A1");
    }

    #[test]
    fn export_of_empty_store_is_empty() {
        assert_eq!(ConversationStore::new().export_transcript(), "");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = ConversationStore::new();
        store.push_assistant("report");
        store.push_user("follow-up");
        store.push_assistant("answer");
        let roles: Vec<Role> = store.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = ConversationStore::new();
        store.push_user("Q1");
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn transcript_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let mut store = ConversationStore::new();
        store.push_user("Any safety issues?");
        store.push_assistant("Two workers without hard hats.");
        store.write_transcript(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "USER: Any safety issues?\n\nASSISTANT: Two workers without hard hats."
        );
    }
}
