//! Chat history types and helpers.
//!
//! The engine is stateless; the conversation list lives here, owned by the
//! caller (a UI, the REPL binary, tests). This module also produces the
//! plain-text transcript a report exporter consumes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub at: NaiveDateTime,
}

/// An append-only message list for one conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatRole::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatRole::Assistant, content.into());
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            at: chrono::Local::now().naive_local(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Conversation title derived from the first user message.
    pub fn title(&self) -> String {
        self.messages
            .iter()
            .find(|m| m.role == ChatRole::User)
            .map(|m| generate_title(&m.content))
            .unwrap_or_else(|| "New conversation".to_string())
    }

    /// Plain-text transcript for export: role header per message, markdown
    /// bold markers and decorative emoji stripped.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            let role = match message.role {
                ChatRole::User => "USER",
                ChatRole::Assistant => "ASSISTANT",
            };
            out.push_str(role);
            out.push_str(":\n");
            out.push_str(&strip_markup(&message.content));
            out.push_str("\n\n");
        }
        out
    }
}

/// Generate a title from a first message: trimmed, truncated at 50
/// characters on a char boundary with "..." appended.
pub fn generate_title(first_message: &str) -> String {
    let trimmed = first_message.trim();
    if trimmed.is_empty() {
        return "New conversation".to_string();
    }
    if trimmed.chars().count() <= 50 {
        return trimmed.to_string();
    }
    let truncated: String = trimmed.chars().take(50).collect();
    format!("{}...", truncated.trim_end())
}

/// Remove `**` emphasis markers and the emoji the renderers decorate
/// sections with; exported documents want plain text.
fn strip_markup(text: &str) -> String {
    text.replace("**", "")
        .chars()
        .filter(|c| !matches!(c, '🚨' | '🩺' | '💊' | '📊' | '🧪' | '✅' | '🔬'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_records_roles_in_order() {
        let mut history = ChatHistory::new();
        history.push_user("What is a headache?");
        history.push_assistant("## Understanding Headache ...");
        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].role, ChatRole::User);
        assert_eq!(history.messages()[1].role, ChatRole::Assistant);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ChatHistory::new();
        history.push_user("hello");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn title_comes_from_first_user_message() {
        let mut history = ChatHistory::new();
        history.push_user("What is a headache?");
        history.push_assistant("...");
        assert_eq!(history.title(), "What is a headache?");
    }

    #[test]
    fn title_for_empty_history() {
        assert_eq!(ChatHistory::new().title(), "New conversation");
    }

    #[test]
    fn generate_title_truncates_long_messages() {
        let long = "a".repeat(80);
        let title = generate_title(&long);
        assert_eq!(title, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn generate_title_handles_multibyte_text() {
        // 60 Devanagari chars; truncation must not split a code point.
        let long = "म".repeat(60);
        let title = generate_title(&long);
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn transcript_strips_bold_and_emoji() {
        let mut history = ChatHistory::new();
        history.push_user("chest pain");
        history.push_assistant("### 🚨 URGENT\nYou mentioned **chest pain**.");
        let transcript = history.transcript();
        assert!(transcript.contains("USER:\nchest pain"));
        assert!(transcript.contains("ASSISTANT:"));
        assert!(transcript.contains("You mentioned chest pain."));
        assert!(!transcript.contains("**"));
        assert!(!transcript.contains('🚨'));
    }

    #[test]
    fn history_serializes_to_json() {
        let mut history = ChatHistory::new();
        history.push_user("hello");
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"hello\""));
    }
}
