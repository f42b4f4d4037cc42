use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::brain::EmotionResult;
use crate::error::AppError;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Represents a single message of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// The text content of the message.
    pub text: String,
    pub sender: Sender,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Analysis of a user message; absent for bot messages and crisis input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, emotion: Option<EmotionResult>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            emotion,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            emotion: None,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Represents one mood check-in. Entries are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MoodEntry {
    /// The unique identifier for the entry (UUID).
    pub id: String,
    /// When the mood was logged.
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    /// Self-reported mood on a 1-10 scale.
    #[validate(range(min = 1, max = 10))]
    pub mood: u8,
    /// Emotion tags selected by the user (lowercase, no duplicates).
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Create a validated entry timestamped now.
    ///
    /// Tags are trimmed, lower-cased and de-duplicated in order; blank notes
    /// are dropped.
    pub fn new<I, S>(mood: u8, emotions: I, notes: Option<String>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();
        for tag in emotions {
            let tag = tag.as_ref().trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let entry = Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            mood,
            emotions: tags,
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };

        entry.validate()?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_range_is_validated() {
        assert!(MoodEntry::new(1, Vec::<String>::new(), None).is_ok());
        assert!(MoodEntry::new(10, Vec::<String>::new(), None).is_ok());
        assert!(matches!(
            MoodEntry::new(0, Vec::<String>::new(), None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            MoodEntry::new(11, Vec::<String>::new(), None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_mood_tags_and_notes_are_normalized() {
        let entry = MoodEntry::new(6, [" Happy", "calm", "happy", ""], Some("   ".to_string()))
            .expect("valid entry");

        assert_eq!(entry.emotions, vec!["happy", "calm"]);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_long_notes_are_rejected() {
        let notes = "a".repeat(1001);
        assert!(MoodEntry::new(5, ["calm"], Some(notes)).is_err());
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("hi", None);
        let bot = ChatMessage::bot("hello");

        assert!(user.is_from_user());
        assert!(!bot.is_from_user());
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn test_message_json_shape() {
        let json = serde_json::to_value(ChatMessage::bot("hello")).expect("serialize");
        assert_eq!(json["sender"], "bot");
        assert!(json.get("emotion").is_none());
    }
}
