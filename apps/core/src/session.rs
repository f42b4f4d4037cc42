//! Chat session: the entry point for all business logic.
//!
//! Owns the conversation and mood history, runs every message through the
//! Brain and persists after each change. Inputs are handled one at a time.

use crate::brain::BrainAnalyzer;
use crate::database;
use crate::error::AppError;
use crate::models::{ChatMessage, MoodEntry};
use crate::mood::MoodSummary;
use crate::wellness::{self, catalog, recommend, ActivityLaunch, WellnessActivity};
use rand::rngs::StdRng;
use rand::Rng;
use sqlx::sqlite::SqlitePool;
use std::time::Duration;
use tracing::{info, instrument};

/// First message of a fresh conversation
pub const WELCOME_MESSAGE: &str = "Hello! I'm MindBot, your AI mental health companion. I'm here to listen, understand, and support you through whatever you're experiencing. How are you feeling today?";

pub struct ChatSession<R = StdRng> {
    pool: SqlitePool,
    brain: BrainAnalyzer,
    messages: Vec<ChatMessage>,
    mood_history: Vec<MoodEntry>,
    reply_delay: Duration,
    rng: R,
}

impl<R: Rng> ChatSession<R> {
    /// Restore both histories from storage.
    ///
    /// An empty chat history starts with the welcome message.
    #[instrument(skip(pool, rng))]
    pub async fn load(pool: SqlitePool, reply_delay: Duration, rng: R) -> Result<Self, AppError> {
        let mut messages = database::load_messages(&pool).await?;
        let mood_history = database::load_mood_history(&pool).await?;

        if messages.is_empty() {
            messages.push(ChatMessage::bot(WELCOME_MESSAGE));
            database::save_messages(&pool, &messages).await?;
        }

        info!(
            messages = messages.len(),
            moods = mood_history.len(),
            "Chat session loaded"
        );

        Ok(Self {
            pool,
            brain: BrainAnalyzer::new(),
            messages,
            mood_history,
            reply_delay,
            rng,
        })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mood_history(&self) -> &[MoodEntry] {
        &self.mood_history
    }

    /// Process one user message.
    ///
    /// Returns the messages appended to the conversation: nothing for blank
    /// input, otherwise the user message followed by the companion's reply.
    /// Crisis replies skip the typing delay.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn send(&mut self, text: &str) -> Result<Vec<ChatMessage>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let packet = self.brain.respond(text, &mut self.rng);

        let user_message = ChatMessage::user(text, packet.emotion.clone());
        self.push_message(user_message.clone()).await?;

        if !packet.crisis && !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let reply = ChatMessage::bot(packet.reply);
        self.push_message(reply.clone()).await?;

        Ok(vec![user_message, reply])
    }

    /// Append a mood check-in and persist the history.
    #[instrument(skip(self, entry), fields(mood = entry.mood))]
    pub async fn log_mood(&mut self, entry: MoodEntry) -> Result<(), AppError> {
        self.mood_history.push(entry);
        if let Err(e) = database::save_mood_history(&self.pool, &self.mood_history).await {
            self.mood_history.pop();
            return Err(e);
        }
        info!(entries = self.mood_history.len(), "Mood logged");
        Ok(())
    }

    pub fn mood_summary(&self) -> MoodSummary {
        MoodSummary::from_history(&self.mood_history)
    }

    /// Activities for the most recent analyzed user message.
    pub fn recommended_activities(&self) -> Vec<&'static WellnessActivity> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.is_from_user())
            .find_map(|m| m.emotion.as_ref())
            .map(|emotion| recommend(emotion.primary, &emotion.emotions))
            .unwrap_or_default()
    }

    /// Start a catalog activity.
    ///
    /// Guided activities post their instructions to the conversation.
    pub async fn start_activity(&mut self, id: &str) -> Result<ActivityLaunch, AppError> {
        let activity = catalog::find(id)
            .ok_or_else(|| AppError::Validation(format!("Unknown activity: {}", id)))?;

        let launch = wellness::launch(activity);
        if let ActivityLaunch::Guided { message } = &launch {
            self.push_message(ChatMessage::bot(message.clone())).await?;
        }

        info!(activity = activity.id, "Activity started");
        Ok(launch)
    }

    /// Append and persist; memory is left unchanged when the save fails.
    async fn push_message(&mut self, message: ChatMessage) -> Result<(), AppError> {
        self.messages.push(message);
        if let Err(e) = database::save_messages(&self.pool, &self.messages).await {
            self.messages.pop();
            return Err(e);
        }
        Ok(())
    }
}
