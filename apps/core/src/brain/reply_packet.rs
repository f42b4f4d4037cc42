//! Reply Packet - Output structure for Brain analysis.
//!
//! Carries everything the chat layer needs to answer one user message.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use super::emotion::EmotionResult;
use crate::wellness::WellnessActivity;

/// Complete reply from Brain analysis
#[derive(Debug, Clone, Serialize)]
pub struct ReplyPacket {
    /// Original user input
    pub input: String,

    /// Crisis language was detected; scoring was skipped
    pub crisis: bool,

    /// Emotion analysis (absent for crisis input)
    pub emotion: Option<EmotionResult>,

    /// Text the companion answers with
    pub reply: String,

    /// Recommended activities, best first (at most three)
    pub activities: Vec<&'static WellnessActivity>,

    /// Processing time in microseconds, measured from the `started` instant
    pub processing_time_us: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl ReplyPacket {
    /// Packet for input that tripped the crisis detector
    pub fn crisis(input: String, reply: &str, started: Instant) -> Self {
        Self {
            input,
            crisis: true,
            emotion: None,
            reply: reply.to_string(),
            activities: vec![],
            processing_time_us: elapsed_us(started),
            timestamp: Utc::now(),
        }
    }

    /// Packet for an analyzed, non-crisis message
    pub fn supportive(
        input: String,
        emotion: EmotionResult,
        reply: String,
        activities: Vec<&'static WellnessActivity>,
        started: Instant,
    ) -> Self {
        Self {
            input,
            crisis: false,
            emotion: Some(emotion),
            reply,
            activities,
            processing_time_us: elapsed_us(started),
            timestamp: Utc::now(),
        }
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        match &self.emotion {
            Some(emotion) => format!(
                "Emotion: {} ({:.0}%), Activities: {}, Crisis: no",
                emotion.primary,
                emotion.confidence * 100.0,
                self.activities.len()
            ),
            None => format!(
                "Emotion: -, Activities: {}, Crisis: {}",
                self.activities.len(),
                if self.crisis { "yes" } else { "no" }
            ),
        }
    }
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}
