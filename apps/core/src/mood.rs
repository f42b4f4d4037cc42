//! Mood history statistics and labels.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::models::MoodEntry;

/// Label per mood level, index `mood - 1`
const MOOD_LABELS: [&str; 10] = [
    "Terrible", "Bad", "Poor", "Okay", "Fine", "Good", "Great", "Amazing", "Fantastic", "Perfect",
];

const MOOD_EMOJIS: [&str; 10] = ["😢", "😞", "😐", "🙂", "😊", "😄", "😁", "🤩", "😇", "🥳"];

/// Tags offered when logging a mood
pub const MOOD_TAG_OPTIONS: &[&str] = &[
    "stressed", "anxious", "sad", "angry", "happy", "excited", "calm", "grateful", "lonely",
    "hopeful",
];

/// Entries shown in the chart
const CHART_WINDOW: usize = 7;
/// Entries listed as recent
const RECENT_WINDOW: usize = 3;

fn level_index(mood: u8) -> usize {
    usize::from(mood.clamp(1, 10)) - 1
}

pub fn mood_label(mood: u8) -> &'static str {
    MOOD_LABELS[level_index(mood)]
}

pub fn mood_emoji(mood: u8) -> &'static str {
    MOOD_EMOJIS[level_index(mood)]
}

/// One bar of the mood chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodChartPoint {
    /// Short local weekday name, e.g. "Mon"
    pub day: String,
    pub mood: u8,
    pub date: DateTime<Utc>,
}

/// Aggregate view of the mood history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    /// Mean mood, `None` when nothing was logged yet
    pub average: Option<f32>,
    pub entries: usize,
    /// Last seven entries, oldest first
    pub chart: Vec<MoodChartPoint>,
    /// Last three entries, newest first
    pub recent: Vec<MoodEntry>,
}

impl MoodSummary {
    pub fn from_history(history: &[MoodEntry]) -> Self {
        let average = if history.is_empty() {
            None
        } else {
            let sum: u32 = history.iter().map(|e| u32::from(e.mood)).sum();
            Some(sum as f32 / history.len() as f32)
        };

        let chart = history
            .iter()
            .skip(history.len().saturating_sub(CHART_WINDOW))
            .map(|entry| MoodChartPoint {
                day: entry.timestamp.with_timezone(&Local).format("%a").to_string(),
                mood: entry.mood,
                date: entry.timestamp,
            })
            .collect();

        let recent = history.iter().rev().take(RECENT_WINDOW).cloned().collect();

        Self {
            average,
            entries: history.len(),
            chart,
            recent,
        }
    }
}
