//! Templated supportive replies.
//!
//! The confidence of the analysis picks a band; inside a band one sentence is
//! drawn uniformly from a fixed pool. The randomness source is passed in so
//! callers (and tests) control it.

use rand::Rng;
use tracing::debug;

use super::emotion::{Emotion, EmotionResult};

/// Above this confidence a single-emotion template is used
pub const FOCUSED_THRESHOLD: f32 = 0.7;
/// Above this (and up to [`FOCUSED_THRESHOLD`]) the mixed-emotion template is used
pub const MIXED_THRESHOLD: f32 = 0.4;

/// Which template family a reply comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBand {
    /// One clearly dominant emotion
    Focused(Emotion),
    Mixed,
    Neutral,
}

impl ResponseBand {
    pub fn for_result(result: &EmotionResult) -> Self {
        if result.confidence > FOCUSED_THRESHOLD {
            match result.primary {
                Emotion::Neutral => ResponseBand::Neutral,
                emotion => ResponseBand::Focused(emotion),
            }
        } else if result.confidence > MIXED_THRESHOLD {
            ResponseBand::Mixed
        } else {
            ResponseBand::Neutral
        }
    }

    /// Sentence pool for this band
    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            ResponseBand::Focused(Emotion::Stress) => STRESS_RESPONSES,
            ResponseBand::Focused(Emotion::Anxiety) => ANXIETY_RESPONSES,
            ResponseBand::Focused(Emotion::Sadness) => SADNESS_RESPONSES,
            ResponseBand::Focused(Emotion::Anger) => ANGER_RESPONSES,
            ResponseBand::Focused(Emotion::Joy) => JOY_RESPONSES,
            ResponseBand::Mixed => MIXED_RESPONSES,
            ResponseBand::Focused(Emotion::Neutral) | ResponseBand::Neutral => NEUTRAL_RESPONSES,
        }
    }

    /// Fixed question appended after the sentence
    pub fn follow_up(&self) -> Option<&'static str> {
        match self {
            ResponseBand::Focused(Emotion::Stress) => Some("Would you like me to guide you through a quick breathing exercise or suggest some stress-relief techniques?"),
            ResponseBand::Focused(Emotion::Anxiety) => Some("I have some grounding techniques that might help you feel more centered. Would you like to try one?"),
            ResponseBand::Focused(Emotion::Sadness) => Some("Sometimes gentle activities like gratitude practice or loving-kindness meditation can help. Would you like to explore these together?"),
            ResponseBand::Focused(Emotion::Anger) => Some("There are healthy ways to channel and release anger. Would you like me to share some techniques that might help?"),
            ResponseBand::Focused(Emotion::Joy) => Some("Would you like to explore ways to cultivate and maintain this positive feeling?"),
            ResponseBand::Mixed => Some("Let's take this one step at a time. What feels most pressing for you right now?"),
            ResponseBand::Focused(Emotion::Neutral) | ResponseBand::Neutral => None,
        }
    }
}

const STRESS_RESPONSES: &[&str] = &[
    "I can hear that you're feeling stressed right now. It's completely normal to feel overwhelmed sometimes. Let's work together to find some relief.",
    "Stress can feel really overwhelming. You're not alone in this feeling. I'm here to help you find some techniques that might bring you some peace.",
    "It sounds like you're carrying a heavy load right now. Stress affects us all differently, but there are proven ways to help manage these feelings.",
];

const ANXIETY_RESPONSES: &[&str] = &[
    "I notice you're feeling anxious. Anxiety can be really challenging, but you're taking a positive step by reaching out.",
    "Anxiety can make everything feel more intense. Thank you for sharing what you're going through with me.",
    "I hear the worry in your words. Anxiety is your mind's way of trying to protect you, but sometimes it can feel overwhelming.",
];

const SADNESS_RESPONSES: &[&str] = &[
    "I can sense that you're going through a difficult time. It's okay to feel sad - your emotions are valid.",
    "Thank you for trusting me with your feelings. Sadness can be really heavy to carry alone.",
    "I hear the pain in your words. It takes courage to acknowledge these difficult emotions.",
];

const ANGER_RESPONSES: &[&str] = &[
    "I can feel the intensity of your anger. It's a powerful emotion that often signals something important needs attention.",
    "Anger can be overwhelming. Thank you for sharing these strong feelings with me.",
    "I hear your frustration. Anger often masks other emotions like hurt or disappointment.",
];

const JOY_RESPONSES: &[&str] = &[
    "I love hearing the happiness in your words! It's wonderful that you're experiencing joy.",
    "Your positive energy is contagious! Thank you for sharing this joyful moment with me.",
    "It's beautiful to witness your happiness. Joy is such a powerful and healing emotion.",
];

const MIXED_RESPONSES: &[&str] = &[
    "I'm sensing a mix of emotions in what you've shared. It's completely normal to feel multiple things at once.",
    "You seem to be experiencing several different emotions right now. That can feel complex and overwhelming.",
    "I notice you might be feeling a combination of emotions. The human experience is rarely simple.",
];

const NEUTRAL_RESPONSES: &[&str] = &[
    "Thank you for sharing that with me. I'm here to listen and support you.",
    "I appreciate you opening up. How are you feeling in this moment?",
    "I'm glad you're here. What's on your mind today?",
    "Thank you for trusting me with your thoughts. How can I best support you right now?",
];

/// Build the supportive reply for an analyzed message.
pub fn generate_response<R: Rng + ?Sized>(
    text: &str,
    result: &EmotionResult,
    rng: &mut R,
) -> String {
    let band = ResponseBand::for_result(result);
    let pool = band.pool();
    let sentence = pool[rng.gen_range(0..pool.len())];

    debug!(
        chars = text.chars().count(),
        primary = %result.primary,
        confidence = result.confidence,
        ?band,
        "Generated supportive response"
    );

    match band.follow_up() {
        Some(follow_up) => format!("{} {}", sentence, follow_up),
        None => sentence.to_string(),
    }
}
