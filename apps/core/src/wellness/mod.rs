//! # Wellness Module
//!
//! Scripted activities offered alongside the chat.
//!
//! ## Components
//! - `catalog`: Built-in activity list
//! - `recommender`: Picks activities for an emotion analysis
//! - `breathing`: 4-7-8 breathing timer

pub mod breathing;
pub mod catalog;
pub mod recommender;

pub use breathing::{BreathPhase, BreathingExercise};
pub use catalog::{ActivityCategory, WellnessActivity, CATALOG};
pub use recommender::recommend;

/// What starting an activity produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityLaunch {
    /// Breathing activities run the interactive timer
    Breathing(BreathingExercise),
    /// Everything else is delivered as a chat message with the steps
    Guided { message: String },
}

/// Start `activity`.
pub fn launch(activity: &WellnessActivity) -> ActivityLaunch {
    match activity.category {
        ActivityCategory::Breathing => ActivityLaunch::Breathing(BreathingExercise::new()),
        _ => ActivityLaunch::Guided {
            message: format!(
                "Great choice! I've prepared the \"{}\" activity for you. Here are the instructions:\n\n{}\n\nTake your time and remember, I'm here if you need any support. How do you feel after completing this activity?",
                activity.title,
                activity.numbered_instructions()
            ),
        },
    }
}
