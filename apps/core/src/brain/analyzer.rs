//! Brain Analyzer - Main orchestrator for the Brain module.
//!
//! Runs crisis detection first; only non-crisis input is scored, answered
//! from the template pools and matched against the activity catalog.

use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

use super::crisis::{crisis_response, CrisisDetector};
use super::emotion::EmotionAnalyzer;
use super::reply_packet::ReplyPacket;
use super::responses::generate_response;
use crate::wellness::recommend;

/// Main Brain analyzer that orchestrates all analysis components
pub struct BrainAnalyzer {
    crisis_detector: CrisisDetector,
    emotion_analyzer: EmotionAnalyzer,
}

impl Default for BrainAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl BrainAnalyzer {
    /// Create a new Brain analyzer with the built-in tables
    pub fn new() -> Self {
        Self {
            crisis_detector: CrisisDetector::new(),
            emotion_analyzer: EmotionAnalyzer::new(),
        }
    }

    /// Analyze a message and produce the companion's reply
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ReplyPacket {
        let start = Instant::now();

        if let Some(keyword) = self.crisis_detector.matched_keyword(text) {
            warn!(keyword, "Crisis language detected, returning resources");
            let packet = ReplyPacket::crisis(text.to_string(), crisis_response(), start);
            debug!("{}", packet.summary());
            return packet;
        }

        // 1. Score emotions
        let emotion = self.emotion_analyzer.analyze(text);

        // 2. Pick a supportive reply
        let reply = generate_response(text, &emotion, rng);

        // 3. Recommend activities
        let activities = recommend(emotion.primary, &emotion.emotions);

        let packet = ReplyPacket::supportive(text.to_string(), emotion, reply, activities, start);

        debug!("{}", packet.summary());
        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::emotion::Emotion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_crisis_short_circuits() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(1);

        let packet = brain.respond("I feel so sad I want to die", &mut rng);
        assert!(packet.crisis);
        assert!(packet.emotion.is_none());
        assert!(packet.activities.is_empty());
        assert_eq!(packet.reply, crisis_response());
    }

    #[test]
    fn test_supportive_reply() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(1);

        let packet = brain.respond("I'm so anxious and worried about tomorrow", &mut rng);
        assert!(!packet.crisis);

        let emotion = packet.emotion.as_ref().expect("emotion present");
        assert_eq!(emotion.primary, Emotion::Anxiety);
        assert!(!packet.activities.is_empty());
        assert!(packet.activities.len() <= 3);
        assert!(packet.reply.contains("grounding techniques"));
    }
}
