//! Brain Module Tests
//!
//! Tests for crisis detection, emotion scoring, response generation and
//! the Brain analyzer orchestrator.

use crate::brain::{
    crisis_response, detect_crisis, BrainAnalyzer, Emotion, EmotionAnalyzer, EmotionScores,
    ResponseBand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLE_INPUTS: &[&str] = &[
    "",
    "hello there",
    "I feel extremely stressed and overwhelmed",
    "I'm happy but also worried",
    "I'm sad, angry and scared",
    "panic panic panic",
    "quite tired, very sad, totally furious and somewhat excited",
    "Deadline pressure is too much, I'm burned out and can't cope",
    "What if everything goes wrong? I'm terrified",
    "I made a bluetooth speaker on the lower deck",
];

#[cfg(test)]
mod crisis_detector_tests {
    use super::*;

    #[test]
    fn test_crisis_phrases() {
        let phrases = vec![
            "I want to kill myself",
            "I DON'T WANT TO LIVE anymore",
            "I've been thinking about self harm",
            "maybe I should just end it all",
            "there's no point in living",
        ];

        for phrase in phrases {
            assert!(detect_crisis(phrase), "Expected crisis for '{}'", phrase);
        }
    }

    #[test]
    fn test_ordinary_phrases() {
        let phrases = vec!["I had a great day", "I'm a bit stressed about work", "   "];

        for phrase in phrases {
            assert!(!detect_crisis(phrase), "Expected no crisis for '{}'", phrase);
        }
    }
}

#[cfg(test)]
mod emotion_analyzer_tests {
    use super::*;

    #[test]
    fn test_scores_sum_to_one() {
        let analyzer = EmotionAnalyzer::new();

        for input in SAMPLE_INPUTS {
            let result = analyzer.analyze(input);
            let total = result.emotions.total();
            assert!(
                (total - 1.0).abs() < 1e-5,
                "Scores should sum to 1.0 for '{}', got {}",
                input,
                total
            );
            assert!(
                result.emotions.iter().all(|(_, score)| score >= 0.0),
                "Scores should be non-negative for '{}'",
                input
            );
            assert_eq!(result.confidence, result.emotions.get(result.primary));
        }
    }

    #[test]
    fn test_neutral_only_without_matches() {
        let analyzer = EmotionAnalyzer::new();

        for input in SAMPLE_INPUTS {
            let result = analyzer.analyze(input);
            if result.primary == Emotion::Neutral {
                assert_eq!(result.emotions, EmotionScores::neutral(), "'{}'", input);
            } else {
                assert_eq!(result.emotions.neutral, 0.0, "'{}'", input);
            }
        }
    }

    #[test]
    fn test_mixed_emotions_split_evenly() {
        let analyzer = EmotionAnalyzer::new();

        let result = analyzer.analyze("I'm happy but also worried");
        assert_eq!(result.emotions.joy, 0.5);
        assert_eq!(result.emotions.anxiety, 0.5);
        // Anxiety is declared before joy
        assert_eq!(result.primary, Emotion::Anxiety);

        let result = analyzer.analyze("I'm sad, angry and scared");
        assert_eq!(result.primary, Emotion::Anxiety);
        assert!((result.confidence - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_multi_word_triggers() {
        let analyzer = EmotionAnalyzer::new();

        assert_eq!(analyzer.analyze("I can't cope with this").primary, Emotion::Stress);
        assert_eq!(analyzer.analyze("I'm so burned out").primary, Emotion::Stress);
        assert_eq!(analyzer.analyze("I'm totally fed up").primary, Emotion::Anger);
        assert_eq!(analyzer.analyze("always on edge lately").primary, Emotion::Anxiety);
    }

    #[test]
    fn test_case_insensitive() {
        let analyzer = EmotionAnalyzer::new();

        let result = analyzer.analyze("I AM FURIOUS");
        assert_eq!(result.primary, Emotion::Anger);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_substrings_do_not_match() {
        let analyzer = EmotionAnalyzer::new();

        let result = analyzer.analyze("I made a bluetooth speaker on the lower deck");
        assert_eq!(result.primary, Emotion::Neutral);
        assert_eq!(result.emotions.anger, 0.0);
        assert_eq!(result.emotions.sadness, 0.0);
    }

    #[test]
    fn test_emotion_result_json_shape() {
        let analyzer = EmotionAnalyzer::new();

        let json = serde_json::to_value(analyzer.analyze("I'm stressed")).expect("serialize");
        assert_eq!(json["primary"], "stress");
        assert_eq!(json["confidence"], 1.0);
        assert_eq!(json["emotions"]["stress"], 1.0);
        assert_eq!(json["emotions"]["neutral"], 0.0);
    }

    #[test]
    fn test_presentation_helpers() {
        assert_eq!(Emotion::Stress.color(), "#ef4444");
        assert_eq!(Emotion::Neutral.color(), "#6b7280");
        assert_eq!(Emotion::Joy.icon(), "😊");
        assert_eq!(Emotion::from_label_or_neutral("anger"), Emotion::Anger);
        assert_eq!(Emotion::from_label_or_neutral("boredom").icon(), "😐");
    }
}

#[cfg(test)]
mod brain_analyzer_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_crisis_bypasses_analysis() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let packet = brain.respond("I'm so stressed I want to die", &mut rng);
        assert!(packet.crisis);
        assert!(packet.emotion.is_none());
        assert!(packet.activities.is_empty());
        assert_eq!(packet.reply, crisis_response());
    }

    #[test]
    fn test_empty_input_gets_neutral_reply() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let packet = brain.respond("", &mut rng);
        let emotion = packet.emotion.expect("emotion present");
        assert_eq!(emotion.primary, Emotion::Neutral);
        assert_eq!(emotion.confidence, 1.0);
        assert!(ResponseBand::Neutral.pool().contains(&packet.reply.as_str()));

        let ids: Vec<&str> = packet.activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["box-breathing"]);
    }

    #[test]
    fn test_mixed_reply_band() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let packet = brain.respond("I'm happy but also worried", &mut rng);
        assert!(ResponseBand::Mixed
            .pool()
            .iter()
            .any(|s| packet.reply.starts_with(s)));
        assert!(packet.reply.ends_with("What feels most pressing for you right now?"));
    }

    #[test]
    fn test_seeded_replies_repeat() {
        let brain = BrainAnalyzer::new();

        for input in SAMPLE_INPUTS {
            let first = brain.respond(input, &mut StdRng::seed_from_u64(11));
            let second = brain.respond(input, &mut StdRng::seed_from_u64(11));
            assert_eq!(first.reply, second.reply, "'{}'", input);
        }
    }

    #[test]
    fn test_recommendations_are_unique_and_bounded() {
        let brain = BrainAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(5);

        for input in SAMPLE_INPUTS {
            let packet = brain.respond(input, &mut rng);
            assert!(!packet.activities.is_empty(), "'{}'", input);
            assert!(packet.activities.len() <= 3, "'{}'", input);

            let ids: HashSet<&str> = packet.activities.iter().map(|a| a.id).collect();
            assert_eq!(ids.len(), packet.activities.len(), "'{}'", input);
        }
    }
}
