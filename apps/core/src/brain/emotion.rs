//! Emotion scoring using whole-word trigger phrases.
//!
//! Each emotion category owns a list of trigger phrases compiled into
//! case-insensitive, word-bounded regexes. Raw match counts are amplified by
//! intensity modifiers, clamped to 1 and normalized into a distribution.
//! No ML model required - pure Rust regex matching.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Emotion categories, in declaration order.
///
/// Declaration order matters: it is the tie-break order when two categories
/// share the highest normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Stress,
    Anxiety,
    Sadness,
    Anger,
    Joy,
    /// Assigned only when no trigger phrase matched
    Neutral,
}

impl Emotion {
    /// Every channel of an [`EmotionScores`] vector.
    pub const ALL: [Emotion; 6] = [
        Emotion::Stress,
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Joy,
        Emotion::Neutral,
    ];

    /// Categories that own trigger phrases (everything but neutral).
    pub const SCORED: [Emotion; 5] = [
        Emotion::Stress,
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Joy,
    ];

    /// Lowercase label, also used as an activity tag
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Stress => "stress",
            Emotion::Anxiety => "anxiety",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Joy => "joy",
            Emotion::Neutral => "neutral",
        }
    }

    /// Hex color used when rendering the emotion badge
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Stress => "#ef4444",
            Emotion::Anxiety => "#f97316",
            Emotion::Sadness => "#3b82f6",
            Emotion::Anger => "#dc2626",
            Emotion::Joy => "#22c55e",
            Emotion::Neutral => "#6b7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Stress => "😰",
            Emotion::Anxiety => "😟",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Joy => "😊",
            Emotion::Neutral => "😐",
        }
    }

    /// Lenient lookup for presentation code: unknown labels render as neutral.
    pub fn from_label_or_neutral(label: &str) -> Self {
        label.parse().unwrap_or(Emotion::Neutral)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returned when a label does not name any [`Emotion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion label: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

/// Per-category score vector.
///
/// After [`EmotionAnalyzer::analyze`] the channels sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub stress: f32,
    pub anxiety: f32,
    pub sadness: f32,
    pub anger: f32,
    pub joy: f32,
    pub neutral: f32,
}

impl EmotionScores {
    /// Distribution used when nothing matched
    pub fn neutral() -> Self {
        Self {
            neutral: 1.0,
            ..Self::default()
        }
    }

    pub fn get(&self, emotion: Emotion) -> f32 {
        match emotion {
            Emotion::Stress => self.stress,
            Emotion::Anxiety => self.anxiety,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Joy => self.joy,
            Emotion::Neutral => self.neutral,
        }
    }

    fn get_mut(&mut self, emotion: Emotion) -> &mut f32 {
        match emotion {
            Emotion::Stress => &mut self.stress,
            Emotion::Anxiety => &mut self.anxiety,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Joy => &mut self.joy,
            Emotion::Neutral => &mut self.neutral,
        }
    }

    /// Channels in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f32)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    pub fn total(&self) -> f32 {
        self.iter().map(|(_, score)| score).sum()
    }

    /// Highest channel; ties resolve to the earliest category.
    pub fn primary(&self) -> (Emotion, f32) {
        let mut best = (Emotion::Stress, self.stress);
        for (emotion, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (emotion, score);
            }
        }
        best
    }
}

/// Result of emotion analysis for one piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Category with the highest normalized score
    pub primary: Emotion,
    /// Normalized score of the primary category (0.0 - 1.0)
    pub confidence: f32,
    /// Full normalized distribution
    pub emotions: EmotionScores,
}

const STRESS_TRIGGERS: &[&str] = &[
    "stressed",
    "overwhelmed",
    "pressure",
    "deadline",
    "busy",
    "exhausted",
    "tired",
    "burned out",
    "can't cope",
    "too much",
    "breaking point",
    "overloaded",
    "chaos",
    "frantic",
    "rushing",
    "panic",
];

const ANXIETY_TRIGGERS: &[&str] = &[
    "anxious",
    "worried",
    "nervous",
    "scared",
    "afraid",
    "panic",
    "fear",
    "concerned",
    "uneasy",
    "restless",
    "tense",
    "on edge",
    "jittery",
    "catastrophe",
    "what if",
    "terrified",
    "dread",
    "apprehensive",
];

const SADNESS_TRIGGERS: &[&str] = &[
    "sad",
    "depressed",
    "down",
    "low",
    "blue",
    "unhappy",
    "miserable",
    "hopeless",
    "empty",
    "lonely",
    "isolated",
    "crying",
    "tears",
    "grief",
    "mourning",
    "heartbroken",
    "defeated",
    "worthless",
];

const ANGER_TRIGGERS: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "irritated",
    "annoyed",
    "frustrated",
    "rage",
    "hate",
    "pissed",
    "livid",
    "outraged",
    "resentful",
    "bitter",
    "hostile",
    "aggressive",
    "fed up",
    "infuriated",
];

const JOY_TRIGGERS: &[&str] = &[
    "happy",
    "joyful",
    "excited",
    "great",
    "amazing",
    "wonderful",
    "fantastic",
    "good",
    "awesome",
    "thrilled",
    "delighted",
    "cheerful",
    "optimistic",
    "grateful",
    "blessed",
    "content",
];

/// Modifiers matched as plain substrings of the lower-cased text.
const HIGH_INTENSITY_MODIFIERS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
];
const MEDIUM_INTENSITY_MODIFIERS: &[&str] = &["quite", "fairly", "somewhat", "rather", "pretty"];

const HIGH_INTENSITY_FACTOR: f32 = 1.5;
const MEDIUM_INTENSITY_FACTOR: f32 = 1.2;

/// Upper bound of a category's raw score before normalization
const MAX_RAW_SCORE: f32 = 1.0;

fn compile_triggers(triggers: &[&str]) -> Vec<Regex> {
    triggers
        .iter()
        .map(|trigger| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(trigger)))
                .expect("Invalid regex: emotion trigger phrase")
        })
        .collect()
}

// Compile trigger tables once at startup
static STRESS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_triggers(STRESS_TRIGGERS));
static ANXIETY_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_triggers(ANXIETY_TRIGGERS));
static SADNESS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_triggers(SADNESS_TRIGGERS));
static ANGER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_triggers(ANGER_TRIGGERS));
static JOY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_triggers(JOY_TRIGGERS));

/// Trigger patterns of one category
struct EmotionPattern {
    emotion: Emotion,
    triggers: Vec<Regex>,
}

impl EmotionPattern {
    /// Number of whole-word trigger occurrences in `text`
    fn count_matches(&self, text: &str) -> usize {
        self.triggers
            .iter()
            .map(|trigger| trigger.find_iter(text).count())
            .sum()
    }
}

/// Keyword-based emotion scorer
pub struct EmotionAnalyzer {
    patterns: Vec<EmotionPattern>,
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionAnalyzer {
    /// Create an analyzer over the built-in trigger tables
    pub fn new() -> Self {
        let patterns = vec![
            EmotionPattern {
                emotion: Emotion::Stress,
                triggers: STRESS_PATTERNS.clone(),
            },
            EmotionPattern {
                emotion: Emotion::Anxiety,
                triggers: ANXIETY_PATTERNS.clone(),
            },
            EmotionPattern {
                emotion: Emotion::Sadness,
                triggers: SADNESS_PATTERNS.clone(),
            },
            EmotionPattern {
                emotion: Emotion::Anger,
                triggers: ANGER_PATTERNS.clone(),
            },
            EmotionPattern {
                emotion: Emotion::Joy,
                triggers: JOY_PATTERNS.clone(),
            },
        ];

        Self { patterns }
    }

    /// Score `text` and pick its primary emotion.
    ///
    /// Intensity modifiers apply to every category that already matched,
    /// wherever the modifier appears in the text.
    pub fn analyze(&self, text: &str) -> EmotionResult {
        let lowered = text.to_lowercase();
        let high_intensity = HIGH_INTENSITY_MODIFIERS
            .iter()
            .any(|modifier| lowered.contains(modifier));
        let medium_intensity = MEDIUM_INTENSITY_MODIFIERS
            .iter()
            .any(|modifier| lowered.contains(modifier));

        let mut scores = EmotionScores::default();

        for pattern in &self.patterns {
            let mut score = pattern.count_matches(text) as f32;

            if score > 0.0 {
                if high_intensity {
                    score *= HIGH_INTENSITY_FACTOR;
                }
                if medium_intensity {
                    score *= MEDIUM_INTENSITY_FACTOR;
                }
            }

            *scores.get_mut(pattern.emotion) = score.min(MAX_RAW_SCORE);
        }

        let total = scores.total();
        if total == 0.0 {
            scores = EmotionScores::neutral();
        } else {
            for emotion in Emotion::SCORED {
                *scores.get_mut(emotion) /= total;
            }
        }

        let (primary, confidence) = scores.primary();

        EmotionResult {
            primary,
            confidence,
            emotions: scores,
        }
    }
}
