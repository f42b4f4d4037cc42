//! Crisis language detection.
//!
//! Plain substring matching on lower-cased text. Over-triggering is accepted:
//! a false positive only swaps the reply for the resource message.

/// High-risk phrases, matched anywhere in the text
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "don't want to live",
    "hurt myself",
    "self harm",
    "cutting",
    "overdose",
    "no point in living",
    "better off dead",
    "want to die",
];

const CRISIS_RESPONSE: &str = "I'm concerned about what you've shared. If you're having thoughts of hurting yourself or others, please reach out for immediate help:

**Crisis Resources:**
• National Suicide Prevention Lifeline: 988
• Crisis Text Line: Text HOME to 741741
• International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/

You matter, and there are people who want to help. Please don't hesitate to reach out to a mental health professional or emergency services if you need immediate support.";

/// Detects crisis language in user input
pub struct CrisisDetector {
    keywords: &'static [&'static str],
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    pub fn new() -> Self {
        Self {
            keywords: CRISIS_KEYWORDS,
        }
    }

    /// Returns the first high-risk phrase found in `text`, if any
    pub fn matched_keyword(&self, text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .copied()
            .find(|keyword| lowered.contains(keyword))
    }

    pub fn detect(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }
}

/// Whether `text` contains any high-risk phrase.
pub fn detect_crisis(text: &str) -> bool {
    CrisisDetector::new().detect(text)
}

/// Static crisis resource message
pub fn crisis_response() -> &'static str {
    CRISIS_RESPONSE
}
