//! Built-in wellness activity catalog.
//!
//! The catalog is compile-time data; nothing mutates it at runtime.

use serde::{Deserialize, Serialize};

/// Kind of wellness activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Breathing,
    Meditation,
    Exercise,
    Journaling,
    Affirmation,
}

impl ActivityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Breathing => "breathing",
            ActivityCategory::Meditation => "meditation",
            ActivityCategory::Exercise => "exercise",
            ActivityCategory::Journaling => "journaling",
            ActivityCategory::Affirmation => "affirmation",
        }
    }
}

/// A scripted wellness activity.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct WellnessActivity {
    /// Stable, unique identifier
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub category: ActivityCategory,
    /// Expected length in minutes (always positive)
    pub duration_minutes: u32,
    /// Ordered steps
    pub instructions: &'static [&'static str],
    /// Emotion labels (and free-form themes) the activity helps with
    pub tags: &'static [&'static str],
}

impl WellnessActivity {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// Instructions as a "1. step" list, one per line
    pub fn numbered_instructions(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Every available activity. The first entry is the default recommendation.
pub static CATALOG: &[WellnessActivity] = &[
    WellnessActivity {
        id: "box-breathing",
        title: "4-7-8 Breathing Technique",
        description: "A calming breathing exercise to reduce stress and anxiety",
        category: ActivityCategory::Breathing,
        duration_minutes: 5,
        instructions: &[
            "Sit comfortably with your back straight",
            "Exhale completely through your mouth",
            "Inhale through your nose for 4 counts",
            "Hold your breath for 7 counts",
            "Exhale through your mouth for 8 counts",
            "Repeat 3-4 times",
        ],
        tags: &["stress", "anxiety", "sleep"],
    },
    WellnessActivity {
        id: "body-scan",
        title: "Progressive Body Scan",
        description: "Mindful awareness of physical sensations to promote relaxation",
        category: ActivityCategory::Meditation,
        duration_minutes: 10,
        instructions: &[
            "Lie down or sit comfortably",
            "Close your eyes and take three deep breaths",
            "Start at the top of your head",
            "Slowly scan down your body",
            "Notice any tension or sensations",
            "Breathe into areas of tension",
            "Continue to your toes",
        ],
        tags: &["stress", "tension", "relaxation"],
    },
    WellnessActivity {
        id: "gratitude-journal",
        title: "Gratitude Practice",
        description: "Reflect on positive aspects of your life",
        category: ActivityCategory::Journaling,
        duration_minutes: 5,
        instructions: &[
            "Find a quiet space",
            "Think of 3 things you're grateful for today",
            "Write them down or say them aloud",
            "For each item, reflect on why it matters",
            "Notice how this makes you feel",
            "End with a moment of appreciation",
        ],
        tags: &["sadness", "negativity", "perspective"],
    },
    WellnessActivity {
        id: "anger-release",
        title: "Anger Release Exercise",
        description: "Physical movement to channel and release anger",
        category: ActivityCategory::Exercise,
        duration_minutes: 10,
        instructions: &[
            "Find a private space",
            "Take 5 deep breaths",
            "Punch a pillow or do jumping jacks",
            "Scream into a pillow if needed",
            "Continue until you feel tension release",
            "End with gentle stretching",
            "Take 3 more deep breaths",
        ],
        tags: &["anger", "frustration", "tension"],
    },
    WellnessActivity {
        id: "loving-kindness",
        title: "Loving-Kindness Meditation",
        description: "Cultivate compassion for yourself and others",
        category: ActivityCategory::Meditation,
        duration_minutes: 8,
        instructions: &[
            "Sit quietly and close your eyes",
            "Start with yourself: \"May I be happy and healthy\"",
            "Think of a loved one: \"May you be happy and healthy\"",
            "Think of a neutral person: \"May you be happy and healthy\"",
            "Think of someone difficult: \"May you be happy and healthy\"",
            "Extend to all beings: \"May all beings be happy and healthy\"",
        ],
        tags: &["sadness", "anger", "compassion"],
    },
    WellnessActivity {
        id: "positive-affirmations",
        title: "Positive Affirmations",
        description: "Strengthen self-esteem with positive self-talk",
        category: ActivityCategory::Affirmation,
        duration_minutes: 3,
        instructions: &[
            "Stand or sit with good posture",
            "Look in a mirror if possible",
            "Say each affirmation with conviction",
            "\"I am capable and strong\"",
            "\"I deserve happiness and peace\"",
            "\"I can handle whatever comes my way\"",
            "Repeat 3 times each",
        ],
        tags: &["self-esteem", "confidence", "sadness"],
    },
    WellnessActivity {
        id: "five-senses",
        title: "5-4-3-2-1 Grounding",
        description: "Ground yourself in the present moment using your senses",
        category: ActivityCategory::Meditation,
        duration_minutes: 5,
        instructions: &[
            "Sit comfortably and breathe deeply",
            "Name 5 things you can SEE",
            "Name 4 things you can TOUCH",
            "Name 3 things you can HEAR",
            "Name 2 things you can SMELL",
            "Name 1 thing you can TASTE",
            "Take three deep breaths",
        ],
        tags: &["anxiety", "panic", "grounding"],
    },
];

/// Look up an activity by id
pub fn find(id: &str) -> Option<&'static WellnessActivity> {
    CATALOG.iter().find(|activity| activity.id == id)
}
