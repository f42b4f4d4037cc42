//! Activity recommendation from an emotion analysis.

use crate::brain::emotion::{Emotion, EmotionScores};

use super::catalog::{WellnessActivity, CATALOG};

/// Secondary emotions above this score also contribute activities
pub const SECONDARY_THRESHOLD: f32 = 0.3;
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Recommend up to three catalog activities for an analyzed message.
pub fn recommend(primary: Emotion, scores: &EmotionScores) -> Vec<&'static WellnessActivity> {
    recommend_from(CATALOG, primary, scores)
}

/// Same as [`recommend`] over an arbitrary catalog.
///
/// Activities tagged with the primary emotion come first, then activities for
/// strong secondary emotions in category order. Catalog order is kept within
/// each group and ids never repeat. An empty selection falls back to the first
/// catalog entry.
pub fn recommend_from<'a>(
    catalog: &'a [WellnessActivity],
    primary: Emotion,
    scores: &EmotionScores,
) -> Vec<&'a WellnessActivity> {
    let mut selected: Vec<&'a WellnessActivity> = Vec::new();

    collect_tagged(catalog, primary.label(), &mut selected);

    for (emotion, score) in scores.iter() {
        if emotion != primary && score > SECONDARY_THRESHOLD {
            collect_tagged(catalog, emotion.label(), &mut selected);
        }
    }

    if selected.is_empty() {
        if let Some(fallback) = catalog.first() {
            selected.push(fallback);
        }
    }

    selected.truncate(MAX_RECOMMENDATIONS);
    selected
}

/// Append catalog activities tagged `label` that are not selected yet
fn collect_tagged<'a>(
    catalog: &'a [WellnessActivity],
    label: &str,
    selected: &mut Vec<&'a WellnessActivity>,
) {
    for activity in catalog.iter().filter(|a| a.has_tag(label)) {
        if !selected.iter().any(|s| s.id == activity.id) {
            selected.push(activity);
        }
    }
}
