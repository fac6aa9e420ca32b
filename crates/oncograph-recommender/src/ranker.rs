//! Recommendation ranking over scored treatments.

use oncograph_common::entities::Treatment;

use crate::scorer::TreatmentScore;

/// Sort scored treatments descending by score. The sort is stable:
/// ties keep the order the scores were produced in (graph node order),
/// since no secondary key is defined.
pub fn rank(mut scores: Vec<TreatmentScore>) -> Vec<TreatmentScore> {
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores
}

/// The top-ranked treatment, or `None` when the list is empty or every
/// score was penalised to the floor. A uniform zero vector means no
/// treatment cleared the patient's contraindications, so "no suitable
/// treatment" is the honest answer rather than a nominal list head.
pub fn top_recommendation(ranked: &[TreatmentScore]) -> Option<Treatment> {
    match ranked.first() {
        Some(best) if best.score > 0.0 => Some(best.treatment),
        _ => None,
    }
}
