//! oncograph-recommender — Treatment scoring and ranking engine.
//! Applies the clinical penalty rule table to each patient-treatment
//! baseline affinity and derives a ranked recommendation list.

pub mod rules;
pub mod scorer;
pub mod ranker;

pub use ranker::{rank, top_recommendation};
pub use rules::{apply_rules, PenaltyRule, CLINICAL_RULES};
pub use scorer::{score_treatments, TreatmentScore};
