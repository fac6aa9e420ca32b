//! oncograph-sim — Numeric treatment-course simulators.
//! Logistic tumor growth under a constant therapy effect, a
//! pharmacokinetic dosing course with toxicity-gated health decline,
//! and linear per-treatment side-effect trajectories. Pure
//! discrete-time loops, no graph or service dependencies.

pub mod growth;
pub mod dosing;
pub mod trajectory;

/// Upper bound on request-supplied step/day counts. Each step is one
/// entry in the returned series, so this caps both the loop and the
/// response size.
pub const MAX_SIM_STEPS: usize = 10_000;

pub use dosing::{simulate_dosing, DosingParams, DosingSeries};
pub use growth::{simulate_growth, therapy_effect, GrowthParams};
pub use trajectory::{simulate_trajectory, TrajectoryParams, TrajectorySeries};
