//! Time-driven parameter animation.

/// Easing curves.
pub mod ease;
/// The three-track wave schedule.
pub mod schedule;
/// Single-value tweens with repeat policies.
pub mod track;
