//! Pure learner-progression logic for Lanvoyage.
//!
//! This crate contains all gamification logic that is independent of any
//! database, UI framework, or tutoring backend. Functions take plain data
//! and return results, making them unit-testable and portable across the
//! mobile host, the native simtest harness, and any future surface.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`awards`] | Point-award formulas for graded practice sessions |
//! | [`learner`] | Onboarding profile vocabulary (role, purpose, style, horizon) |
//! | [`progression`] | Level-threshold table and level/progress queries |
//! | [`records`] | Study-session log records, filters, aggregate stats |
//! | [`wallet`] | Point balance with zero-floored deduction |

pub mod awards;
pub mod learner;
pub mod progression;
pub mod records;
pub mod wallet;
