//! Command classification for step navigation.
//!
//! * [`Intent`]: the closed set of navigation commands.
//! * [`IntentClassifier`]: transcript → intent via the priority-ordered
//!   keyword table, plus readiness detection before the first step.

pub mod classifier;
pub mod vocabulary;

pub use classifier::{Intent, IntentClassifier};
