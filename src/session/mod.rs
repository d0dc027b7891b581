//! Step-by-step cooking conversation.
//!
//! This module provides:
//! * [`StepSession`]: cursor over a recipe's steps, driven by [`Intent`](crate::intent::Intent)s.
//! * [`SharedSession`]: `Arc<Mutex<StepSession>>` for callers that share a session.
//! * [`Narration`] / [`Phrasebook`]: what the guide says, and how it says it.
//! * [`GuideRunner`]: the full listen → classify → apply → speak loop.
//!
//! # Quick start
//!
//! ```rust
//! use recipe_guide::config::Language;
//! use recipe_guide::intent::IntentClassifier;
//! use recipe_guide::recipe::RecipeParser;
//! use recipe_guide::session::{Phrasebook, StepSession};
//!
//! let raw = "【Steps】:\n1. Boil water.\n2. Add noodles.";
//! let recipe = RecipeParser::new().parse(raw, "ramen");
//!
//! let mut session = StepSession::start(recipe).unwrap();
//! let intent = IntentClassifier::new().classify("next step");
//! let narration = session.apply(intent).unwrap();
//!
//! let said = Phrasebook::new(Language::English).render(&narration);
//! assert_eq!(said, vec!["Step 2: Add noodles.".to_string()]);
//! ```

pub mod narration;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use narration::{ListKind, Narration, Phrasebook, StepCue};
pub use runner::{GuideRunner, SessionOutcome};
pub use state::{
    apply_shared, new_shared_session, SessionError, SessionStatus, SharedSession, StepSession,
};
