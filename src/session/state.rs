//! Step-navigation state machine and its shared handle.
//!
//! [`StepSession`] holds a parsed [`Recipe`] and a cursor over its steps.
//! Every navigation command goes through [`StepSession::apply`], which
//! returns the [`Narration`] to speak.
//!
//! [`SharedSession`] is a type alias for `Arc<Mutex<StepSession>>`; holding
//! the lock for the duration of `apply` is what keeps two commands from
//! interleaving on one session.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::intent::Intent;
use crate::recipe::Recipe;

use super::narration::{ListKind, Narration, StepCue};

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a [`StepSession`].
///
/// ```text
/// Active ──Next past last step──▶ Completed
///        ──Finish──────────────▶ Aborted
/// Completed / Aborted ──any──▶ (unchanged)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting commands.
    Active,
    /// Walked past the last step.
    Completed,
    /// The user asked to stop.
    Aborted,
}

impl SessionStatus {
    /// `true` once the session no longer reacts to commands.
    ///
    /// ```
    /// use recipe_guide::session::SessionStatus;
    ///
    /// assert!(!SessionStatus::Active.is_terminal());
    /// assert!(SessionStatus::Completed.is_terminal());
    /// assert!(SessionStatus::Aborted.is_terminal());
    /// ```
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Active)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Active => "Active",
            SessionStatus::Completed => "Completed",
            SessionStatus::Aborted => "Aborted",
        }
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Active
    }
}

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Reasons a session cannot be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The recipe has no steps to walk through.
    #[error("recipe for '{dish}' has no steps")]
    NoSteps { dish: String },
}

// ---------------------------------------------------------------------------
// StepSession
// ---------------------------------------------------------------------------

/// Cursor over the steps of one recipe.
///
/// # Example
/// ```rust
/// use recipe_guide::intent::Intent;
/// use recipe_guide::recipe::Recipe;
/// use recipe_guide::session::{SessionStatus, StepSession};
///
/// let mut recipe = Recipe::empty("toast");
/// recipe.steps = vec!["Slice bread.".into(), "Toast it.".into()];
///
/// let mut session = StepSession::start(recipe).unwrap();
/// session.apply(Intent::Next);
/// assert_eq!(session.cursor(), 1);
/// session.apply(Intent::Next);
/// assert_eq!(session.status(), SessionStatus::Completed);
/// assert!(session.apply(Intent::Previous).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StepSession {
    recipe: Arc<Recipe>,
    cursor: usize,
    status: SessionStatus,
}

impl StepSession {
    /// Start a session at the first step.
    ///
    /// Fails with [`SessionError::NoSteps`] when `recipe.steps` is empty.
    pub fn start(recipe: impl Into<Arc<Recipe>>) -> Result<Self, SessionError> {
        let recipe = recipe.into();
        if !recipe.has_steps() {
            return Err(SessionError::NoSteps {
                dish: recipe.dish_name.clone(),
            });
        }

        log::debug!(
            "session: started '{}' with {} steps",
            recipe.dish_name,
            recipe.steps.len()
        );

        Ok(Self {
            recipe,
            cursor: 0,
            status: SessionStatus::Active,
        })
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// 0-based index of the current step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Text of the current step.
    pub fn current_step(&self) -> &str {
        &self.recipe.steps[self.cursor]
    }

    /// Narrate the current step with the given lead-in.
    pub fn narrate_current(&self, cue: StepCue) -> Narration {
        Narration::Step {
            cue,
            number: self.cursor + 1,
            text: self.current_step().to_string(),
        }
    }

    /// Apply one navigation command.
    ///
    /// Returns `None` once the session is terminal; repeated calls after
    /// completion or abort change nothing.
    pub fn apply(&mut self, intent: Intent) -> Option<Narration> {
        if self.status.is_terminal() {
            log::debug!(
                "session: ignoring {} in {} state",
                intent.label(),
                self.status.label()
            );
            return None;
        }

        let narration = match intent {
            Intent::Next => self.advance(),
            Intent::Previous => {
                if self.cursor == 0 {
                    Narration::AlreadyAtFirst
                } else {
                    self.cursor -= 1;
                    self.narrate_current(StepCue::Back)
                }
            }
            Intent::Repeat => self.narrate_current(StepCue::Repeat),
            Intent::ListIngredients => self.list(ListKind::Ingredients),
            Intent::ListTools => self.list(ListKind::Tools),
            Intent::WhichStep => self.narrate_current(StepCue::Current),
            Intent::Finish => {
                self.status = SessionStatus::Aborted;
                Narration::Farewell
            }
            Intent::Unknown => Narration::NotUnderstood { heard: None },
        };

        log::debug!(
            "session: {} -> step {} ({})",
            intent.label(),
            self.cursor + 1,
            self.status.label()
        );
        Some(narration)
    }

    // -----------------------------------------------------------------------
    // Transition helpers
    // -----------------------------------------------------------------------

    fn advance(&mut self) -> Narration {
        if self.cursor + 1 < self.recipe.steps.len() {
            self.cursor += 1;
            return self.narrate_current(StepCue::Advance);
        }

        // The cursor stays on the last step so it remains a valid index.
        self.status = SessionStatus::Completed;
        let tip = self
            .recipe
            .has_tips()
            .then(|| self.recipe.tips.clone());
        Narration::Completed { tip }
    }

    fn list(&self, kind: ListKind) -> Narration {
        let items = match kind {
            ListKind::Ingredients => &self.recipe.ingredients,
            ListKind::Tools => &self.recipe.tools,
        };
        if items.is_empty() {
            Narration::ListUnavailable(kind)
        } else {
            Narration::List {
                kind,
                items: items.clone(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SharedSession
// ---------------------------------------------------------------------------

/// Thread-safe handle to a [`StepSession`].
///
/// Lock for the duration of one `apply`; do **not** hold the lock across
/// `.await` points.
pub type SharedSession = Arc<Mutex<StepSession>>;

/// Wrap a started session in a [`SharedSession`].
pub fn new_shared_session(session: StepSession) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Apply `intent` under the session lock.  A poisoned lock is recovered.
pub fn apply_shared(session: &SharedSession, intent: Intent) -> Option<Narration> {
    let mut guard = match session.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.apply(intent)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
