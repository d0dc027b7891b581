//! Guide runner: drives one spoken cooking conversation end to end.
//!
//! # Conversation flow
//!
//! ```text
//! Greeting ─▶ listen(dish) ─▶ extract_dish_name
//!   └─ none ─▶ NoDishHeard                                  [NoDish]
//! Searching ─▶ generator.generate(dish)
//!   └─ sentinel / empty ─▶ UpstreamFailure                  [UpstreamFailure]
//! RecipeParser::parse ─▶ StepSession::start
//!   └─ no steps ─▶ NoSteps                                  [NoSteps]
//! Introduction, overview ─▶ ReadyPrompt ─▶ listen(ready) until "start"
//! first step ─▶ loop { menu, listen(command), classify, apply, speak }
//!   └─ session leaves Active or input closes                [Finished]
//! ```
//!
//! The runner owns no conversation state beyond the [`StepSession`] it
//! builds.

use std::sync::Arc;

use crate::config::{AppConfig, Language, ListenConfig, SessionConfig};
use crate::generate::RecipeGenerator;
use crate::intent::{Intent, IntentClassifier};
use crate::recipe::{extract_dish_name, is_failed_generation, Recipe, RecipeParser};
use crate::voice::{Narrator, TranscriptSource};

use super::narration::{ListKind, Narration, Phrasebook, StepCue};
use super::state::{SessionError, SessionStatus, StepSession};

// ---------------------------------------------------------------------------
// SessionOutcome
// ---------------------------------------------------------------------------

/// How a conversation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No dish name could be heard.
    NoDish,
    /// The generator failed; carries the failure text it returned.
    UpstreamFailure(String),
    /// The recipe came back without any steps, so no session was started.
    NoSteps,
    /// A session ran until it left `Active`.
    Finished { status: SessionStatus, cursor: usize },
}

// ---------------------------------------------------------------------------
// GuideRunner
// ---------------------------------------------------------------------------

/// Drives the cooking conversation.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use recipe_guide::config::AppConfig;
/// use recipe_guide::generate::{ApiGenerator, SentinelGenerator};
/// use recipe_guide::session::GuideRunner;
/// use recipe_guide::voice::{ConsoleNarrator, LineTranscriptSource};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let generator = SentinelGenerator::new(
///     ApiGenerator::from_config(&config.generator, config.language),
///     config.language,
/// );
/// let runner = GuideRunner::new(
///     &config,
///     Arc::new(generator),
///     Arc::new(LineTranscriptSource::stdin()),
///     Arc::new(ConsoleNarrator::new()),
/// );
/// let outcome = runner.run().await;
/// # }
/// ```
pub struct GuideRunner {
    generator: Arc<dyn RecipeGenerator>,
    listener: Arc<dyn TranscriptSource>,
    narrator: Arc<dyn Narrator>,
    parser: RecipeParser,
    classifier: IntentClassifier,
    phrasebook: Phrasebook,
    language: Language,
    listen: ListenConfig,
    session: SessionConfig,
}

impl GuideRunner {
    /// Create a runner.
    ///
    /// # Arguments
    ///
    /// * `config`   : supplies the language, listen timeouts and session options.
    /// * `generator`: produces raw recipe text (e.g. a `SentinelGenerator`).
    /// * `listener` : speech-to-text, or any other transcript source.
    /// * `narrator` : text-to-speech, or any other output.
    pub fn new(
        config: &AppConfig,
        generator: Arc<dyn RecipeGenerator>,
        listener: Arc<dyn TranscriptSource>,
        narrator: Arc<dyn Narrator>,
    ) -> Self {
        Self {
            generator,
            listener,
            narrator,
            parser: RecipeParser::new(),
            classifier: IntentClassifier::new(),
            phrasebook: Phrasebook::new(config.language),
            language: config.language,
            listen: config.listen.clone(),
            session: config.session.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// Full conversation: ask for a dish, fetch it, then guide through it.
    pub async fn run(&self) -> SessionOutcome {
        self.say(Narration::Greeting).await;

        let utterance = self.listener.listen(self.listen.dish_timeout()).await;
        let Some(dish) = extract_dish_name(&utterance) else {
            log::info!("runner: no dish heard in {:?}", utterance);
            self.say(Narration::NoDishHeard).await;
            return SessionOutcome::NoDish;
        };

        self.run_for_dish(&dish).await
    }

    /// Fetch the recipe for an already-known dish name and guide through it.
    pub async fn run_for_dish(&self, dish: &str) -> SessionOutcome {
        log::info!("runner: dish = {:?} ({})", dish, self.language.code());
        self.say(Narration::Searching { dish: dish.to_string() }).await;

        let raw = match self.generator.generate(dish).await {
            Ok(text) => text,
            Err(e) => e.to_sentinel(self.language),
        };

        if is_failed_generation(&raw) {
            let detail = raw.trim().to_string();
            log::warn!("runner: generation failed for {:?}: {}", dish, detail);
            self.say(Narration::UpstreamFailure {
                dish: dish.to_string(),
                detail: detail.clone(),
            })
            .await;
            return SessionOutcome::UpstreamFailure(detail);
        }

        self.run_with_text(dish, &raw).await
    }

    /// Guide through recipe text that is already at hand.
    pub async fn run_with_text(&self, dish: &str, raw: &str) -> SessionOutcome {
        let recipe = self.parser.parse(raw, dish);
        self.run_with_recipe(recipe).await
    }

    /// Guide through an already-parsed recipe.
    pub async fn run_with_recipe(&self, recipe: Recipe) -> SessionOutcome {
        let mut session = match StepSession::start(recipe) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("runner: {e}");
                let SessionError::NoSteps { dish } = e;
                self.say(Narration::NoSteps { dish }).await;
                return SessionOutcome::NoSteps;
            }
        };

        self.introduce(session.recipe()).await;

        if !self.wait_until_ready().await {
            return self.close(&mut session).await;
        }

        self.say(session.narrate_current(StepCue::First)).await;
        self.command_loop(&mut session).await
    }

    // -----------------------------------------------------------------------
    // Conversation phases
    // -----------------------------------------------------------------------

    async fn introduce(&self, recipe: &Recipe) {
        self.say(Narration::Introduction {
            dish: recipe.dish_name.clone(),
        })
        .await;

        if !self.session.announce_overview {
            return;
        }
        for (kind, items) in [
            (ListKind::Ingredients, &recipe.ingredients),
            (ListKind::Tools, &recipe.tools),
        ] {
            let narration = if items.is_empty() {
                Narration::OverviewUnavailable(kind)
            } else {
                Narration::Overview {
                    kind,
                    items: items.clone(),
                }
            };
            self.say(narration).await;
        }
    }

    /// Returns `false` when the transcript source closed before a ready reply.
    async fn wait_until_ready(&self) -> bool {
        self.say(Narration::ReadyPrompt).await;
        loop {
            let reply = self.listener.listen(self.listen.ready_timeout()).await;
            if self.classifier.is_ready_reply(&reply) {
                return true;
            }
            if self.listener.is_closed() {
                return false;
            }
            self.say(Narration::ReadyReprompt).await;
        }
    }

    async fn command_loop(&self, session: &mut StepSession) -> SessionOutcome {
        while session.is_active() {
            if self.session.announce_commands {
                self.say(Narration::CommandMenu).await;
            }

            let transcript = self.listener.listen(self.listen.command_timeout()).await;
            if transcript.is_empty() && self.listener.is_closed() {
                return self.close(session).await;
            }

            let (intent, keyword) = self.classifier.classify_with_keyword(&transcript);
            log::info!(
                "runner: {:?} -> {} (keyword {:?})",
                transcript,
                intent.label(),
                keyword
            );

            if let Some(narration) = session.apply(intent) {
                let narration = match narration {
                    Narration::NotUnderstood { .. } if !transcript.is_empty() => {
                        Narration::NotUnderstood {
                            heard: Some(transcript),
                        }
                    }
                    other => other,
                };
                self.say(narration).await;
            }
        }

        self.outcome(session)
    }

    /// End a session whose input went away.  Nothing is spoken.
    async fn close(&self, session: &mut StepSession) -> SessionOutcome {
        log::info!("runner: transcript source closed, finishing session");
        session.apply(Intent::Finish);
        self.outcome(session)
    }

    fn outcome(&self, session: &StepSession) -> SessionOutcome {
        log::info!(
            "runner: session {} at step {}",
            session.status().label(),
            session.cursor() + 1
        );
        SessionOutcome::Finished {
            status: session.status(),
            cursor: session.cursor(),
        }
    }

    async fn say(&self, narration: Narration) {
        for line in self.phrasebook.render(&narration) {
            self.narrator.speak(&line).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
