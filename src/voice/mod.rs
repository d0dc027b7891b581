//! Speech collaborators: where transcripts come from and where narration goes.
//!
//! Speech-to-text and text-to-speech engines sit behind these two traits.
//! The guide only needs a string in and a string out; the [`console`]
//! implementations back them with a terminal.

pub mod console;

use std::time::Duration;

use async_trait::async_trait;

pub use console::{ConsoleNarrator, LineTranscriptSource};

// ---------------------------------------------------------------------------
// TranscriptSource
// ---------------------------------------------------------------------------

/// Produces what the user said.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Wait up to `timeout` for one utterance.
    ///
    /// Returns `""` on timeout or failure; implementations never error.
    async fn listen(&self, timeout: Duration) -> String;

    /// `true` once the source can produce no further input.
    fn is_closed(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Narrator
// ---------------------------------------------------------------------------

/// Says something to the user.  Fire-and-forget.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn speak(&self, text: &str);
}
