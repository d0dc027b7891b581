//! Terminal-backed speech collaborators.
//!
//! [`LineTranscriptSource`] treats every input line as one utterance and
//! [`ConsoleNarrator`] prints what would otherwise be spoken.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use super::{Narrator, TranscriptSource};

// ---------------------------------------------------------------------------
// LineTranscriptSource
// ---------------------------------------------------------------------------

/// Reads utterances line by line from any async reader.
///
/// A line that does not arrive within the listen timeout yields `""`.  End
/// of input marks the source closed.
pub struct LineTranscriptSource<R> {
    lines: Mutex<Lines<R>>,
    closed: AtomicBool,
}

impl<R> LineTranscriptSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
            closed: AtomicBool::new(false),
        }
    }
}

impl LineTranscriptSource<BufReader<Stdin>> {
    /// Source reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> TranscriptSource for LineTranscriptSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn listen(&self, timeout: Duration) -> String {
        if self.is_closed() {
            return String::new();
        }

        let mut lines = self.lines.lock().await;
        match tokio::time::timeout(timeout, lines.next_line()).await {
            Ok(Ok(Some(line))) => {
                let line = line.trim().to_string();
                log::debug!("listen: heard {:?}", line);
                line
            }
            Ok(Ok(None)) => {
                log::info!("listen: input closed");
                self.closed.store(true, Ordering::SeqCst);
                String::new()
            }
            Ok(Err(e)) => {
                log::warn!("listen: read failed: {e}");
                self.closed.store(true, Ordering::SeqCst);
                String::new()
            }
            Err(_) => {
                log::debug!("listen: timed out after {:?}", timeout);
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// ConsoleNarrator
// ---------------------------------------------------------------------------

/// Prints narration to standard output.
#[derive(Debug, Default)]
pub struct ConsoleNarrator;

impl ConsoleNarrator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Narrator for ConsoleNarrator {
    async fn speak(&self, text: &str) {
        log::debug!("speak: {text}");
        println!("{text}");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
