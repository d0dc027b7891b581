//! Free-text command → [`Intent`].
//!
//! [`IntentClassifier`] lower-cases the transcript and walks the
//! priority-ordered keyword table in [`vocabulary`](super::vocabulary).
//! Classification is language-agnostic: English and Korean phrasings live in
//! the same table row.

use super::vocabulary::{INTENT_TABLE, READY_PHRASES, READY_WORDS};

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// A navigation command recognised from an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Next,
    Previous,
    Repeat,
    ListIngredients,
    ListTools,
    WhichStep,
    Finish,
    /// Nothing in the transcript matched.  Also produced for empty input.
    Unknown,
}

impl Intent {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Next => "next",
            Intent::Previous => "previous",
            Intent::Repeat => "repeat",
            Intent::ListIngredients => "ingredients",
            Intent::ListTools => "tools",
            Intent::WhichStep => "which-step",
            Intent::Finish => "finish",
            Intent::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// IntentClassifier
// ---------------------------------------------------------------------------

/// Maps transcripts to intents by keyword membership.
///
/// # Example
/// ```rust
/// use recipe_guide::intent::{Intent, IntentClassifier};
///
/// let classifier = IntentClassifier::new();
/// assert_eq!(classifier.classify("please go to the next step"), Intent::Next);
/// assert_eq!(classifier.classify("이전 단계로"), Intent::Previous);
/// assert_eq!(classifier.classify(""), Intent::Unknown);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `transcript`.  Empty or whitespace-only input is `Unknown`.
    pub fn classify(&self, transcript: &str) -> Intent {
        self.classify_with_keyword(transcript).0
    }

    /// Classify `transcript` and also return the keyword that decided it.
    pub fn classify_with_keyword(&self, transcript: &str) -> (Intent, Option<&'static str>) {
        let text = transcript.trim().to_lowercase();
        if text.is_empty() {
            return (Intent::Unknown, None);
        }

        INTENT_TABLE
            .iter()
            .find_map(|row| {
                row.keywords
                    .iter()
                    .find(|kw| text.contains(**kw))
                    .map(|kw| (row.intent, Some(*kw)))
            })
            .unwrap_or((Intent::Unknown, None))
    }

    /// `true` when `transcript` tells us the user is ready to start cooking.
    pub fn is_ready_reply(&self, transcript: &str) -> bool {
        let text = transcript.trim().to_lowercase();
        if text.is_empty() {
            return false;
        }
        if READY_PHRASES.iter().any(|p| text.contains(p)) {
            return true;
        }
        text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .any(|word| READY_WORDS.contains(&word))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> Intent {
        IntentClassifier::new().classify(s)
    }

    #[test]
    fn next_in_both_languages() {
        assert_eq!(classify("please go to the next step"), Intent::Next);
        assert_eq!(classify("Next"), Intent::Next);
        assert_eq!(classify("다음 단계"), Intent::Next);
        assert_eq!(classify("다음"), Intent::Next);
    }

    #[test]
    fn previous_in_both_languages() {
        assert_eq!(classify("이전 단계로"), Intent::Previous);
        assert_eq!(classify("previous step please"), Intent::Previous);
        assert_eq!(classify("go back"), Intent::Previous);
    }

    #[test]
    fn repeat_in_both_languages() {
        assert_eq!(classify("repeat that"), Intent::Repeat);
        assert_eq!(classify("say that again"), Intent::Repeat);
        assert_eq!(classify("다시 알려줘"), Intent::Repeat);
        assert_eq!(classify("뭐라고?"), Intent::Repeat);
        assert_eq!(classify("다시 한 번 말해줘"), Intent::Repeat);
    }

    #[test]
    fn adverb_again_does_not_override_previous() {
        assert_eq!(classify("다시 이전 단계로"), Intent::Previous);
        assert_eq!(classify("다시 뒤로 가줘"), Intent::Previous);
    }

    #[test]
    fn list_ingredients() {
        assert_eq!(classify("what ingredients do I need"), Intent::ListIngredients);
        assert_eq!(classify("재료 확인"), Intent::ListIngredients);
    }

    #[test]
    fn list_tools() {
        assert_eq!(classify("list tools"), Intent::ListTools);
        assert_eq!(classify("도구 뭐였지"), Intent::ListTools);
    }

    #[test]
    fn which_step() {
        assert_eq!(classify("which step am I on"), Intent::WhichStep);
        assert_eq!(classify("지금 몇 단계야"), Intent::WhichStep);
    }

    #[test]
    fn finish_in_both_languages() {
        assert_eq!(classify("stop"), Intent::Finish);
        assert_eq!(classify("EXIT"), Intent::Finish);
        assert_eq!(classify("요리 종료"), Intent::Finish);
        assert_eq!(classify("그만할래"), Intent::Finish);
    }

    #[test]
    fn empty_and_unmatched_are_unknown() {
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("   \t"), Intent::Unknown);
        assert_eq!(classify("what is the weather"), Intent::Unknown);
    }

    #[test]
    fn table_order_breaks_ties() {
        // Both "next" and "repeat" are present; Next sits higher in the table.
        assert_eq!(classify("repeat the next step"), Intent::Next);
        // "step" alone is not a keyword of any intent.
        assert_eq!(classify("step"), Intent::Unknown);
    }

    #[test]
    fn reports_deciding_keyword() {
        let (intent, kw) = IntentClassifier::new().classify_with_keyword("Next step");
        assert_eq!(intent, Intent::Next);
        assert_eq!(kw, Some("next step"));
    }

    #[test]
    fn every_keyword_classifies_to_its_row() {
        // A keyword must not be shadowed by a keyword of a higher row.
        let c = IntentClassifier::new();
        for row in INTENT_TABLE {
            for kw in row.keywords {
                assert_eq!(c.classify(kw), row.intent, "keyword {kw:?}");
            }
        }
    }

    #[test]
    fn ready_replies() {
        let c = IntentClassifier::new();
        assert!(c.is_ready_reply("Start"));
        assert!(c.is_ready_reply("ok"));
        assert!(c.is_ready_reply("yes, let's cook"));
        assert!(c.is_ready_reply("준비됐어"));
        assert!(c.is_ready_reply("네"));
        assert!(!c.is_ready_reply(""));
        assert!(!c.is_ready_reply("look at this"));
        assert!(!c.is_ready_reply("wait a moment"));
    }
}
