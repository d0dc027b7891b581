//! Keyword tables for command classification.
//!
//! [`INTENT_TABLE`] is scanned top to bottom and the first entry with a
//! matching keyword wins, so row order is the tie-break between intents.
//! Inside a row, multi-word phrases come before the single words they
//! contain.  Keywords are lower-case; English and Korean phrasings share a row.

use super::classifier::Intent;

// ---------------------------------------------------------------------------
// Intent keywords
// ---------------------------------------------------------------------------

pub(crate) struct IntentKeywords {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

pub(crate) static INTENT_TABLE: &[IntentKeywords] = &[
    IntentKeywords {
        intent: Intent::Next,
        keywords: &["다음 단계", "next step", "다음", "넥스트", "next"],
    },
    IntentKeywords {
        intent: Intent::Repeat,
        keywords: &[
            "다시 알려줘",
            "say that again",
            "one more time",
            "다시 말해",
            "다시 해줘",
            "다시 한 번",
            "반복",
            "리핏",
            "뭐라고",
            "repeat",
            "again",
        ],
    },
    IntentKeywords {
        intent: Intent::Previous,
        keywords: &[
            "이전 단계",
            "previous step",
            "go back",
            "이전",
            "프리비어스",
            "뒤로",
            "previous",
        ],
    },
    IntentKeywords {
        intent: Intent::ListIngredients,
        keywords: &[
            "재료 확인",
            "재료 목록",
            "재료 뭐였지",
            "what ingredients",
            "list ingredients",
            "재료",
            "ingredient",
        ],
    },
    IntentKeywords {
        intent: Intent::ListTools,
        keywords: &[
            "도구 확인",
            "도구 목록",
            "도구 뭐였지",
            "what tools",
            "list tools",
            "도구",
            "tool",
        ],
    },
    IntentKeywords {
        intent: Intent::WhichStep,
        keywords: &[
            "현재 단계",
            "지금 몇 단계",
            "몇 단계",
            "current step",
            "what step",
            "which step",
        ],
    },
    IntentKeywords {
        intent: Intent::Finish,
        keywords: &[
            "요리 종료",
            "그만할래",
            "종료",
            "그만",
            "스탑",
            "finish",
            "stop",
            "exit",
            "quit",
        ],
    },
];

// ---------------------------------------------------------------------------
// Readiness replies
// ---------------------------------------------------------------------------

/// Phrases that confirm the user is ready, matched as substrings.
pub(crate) static READY_PHRASES: &[&str] = &[
    "준비 됐어",
    "준비됐어",
    "준비 완료",
    "시작",
    "다음",
    "let's go",
    "start",
    "ready",
    "next",
];

/// Short confirmations, matched only as whole words.
pub(crate) static READY_WORDS: &[&str] = &[
    "네", "예", "응", "yes", "yeah", "yep", "ok", "okay", "sure",
];
