//! Spoken output of the guide.
//!
//! The state machine and the runner emit structured [`Narration`] events;
//! [`Phrasebook`] turns them into sentences in the conversation language.
//! Keeping wording out of [`StepSession`](super::StepSession) lets the
//! transition table be tested without string matching.

use crate::config::Language;

// ---------------------------------------------------------------------------
// Narration events
// ---------------------------------------------------------------------------

/// Why a step is being read out.  Only changes the lead-in wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCue {
    /// First step after the readiness prompt.
    First,
    /// Moved forward.
    Advance,
    /// Moved back.
    Back,
    /// Same step again on request.
    Repeat,
    /// Answer to "which step am I on".
    Current,
}

/// Which recipe list is being read out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ingredients,
    Tools,
}

/// Something the guide wants to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    // ---- conversation set-up (runner) ----
    Greeting,
    NoDishHeard,
    Searching { dish: String },
    UpstreamFailure { dish: String, detail: String },
    NoSteps { dish: String },
    Introduction { dish: String },
    /// Overview read before the first step.
    Overview { kind: ListKind, items: Vec<String> },
    /// Overview for a list the recipe did not provide.
    OverviewUnavailable(ListKind),
    ReadyPrompt,
    ReadyReprompt,
    CommandMenu,

    // ---- navigation (StepSession::apply) ----
    /// `number` is 1-based.
    Step { cue: StepCue, number: usize, text: String },
    AlreadyAtFirst,
    /// `tip` is `None` when the recipe carries no tips.
    Completed { tip: Option<String> },
    List { kind: ListKind, items: Vec<String> },
    ListUnavailable(ListKind),
    Farewell,
    /// `heard` is filled in by the runner when it has a transcript to echo.
    NotUnderstood { heard: Option<String> },
}

// ---------------------------------------------------------------------------
// Phrasebook
// ---------------------------------------------------------------------------

/// Renders [`Narration`] as one or more utterances.
///
/// # Example
/// ```rust
/// use recipe_guide::config::Language;
/// use recipe_guide::session::{Narration, Phrasebook, StepCue};
///
/// let english = Phrasebook::new(Language::English);
/// let said = english.render(&Narration::Step {
///     cue: StepCue::Advance,
///     number: 2,
///     text: "Boil the water.".into(),
/// });
/// assert_eq!(said, vec!["Step 2: Boil the water.".to_string()]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Phrasebook {
    language: Language,
}

impl Phrasebook {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Render `narration`.  Never returns an empty vector.
    pub fn render(&self, narration: &Narration) -> Vec<String> {
        match self.language {
            Language::English => english(narration),
            Language::Korean => korean(narration),
        }
    }
}

fn english(narration: &Narration) -> Vec<String> {
    use Narration::*;

    let line = match narration {
        Greeting => "Which dish would you like to cook? Say, 'Tell me how to make' and the dish name.".into(),
        NoDishHeard => "I didn't hear a dish name. Please say exactly: 'Tell me how to make [dish name]'.".into(),
        Searching { dish } => format!("Looking up the recipe for {dish}. Please wait."),
        UpstreamFailure { dish, detail } => {
            format!("Sorry, I couldn't retrieve the recipe for {dish}. {detail}")
        }
        NoSteps { dish } => format!("Sorry, I couldn't parse the steps for {dish}."),
        Introduction { dish } => format!("Starting instructions for {dish}."),
        Overview { kind: ListKind::Ingredients, items } => {
            format!("You will need the following ingredients: {}.", items.join(", "))
        }
        Overview { kind: ListKind::Tools, items } => {
            format!("You will also need these tools: {}.", items.join(", "))
        }
        OverviewUnavailable(ListKind::Ingredients) => "Ingredient list is not available.".into(),
        OverviewUnavailable(ListKind::Tools) => "Tool list is not available.".into(),
        ReadyPrompt => "When you are ready, say 'Start' or 'Next'.".into(),
        ReadyReprompt => "Please say 'Start' or 'Next' when ready.".into(),
        CommandMenu => {
            "Say 'Next step', 'Previous step', 'Repeat', 'Ingredients', 'Tools', or 'Finish'.".into()
        }
        Step { cue, number, text } => match cue {
            StepCue::First | StepCue::Advance => format!("Step {number}: {text}"),
            StepCue::Back => format!("Going back to step {number}: {text}"),
            StepCue::Repeat => format!("Repeating step {number}: {text}"),
            StepCue::Current => format!("You are on step {number}: {text}"),
        },
        AlreadyAtFirst => "You are already at the first step.".into(),
        Completed { tip } => {
            let mut lines = vec!["You have completed all steps. Enjoy your meal!".to_string()];
            if let Some(tip) = tip {
                lines.push(format!("One final tip: {tip}"));
            }
            return lines;
        }
        List { kind: ListKind::Ingredients, items } => format!("Ingredients: {}.", items.join(", ")),
        List { kind: ListKind::Tools, items } => format!("Tools: {}.", items.join(", ")),
        ListUnavailable(ListKind::Ingredients) => "Ingredient list is not available.".into(),
        ListUnavailable(ListKind::Tools) => "Tool list is not available.".into(),
        Farewell => "Okay, ending the recipe guidance. Thank you!".into(),
        NotUnderstood { heard: Some(heard) } => {
            format!("Sorry, I didn't understand '{heard}'. Please try again.")
        }
        NotUnderstood { heard: None } => {
            "Sorry, I didn't catch that. What would you like to do?".into()
        }
    };

    vec![line]
}

fn korean(narration: &Narration) -> Vec<String> {
    use Narration::*;

    let line = match narration {
        Greeting => "어떤 요리를 만들어 볼까요? 요리 이름을 말씀해주세요.".into(),
        NoDishHeard => "요리 이름을 듣지 못했어요. 다음에 다시 시도해주세요.".into(),
        Searching { dish } => format!("{dish} 레시피를 찾고 있어요. 잠시만 기다려주세요."),
        UpstreamFailure { dish, detail } => {
            format!("죄송합니다. {dish} 레시피를 가져오지 못했습니다. {detail}")
        }
        NoSteps { dish } => format!("죄송합니다. '{dish}' 레시피의 단계 정보를 분석하지 못했어요."),
        Introduction { dish } => format!("{dish} 요리 안내를 시작하겠습니다."),
        Overview { kind: ListKind::Ingredients, items } => {
            format!("먼저, 필요한 전체 재료는 {} 입니다.", items.join(", "))
        }
        Overview { kind: ListKind::Tools, items } => {
            format!("그리고 필요한 도구는 {} 입니다.", items.join(", "))
        }
        OverviewUnavailable(ListKind::Ingredients) => "재료 정보가 명확하지 않네요.".into(),
        OverviewUnavailable(ListKind::Tools) => "도구 정보가 명확하지 않네요.".into(),
        ReadyPrompt => "모든 재료와 도구가 준비되셨으면, '시작' 또는 '다음'이라고 말씀해주세요.".into(),
        ReadyReprompt => "계속하려면 '시작' 또는 '다음'이라고 말씀해주세요.".into(),
        CommandMenu => "다음 행동을 말씀해주세요: '다음 단계', '이전 단계', '다시 알려줘', '재료 확인', '도구 확인', 또는 '요리 종료'.".into(),
        Step { cue, number, text } => match cue {
            StepCue::First => format!("좋아요! 첫 번째 단계입니다. {text}"),
            StepCue::Advance => format!("{number} 단계입니다. {text}"),
            StepCue::Back => format!("{number} 단계로 돌아갑니다. {text}"),
            StepCue::Repeat => format!("네, 다시 알려드릴게요. 현재 {number} 단계는 {text} 입니다."),
            StepCue::Current => format!("지금은 {number} 단계이고, 내용은 다음과 같습니다. {text}"),
        },
        AlreadyAtFirst => "이미 첫 번째 단계입니다. 이전 단계로 돌아갈 수 없어요.".into(),
        Completed { tip } => {
            let mut lines = vec!["축하합니다! 모든 단계가 완료되었습니다. 맛있게 드세요!".to_string()];
            if let Some(tip) = tip {
                lines.push(format!("마지막으로, 유용한 팁입니다: {tip}"));
            }
            return lines;
        }
        List { kind: ListKind::Ingredients, items } => {
            format!("이 요리에 사용된 전체 재료는 {} 입니다.", items.join(", "))
        }
        List { kind: ListKind::Tools, items } => {
            format!("이 요리에 사용된 전체 도구는 {} 입니다.", items.join(", "))
        }
        ListUnavailable(ListKind::Ingredients) => "죄송하지만, 재료 정보를 불러올 수 없네요.".into(),
        ListUnavailable(ListKind::Tools) => "죄송하지만, 도구 정보를 불러올 수 없네요.".into(),
        Farewell => "알겠습니다. 요리 안내를 종료합니다. 이용해주셔서 감사합니다!".into(),
        NotUnderstood { heard: Some(heard) } => {
            format!("죄송해요. '{heard}'라고 들렸어요. 다시 한번 말씀해 주시겠어요?")
        }
        NotUnderstood { heard: None } => "명령을 듣지 못했어요. 어떻게 할까요?".into(),
    };

    vec![line]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
