//! Recipe-generation prompt builder.
//!
//! The prompt fixes the heading dialect of the generated text: English
//! asks for `【Heading】:` markers, Korean for `**제목:**` markers.
//! [`RecipeParser`](crate::recipe::RecipeParser) accepts both.

use crate::config::Language;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

const SYSTEM_INSTRUCTION_EN: &str = "\
You are a cooking assistant that writes recipes for a voice guide.
Follow the requested format exactly. Do not add any text before the first heading or after the tips.";

const SYSTEM_INSTRUCTION_KO: &str = "\
당신은 음성 요리 안내를 위한 레시피를 작성하는 요리 도우미입니다.
요청한 형식을 정확히 지키세요. 첫 제목 앞이나 팁 뒤에 다른 글을 덧붙이지 마세요.";

/// `{dish}` is replaced with the requested dish name.
const RECIPE_TEMPLATE_EN: &str = "\
Please provide a detailed cooking recipe for the dish named \"{dish}\".
Use the following format exactly, including headings:

【Dish Name】: [Insert dish name]

【Total Time】: [Insert estimated total time, or \"Unknown\" if not available]

【Ingredients】:
- [Ingredient 1 (quantity)]
- [Ingredient 2 (quantity)]
- ...

【Tools】:
- [Tool 1]
- [Tool 2]
- ...

【Steps】:
1. [First step detailed description]
2. [Second step detailed description]
3. ...

【Tips】 (optional; if none, write \"No special tips\"):
- [Any additional tip or caution]

Make sure not to repeat tool names inside the step descriptions. List ingredient quantities (e.g., \"Pork (300g)\").";

const RECIPE_TEMPLATE_KO: &str = "\
\"{dish}\" 요리의 자세한 레시피를 알려주세요.
아래 형식과 제목을 그대로 사용하세요:

**요리 이름:** [요리 이름]
**전체 소요 시간:** [예상 소요 시간, 모르면 \"정보 없음\"]

**재료:**
- [재료 1 (분량)]
- [재료 2 (분량)]
- ...

**필요한 도구:**
- [도구 1]
- [도구 2]
- ...

**만드는 단계:**
1. [첫 번째 단계 설명]
2. [두 번째 단계 설명]
3. ...

**팁:**
[추가 팁이나 주의사항, 없으면 \"특별한 팁 없음\"]

단계 설명에 도구 이름을 반복하지 말고, 재료에는 분량을 적어주세요 (예: \"돼지고기 (300g)\").";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds recipe-generation prompts in flat or chat-message form.
///
/// # Example
/// ```rust
/// use recipe_guide::config::Language;
/// use recipe_guide::generate::PromptBuilder;
///
/// let prompt = PromptBuilder::new(Language::English).build("kimchi stew");
/// assert!(prompt.contains("\"kimchi stew\""));
/// assert!(prompt.contains("【Steps】:"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    language: Language,
}

impl PromptBuilder {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Single prompt string (for Gemini `generateContent`).
    pub fn build(&self, dish: &str) -> String {
        let mut prompt = String::with_capacity(1024);
        prompt.push_str(self.system_instruction());
        prompt.push_str("\n\n");
        prompt.push_str(&self.user_message(dish));
        prompt
    }

    /// `(system_msg, user_msg)` pair for OpenAI-compatible chat APIs.
    pub fn build_chat(&self, dish: &str) -> (String, String) {
        (self.system_instruction().to_string(), self.user_message(dish))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn user_message(&self, dish: &str) -> String {
        // Quotes inside the dish would break the quoted name in the template.
        let dish = dish.trim().replace('"', "'");
        self.template().replace("{dish}", &dish)
    }

    fn system_instruction(&self) -> &'static str {
        match self.language {
            Language::English => SYSTEM_INSTRUCTION_EN,
            Language::Korean => SYSTEM_INSTRUCTION_KO,
        }
    }

    fn template(&self) -> &'static str {
        match self.language {
            Language::English => RECIPE_TEMPLATE_EN,
            Language::Korean => RECIPE_TEMPLATE_KO,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Section, SectionExtractor};

    #[test]
    fn english_prompt_embeds_dish() {
        let prompt = PromptBuilder::new(Language::English).build("  pad thai ");
        assert!(prompt.contains("the dish named \"pad thai\""));
        assert!(prompt.starts_with("You are a cooking assistant"));
    }

    #[test]
    fn korean_prompt_embeds_dish() {
        let (system, user) = PromptBuilder::new(Language::Korean).build_chat("김치찜");
        assert!(system.contains("요리 도우미"));
        assert!(user.starts_with("\"김치찜\" 요리"));
    }

    #[test]
    fn quotes_in_dish_are_neutralised() {
        let prompt = PromptBuilder::new(Language::English).build("mom's \"best\" soup");
        assert!(prompt.contains("\"mom's 'best' soup\""));
    }

    /// Every heading the template asks for must be one the parser recognises.
    #[test]
    fn templates_use_parseable_headings() {
        let extractor = SectionExtractor::new();
        for language in [Language::English, Language::Korean] {
            let (_, user) = PromptBuilder::new(language).build_chat("x");
            for section in Section::ALL {
                assert!(
                    extractor.find_heading(&user, section, 0).is_some(),
                    "{language:?} template lacks a {section:?} heading"
                );
            }
        }
    }
}
