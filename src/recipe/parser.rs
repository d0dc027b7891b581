//! Raw generated text → [`Recipe`].
//!
//! [`RecipeParser`] runs the [`SectionExtractor`] once per [`Section`], hands
//! list blocks to the splitters and fills every field it could not recover
//! with its sentinel.  A missing or malformed section never aborts the parse;
//! it only degrades that one field.

use crate::recipe::list::{split_bulleted, split_numbered};
use crate::recipe::model::{is_no_tips, is_unknown, Recipe, NO_TIPS_SENTINEL, UNKNOWN_SENTINEL};
use crate::recipe::section::{Section, SectionExtractor};

/// Prefixes the generator puts in front of its output when it failed.
pub const ERROR_SENTINELS: &[&str] = &["Error", "오류"];

/// `true` when `text` is empty or is a generator failure message.
pub fn is_failed_generation(text: &str) -> bool {
    let text = text.trim_start();
    text.is_empty() || ERROR_SENTINELS.iter().any(|prefix| text.starts_with(prefix))
}

// ---------------------------------------------------------------------------
// ParsedRecipe
// ---------------------------------------------------------------------------

/// A parse result together with the sections that fell back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub recipe: Recipe,
    /// Sections that were missing, empty or unusable, in prompt order.
    pub degraded: Vec<Section>,
}

impl ParsedRecipe {
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RecipeParser
// ---------------------------------------------------------------------------

/// Stateless parser: identical input always yields an identical [`Recipe`].
///
/// # Example
/// ```rust
/// use recipe_guide::recipe::RecipeParser;
///
/// let text = "【Ingredients】:\n- egg\n【Steps】:\n1. Crack the egg.\n2. Fry it.";
/// let recipe = RecipeParser::new().parse(text, "fried egg");
/// assert_eq!(recipe.dish_name, "fried egg");
/// assert_eq!(recipe.steps, ["Crack the egg.", "Fry it."]);
/// assert_eq!(recipe.total_time, "unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeParser {
    extractor: SectionExtractor,
}

impl RecipeParser {
    pub fn new() -> Self {
        Self {
            extractor: SectionExtractor::new(),
        }
    }

    /// Parse `raw` into a [`Recipe`], using `fallback_dish_name` when the text
    /// carries no dish name.
    ///
    /// Callers detect failure by checking [`Recipe::has_steps`].
    pub fn parse(&self, raw: &str, fallback_dish_name: &str) -> Recipe {
        self.parse_detailed(raw, fallback_dish_name).recipe
    }

    /// Like [`parse`](Self::parse) but also reports the degraded sections.
    pub fn parse_detailed(&self, raw: &str, fallback_dish_name: &str) -> ParsedRecipe {
        let mut recipe = Recipe::empty(fallback_dish_name);

        if is_failed_generation(raw) {
            log::warn!(
                "parser: unusable recipe text ({} bytes), using defaults",
                raw.len()
            );
            return ParsedRecipe {
                recipe,
                degraded: Section::ALL.to_vec(),
            };
        }

        let degraded: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|section| {
                let block = self.extractor.extract(raw, *section, &section.others());
                !apply_section(&mut recipe, *section, block)
            })
            .collect();

        if !degraded.is_empty() {
            let names: Vec<&str> = degraded.iter().map(|s| s.name()).collect();
            log::warn!("parser: sections fell back to defaults: {}", names.join(", "));
        }
        log::debug!(
            "parser: {} ingredients, {} tools, {} steps",
            recipe.ingredients.len(),
            recipe.tools.len(),
            recipe.steps.len()
        );

        ParsedRecipe { recipe, degraded }
    }
}

/// Write `block` into the field for `section`.  Returns `false` when the
/// field keeps its default.
fn apply_section(recipe: &mut Recipe, section: Section, block: Option<&str>) -> bool {
    let Some(block) = block else {
        return false;
    };

    match section {
        Section::DishName => match first_line(block) {
            Some(name) => {
                recipe.dish_name = name;
                true
            }
            None => false,
        },
        Section::TotalTime => match first_line(block) {
            Some(time) => {
                recipe.total_time = if is_unknown(&time) {
                    UNKNOWN_SENTINEL.to_string()
                } else {
                    time
                };
                true
            }
            None => false,
        },
        Section::Ingredients => {
            recipe.ingredients = split_bulleted(block);
            !recipe.ingredients.is_empty()
        }
        Section::Tools => {
            recipe.tools = split_bulleted(block);
            !recipe.tools.is_empty()
        }
        Section::Steps => {
            recipe.steps = split_numbered(block);
            !recipe.steps.is_empty()
        }
        Section::Tips => {
            if block.trim().is_empty() {
                return false;
            }
            recipe.tips = if is_no_tips(block) {
                NO_TIPS_SENTINEL.to_string()
            } else {
                block.trim().to_string()
            };
            true
        }
    }
}

fn first_line(block: &str) -> Option<String> {
    block
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = "\
【Dish Name】: Kimchi Stew

【Total Time】: 40 minutes

【Ingredients】:
- Kimchi (300g)
- Pork belly (200g)
- Tofu (1/2 block)

【Tools】:
- Pot
- Knife

【Steps】:
1. Cut the pork and kimchi.
2. Fry the pork in the pot.
Be careful with the oil.
3. Add kimchi and water, simmer 20 minutes.

【Tips】:
Older kimchi gives a deeper flavour.";

    const KOREAN: &str = "\
**요리 이름:** 김치찌개
**전체 소요 시간:** 40분

**재료:**
- 김치 300g
- 돼지고기 200g

**필요한 도구:**
- 냄비

**만드는 단계:**
1. 돼지고기를 볶는다.
2. 김치와 물을 넣고 끓인다.

**팁:**
신 김치를 사용하세요.";

    fn parser() -> RecipeParser {
        RecipeParser::new()
    }

    #[test]
    fn parses_all_sections_bracket_dialect() {
        let parsed = parser().parse_detailed(ENGLISH, "fallback");
        let r = &parsed.recipe;
        assert!(parsed.is_complete(), "degraded: {:?}", parsed.degraded);
        assert_eq!(r.dish_name, "Kimchi Stew");
        assert_eq!(r.total_time, "40 minutes");
        assert_eq!(
            r.ingredients,
            vec!["Kimchi (300g)", "Pork belly (200g)", "Tofu (1/2 block)"]
        );
        assert_eq!(r.tools, vec!["Pot", "Knife"]);
        assert_eq!(
            r.steps,
            vec![
                "Cut the pork and kimchi.",
                "Fry the pork in the pot.",
                "Add kimchi and water, simmer 20 minutes.",
            ]
        );
        assert_eq!(r.tips, "Older kimchi gives a deeper flavour.");
    }

    #[test]
    fn parses_all_sections_bold_dialect() {
        let r = parser().parse(KOREAN, "김치찜");
        assert_eq!(r.dish_name, "김치찌개");
        assert_eq!(r.total_time, "40분");
        assert_eq!(r.ingredients, vec!["김치 300g", "돼지고기 200g"]);
        assert_eq!(r.tools, vec!["냄비"]);
        assert_eq!(r.steps, vec!["돼지고기를 볶는다.", "김치와 물을 넣고 끓인다."]);
        assert_eq!(r.tips, "신 김치를 사용하세요.");
    }

    #[test]
    fn empty_text_yields_all_defaults() {
        let parsed = parser().parse_detailed("", "ramen");
        assert_eq!(parsed.recipe, Recipe::empty("ramen"));
        assert_eq!(parsed.degraded, Section::ALL.to_vec());
    }

    #[test]
    fn error_sentinel_yields_all_defaults() {
        for raw in ["Error: GEMINI_API_KEY is not set.", "오류: 호출 실패", "  Error during call"] {
            let r = parser().parse(raw, "ramen");
            assert!(!r.has_steps());
            assert_eq!(r.dish_name, "ramen");
            assert_eq!(r.tips, NO_TIPS_SENTINEL);
        }
    }

    #[test]
    fn missing_time_section_only_degrades_time() {
        let text = ENGLISH.replace("【Total Time】: 40 minutes", "");
        let parsed = parser().parse_detailed(&text, "x");
        assert_eq!(parsed.degraded, vec![Section::TotalTime]);
        assert_eq!(parsed.recipe.total_time, UNKNOWN_SENTINEL);
        assert_eq!(parsed.recipe.tools, vec!["Pot", "Knife"]);
        assert_eq!(parsed.recipe.steps.len(), 3);
    }

    #[test]
    fn missing_tools_keeps_ingredients_bounded_by_steps() {
        let text = "【Ingredients】:\n- egg\n- salt\n【Steps】:\n1. Beat.\n【Tips】:\nServe warm.";
        let parsed = parser().parse_detailed(text, "omelette");
        assert!(parsed.recipe.tools.is_empty());
        assert_eq!(parsed.recipe.ingredients, vec!["egg", "salt"]);
        assert_eq!(parsed.recipe.steps, vec!["Beat."]);
        assert_eq!(parsed.recipe.tips, "Serve warm.");
        assert!(parsed.degraded.contains(&Section::Tools));
    }

    #[test]
    fn missing_tips_uses_sentinel() {
        let text = "【Steps】:\n1. Eat.";
        let r = parser().parse(text, "snack");
        assert_eq!(r.tips, NO_TIPS_SENTINEL);
        assert!(!r.has_tips());
    }

    #[test]
    fn no_tips_phrase_maps_to_sentinel() {
        let text = "【Steps】:\n1. Eat.\n【Tips】:\n- No special tips";
        assert_eq!(parser().parse(text, "snack").tips, NO_TIPS_SENTINEL);
    }

    #[test]
    fn unknown_time_placeholder_maps_to_sentinel() {
        let text = "【Total Time】: Unknown\n【Steps】:\n1. Eat.";
        assert_eq!(parser().parse(text, "snack").total_time, UNKNOWN_SENTINEL);

        let text = "**전체 소요 시간:** 정보 없음\n**만드는 단계:**\n1. 먹는다.";
        assert_eq!(parser().parse(text, "간식").total_time, UNKNOWN_SENTINEL);

        let text = "【Total Time】: About 20 minutes\n【Steps】:\n1. Eat.";
        assert_eq!(parser().parse(text, "snack").total_time, "About 20 minutes");
    }

    #[test]
    fn repeated_heading_does_not_leak_into_fields() {
        let text = "【Steps】:\n1. a\n2. b\n【Steps】:\n1. z";
        assert_eq!(parser().parse(text, "x").steps, vec!["a", "b"]);

        let text = "【Steps】:\n1. a\n【Tips】:\nfirst tip\n【Tips】:\nsecond tip";
        assert_eq!(parser().parse(text, "x").tips, "first tip");
    }

    #[test]
    fn missing_name_uses_fallback() {
        let text = "【Steps】:\n1. Eat.";
        assert_eq!(parser().parse(text, "toast").dish_name, "toast");
    }

    #[test]
    fn empty_fallback_and_missing_name_is_unknown() {
        let text = "【Steps】:\n1. Eat.";
        assert_eq!(parser().parse(text, "").dish_name, UNKNOWN_SENTINEL);
    }

    #[test]
    fn unnumbered_steps_block_yields_no_steps() {
        let text = "【Steps】:\nJust cook it until done.";
        let parsed = parser().parse_detailed(text, "mystery");
        assert!(!parsed.recipe.has_steps());
        assert!(parsed.degraded.contains(&Section::Steps));
    }

    #[test]
    fn reordered_sections_keep_boundaries() {
        let text = "\
【Total Time】: 10 min
【Ingredients】:
- bread
【Dish Name】: Toast
【Tools】:
- toaster
【Steps】:
1. Toast the bread.
【Tips】:
Butter it.";
        let r = parser().parse(text, "x");
        assert_eq!(r.dish_name, "Toast");
        assert_eq!(r.total_time, "10 min");
        assert_eq!(r.ingredients, vec!["bread"]);
        assert_eq!(r.tools, vec!["toaster"]);
        assert_eq!(r.steps, vec!["Toast the bread."]);
        assert_eq!(r.tips, "Butter it.");
    }

    #[test]
    fn parse_is_deterministic() {
        let p = parser();
        assert_eq!(p.parse(ENGLISH, "a"), p.parse(ENGLISH, "a"));
    }

    #[test]
    fn failed_generation_detection() {
        assert!(is_failed_generation(""));
        assert!(is_failed_generation("   \n"));
        assert!(is_failed_generation("Error: timeout"));
        assert!(is_failed_generation("오류: 키 없음"));
        assert!(!is_failed_generation("【Dish Name】: Error-free soup"));
    }
}
