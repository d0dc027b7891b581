//! Dish-name extraction from a spoken request.
//!
//! The generator must only ever receive a dish name, never the whole
//! utterance.  [`extract_dish_name`] strips the request phrasing in both
//! supported languages:
//!
//! | Utterance                              | Dish          |
//! |----------------------------------------|---------------|
//! | `tell me how to make kimchi stew`      | `kimchi stew` |
//! | `give me a recipe for pad thai`        | `pad thai`    |
//! | `bulgogi recipe please`                | `bulgogi`     |
//! | `김치찜 레시피를 알려줘`                 | `김치찜`       |
//! | `된장찌개 만드는 법 알려줘`               | `된장찌개`     |
//! | `japchae`                              | `japchae`     |

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("dish query pattern must compile")
}

/// Patterns whose first capture group is the dish, tried in order.
static DISH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)\bhow\s+(?:do\s+i|to|can\s+i|should\s+i)\s+(?:make|cook|prepare)\s+(.+)$"),
        compile(r"(?i)\brecipe\s+(?:for|of)\s+(.+)$"),
        compile(r"(?i)^(.+?)\s+recipe\b"),
        compile(r"^(.*?)\s*레시피"),
        compile(r"^(.+?)\s*(?:만드는\s*(?:법|방법)|만들기|요리법|조리법)"),
    ]
});

/// Request phrasing in front of a dish name.
static REQUEST_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^(?:please\s+)?(?:(?:can|could)\s+you\s+)?(?:(?:give|show|tell|find|get)\s+me\s+)?(?:an?\s+|the\s+|some\s+)?",
    )
});

/// A request that never names a dish ("tell me how to make", "give me a
/// recipe for", "만드는 법 알려줘").
static REQUEST_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^(?:please\s+)?(?:(?:can|could)\s+you\s+)?(?:(?:give|show|tell|find|get)\s+me\s+)?(?:an?\s+|the\s+|some\s+)?(?:how\s+(?:do\s+i|to|can\s+i|should\s+i)\s+(?:make|cook|prepare)(?:\s+(?:it|this|that))?|recipes?(?:\s+(?:for|of))?|(?:만드는\s*(?:법|방법)|요리법|조리법|레시피)\s*(?:을|를)?\s*(?:좀\s*)?(?:알려\s*(?:줘|주세요|줄래))?)(?:\s+please)?$",
    )
});

/// Korean object/possessive particle glued to the end of the dish.
static TRAILING_PARTICLE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?:을|를|의)$"));

/// Extract the dish name from `utterance`.
///
/// Returns `None` when nothing usable remains, including a request that
/// names no dish.  An utterance that matches no request pattern is taken to
/// be the dish name itself.
///
/// ```rust
/// use recipe_guide::recipe::extract_dish_name;
///
/// assert_eq!(extract_dish_name("Tell me how to make kimchi stew").as_deref(), Some("kimchi stew"));
/// assert_eq!(extract_dish_name("김치찜 레시피를 알려줘").as_deref(), Some("김치찜"));
/// assert_eq!(extract_dish_name("   "), None);
/// ```
pub fn extract_dish_name(utterance: &str) -> Option<String> {
    let utterance = utterance.trim();
    if utterance.is_empty() {
        return None;
    }
    if REQUEST_ONLY.is_match(utterance.trim_end_matches(['.', '?', '!', ',']).trim_end()) {
        return None;
    }

    let candidate = DISH_PATTERNS
        .iter()
        .find_map(|re| re.captures(utterance).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .unwrap_or(utterance);

    let dish = clean(candidate);
    if dish.is_empty() {
        None
    } else {
        Some(dish)
    }
}

fn clean(candidate: &str) -> String {
    let trimmed = candidate.trim().trim_end_matches(['.', '?', '!', ',']).trim();
    let without_prefix = REQUEST_PREFIX.replace(trimmed, "");
    let without_particle = TRAILING_PARTICLE.replace(without_prefix.trim(), "");
    without_particle
        .trim()
        .trim_end_matches(" please")
        .trim()
        .to_string()
}
