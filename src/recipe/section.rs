//! Section headings and block extraction.
//!
//! Generated recipes arrive in one of two heading dialects depending on the
//! prompt template that produced them:
//!
//! ```text
//! Bracket:  【Ingredients】:          Bold:  **재료:**
//!           - Pork (300g)                    - 돼지고기 300g
//! ```
//!
//! Both dialects describe the same schema, so each [`Section`] carries its
//! bilingual labels and each [`MarkerStyle`] knows how to decorate a label.
//! The heading patterns are compiled once for every (section, style) pair.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One labeled block of a generated recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    DishName,
    TotalTime,
    Ingredients,
    Tools,
    Steps,
    Tips,
}

impl Section {
    /// All sections in the order the generation prompt lays them out.
    pub const ALL: [Section; 6] = [
        Section::DishName,
        Section::TotalTime,
        Section::Ingredients,
        Section::Tools,
        Section::Steps,
        Section::Tips,
    ];

    /// Heading labels accepted for this section, English first.
    ///
    /// Matching is case-insensitive; runs of spaces inside a label match any
    /// amount of horizontal whitespace.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Section::DishName => &["dish name", "요리 이름", "요리명"],
            Section::TotalTime => &["total time", "전체 소요 시간", "소요 시간"],
            Section::Ingredients => &["ingredients", "재료"],
            Section::Tools => &["tools", "필요한 도구", "도구"],
            Section::Steps => &["steps", "만드는 단계", "조리 단계"],
            Section::Tips => &["tips", "팁"],
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Section::DishName => "dish_name",
            Section::TotalTime => "total_time",
            Section::Ingredients => "ingredients",
            Section::Tools => "tools",
            Section::Steps => "steps",
            Section::Tips => "tips",
        }
    }

    /// Every section except `self`, in prompt order.
    pub fn others(self) -> Vec<Section> {
        Section::ALL.into_iter().filter(|s| *s != self).collect()
    }
}

// ---------------------------------------------------------------------------
// MarkerStyle
// ---------------------------------------------------------------------------

/// Decoration placed around a section label by a prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// `【Label】:` with an optional parenthetical before the colon.
    Bracket,
    /// `**Label:**` or `**Label**:`.
    Bold,
}

impl MarkerStyle {
    /// Styles in the order they are tried.
    pub const ALL: [MarkerStyle; 2] = [MarkerStyle::Bracket, MarkerStyle::Bold];

    /// Regex source for a heading line carrying one of `labels`.
    ///
    /// The match covers the whole decoration including the trailing colon and
    /// following horizontal whitespace, so the block starts right after it.
    fn heading_pattern(self, labels: &[&str]) -> String {
        let alternation = labels
            .iter()
            .map(|label| regex::escape(label).replace(' ', r"[ \t]+"))
            .collect::<Vec<_>>()
            .join("|");

        // Optional markdown heading hashes before the marker.
        let lead = r"(?im)^[ \t]*(?:#+[ \t]*)?";
        let note = r"(?:[ \t]*\([^)\n]*\))?";

        match self {
            MarkerStyle::Bracket => {
                format!(r"{lead}【[ \t]*(?:{alternation})[ \t]*】{note}[ \t]*:?[ \t]*")
            }
            MarkerStyle::Bold => {
                format!(r"{lead}\*\*[ \t]*(?:{alternation})[ \t]*:?[ \t]*\*\*{note}[ \t]*:?[ \t]*")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled heading table
// ---------------------------------------------------------------------------

struct HeadingPattern {
    section: Section,
    style: MarkerStyle,
    regex: Regex,
}

static HEADINGS: LazyLock<Vec<HeadingPattern>> = LazyLock::new(|| {
    Section::ALL
        .into_iter()
        .flat_map(|section| {
            MarkerStyle::ALL.into_iter().map(move |style| HeadingPattern {
                section,
                style,
                regex: Regex::new(&style.heading_pattern(section.labels()))
                    .expect("section heading pattern must compile"),
            })
        })
        .collect()
});

// ---------------------------------------------------------------------------
// SectionExtractor
// ---------------------------------------------------------------------------

/// Locates labeled blocks inside raw recipe text.
///
/// # Example
/// ```rust
/// use recipe_guide::recipe::{Section, SectionExtractor};
///
/// let text = "【Tools】:\n- Pot\n\n【Steps】:\n1. Boil water.";
/// let extractor = SectionExtractor::new();
/// let tools = extractor.extract(text, Section::Tools, &[Section::Steps]);
/// assert_eq!(tools, Some("- Pot"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Byte range of the first heading for `section` at or after `from`.
    ///
    /// Every [`MarkerStyle`] is tried in order; the earliest heading in the
    /// text wins and ties go to the style tried first.
    pub fn find_heading(&self, text: &str, section: Section, from: usize) -> Option<Range<usize>> {
        if from > text.len() {
            return None;
        }

        HEADINGS
            .iter()
            .filter(|h| h.section == section)
            .filter_map(|h| h.regex.find_at(text, from).map(|m| (m.range(), h.style)))
            .min_by_key(|(range, style)| {
                let rank = MarkerStyle::ALL.iter().position(|s| s == style);
                (range.start, rank)
            })
            .map(|(range, _)| range)
    }

    /// The block between the first `section` heading and the first heading of
    /// any section in `following`, or the end of the text.
    ///
    /// A later heading for `section` itself also ends the block, so a
    /// repeated heading never spills into the first one.  Returns `None` when
    /// the heading does not occur at all; a present but empty block yields
    /// `Some("")`.  The block is trimmed.
    pub fn extract<'t>(
        &self,
        text: &'t str,
        section: Section,
        following: &[Section],
    ) -> Option<&'t str> {
        let heading = self.find_heading(text, section, 0)?;
        let start = heading.end;

        let end = std::iter::once(&section)
            .chain(following)
            .filter_map(|next| self.find_heading(text, *next, start))
            .map(|range| range.start)
            .min()
            .unwrap_or(text.len());

        Some(text[start..end].trim())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BRACKET: &str = "\
【Dish Name】: Kimchi Stew

【Total Time】: 40 minutes

【Ingredients】:
- Kimchi (300g)
- Pork (200g)

【Tools】:
- Pot

【Steps】:
1. Fry the pork.
2. Add kimchi.

【Tips】 (optional; if none, write \"No special tips\"):
- Use sour kimchi.";

    const BOLD: &str = "\
**요리 이름:** 김치찌개
**전체 소요 시간:** 40분
**재료:**
- 김치 300g
**필요한 도구:**
- 냄비
**만드는 단계:**
1. 돼지고기를 볶는다.
**팁:**
신 김치를 쓰세요.";

    #[test]
    fn extracts_bracket_block_up_to_next_heading() {
        let ex = SectionExtractor::new();
        let block = ex
            .extract(BRACKET, Section::Ingredients, &Section::Ingredients.others())
            .unwrap();
        assert_eq!(block, "- Kimchi (300g)\n- Pork (200g)");
    }

    #[test]
    fn extracts_inline_value() {
        let ex = SectionExtractor::new();
        let block = ex
            .extract(BRACKET, Section::DishName, &Section::DishName.others())
            .unwrap();
        assert_eq!(block, "Kimchi Stew");
    }

    #[test]
    fn bracket_heading_tolerates_parenthetical_note() {
        let ex = SectionExtractor::new();
        let block = ex.extract(BRACKET, Section::Tips, &[]).unwrap();
        assert_eq!(block, "- Use sour kimchi.");
    }

    #[test]
    fn extracts_bold_korean_blocks() {
        let ex = SectionExtractor::new();
        assert_eq!(
            ex.extract(BOLD, Section::Tools, &Section::Tools.others()),
            Some("- 냄비")
        );
        assert_eq!(
            ex.extract(BOLD, Section::TotalTime, &Section::TotalTime.others()),
            Some("40분")
        );
        assert_eq!(ex.extract(BOLD, Section::Tips, &[]), Some("신 김치를 쓰세요."));
    }

    #[test]
    fn bold_heading_with_colon_outside_markers() {
        let ex = SectionExtractor::new();
        let text = "**Ingredients**:\n- salt\n**Steps**:\n1. mix";
        assert_eq!(
            ex.extract(text, Section::Ingredients, &[Section::Steps]),
            Some("- salt")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let ex = SectionExtractor::new();
        let text = "【INGREDIENTS】:\n- egg\n【tools】:\n- pan";
        assert_eq!(
            ex.extract(text, Section::Ingredients, &[Section::Tools]),
            Some("- egg")
        );
    }

    #[test]
    fn missing_heading_is_none() {
        let ex = SectionExtractor::new();
        assert_eq!(ex.extract("just some prose", Section::Steps, &[]), None);
    }

    #[test]
    fn present_but_empty_block_is_some_empty() {
        let ex = SectionExtractor::new();
        let text = "【Tools】:\n\n【Steps】:\n1. go";
        assert_eq!(ex.extract(text, Section::Tools, &[Section::Steps]), Some(""));
    }

    #[test]
    fn first_occurrence_wins() {
        let ex = SectionExtractor::new();
        let text = "【Tips】:\nfirst\n【Tools】:\n- pot\n【Tips】:\nsecond";
        assert_eq!(ex.extract(text, Section::Tips, &[Section::Tools]), Some("first"));
    }

    #[test]
    fn repeated_heading_ends_the_first_block() {
        let ex = SectionExtractor::new();
        let text = "【Steps】:\n1. a\n2. b\n【Steps】:\n1. z";
        assert_eq!(ex.extract(text, Section::Steps, &[Section::Tips]), Some("1. a\n2. b"));

        let text = "**팁:**\n첫 번째 팁\n**팁:**\n두 번째 팁";
        assert_eq!(ex.extract(text, Section::Tips, &[]), Some("첫 번째 팁"));
    }

    #[test]
    fn block_runs_to_end_without_following_heading() {
        let ex = SectionExtractor::new();
        let text = "【Steps】:\n1. a\n2. b\n";
        assert_eq!(ex.extract(text, Section::Steps, &[Section::Tips]), Some("1. a\n2. b"));
    }

    #[test]
    fn boundary_is_next_present_section() {
        // Tools is absent; ingredients must stop at steps.
        let ex = SectionExtractor::new();
        let text = "【Ingredients】:\n- egg\n【Steps】:\n1. crack";
        assert_eq!(
            ex.extract(text, Section::Ingredients, &[Section::Tools, Section::Steps]),
            Some("- egg")
        );
    }

    #[test]
    fn label_inside_prose_is_not_a_heading() {
        let ex = SectionExtractor::new();
        let text = "Gather the ingredients: flour and eggs.";
        assert_eq!(ex.find_heading(text, Section::Ingredients, 0), None);
    }

    #[test]
    fn markdown_hashes_before_marker_are_allowed() {
        let ex = SectionExtractor::new();
        let text = "## **Steps:**\n1. stir";
        assert_eq!(ex.extract(text, Section::Steps, &[]), Some("1. stir"));
    }

    #[test]
    fn others_excludes_self() {
        let others = Section::Tools.others();
        assert_eq!(others.len(), 5);
        assert!(!others.contains(&Section::Tools));
    }
}
