//! Structured-recipe parsing.
//!
//! This module provides:
//! * [`Recipe`]: the parsed record and its JSON boundary.
//! * [`SectionExtractor`] / [`Section`] / [`MarkerStyle`]: labeled block lookup
//!   over both heading dialects.
//! * [`split_bulleted`] / [`split_numbered`]: block → list items.
//! * [`RecipeParser`]: raw generated text → [`Recipe`] with sentinel fallbacks.
//! * [`extract_dish_name`]: spoken request → dish name for the generator.
//!
//! # Quick start
//!
//! ```rust
//! use recipe_guide::recipe::{extract_dish_name, RecipeParser};
//!
//! let dish = extract_dish_name("tell me how to make toast").unwrap();
//! let raw = "【Dish Name】: Toast\n【Steps】:\n1. Toast the bread.\n2. Butter it.";
//!
//! let recipe = RecipeParser::new().parse(raw, &dish);
//! assert_eq!(recipe.dish_name, "Toast");
//! assert_eq!(recipe.steps.len(), 2);
//! ```

pub mod list;
pub mod model;
pub mod parser;
pub mod query;
pub mod section;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use list::{split_bulleted, split_numbered};
pub use model::{is_no_tips, is_unknown, Recipe, NO_TIPS_SENTINEL, UNKNOWN_SENTINEL};
pub use parser::{is_failed_generation, ParsedRecipe, RecipeParser, ERROR_SENTINELS};
pub use query::extract_dish_name;
pub use section::{MarkerStyle, Section, SectionExtractor};
