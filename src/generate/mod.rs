//! Recipe text generation.
//!
//! This module provides:
//! * [`RecipeGenerator`]: async trait implemented by all generator backends.
//! * [`ApiGenerator`]: Gemini or OpenAI-compatible REST generator.
//! * [`SentinelGenerator`]: wraps any generator; reports failures as
//!   `"Error: …"` / `"오류: …"` text instead of `Err`.
//! * [`PromptBuilder`]: builds the English and Korean recipe prompts.
//! * [`GenerateError`]: error variants for generation.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use recipe_guide::config::AppConfig;
//! use recipe_guide::generate::{ApiGenerator, RecipeGenerator, SentinelGenerator};
//! use recipe_guide::recipe::RecipeParser;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let generator = SentinelGenerator::new(
//!         ApiGenerator::from_config(&config.generator, config.language),
//!         config.language,
//!     );
//!
//!     let raw = generator.generate("bibimbap").await.unwrap();
//!     let recipe = RecipeParser::new().parse(&raw, "bibimbap");
//!     println!("{} steps", recipe.steps.len());
//! }
//! ```

pub mod fallback;
pub mod generator;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use fallback::SentinelGenerator;
pub use generator::{ApiGenerator, GenerateError, RecipeGenerator};
pub use prompt::PromptBuilder;
