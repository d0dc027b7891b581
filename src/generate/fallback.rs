//! Sentinel generator. Wraps any [`RecipeGenerator`] and turns errors into
//! the prefixed failure string downstream code checks for.
//!
//! When the wrapped call fails for any reason, [`SentinelGenerator`] returns
//! `"Error: <message>"` (or `"오류: <message>"` for Korean) instead of an
//! `Err`.  The recipe parser recognises that prefix and yields an empty
//! recipe, so a generator outage surfaces as a spoken apology.

use async_trait::async_trait;

use crate::config::Language;
use crate::generate::generator::{GenerateError, RecipeGenerator};

/// A wrapper around any [`RecipeGenerator`] that never returns an error.
///
/// # Example
/// ```rust
/// use recipe_guide::config::{GeneratorConfig, Language};
/// use recipe_guide::generate::{ApiGenerator, SentinelGenerator};
///
/// let inner = ApiGenerator::from_config(&GeneratorConfig::default(), Language::English);
/// let generator = SentinelGenerator::new(inner, Language::English);
/// // `generator` now implements RecipeGenerator and reports failures in-band.
/// ```
pub struct SentinelGenerator<G: RecipeGenerator> {
    inner: G,
    language: Language,
}

impl<G: RecipeGenerator> SentinelGenerator<G> {
    pub fn new(inner: G, language: Language) -> Self {
        Self { inner, language }
    }
}

#[async_trait]
impl<G: RecipeGenerator> RecipeGenerator for SentinelGenerator<G> {
    /// This implementation **never** returns `Err(_)`.
    async fn generate(&self, dish: &str) -> Result<String, GenerateError> {
        match self.inner.generate(dish).await {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!("generator: request for {dish:?} failed: {err}");
                Ok(err.to_sentinel(self.language))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::is_failed_generation;

    struct AlwaysOk(String);

    #[async_trait]
    impl RecipeGenerator for AlwaysOk {
        async fn generate(&self, _dish: &str) -> Result<String, GenerateError> {
            Ok(self.0.clone())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl RecipeGenerator for AlwaysFails {
        async fn generate(&self, _dish: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Request("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn passes_through_success() {
        let generator = SentinelGenerator::new(AlwaysOk("【Steps】:\n1. Eat.".into()), Language::English);
        assert_eq!(generator.generate("x").await.unwrap(), "【Steps】:\n1. Eat.");
    }

    #[tokio::test]
    async fn failure_becomes_english_sentinel() {
        let generator = SentinelGenerator::new(AlwaysFails, Language::English);
        let text = generator.generate("x").await.unwrap();
        assert_eq!(text, "Error: HTTP request failed: connection refused");
        assert!(is_failed_generation(&text));
    }

    #[tokio::test]
    async fn failure_becomes_korean_sentinel() {
        let generator = SentinelGenerator::new(AlwaysFails, Language::Korean);
        let text = generator.generate("x").await.unwrap();
        assert!(text.starts_with("오류: "));
        assert!(is_failed_generation(&text));
    }

    #[test]
    fn sentinel_generator_is_object_safe() {
        let _: Box<dyn RecipeGenerator> =
            Box::new(SentinelGenerator::new(AlwaysOk("ok".into()), Language::English));
    }
}
