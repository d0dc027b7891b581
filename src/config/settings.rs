//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and handed to the
//! collaborator constructors.  Nothing in the library reads the process
//! environment; `main` fills in whatever the command line provides.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Conversation language: selects narration wording, the generation prompt
/// template and the failure sentinel prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
}

impl Language {
    /// ISO-639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    /// Prefix the generator puts in front of a failure message.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Language::English => "Error",
            Language::Korean => "오류",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ko" | "korean" | "한국어" => Ok(Language::Korean),
            other => Err(format!("unsupported language '{other}' (expected 'en' or 'ko')")),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorProvider
// ---------------------------------------------------------------------------

/// Selects which text-generation backend produces the raw recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorProvider {
    /// Google Gemini `generateContent` REST API.
    Gemini,
    /// Any OpenAI-compatible `/v1/chat/completions` endpoint.
    OpenAiCompatible,
    /// Generation disabled; only local recipe files can be guided.
    Disabled,
}

impl Default for GeneratorProvider {
    fn default() -> Self {
        Self::Gemini
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Settings for the recipe text generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Which backend to use.
    pub provider: GeneratorProvider,
    /// Base URL of the API endpoint (no trailing path).
    pub base_url: String,
    /// API key.  `None` or empty means "not configured".
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Maximum seconds to wait for a response before timing out.
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: GeneratorProvider::default(),
            base_url: "https://generativelanguage.googleapis.com".into(),
            api_key: None,
            model: "gemini-1.5-pro-latest".into(),
            temperature: 0.4,
            max_output_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

impl GeneratorConfig {
    /// The API key when it is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

// ---------------------------------------------------------------------------
// ListenConfig
// ---------------------------------------------------------------------------

/// How long to wait for each kind of spoken reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Waiting for the dish request.
    pub dish_timeout_secs: u64,
    /// Waiting for "start" before the first step.
    pub ready_timeout_secs: u64,
    /// Waiting for a navigation command.
    pub command_timeout_secs: u64,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            dish_timeout_secs: 15,
            ready_timeout_secs: 20,
            command_timeout_secs: 25,
        }
    }
}

impl ListenConfig {
    pub fn dish_timeout(&self) -> Duration {
        Duration::from_secs(self.dish_timeout_secs)
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Conversation behaviour of the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Speak the command menu before every command prompt.
    pub announce_commands: bool,
    /// Read out ingredients and tools before the first step.
    pub announce_overview: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            announce_commands: true,
            announce_overview: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use recipe_guide::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Conversation language.
    pub language: Language,
    /// Recipe generator settings.
    pub generator: GeneratorConfig,
    /// Listening timeouts.
    pub listen: ListenConfig,
    /// Guide behaviour.
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
