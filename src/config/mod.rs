//! Application configuration: settings structs, TOML persistence and paths.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AppConfig, GeneratorConfig, GeneratorProvider, Language, ListenConfig, SessionConfig,
};
