//! Voice-guided cooking assistant.
//!
//! Generated recipe text is parsed into a [`recipe::Recipe`], then walked
//! step by step with short spoken commands in English or Korean.

pub mod config;
pub mod generate;
pub mod intent;
pub mod recipe;
pub mod session;
pub mod voice;
