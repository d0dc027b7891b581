//! Application entry point for the voice-guided recipe assistant.
//!
//! # Startup sequence
//!
//! 1. Parse the command line.
//! 2. Initialise logging.
//! 3. Load [`AppConfig`] from disk (returns default on first run) and apply
//!    command-line overrides.
//! 4. Build the recipe generator ([`ApiGenerator`] behind a
//!    [`SentinelGenerator`]).
//! 5. Create the [`tokio`] runtime.
//! 6. Either print the parsed recipe as JSON (`--json`) or run the spoken
//!    guide over stdin/stdout until the session ends.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use recipe_guide::{
    config::{AppConfig, AppPaths, Language},
    generate::{ApiGenerator, RecipeGenerator, SentinelGenerator},
    recipe::{is_failed_generation, RecipeParser},
    session::{GuideRunner, SessionOutcome},
    voice::{ConsoleNarrator, LineTranscriptSource},
};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Step-by-step cooking guide driven by short spoken (or typed) commands.
#[derive(Debug, Parser)]
#[command(name = "recipe-guide", version, about)]
struct Args {
    /// Settings file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Conversation language: `en` or `ko`.
    #[arg(long, value_name = "LANG")]
    language: Option<Language>,

    /// Dish to cook; skips the spoken dish question.
    #[arg(long)]
    dish: Option<String>,

    /// Read raw recipe text from a file instead of calling the generator.
    #[arg(long, value_name = "PATH")]
    recipe_file: Option<PathBuf>,

    /// Print the parsed recipe as JSON and exit.
    #[arg(long)]
    json: bool,

    /// Write the effective settings to the settings file and exit.
    #[arg(long)]
    init_config: bool,

    /// Generator API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Logging (RUST_LOG overrides the default level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Configuration
    let settings_file = args
        .config
        .clone()
        .unwrap_or_else(|| AppPaths::new().settings_file);
    let mut config = AppConfig::load_from(&settings_file)
        .with_context(|| format!("loading settings from {}", settings_file.display()))?;

    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(key) = args.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        config.generator.api_key = Some(key.to_string());
    }

    log::info!(
        "recipe-guide starting (language = {}, settings = {})",
        config.language.code(),
        settings_file.display()
    );

    if args.init_config {
        // Never persist a key that only came from the environment.
        let mut to_save = config.clone();
        if args.api_key.is_some() {
            to_save.generator.api_key = AppConfig::load_from(&settings_file)?.generator.api_key;
        }
        to_save.save_to(&settings_file)?;
        println!("Settings written to {}", settings_file.display());
        return Ok(());
    }

    // 3. Generator
    let generator: Arc<dyn RecipeGenerator> = Arc::new(SentinelGenerator::new(
        ApiGenerator::from_config(&config.generator, config.language),
        config.language,
    ));

    // 4. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    if args.json {
        return rt.block_on(print_json(&args, generator));
    }

    // 5. Spoken guide
    let runner = GuideRunner::new(
        &config,
        generator,
        Arc::new(LineTranscriptSource::stdin()),
        Arc::new(ConsoleNarrator::new()),
    );

    let outcome = rt.block_on(guide(&args, &runner))?;

    log::info!("recipe-guide finished: {:?}", outcome);

    match outcome {
        SessionOutcome::Finished { .. } => Ok(()),
        SessionOutcome::NoDish => bail!("no dish name was heard"),
        SessionOutcome::UpstreamFailure(detail) => bail!("recipe generation failed: {detail}"),
        SessionOutcome::NoSteps => bail!("the recipe has no steps to guide through"),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn guide(args: &Args, runner: &GuideRunner) -> Result<SessionOutcome> {
    let outcome = match (&args.recipe_file, &args.dish) {
        (Some(path), dish) => {
            let raw = read_recipe_file(path)?;
            let dish = dish.clone().unwrap_or_else(|| dish_from_path(path));
            runner.run_with_text(&dish, &raw).await
        }
        (None, Some(dish)) => runner.run_for_dish(dish).await,
        (None, None) => runner.run().await,
    };
    Ok(outcome)
}

/// `--json`: parse one recipe and print its JSON record.
async fn print_json(args: &Args, generator: Arc<dyn RecipeGenerator>) -> Result<()> {
    let (dish, raw) = match (&args.recipe_file, &args.dish) {
        (Some(path), dish) => {
            let dish = dish.clone().unwrap_or_else(|| dish_from_path(path));
            (dish, read_recipe_file(path)?)
        }
        (None, Some(dish)) => {
            let raw = generator.generate(dish).await?;
            (dish.clone(), raw)
        }
        (None, None) => bail!("--json needs --dish or --recipe-file"),
    };

    if is_failed_generation(&raw) {
        bail!("recipe generation failed: {}", raw.trim());
    }

    let parsed = RecipeParser::new().parse_detailed(&raw, &dish);
    if !parsed.is_complete() {
        log::warn!(
            "sections defaulted: {}",
            parsed
                .degraded
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!("{}", parsed.recipe.to_json()?);
    Ok(())
}

fn read_recipe_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading recipe from {}", path.display()))
}

fn dish_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}
