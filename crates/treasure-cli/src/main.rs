//! Treasure hunt terminal runner entry point.

use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use treasure_cli::config::{CliConfig, LogFormat, OutputFormat, Pacing};
use treasure_cli::error::AppError;
use treasure_cli::render;
use treasure_core::clock::SystemClock;
use treasure_core::pacing::{NoPacer, Pacer, TokioPacer};
use treasure_core::rng::{DeterministicRng, SystemRng};
use treasure_core::story::StoryEntry;
use treasure_narrative::application::engine::NarrativeEngine;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Plain => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = CliConfig::from_env().map_err(AppError::from)?;
    init_tracing(config.log_format);

    tracing::info!(?config, "Starting treasure hunt");

    let rng: Box<dyn DeterministicRng> = match config.seed {
        Some(seed) => Box::new(SystemRng::seeded(seed)),
        None => Box::new(SystemRng::from_entropy()),
    };
    let pacer: Arc<dyn Pacer> = match config.pacing {
        Pacing::Real => Arc::new(TokioPacer::with_speed(config.pacing_scale)),
        Pacing::Off => Arc::new(NoPacer),
    };
    let mut engine = NarrativeEngine::new(Arc::new(SystemClock), rng, pacer);

    // Render entries progressively while the run is paced.
    let (tx, mut rx) = mpsc::unbounded_channel::<StoryEntry>();
    if config.output == OutputFormat::Text {
        engine = engine.with_listener(Arc::new(tx));
    } else {
        drop(tx);
    }
    let printer = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while let Some(entry) = rx.recv().await {
            render::write_entry(&mut stdout, &entry)?;
            stdout.flush()?;
        }
        Ok::<(), io::Error>(())
    });

    let result = engine.run_adventure().await;
    // Dropping the engine closes the channel so the printer drains and exits.
    drop(engine);
    printer.await?.map_err(AppError::from)?;

    let mut stdout = io::stdout();
    match config.output {
        OutputFormat::Text => render::write_summary(&mut stdout, &result).map_err(AppError::from)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(AppError::from)?;
            writeln!(stdout, "{json}").map_err(AppError::from)?;
        }
    }

    tracing::info!(success = result.success, final_stage = result.final_stage, "Treasure hunt finished");

    Ok(())
}
