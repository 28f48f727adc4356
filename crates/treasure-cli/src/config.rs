//! Runner configuration, read from the environment.

use crate::error::ConfigError;

/// Whether narrative delays are slept or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep on the tokio timer.
    Real,
    /// Print the whole story at once.
    Off,
}

/// How the story is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Entries are printed as they happen, then a summary.
    Text,
    /// The full run result is printed as JSON at the end.
    Json,
}

/// Format of the diagnostic log on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Plain,
    /// One JSON object per event.
    Json,
}

/// Settings for one invocation of the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// `TREASURE_PACING`: `real` (default) or `off`.
    pub pacing: Pacing,
    /// `TREASURE_PACING_SCALE`: speed-up factor for real pacing (default 1).
    pub pacing_scale: f64,
    /// `TREASURE_SEED`: fixed RNG seed for a reproducible run.
    pub seed: Option<u64>,
    /// `TREASURE_OUTPUT`: `text` (default) or `json`.
    pub output: OutputFormat,
    /// `TREASURE_LOG_FORMAT`: `plain` (default) or `json`.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::Real,
            pacing_scale: 1.0,
            seed: None,
            output: OutputFormat::Text,
            log_format: LogFormat::Plain,
        }
    }
}

impl CliConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`; unset variables take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable holds an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let pacing = match lookup("TREASURE_PACING").as_deref() {
            None | Some("real") => Pacing::Real,
            Some("off") => Pacing::Off,
            Some(other) => {
                return Err(ConfigError::new("TREASURE_PACING", other, "expected real or off"));
            }
        };

        let pacing_scale = match lookup("TREASURE_PACING_SCALE") {
            None => defaults.pacing_scale,
            Some(raw) => match raw.parse::<f64>() {
                Ok(scale) if scale.is_finite() && scale > 0.0 => scale,
                _ => {
                    return Err(ConfigError::new(
                        "TREASURE_PACING_SCALE",
                        raw,
                        "expected a positive number",
                    ));
                }
            },
        };

        let seed = lookup("TREASURE_SEED")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::new("TREASURE_SEED", raw.as_str(), format!("expected a u64: {e}"))
                })
            })
            .transpose()?;

        let output = match lookup("TREASURE_OUTPUT").as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(ConfigError::new("TREASURE_OUTPUT", other, "expected text or json"));
            }
        };

        let log_format = match lookup("TREASURE_LOG_FORMAT").as_deref() {
            None | Some("plain") => LogFormat::Plain,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::new(
                    "TREASURE_LOG_FORMAT",
                    other,
                    "expected plain or json",
                ));
            }
        };

        Ok(Self {
            pacing,
            pacing_scale,
            seed,
            output,
            log_format,
        })
    }
}
