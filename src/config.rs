//! CLI configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_SCENE_PATH: &str = "scene.json";
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scene_path: PathBuf,
    pub dry_run: bool,
    pub output: OutputFormat,
    pub log_level: tracing::Level,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `NODETAG_SCENE`: scene file path, default `scene.json`
    /// - `NODETAG_DRY_RUN`: `1`/`true`/`yes` or `0`/`false`/`no`, default false
    /// - `NODETAG_OUTPUT`: `text` (default) or `json`
    /// - `NODETAG_LOG`: `error`, `warn` (default), `info`, `debug` or `trace`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let scene_path = lookup("NODETAG_SCENE")
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SCENE_PATH), PathBuf::from);
        let dry_run = parse_bool("NODETAG_DRY_RUN", lookup("NODETAG_DRY_RUN").as_deref(), false)?;
        let output = parse_output(lookup("NODETAG_OUTPUT").as_deref())?;
        let log_level = parse_log_level(lookup("NODETAG_LOG").as_deref())?;

        Ok(Self { scene_path, dry_run, output, log_level })
    }

    /// Apply command-line flags on top of the environment. A flag that was
    /// not given leaves the environment value in place; `--dry-run` can only
    /// turn dry runs on.
    #[must_use]
    pub fn with_overrides(
        mut self,
        scene_path: Option<PathBuf>,
        dry_run: bool,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = scene_path {
            self.scene_path = path;
        }
        self.dry_run |= dry_run;
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

/// Trimmed value of a variable, with blank treated as unset.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_owned(),
            expected: "a boolean",
        }),
    }
}

fn parse_output(raw: Option<&str>) -> Result<OutputFormat, ConfigError> {
    match non_blank(raw).unwrap_or("text") {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ConfigError::Invalid {
            var: "NODETAG_OUTPUT",
            value: other.to_owned(),
            expected: "'text' or 'json'",
        }),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<tracing::Level, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    raw.parse().map_err(|_| ConfigError::Invalid {
        var: "NODETAG_LOG",
        value: raw.to_owned(),
        expected: "a log level",
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
