use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The `logging` section of the groupie config.
///
/// `RUST_LOG` still overrides `level` at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, one of trace/debug/info/warn/error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Stdout format. File output is always JSON.
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory receiving `groupie.log`. Unset means stdout only.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Also log to stdout when a log directory is set.
    #[serde(default = "default_true")]
    pub enable_stdout: bool,

    /// How often `groupie.log` rolls over.
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
            enable_stdout: true,
            rotation: RotationPolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Json
}

const fn default_true() -> bool {
    true
}
