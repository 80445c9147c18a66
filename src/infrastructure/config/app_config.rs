//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::{ToastOptions, ToastPosition};

const APP_NAME: &str = "toastline";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "toastline";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Toast shown at startup.
    #[serde(skip)]
    pub startup_toast: Option<ToastOptions>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Toast rendering configuration.
    #[serde(default)]
    pub toast: ToastConfig,

    /// API error reporting configuration.
    #[serde(default)]
    pub errors: ErrorsConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Toast rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Animate toasts in and out.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Entry animation length in milliseconds.
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u32,

    /// Exit animation length in milliseconds.
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            fade_in_ms: default_fade_in_ms(),
            fade_out_ms: default_fade_out_ms(),
        }
    }
}

/// API error reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsConfig {
    /// Display time of error toasts in milliseconds.
    #[serde(default = "default_error_duration_ms")]
    pub duration_ms: u64,

    /// Edge error toasts are anchored to.
    #[serde(default)]
    pub position: ToastPosition,
}

impl ErrorsConfig {
    /// Returns the display time.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_error_duration_ms(),
            position: ToastPosition::Bottom,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fade_in_ms() -> u32 {
    300
}

fn default_fade_out_ms() -> u32 {
    400
}

fn default_error_duration_ms() -> u64 {
    4000
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.toast.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(content) = args.content {
            let mut options = ToastOptions::new(content);
            options.duration = args.duration;
            options.position = args.position;
            self.startup_toast = Some(options);
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("toastline.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            startup_toast: None,
            log_level: LogLevel::Info,
            toast: ToastConfig::default(),
            errors: ErrorsConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
