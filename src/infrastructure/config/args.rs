use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "toastline",
    version,
    about = "Transient, auto-dismissing toast notifications in the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Animate toasts in and out.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Content of a toast shown at startup.
    #[arg(long, value_name = "TEXT")]
    pub content: Option<String>,

    /// Display time of the startup toast in milliseconds.
    #[arg(long, value_name = "MS", requires = "content")]
    pub duration: Option<f64>,

    /// Edge of the startup toast (top or bottom).
    #[arg(long, requires = "content")]
    pub position: Option<String>,
}
