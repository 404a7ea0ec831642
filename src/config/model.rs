//! Configuration data model.
//!
//! All structs derive `Deserialize` for reading the TOML config file.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Ring the terminal bell when a submission is rejected.
    #[serde(default)]
    pub bell_on_error: bool,
    /// Show key hints in the status bar.
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bell_on_error: false,
            show_help: true,
        }
    }
}

/// Settings for the insights shown after a cycle is added.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_true")]
    pub show_insights: bool,
    /// Days between predicted period starts. Zero disables predictions.
    #[serde(default = "default_cycle_length")]
    pub cycle_length_days: u32,
    #[serde(default = "default_predicted_cycles")]
    pub predicted_cycles: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            show_insights: true,
            cycle_length_days: default_cycle_length(),
            predicted_cycles: default_predicted_cycles(),
        }
    }
}

/// Diagnostic log settings. The TUI owns the terminal, so logs go to a file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_cycle_length() -> u32 {
    28
}
fn default_predicted_cycles() -> usize {
    2
}
fn default_log_dir() -> String {
    "~/.local/share/cycletrack/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
