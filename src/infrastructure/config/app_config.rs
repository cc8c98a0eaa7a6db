//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(crate) const APP_NAME: &str = "onboard";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

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

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Login form configuration.
    #[serde(default)]
    pub login: LoginConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Haptic feedback configuration.
    #[serde(default)]
    pub haptics: HapticsConfig,

    /// Notification configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Login form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Simulated submit latency in milliseconds.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl LoginConfig {
    /// Returns the simulated latency.
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Play the splash sequence on startup.
    #[serde(default = "default_true")]
    pub show_splash: bool,

    /// Enable `TachyonFX` entrance effects and press feedback.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_splash: true,
            enable_animations: true,
        }
    }
}

/// Haptic feedback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// Enable feedback globally.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Also ring the bell when a submit is accepted.
    #[serde(default)]
    pub impact_bell: bool,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            impact_bell: false,
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Mirror dialogs as desktop notifications.
    #[serde(default)]
    pub desktop: bool,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "#2193b0".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1200
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

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
        if let Some(delay) = args.submit_delay_ms {
            self.login.submit_delay_ms = delay;
        }
        if let Some(show_splash) = args.show_splash {
            self.ui.show_splash = show_splash;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(haptics) = args.haptics {
            self.haptics.enabled = haptics;
        }
        if let Some(desktop) = args.desktop_notifications {
            self.notifications.desktop = desktop;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("onboard.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
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
            log_level: LogLevel::Info,
            login: LoginConfig::default(),
            ui: UiConfig::default(),
            haptics: HapticsConfig::default(),
            notifications: NotificationsConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
