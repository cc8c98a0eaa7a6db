//! Infrastructure layer with adapters for the terminal and the desktop.

/// Application configuration.
pub mod config;
/// Terminal bell haptics.
pub mod haptics;
/// Desktop notifications.
pub mod notifications;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use haptics::TerminalHaptics;
pub use notifications::DesktopNotificationService;
