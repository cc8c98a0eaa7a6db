use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "onboard",
    version,
    about = "A terminal onboarding flow: splash, welcome and login screens",
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

    /// Simulated login latency in milliseconds.
    #[arg(long, value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    /// Play the splash sequence on startup.
    #[arg(long)]
    pub show_splash: Option<bool>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Enable haptic feedback (terminal bell).
    #[arg(long)]
    pub haptics: Option<bool>,

    /// Mirror dialogs as desktop notifications.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "onboard",
            "--submit-delay-ms",
            "250",
            "--show-splash",
            "false",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.submit_delay_ms, Some(250));
        assert_eq!(args.show_splash, Some(false));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert!(args.config.is_none());
    }
}
