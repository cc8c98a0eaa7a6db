//! Presentation layer with screens, widgets and event handling.

/// Event handling.
pub mod events;
/// Accent-derived colors.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
