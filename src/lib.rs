//! Onboard - A terminal onboarding flow.
//!
//! Splash, welcome and login screens with local form state, email
//! validation and a simulated sign-in, laid out in clean architecture
//! layers on top of a ratatui interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, ports and the login state machine.
pub mod domain;
/// Infrastructure layer containing configuration and platform adapters.
pub mod infrastructure;
/// Presentation layer containing screens, widgets and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "onboard";
