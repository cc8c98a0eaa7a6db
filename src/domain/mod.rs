//! Domain layer with the login state machine, entities and port definitions.

/// Dialog value type.
pub mod dialog;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Validation and the login reducer.
pub mod services;

pub use dialog::Dialog;
pub use entities::{Credentials, FocusedField, LoginAcknowledgement, LoginFormState, SubmissionId};
pub use errors::ValidationError;
pub use ports::{DialogPort, HapticKind, HapticPort};
