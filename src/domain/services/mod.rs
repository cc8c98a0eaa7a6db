//! Pure domain logic.

pub mod credential_validator;
pub mod login_reducer;

pub use credential_validator::{is_valid_email, validate};
pub use login_reducer::{LoginEffect, LoginEvent, Transition, reduce};
