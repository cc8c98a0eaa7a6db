//! Domain entities and value objects.

mod credentials;
mod login_form;

pub use credentials::{Credentials, LoginAcknowledgement};
pub use login_form::{FocusedField, LoginFormState, SubmissionId};
