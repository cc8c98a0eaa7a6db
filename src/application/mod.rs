//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{SubmitRequest, SubmitResponse};
pub use services::{DeferredTask, DialogManager};
pub use use_cases::SubmitLoginUseCase;
