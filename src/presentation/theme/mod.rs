//! Accent-derived colors and gradients.

mod adapter;
mod service;

pub use adapter::{ColorConverter, gradient_at};
pub use service::Theme;
