mod dialog_port;
mod haptic_port;

pub use dialog_port::DialogPort;
pub use haptic_port::{HapticKind, HapticPort};
