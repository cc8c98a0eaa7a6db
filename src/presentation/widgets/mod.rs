mod button;
mod input;
mod input_field;
mod status_bar;

pub use button::{ButtonStyle, CustomButton, PRESS_FEEDBACK};
pub use input::{AutoCapitalize, TextInput};
pub use input_field::{InputField, InputFieldStyle};
pub use status_bar::{StatusBar, StatusLevel};
