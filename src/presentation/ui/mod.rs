//! UI screens.

mod app;
mod dialog_popup;
mod login_screen;
mod router;
pub mod splash_screen;
mod utils;
mod welcome_screen;

pub use app::App;
pub use dialog_popup::DialogPopup;
pub use login_screen::{LoginAction, LoginFocus, LoginScreen};
pub use router::{MountId, Route, Router, Screen};
pub use splash_screen::SplashScreen;
pub use welcome_screen::{WelcomeAction, WelcomeFocus, WelcomeScreen};
