//! Two-route navigation stack.

use std::fmt;

use tracing::info;
use uuid::Uuid;

use super::{LoginScreen, WelcomeScreen};
use crate::presentation::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Login,
}

impl Route {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Login => "login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one mounted screen instance. A route pushed twice gets two ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(Uuid);

impl MountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub enum Screen {
    Welcome(WelcomeScreen),
    Login(Box<LoginScreen>),
}

struct Mounted {
    id: MountId,
    route: Route,
    screen: Screen,
}

/// Stack of mounted screens. The root `welcome` entry is never popped.
pub struct Router {
    root: Mounted,
    stack: Vec<Mounted>,
    theme: Theme,
    animations: bool,
}

impl Router {
    #[must_use]
    pub fn new(theme: Theme, animations: bool) -> Self {
        let root = Self::mount(Route::Welcome, theme, animations);
        info!(route = %root.route, mount = %root.id, "Mounted initial route");
        Self {
            root,
            stack: Vec::new(),
            theme,
            animations,
        }
    }

    fn mount(route: Route, theme: Theme, animations: bool) -> Mounted {
        let screen = match route {
            Route::Welcome => Screen::Welcome(WelcomeScreen::new(theme, animations)),
            Route::Login => Screen::Login(Box::new(LoginScreen::new(theme, animations))),
        };
        Mounted {
            id: MountId::new(),
            route,
            screen,
        }
    }

    fn top(&self) -> &Mounted {
        self.stack.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Mounted {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Pushes `route` unless it is already on top. Returns the current mount.
    pub fn navigate(&mut self, route: Route) -> MountId {
        if self.current_route() == route {
            return self.current_mount();
        }
        let mounted = Self::mount(route, self.theme, self.animations);
        let id = mounted.id;
        self.stack.push(mounted);
        info!(to = %route, mount = %id, depth = self.depth(), "Navigated");
        id
    }

    /// Pops the top screen, dropping it. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(popped) => {
                info!(
                    route = %popped.route,
                    mount = %popped.id,
                    to = %self.current_route(),
                    depth = self.depth(),
                    "Unmounted route"
                );
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        self.top().route
    }

    #[must_use]
    pub fn current_mount(&self) -> MountId {
        self.top().id
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        &mut self.top_mut().screen
    }

    /// The login screen for `mount`, if that mount is still on top.
    pub fn login_mut(&mut self, mount: MountId) -> Option<&mut LoginScreen> {
        let top = self.top_mut();
        if top.id != mount {
            return None;
        }
        match &mut top.screen {
            Screen::Login(login) => Some(login.as_mut()),
            Screen::Welcome(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(Theme::default(), false)
    }

    #[test]
    fn test_starts_at_welcome() {
        let router = router();
        assert_eq!(router.current_route(), Route::Welcome);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = router();
        let login = router.navigate(Route::Login);
        assert_eq!(router.current_route(), Route::Login);
        assert_eq!(router.current_mount(), login);

        assert!(router.back());
        assert_eq!(router.current_route(), Route::Welcome);
        assert!(!router.back());
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let mut router = router();
        let first = router.navigate(Route::Login);
        assert_eq!(router.navigate(Route::Login), first);
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_remount_gets_new_id() {
        let mut router = router();
        let first = router.navigate(Route::Login);
        router.back();
        let second = router.navigate(Route::Login);
        assert_ne!(first, second);
        assert!(router.login_mut(first).is_none());
        assert!(router.login_mut(second).is_some());
    }
}
