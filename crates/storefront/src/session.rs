//! Session state and the navigation boundary.
//!
//! The session marker is a single visited flag scoped to one application
//! run: the first entry shows the landing screen, every later entry in the
//! same session skips straight to the main view. It is deliberately not
//! persisted: a new session starts at the landing screen again.

use serde::{Deserialize, Serialize};

/// Application routes exposed to the presentation layer.
///
/// The storefront core never initiates navigation itself, with one
/// exception: a completed checkout hands back [`Route::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Landing,
    Home,
    Products,
    Offers,
    Cart,
    Profile,
    NotFound,
}

impl Route {
    /// The route's path, as the presentation layer addresses it.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Home => "/home",
            Self::Products => "/products",
            Self::Offers => "/offers",
            Self::Cart => "/cart",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Session-scoped state: the visited marker.
#[derive(Debug, Default)]
pub struct SessionState {
    visited: bool,
}

impl SessionState {
    /// A fresh session that has not seen the landing screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where to enter the application.
    ///
    /// The first call in a session returns [`Route::Landing`] and sets the
    /// visited marker; every later call returns [`Route::Home`].
    pub fn entry_route(&mut self) -> Route {
        if self.visited {
            Route::Home
        } else {
            self.visited = true;
            Route::Landing
        }
    }

    /// Whether this session has already passed the landing screen.
    #[must_use]
    pub const fn has_visited(&self) -> bool {
        self.visited
    }
}
