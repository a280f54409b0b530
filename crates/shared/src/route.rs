//! Client-side navigation targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    Explore,
    Requests,
    Chat,
    Profile,
    Login,
    Signup,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Dashboard,
        Route::Explore,
        Route::Requests,
        Route::Chat,
        Route::Profile,
        Route::Login,
        Route::Signup,
    ];

    /// Entries shown in the top navigation bar.
    pub const NAV: [Route; 4] = [Route::Dashboard, Route::Explore, Route::Requests, Route::Chat];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Explore => "/explore",
            Route::Requests => "/requests",
            Route::Chat => "/chat",
            Route::Profile => "/profile",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Explore => "Explore",
            Route::Requests => "Requests",
            Route::Chat => "Chat",
            Route::Profile => "Profile",
            Route::Login => "Log in",
            Route::Signup => "Sign up",
        }
    }

    /// Login and signup, the views kept out of the navigation bar.
    pub fn is_auth(self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }

    /// Navigation bar entries with the one for `self` marked active.
    pub fn nav_items(self) -> Vec<NavItem> {
        Self::NAV
            .into_iter()
            .map(|route| NavItem {
                route,
                label: route.label(),
                active: route == self,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| RouteError(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
