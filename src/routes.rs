// SPDX-License-Identifier: MPL-2.0
//! Client-side routes and the authentication guard.
//!
//! Two named routes exist: `Index` at `/index`, which requires a stored
//! token, and `Login` at `/login`. The root path `/` redirects to `/index`;
//! any other path is treated like the root.

use crate::storage::{Storage, TOKEN_KEY};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

pub const ROOT_PATH: &str = "/";
pub const INDEX_PATH: &str = "/index";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Index,
    Login,
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteName::Index => f.write_str("Index"),
            RouteName::Login => f.write_str("Login"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

pub const INDEX: Route = Route {
    path: INDEX_PATH,
    name: RouteName::Index,
    requires_auth: true,
};

pub const LOGIN: Route = Route {
    path: LOGIN_PATH,
    name: RouteName::Login,
    requires_auth: false,
};

/// Maps a path to its route, following the root redirect.
///
/// A query string or fragment is ignored.
#[must_use]
pub fn resolve(path: &str) -> Route {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    match path {
        INDEX_PATH => INDEX,
        LOGIN_PATH => LOGIN,
        // "/" (trimmed to "") and unknown paths redirect to the index.
        _ => INDEX,
    }
}

/// Something that can move the user to another path.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Current route, shared by every clone.
#[derive(Clone)]
pub struct Router {
    storage: Arc<dyn Storage>,
    current: Arc<watch::Sender<Route>>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

impl Router {
    /// Creates a router positioned at the guarded root path.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (current, _) = watch::channel(LOGIN);
        let router = Self {
            storage,
            current: Arc::new(current),
        };
        let start = router.guard(resolve(ROOT_PATH));
        router.current.send_replace(start);
        router
    }

    fn has_token(&self) -> bool {
        self.storage
            .get_item(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }

    /// Redirects auth-only routes to `Login` when no token is stored.
    #[must_use]
    pub fn guard(&self, route: Route) -> Route {
        if route.requires_auth && !self.has_token() {
            LOGIN
        } else {
            route
        }
    }

    /// Navigates to `path` and returns the route actually entered.
    pub fn push(&self, path: &str) -> Route {
        let requested = resolve(path);
        let route = self.guard(requested);
        if route != requested {
            tracing::debug!(path, from = %requested.name, to = %route.name, "route guarded");
        }
        self.current.send_replace(route);
        tracing::debug!(path, route = %route.name, "navigated");
        route
    }

    #[must_use]
    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        self.push(path);
    }
}
