//! Route table and the sign-in gate in front of it.

use shared::User;

pub const LOGIN_PATH: &str = "login";
pub const CATEGORIES_PATH: &str = "categories";
pub const EXPENSES_PATH: &str = "expenses";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Categories,
    Expenses,
}

/// Where empty and unknown paths end up
pub const DEFAULT_ROUTE: Route = Route::Expenses;

impl Route {
    /// Resolve a location path such as `/expenses` or `expenses/`
    pub fn from_path(path: &str) -> Self {
        let first_segment = path
            .trim_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();

        match first_segment {
            LOGIN_PATH => Route::Login,
            CATEGORIES_PATH => Route::Categories,
            EXPENSES_PATH => Route::Expenses,
            _ => DEFAULT_ROUTE,
        }
    }

    pub fn path(&self) -> String {
        let segment = match self {
            Route::Login => LOGIN_PATH,
            Route::Categories => CATEGORIES_PATH,
            Route::Expenses => EXPENSES_PATH,
        };
        format!("/{}", segment)
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow(Route),
    /// Send the visitor to the login screen, remembering where they wanted to go
    RedirectToLogin { return_url: Option<String> },
}

/// Decide whether `route` may be shown to `user`.
///
/// `current_url` is the path (plus query) that was requested; it becomes the
/// return URL unless it is the site root.
pub fn guard(route: Route, user: Option<&User>, current_url: &str) -> RouteDecision {
    if !route.requires_auth() || user.is_some() {
        return RouteDecision::Allow(route);
    }

    let return_url = match current_url.trim() {
        "" | "/" => None,
        url => Some(url.to_string()),
    };
    RouteDecision::RedirectToLogin { return_url }
}

/// Login page link carrying the page to come back to
pub fn login_href(return_url: Option<&str>) -> String {
    match return_url {
        Some(url) => format!("{}?returnUrl={}", Route::Login.path(), urlencoding::encode(url)),
        None => Route::Login.path(),
    }
}

/// Read `returnUrl` back out of a location search string such as `?returnUrl=%2Fexpenses`.
/// Only same-site paths are accepted; protocol-relative `//host` values are not.
pub fn return_url_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "returnUrl")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| {
            value.starts_with('/') && !value.starts_with("//") && !value.starts_with("/\\")
        })
}
