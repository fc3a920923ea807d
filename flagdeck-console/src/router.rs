//! Fragment-based routing.
//!
//! Views are addressed by the same fragment grammar the backend's web
//! UI used (`#dashboard`, `#users`, `#user/<username>`, `#compare`,
//! `#sandbox`), so deep links stay expressible as plain strings.

/// One navigable view of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Users,
    User(String),
    Compare,
    Sandbox,
    /// Unrecognized fragment, kept verbatim for the not-found view.
    NotFound(String),
}

impl Route {
    /// Parse a location fragment. Empty input lands on the dashboard;
    /// anything unrecognized becomes [`Route::NotFound`].
    pub fn parse(fragment: &str) -> Route {
        let fragment = fragment.trim();
        if fragment.is_empty() || fragment == "#" || fragment == "#dashboard" {
            return Route::Dashboard;
        }
        match fragment {
            "#users" => Route::Users,
            "#compare" => Route::Compare,
            "#sandbox" => Route::Sandbox,
            other => {
                if let Some(raw) = other.strip_prefix("#user/") {
                    let username = urlencoding::decode(raw)
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| raw.to_string());
                    if username.is_empty() {
                        Route::NotFound(other.to_string())
                    } else {
                        Route::User(username)
                    }
                } else {
                    Route::NotFound(other.to_string())
                }
            }
        }
    }

    /// The fragment identifier for this route.
    pub fn fragment(&self) -> String {
        match self {
            Route::Dashboard => "#dashboard".to_string(),
            Route::Users => "#users".to_string(),
            Route::User(username) => format!("#user/{}", urlencoding::encode(username)),
            Route::Compare => "#compare".to_string(),
            Route::Sandbox => "#sandbox".to_string(),
            Route::NotFound(fragment) => fragment.clone(),
        }
    }

    /// Which sidebar entry is highlighted for this route. A single
    /// user's detail highlights the plural Users entry; an unknown
    /// fragment highlights nothing.
    pub fn nav_target(&self) -> Option<Route> {
        match self {
            Route::Dashboard => Some(Route::Dashboard),
            Route::Users | Route::User(_) => Some(Route::Users),
            Route::Compare => Some(Route::Compare),
            Route::Sandbox => Some(Route::Sandbox),
            Route::NotFound(_) => None,
        }
    }

    /// Window-title label.
    pub fn title(&self) -> String {
        match self {
            Route::Dashboard => "Dashboard".to_string(),
            Route::Users => "Users".to_string(),
            Route::User(username) => username.clone(),
            Route::Compare => "Compare Flags".to_string(),
            Route::Sandbox => "Sandbox".to_string(),
            Route::NotFound(_) => "Not Found".to_string(),
        }
    }
}
