//! Static route table.
//!
//! Two entry routes exist (`/login`, `/register`) plus a redirect from
//! `/`. The dashboard is only reachable by authenticating; it has no
//! externally addressable path here.

use crate::ui::form::FormMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Register,
    /// Post-authentication screen.
    Dashboard,
}

impl Route {
    /// Resolve an entry path. `/` redirects to `/login`; unknown paths
    /// resolve to nothing.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" | "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// The form mode shown on this route, if it hosts the form.
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Route::Login => Some(FormMode::Login),
            Route::Register => Some(FormMode::Register),
            Route::Dashboard => None,
        }
    }

    pub fn for_mode(mode: FormMode) -> Self {
        match mode {
            FormMode::Login => Route::Login,
            FormMode::Register => Route::Register,
        }
    }
}
