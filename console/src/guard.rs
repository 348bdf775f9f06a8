//! Route guard.
//!
//! The guard is a pure function over the current session snapshot: given
//! where the user wants to go and whether a token is present, it either
//! lets the navigation proceed or redirects. It holds no state of its own
//! and runs on every route transition.

use crate::state::{SessionState, UserId};

/// The console's routing table.
///
/// Public routes are reachable signed out; everything else is guarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Sign-in form.
    Login,
    /// Registration form.
    Register,
    /// Forgot-password form.
    ForgotPassword,
    /// Reset-password form (token arrives via email link).
    ResetPassword,
    /// Dashboard root.
    Dashboard,
    /// User management list.
    UserList,
    /// Create-user form.
    UserCreate,
    /// Edit-user form.
    UserEdit(UserId),
    /// Read-only user detail view.
    UserView(UserId),
    /// Edit-profile form for the signed-in user.
    ProfileEdit,
    /// Change-password form for the signed-in user.
    ChangePassword,
    /// Any path not in the table.
    Unmatched,
}

impl Route {
    /// Parse a path into a route. Unknown paths become
    /// [`Route::Unmatched`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/auth/login" => Self::Login,
            "/auth/register" => Self::Register,
            "/auth/forgot-password" => Self::ForgotPassword,
            "/auth/reset-password" => Self::ResetPassword,
            "" | "/" => Self::Dashboard,
            "/user-management/list" => Self::UserList,
            "/user-management/create" => Self::UserCreate,
            "/profile/edit" => Self::ProfileEdit,
            "/profile/change-password" => Self::ChangePassword,
            _ => {
                if let Some(id) = trimmed.strip_prefix("/user-management/edit/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::UserEdit(UserId::new(id));
                    }
                }
                if let Some(id) = trimmed.strip_prefix("/user-management/view/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::UserView(UserId::new(id));
                    }
                }
                Self::Unmatched
            },
        }
    }

    /// The path this route renders at.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::ForgotPassword => "/auth/forgot-password".to_string(),
            Self::ResetPassword => "/auth/reset-password".to_string(),
            Self::Dashboard | Self::Unmatched => "/".to_string(),
            Self::UserList => "/user-management/list".to_string(),
            Self::UserCreate => "/user-management/create".to_string(),
            Self::UserEdit(id) => format!("/user-management/edit/{id}"),
            Self::UserView(id) => format!("/user-management/view/{id}"),
            Self::ProfileEdit => "/profile/edit".to_string(),
            Self::ChangePassword => "/profile/change-password".to_string(),
        }
    }

    /// True for routes reachable without a session.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword
        )
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Proceed(Route),

    /// Navigate elsewhere instead.
    Redirect {
        /// Where to go.
        to: Route,
        /// Replace the history entry so back-navigation cannot return to
        /// the guarded route.
        replace: bool,
    },
}

/// Evaluate the guard for a requested route against a session snapshot.
///
/// - Public routes always proceed.
/// - Guarded routes proceed iff a token is present; otherwise redirect to
///   the login entry point, replacing history.
/// - Unmatched guarded paths redirect to the dashboard root.
#[must_use]
pub fn decide(route: Route, session: &SessionState) -> RouteDecision {
    if route.is_public() {
        return RouteDecision::Proceed(route);
    }

    if !session.is_authenticated() {
        return RouteDecision::Redirect {
            to: Route::Login,
            replace: true,
        };
    }

    if matches!(route, Route::Unmatched) {
        return RouteDecision::Redirect {
            to: Route::Dashboard,
            replace: true,
        };
    }

    RouteDecision::Proceed(route)
}
