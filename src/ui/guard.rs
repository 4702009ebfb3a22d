//! Route guard
//!
//! Layout that renders its child routes only when the session satisfies the
//! app-supplied predicate, and redirects to the landing screen otherwise.

use crate::app::AppState;
use crate::route::Route;
use crate::storage::session::Session;
use dioxus::prelude::*;

/// Predicate a session must satisfy to see protected screens
pub type AuthPredicate = fn(&Session) -> bool;

#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Render,
    Redirect(Route),
}

#[derive(Clone, Copy)]
pub struct AuthGuard {
    predicate: AuthPredicate,
}

impl AuthGuard {
    pub fn new(predicate: AuthPredicate) -> Self {
        Self { predicate }
    }

    pub fn check(&self, session: &Session) -> GuardOutcome {
        if (self.predicate)(session) {
            GuardOutcome::Render
        } else {
            GuardOutcome::Redirect(Route::Landing {})
        }
    }
}

#[component]
pub fn Guarded() -> Element {
    let app_state = use_context::<AppState>();
    let guard = app_state.guard;
    let session = app_state.session;

    use_effect(move || {
        if let GuardOutcome::Redirect(target) = guard.check(&session.read()) {
            tracing::info!("Protected screen requires sign-in, redirecting to {}", target);
            navigator().replace(target);
        }
    });

    let outcome = guard.check(&session.read());
    match outcome {
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Redirect(_) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_session_renders() {
        let guard = AuthGuard::new(Session::is_authenticated);
        assert_eq!(guard.check(&Session::new("token", "refresh")), GuardOutcome::Render);
    }

    #[test]
    fn test_anonymous_session_redirects_to_landing() {
        let guard = AuthGuard::new(Session::is_authenticated);
        assert_eq!(
            guard.check(&Session::default()),
            GuardOutcome::Redirect(Route::Landing {})
        );
    }

    #[test]
    fn test_custom_predicate() {
        let guard = AuthGuard::new(|session| session.refresh_token.is_some());
        let session = Session {
            refresh_token: Some("r".to_string()),
            ..Session::default()
        };
        assert_eq!(guard.check(&session), GuardOutcome::Render);
    }
}
