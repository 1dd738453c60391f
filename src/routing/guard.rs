// routing/guard.rs - Render-or-redirect decision for dashboard navigation
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classify::{classify, RouteClass, DASHBOARD_PATH, LOGIN_PATH};
use crate::session::{AuthSession, AuthState, NavigationMode, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: &'static str,
    pub mode: NavigationMode,
}

impl Redirect {
    fn replace(to: &'static str) -> Self {
        Self { to, mode: NavigationMode::Replace }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Render {
    /// Auth state unresolved; show a loading indicator.
    Loading,
    /// Blocked page while the redirect is in flight.
    Nothing,
    Children,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuardDecision {
    pub class: RouteClass,
    pub render: Render,
    pub redirect: Option<Redirect>,
}

/// Decide what to do for one (auth state, path) pair.
///
/// First match wins:
/// 1. loading: no redirect
/// 2. protected and signed out: `/login`
/// 3. signed in on `/login` or `/`: `/dashboard`
/// 4. signed out on `/`: `/login`
/// 5. otherwise stay
pub fn decide(auth: AuthState, pathname: &str) -> GuardDecision {
    let class = classify(pathname);

    if auth.is_loading {
        return GuardDecision { class, render: Render::Loading, redirect: None };
    }

    let redirect = match (class, auth.is_authenticated) {
        (RouteClass::Protected(_), false) => Some(Redirect::replace(LOGIN_PATH)),
        (RouteClass::Login, true) => Some(Redirect::replace(DASHBOARD_PATH)),
        (RouteClass::Root, true) => Some(Redirect::replace(DASHBOARD_PATH)),
        (RouteClass::Root, false) => Some(Redirect::replace(LOGIN_PATH)),
        _ => None,
    };

    let render = if class.is_protected() && !auth.is_authenticated {
        Render::Nothing
    } else {
        Render::Children
    };

    GuardDecision { class, render, redirect }
}

/// Stateful guard bound to a navigator.
///
/// Re-evaluates only when its inputs change, so each transition into a
/// redirecting state issues exactly one navigation.
pub struct RouteGuard<N: Navigator> {
    navigator: N,
    last_input: Option<(AuthState, String)>,
    last_decision: Option<GuardDecision>,
}

impl<N: Navigator> RouteGuard<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            last_input: None,
            last_decision: None,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Feed the current inputs; returns what to render.
    pub fn evaluate(&mut self, auth: AuthState, pathname: &str) -> Render {
        let unchanged = self
            .last_input
            .as_ref()
            .is_some_and(|(prev_auth, prev_path)| *prev_auth == auth && prev_path == pathname);

        if unchanged {
            if let Some(decision) = self.last_decision {
                return decision.render;
            }
        }

        let decision = decide(auth, pathname);
        if let Some(redirect) = decision.redirect {
            debug!(from = pathname, to = redirect.to, "route guard redirecting");
            self.navigator.navigate(redirect.to, redirect.mode);
        }

        self.last_input = Some((auth, pathname.to_string()));
        self.last_decision = Some(decision);
        decision.render
    }

    pub fn evaluate_session(&mut self, session: &dyn AuthSession, pathname: &str) -> Render {
        self.evaluate(session.auth_state(), pathname)
    }
}
