// routing/mod.rs - Dashboard route guard
//
// Decides, for a (auth state, path) pair, whether the dashboard renders the
// page, renders nothing, or replaces the location. The decision is a pure
// function (guard::decide) so the HTTP endpoint, the CLI and the stateful
// RouteGuard all share it.

pub mod classify;
pub mod guard;

pub use classify::{classify, ProtectedArea, RouteClass, DASHBOARD_PATH, LOGIN_PATH, ROOT_PATH};
pub use guard::{decide, GuardDecision, Redirect, Render, RouteGuard};
