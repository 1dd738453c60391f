// routing/classify.rs - Static partition of dashboard paths
use serde::{Deserialize, Serialize};

/// Dashboard areas that require a signed-in user, in prefix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtectedArea {
    Dashboard,
    Cases,
    Tasks,
    Projects,
    Contacts,
    Team,
    Integrations,
    Settings,
    MyWork,
    CauseList,
}

impl ProtectedArea {
    pub const ALL: [ProtectedArea; 10] = [
        ProtectedArea::Dashboard,
        ProtectedArea::Cases,
        ProtectedArea::Tasks,
        ProtectedArea::Projects,
        ProtectedArea::Contacts,
        ProtectedArea::Team,
        ProtectedArea::Integrations,
        ProtectedArea::Settings,
        ProtectedArea::MyWork,
        ProtectedArea::CauseList,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            ProtectedArea::Dashboard => "/dashboard",
            ProtectedArea::Cases => "/cases",
            ProtectedArea::Tasks => "/tasks",
            ProtectedArea::Projects => "/projects",
            ProtectedArea::Contacts => "/contacts",
            ProtectedArea::Team => "/team",
            ProtectedArea::Integrations => "/integrations",
            ProtectedArea::Settings => "/settings",
            ProtectedArea::MyWork => "/my-work",
            ProtectedArea::CauseList => "/cause-list",
        }
    }
}

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Public routes besides `/` and `/login`.
pub const OTHER_PUBLIC_ROUTES: [&str; 1] = ["/firebase-test"];

/// Where a path falls in the route partition.
///
/// Protected matching is a plain string prefix test (`/dashboardx` is
/// protected). Public matching is exact or exact-plus-`/`. Nothing is
/// normalised: trailing slashes and query strings are part of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "area", rename_all = "snake_case")]
pub enum RouteClass {
    /// Exactly `/`. Public, and a redirect target for both auth states.
    Root,
    /// Exactly `/login`.
    Login,
    /// Any other public route, including `/login/...` and `//`.
    Public,
    Protected(ProtectedArea),
    Unclassified,
}

impl RouteClass {
    pub fn is_protected(&self) -> bool {
        matches!(self, RouteClass::Protected(_))
    }

    pub fn is_public(&self) -> bool {
        matches!(self, RouteClass::Root | RouteClass::Login | RouteClass::Public)
    }
}

pub fn classify(pathname: &str) -> RouteClass {
    if let Some(area) = ProtectedArea::ALL
        .iter()
        .find(|area| pathname.starts_with(area.prefix()))
    {
        return RouteClass::Protected(*area);
    }

    match pathname {
        ROOT_PATH => RouteClass::Root,
        LOGIN_PATH => RouteClass::Login,
        _ if is_public_path(pathname) => RouteClass::Public,
        _ => RouteClass::Unclassified,
    }
}

fn is_public_path(pathname: &str) -> bool {
    [ROOT_PATH, LOGIN_PATH]
        .iter()
        .chain(OTHER_PUBLIC_ROUTES.iter())
        .any(|route| {
            pathname == *route
                || pathname
                    .strip_prefix(route)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
}
