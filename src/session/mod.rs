// session/mod.rs - Explicit auth and navigation context
//
// The authentication backend and the client router are external. Everything
// in this crate that needs them receives one of these traits as a parameter
// rather than reaching for ambient state.

use serde::{Deserialize, Serialize};

/// Read-only view of the signed-in user, owned by the auth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SessionUser {
    pub fn new(email: Option<&str>, name: Option<&str>) -> Self {
        Self {
            email: email.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    /// Email, if present and non-blank.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Auth-provided name, falling back to the email.
    pub fn fallback_display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.email.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Authentication flags fed to the route guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self { is_authenticated: false, is_loading: true }
    }

    pub fn anonymous() -> Self {
        Self { is_authenticated: false, is_loading: false }
    }

    pub fn authenticated() -> Self {
        Self { is_authenticated: true, is_loading: false }
    }
}

/// The auth provider's session handle.
pub trait AuthSession: Send + Sync {
    fn user(&self) -> Option<SessionUser>;
    fn is_authenticated(&self) -> bool;
    fn is_loading(&self) -> bool;
    fn logout(&self);

    fn auth_state(&self) -> AuthState {
        AuthState {
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
        }
    }
}

/// How a navigation touches history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// No history entry; back does not return to the blocked page.
    Replace,
    /// Adds a history entry.
    Push,
}

/// Client-side router.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
    fn push(&self, path: &str);

    fn navigate(&self, path: &str, mode: NavigationMode) {
        match mode {
            NavigationMode::Replace => self.replace(path),
            NavigationMode::Push => self.push(path),
        }
    }
}
