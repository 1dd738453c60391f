// dashboard/mod.rs - Dashboard page controller
//
// Owns the header display name and the logout action. Auth, navigation and
// the roster are handed in explicitly.

use std::sync::Arc;
use tracing::info;

use crate::routing::LOGIN_PATH;
use crate::session::{AuthSession, Navigator};
use crate::team::{DisplayNameResolver, Refresh, TeamRoster};

pub struct Dashboard<N: Navigator> {
    session: Arc<dyn AuthSession>,
    navigator: N,
    resolver: DisplayNameResolver,
}

impl<N: Navigator> Dashboard<N> {
    pub fn new(session: Arc<dyn AuthSession>, navigator: N, roster: Option<Arc<dyn TeamRoster>>) -> Self {
        let user = session.user();
        let resolver = DisplayNameResolver::new(roster, user.as_ref());
        Self { session, navigator, resolver }
    }

    pub async fn mount(&self) -> Refresh {
        self.user_changed().await
    }

    /// Re-resolve after the session's user object changed.
    pub async fn user_changed(&self) -> Refresh {
        let user = self.session.user();
        self.resolver.refresh(user.as_ref()).await
    }

    pub fn display_name(&self) -> String {
        self.resolver.display_name()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Sign out and go to the login page with a history entry.
    pub fn logout(&self) {
        info!("dashboard logout");
        self.session.logout();
        self.navigator.push(LOGIN_PATH);
    }
}
