use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::warn;

use super::member::{count_by_email, find_by_email};
use super::roster::TeamRoster;
use crate::session::SessionUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameSource {
    Roster,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedName {
    pub display_name: String,
    pub source: NameSource,
}

impl ResolvedName {
    pub fn fallback(name: impl Into<String>) -> Self {
        Self { display_name: name.into(), source: NameSource::Fallback }
    }

    fn roster(name: impl Into<String>) -> Self {
        Self { display_name: name.into(), source: NameSource::Roster }
    }
}

/// Outcome of [`DisplayNameResolver::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    Applied(ResolvedName),
    /// A newer refresh started while this one was fetching; its result was dropped.
    Stale,
}

/// Resolve a display name for `user` against the roster.
///
/// Roster faults are logged and degrade to the fallback name.
pub async fn resolve_display_name(roster: &dyn TeamRoster, user: &SessionUser) -> ResolvedName {
    let fallback = user.fallback_display_name();
    let Some(email) = user.email() else {
        return ResolvedName::fallback(fallback);
    };

    let members = match roster.fetch_all().await {
        Ok(members) => members,
        Err(e) => {
            warn!("Failed to fetch team roster for display name: {}", e);
            return ResolvedName::fallback(fallback);
        }
    };

    let duplicates = count_by_email(&members, email);
    if duplicates > 1 {
        warn!(email, duplicates, "team roster has duplicate entries for email; using the first");
    }

    match find_by_email(&members, email).and_then(|m| m.display_name()) {
        Some(name) => ResolvedName::roster(name),
        None => ResolvedName::fallback(fallback),
    }
}

struct ResolverState {
    generation: u64,
    current: ResolvedName,
}

/// Display name for the dashboard header.
///
/// Each refresh takes a new generation; a fetch that finishes after a newer
/// refresh has started is discarded.
pub struct DisplayNameResolver {
    roster: Option<Arc<dyn TeamRoster>>,
    state: Mutex<ResolverState>,
}

impl DisplayNameResolver {
    pub fn new(roster: Option<Arc<dyn TeamRoster>>, user: Option<&SessionUser>) -> Self {
        let fallback = user.map(SessionUser::fallback_display_name).unwrap_or_default();
        Self {
            roster,
            state: Mutex::new(ResolverState {
                generation: 0,
                current: ResolvedName::fallback(fallback),
            }),
        }
    }

    pub fn current(&self) -> ResolvedName {
        self.lock().current.clone()
    }

    pub fn display_name(&self) -> String {
        self.lock().current.display_name.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub async fn refresh(&self, user: Option<&SessionUser>) -> Refresh {
        let generation = self.begin(user);

        let resolved = match (user, &self.roster) {
            (Some(user), Some(roster)) => resolve_display_name(roster.as_ref(), user).await,
            (Some(user), None) => ResolvedName::fallback(user.fallback_display_name()),
            (None, _) => ResolvedName::fallback(String::new()),
        };

        self.commit(generation, resolved)
    }

    /// Start a new generation and show the new user's fallback right away.
    fn begin(&self, user: Option<&SessionUser>) -> u64 {
        let mut state = self.lock();
        state.generation += 1;
        state.current = ResolvedName::fallback(
            user.map(SessionUser::fallback_display_name).unwrap_or_default(),
        );
        state.generation
    }

    fn commit(&self, generation: u64, resolved: ResolvedName) -> Refresh {
        let mut state = self.lock();
        if state.generation != generation {
            return Refresh::Stale;
        }
        state.current = resolved.clone();
        Refresh::Applied(resolved)
    }

    fn lock(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
