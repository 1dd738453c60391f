// Test doubles for the roster, session and navigator ports.
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::session::{AuthSession, NavigationMode, Navigator, SessionUser};
use crate::team::{RosterError, TeamMember, TeamRoster};

/// Records every navigation in order.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(NavigationMode, String)>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<(NavigationMode, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.calls.lock().unwrap().push((NavigationMode::Replace, path.to_string()));
    }

    fn push(&self, path: &str) {
        self.calls.lock().unwrap().push((NavigationMode::Push, path.to_string()));
    }
}

pub struct FakeSession {
    user: Mutex<Option<SessionUser>>,
    authenticated: Mutex<bool>,
}

impl FakeSession {
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Mutex::new(Some(user)),
            authenticated: Mutex::new(true),
        }
    }

    pub fn set_user(&self, user: Option<SessionUser>) {
        *self.user.lock().unwrap() = user;
    }
}

impl AuthSession for FakeSession {
    fn user(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }

    fn is_authenticated(&self) -> bool {
        *self.authenticated.lock().unwrap()
    }

    fn is_loading(&self) -> bool {
        false
    }

    fn logout(&self) {
        *self.authenticated.lock().unwrap() = false;
        *self.user.lock().unwrap() = None;
    }
}

pub struct StaticRoster {
    members: Vec<TeamMember>,
    fetches: AtomicUsize,
}

impl StaticRoster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { members, fetches: AtomicUsize::new(0) }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamRoster for StaticRoster {
    async fn fetch_all(&self) -> Result<Vec<TeamMember>, RosterError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.clone())
    }
}

pub struct FailingRoster;

#[async_trait]
impl TeamRoster for FailingRoster {
    async fn fetch_all(&self) -> Result<Vec<TeamMember>, RosterError> {
        Err(RosterError::Transport("connection refused".to_string()))
    }
}

/// Answers each call with the next scripted roster after its delay.
pub struct ScriptedRoster {
    script: Mutex<VecDeque<(Duration, Vec<TeamMember>)>>,
}

impl ScriptedRoster {
    pub fn new(script: Vec<(Duration, Vec<TeamMember>)>) -> Self {
        Self { script: Mutex::new(script.into()) }
    }
}

#[async_trait]
impl TeamRoster for ScriptedRoster {
    async fn fetch_all(&self) -> Result<Vec<TeamMember>, RosterError> {
        let next = self.script.lock().unwrap().pop_front();
        let (delay, members) = next.unwrap_or_default();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(members)
    }
}
