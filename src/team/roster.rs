use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::member::TeamMember;
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Team roster request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("Team roster request failed: {0}")]
    Transport(String),

    #[error("Team roster returned HTTP {0}")]
    Status(u16),

    #[error("Team roster response could not be decoded: {0}")]
    Decode(String),
}

/// Port for the externally persisted team roster.
#[async_trait]
pub trait TeamRoster: Send + Sync {
    /// Every member, in source order. No paging or filtering.
    async fn fetch_all(&self) -> Result<Vec<TeamMember>, RosterError>;
}

/// Roster payloads come either as a bare array or wrapped in `members`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterPayload {
    Bare(Vec<TeamMember>),
    Wrapped { members: Vec<TeamMember> },
}

impl From<RosterPayload> for Vec<TeamMember> {
    fn from(payload: RosterPayload) -> Self {
        match payload {
            RosterPayload::Bare(members) => members,
            RosterPayload::Wrapped { members } => members,
        }
    }
}

pub struct HttpTeamRoster {
    http: Client,
    url: String,
    token: Option<String>,
    timeout: Duration,
}

impl HttpTeamRoster {
    pub fn new(url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self, RosterError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
            token,
            timeout,
        })
    }

    /// `None` when no roster URL is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Option<Self>, RosterError> {
        match &config.roster.url {
            Some(url) => Self::new(url.clone(), config.roster.token.clone(), config.roster_timeout()).map(Some),
            None => Ok(None),
        }
    }

    fn map_error(&self, err: reqwest::Error) -> RosterError {
        if err.is_timeout() {
            RosterError::Timeout(self.timeout)
        } else if err.is_decode() {
            RosterError::Decode(err.to_string())
        } else {
            RosterError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl TeamRoster for HttpTeamRoster {
    async fn fetch_all(&self) -> Result<Vec<TeamMember>, RosterError> {
        let mut req = self.http.get(&self.url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let res = req.send().await.map_err(|e| self.map_error(e))?;
        if !res.status().is_success() {
            return Err(RosterError::Status(res.status().as_u16()));
        }

        let payload = res.json::<RosterPayload>().await.map_err(|e| self.map_error(e))?;
        let members: Vec<TeamMember> = payload.into();
        debug!(count = members.len(), "team roster fetched");
        Ok(members)
    }
}
