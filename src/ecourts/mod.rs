// ecourts/mod.rs - eCourts case-data provider integration
//
// The provider is a third-party service that scrapes and normalises Indian
// eCourts case data. This module only consumes it: a port trait
// (CaseProvider), the wire types it returns, and the reqwest-backed client.

pub mod client;
pub mod provider;

pub use client::EcourtsClient;
pub use provider::{CaseProvider, LookupResult, ProviderConfig, ProviderError, ProviderKind};
