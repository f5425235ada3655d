//! Resource API clients
//!
//! One family per resource: collections, partners, reports, teammates,
//! merch, stats, and auth/users. Each is a thin composition of the HTTP
//! adapter and the query cache with the resource's cache-key shape,
//! endpoints, payload encoding, and declared cache side effects.
//!
//! Side effects after a successful write are explicit in each method, not
//! inferred: a prefix invalidation for the affected resource, and for
//! detail-by-id endpoints a direct overwrite of the detail entry with the
//! server's response. When both target the same key, the overwrite is
//! applied last and wins.

pub mod auth;
pub mod collections;
pub mod merch;
pub mod partners;
pub mod reports;
pub mod stats;
pub mod teammates;

pub use auth::AuthApi;
pub use collections::CollectionsApi;
pub use merch::MerchApi;
pub use partners::PartnersApi;
pub use reports::ReportsApi;
pub use stats::StatsApi;
pub use teammates::TeammatesApi;

use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::session::SessionStore;

/// Entry point for the console: owns the HTTP adapter, the query cache, and
/// the session mirror, and hands out per-resource API views. One instance is
/// constructed at startup and shared by reference.
#[derive(Debug)]
pub struct AdminClient {
    pub(crate) http: HttpClient,
    pub(crate) cache: QueryCache,
    pub(crate) session: SessionStore,
    config: ClientConfig,
}

impl AdminClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let session = SessionStore::new(&config.session_dir);
        let http = HttpClient::new(&config, session.clone())?;
        Ok(Self {
            http,
            cache: QueryCache::new(),
            session,
            config,
        })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The shared query cache.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The local session mirror (advisory; the route guard re-validates).
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi { client: self }
    }

    pub fn partners(&self) -> PartnersApi<'_> {
        PartnersApi { client: self }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }

    pub fn teammates(&self) -> TeammatesApi<'_> {
        TeammatesApi { client: self }
    }

    pub fn merch(&self) -> MerchApi<'_> {
        MerchApi { client: self }
    }

    pub fn stats(&self) -> StatsApi<'_> {
        StatsApi { client: self }
    }
}
