//! Impact stats API
//!
//! A singleton resource with no locale and no id, replaced wholesale.

use crate::api::AdminClient;
use crate::error::ClientResult;
use shared::models::ImpactStats;
use std::sync::Arc;

const KEY: &str = "stats";

/// Stats API operations.
pub struct StatsApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl StatsApi<'_> {
    /// The platform's aggregate impact counters.
    pub async fn get(&self) -> ClientResult<Arc<ImpactStats>> {
        self.client
            .cache
            .fetch(KEY, || async move {
                self.client.http.get("stats").await
            })
            .await
    }

    /// Replace all counters in one call. The server answers 204, so the
    /// cached copy is invalidated rather than overwritten.
    pub async fn replace(&self, stats: &ImpactStats) -> ClientResult<()> {
        stats.validate()?;
        self.client.http.put_no_content("stats", stats).await?;
        self.client.cache.invalidate(KEY);
        Ok(())
    }
}
