//! Merch API
//!
//! Merch settings are a per-locale singleton. The server only exposes a bulk
//! read, so the per-locale read fetches the lot and picks the matching row;
//! a locale with no settings is an ordinary empty state, not an error.

use crate::api::AdminClient;
use crate::error::ClientResult;
use shared::models::{Merch, MerchUpdate};
use shared::Locale;
use std::sync::Arc;

const PREFIX: &str = "merch";

fn locale_key(locale: Locale) -> String {
    format!("merch-{locale}")
}

/// Merch API operations.
pub struct MerchApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl MerchApi<'_> {
    /// Merch settings for every locale.
    pub async fn list(&self) -> ClientResult<Arc<Vec<Merch>>> {
        self.client
            .cache
            .fetch(PREFIX, || async move {
                self.client.http.get("merch").await
            })
            .await
    }

    /// Merch settings for one locale; `None` when the locale has none yet.
    pub async fn get(&self, locale: Locale) -> ClientResult<Option<Merch>> {
        let found = self
            .client
            .cache
            .fetch(&locale_key(locale), || async move {
                let all: Vec<Merch> = self.client.http.get("merch").await?;
                Ok(all.into_iter().find(|m| m.locale == locale))
            })
            .await?;
        Ok((*found).clone())
    }

    /// Replace one locale's settings. The whole merch prefix is swept first;
    /// the overwrite of the locale entry is applied last and wins.
    pub async fn update(&self, locale: Locale, update: &MerchUpdate) -> ClientResult<Merch> {
        update.validate()?;
        let fresh: Merch = self
            .client
            .http
            .patch(&format!("merch/{locale}"), update)
            .await?;
        self.client.cache.invalidate_prefix(PREFIX);
        self.client
            .cache
            .overwrite(&locale_key(locale), Some(fresh.clone()));
        Ok(fresh)
    }
}
