//! Reports API
//!
//! Plain JSON resource; lists are scoped by a locale query parameter.
//! Deleting cannot know which locale's list the row came from, so writes
//! sweep the whole `reports` prefix.

use crate::api::AdminClient;
use crate::error::ClientResult;
use shared::models::{Report, ReportCreate, ReportUpdate};
use shared::Locale;
use std::sync::Arc;

const PREFIX: &str = "reports";

fn detail_key(id: &str) -> String {
    format!("reports-{id}")
}

/// Reports API operations.
pub struct ReportsApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl ReportsApi<'_> {
    /// Reports for one locale.
    pub async fn list(&self, locale: Locale) -> ClientResult<Arc<Vec<Report>>> {
        let key = format!("reports-{locale}");
        self.client
            .cache
            .fetch(&key, || async move {
                self.client
                    .http
                    .get_with_query("reports", &[("locale", locale.as_str())])
                    .await
            })
            .await
    }

    /// Create a report.
    pub async fn create(&self, draft: &ReportCreate) -> ClientResult<Report> {
        draft.validate()?;
        let report: Report = self.client.http.post("reports", draft).await?;
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(report)
    }

    /// Patch a report.
    pub async fn update(&self, id: &str, patch: &ReportUpdate) -> ClientResult<Report> {
        patch.validate()?;
        let report: Report = self
            .client
            .http
            .patch(&format!("reports/{id}"), patch)
            .await?;
        self.client.cache.invalidate_prefix(PREFIX);
        self.client.cache.overwrite(&detail_key(id), report.clone());
        Ok(report)
    }

    /// Delete a report. The server answers 204.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .http
            .delete_no_content(&format!("reports/{id}"))
            .await?;
        self.client.cache.remove(&detail_key(id));
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(())
    }
}
