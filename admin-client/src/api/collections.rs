//! Collections API
//!
//! Collections are locale-partitioned and paginated. List cache keys carry
//! page number *and* page size, so two different page sizes for the same
//! locale never collide.

use crate::api::AdminClient;
use crate::error::ClientResult;
use crate::multipart::{FormBuilder, ImageFile};
use reqwest::multipart::Form;
use serde::Serialize;
use shared::models::{Collection, CollectionCreate, CollectionUpdate, PaginatedCollections};
use shared::{ApiResponse, Locale};
use std::sync::Arc;

/// Page size the console's tables default to.
pub const DEFAULT_PER_PAGE: u32 = 6;

#[derive(Serialize)]
struct PageQuery {
    page: u32,
    #[serde(rename = "perPage")]
    per_page: u32,
}

fn list_prefix(locale: Locale) -> String {
    format!("collections-{locale}")
}

fn detail_key(locale: Locale, id: &str) -> String {
    format!("collections-{locale}-{id}")
}

/// Collections API operations.
pub struct CollectionsApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl CollectionsApi<'_> {
    /// One page of collections for a locale.
    pub async fn list(
        &self,
        locale: Locale,
        page: u32,
        per_page: u32,
    ) -> ClientResult<Arc<PaginatedCollections>> {
        let key = format!("collections-{locale}-{page}-{per_page}");
        self.client
            .cache
            .fetch(&key, || async move {
                self.client
                    .http
                    .get_with_query(&format!("collections/{locale}"), &PageQuery { page, per_page })
                    .await
            })
            .await
    }

    /// One collection by locale and id.
    pub async fn get(&self, locale: Locale, id: &str) -> ClientResult<Arc<Collection>> {
        let key = detail_key(locale, id);
        self.client
            .cache
            .fetch(&key, || async move {
                let resp: ApiResponse<Collection> = self
                    .client
                    .http
                    .get(&format!("collections/{locale}/{id}"))
                    .await?;
                Ok(resp.data)
            })
            .await
    }

    /// Create a collection for a locale. The image is mandatory; the whole
    /// payload travels as multipart form-data.
    pub async fn create(
        &self,
        locale: Locale,
        draft: &CollectionCreate,
        image: ImageFile,
    ) -> ClientResult<Collection> {
        draft.validate()?;
        let form = create_form(draft, image)?;
        let resp: ApiResponse<Collection> = self
            .client
            .http
            .post_multipart(&format!("collections/{locale}"), form)
            .await?;
        self.client.cache.invalidate_prefix(&list_prefix(locale));
        Ok(resp.data)
    }

    /// Patch a collection; a new image is optional.
    pub async fn update(
        &self,
        locale: Locale,
        id: &str,
        patch: &CollectionUpdate,
        image: Option<ImageFile>,
    ) -> ClientResult<Collection> {
        patch.validate()?;
        let form = update_form(patch, image)?;
        let resp: ApiResponse<Collection> = self
            .client
            .http
            .patch_multipart(&format!("collections/{locale}/{id}"), form)
            .await?;
        // the prefix sweep also marks the detail entry; the overwrite below
        // is applied last and wins
        self.client.cache.invalidate_prefix(&list_prefix(locale));
        self.client
            .cache
            .overwrite(&detail_key(locale, id), resp.data.clone());
        Ok(resp.data)
    }

    /// Delete a collection. The server answers 204.
    pub async fn delete(&self, locale: Locale, id: &str) -> ClientResult<()> {
        self.client
            .http
            .delete_no_content(&format!("collections/{locale}/{id}"))
            .await?;
        self.client.cache.remove(&detail_key(locale, id));
        self.client.cache.invalidate_prefix(&list_prefix(locale));
        Ok(())
    }
}

fn create_form(draft: &CollectionCreate, image: ImageFile) -> ClientResult<Form> {
    Ok(FormBuilder::new()
        .text("title", draft.title.clone())
        .display("collected", draft.collected)
        .display("target", draft.target)
        .text("alt", draft.alt.clone())
        .display("peopleDonate", draft.people_donate)
        .text("peopleDonate_title", draft.people_donate_title.clone())
        .text("desc", draft.desc.clone())
        .opt_display("days", draft.days)
        .text("period", draft.period.clone())
        .opt_display("quantity", draft.quantity)
        .opt_text("status", draft.status.map(|s| s.as_str()))
        .text("value", draft.value.clone())
        .text("importance", draft.importance.as_str())
        .indexed("long_desc", &draft.long_desc)
        .image("image", image)?
        .build())
}

fn update_form(patch: &CollectionUpdate, image: Option<ImageFile>) -> ClientResult<Form> {
    let mut builder = FormBuilder::new()
        .opt_text("title", patch.title.clone())
        .opt_display("collected", patch.collected)
        .opt_display("target", patch.target)
        .opt_text("alt", patch.alt.clone())
        .opt_display("peopleDonate", patch.people_donate)
        .opt_text("peopleDonate_title", patch.people_donate_title.clone())
        .opt_text("desc", patch.desc.clone())
        .opt_display("days", patch.days)
        .opt_text("period", patch.period.clone())
        .opt_display("quantity", patch.quantity)
        .opt_text("status", patch.status.map(|s| s.as_str()))
        .opt_text("value", patch.value.clone())
        .opt_text("importance", patch.importance.map(|i| i.as_str()));
    if let Some(long_desc) = &patch.long_desc {
        builder = builder.indexed("long_desc", long_desc);
    }
    Ok(builder.opt_image("image", image)?.build())
}
