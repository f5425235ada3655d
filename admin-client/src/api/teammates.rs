//! Teammates API
//!
//! The list endpoint's wire shape has varied over time; it is normalized at
//! this boundary so consumers always see a flat, locale-stamped list.
//! Deleting requires both id and locale.

use crate::api::AdminClient;
use crate::error::ClientResult;
use crate::multipart::{FormBuilder, ImageFile};
use shared::models::{Teammate, TeammateCreate, TeammateUpdate, TeammatesWire};
use shared::Locale;
use std::sync::Arc;

const PREFIX: &str = "teammates";

fn detail_key(id: &str) -> String {
    format!("teammates-{id}")
}

/// Teammates API operations.
pub struct TeammatesApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl TeammatesApi<'_> {
    /// Teammates for one locale, normalized to a flat list.
    pub async fn list(&self, locale: Locale) -> ClientResult<Arc<Vec<Teammate>>> {
        let key = format!("teammates-{locale}");
        self.client
            .cache
            .fetch(&key, || async move {
                let wire: TeammatesWire = self
                    .client
                    .http
                    .get_with_query("teammates", &[("locale", locale.as_str())])
                    .await?;
                Ok(wire.normalize(locale))
            })
            .await
    }

    /// Create a teammate; the profile image travels as multipart.
    pub async fn create(&self, draft: &TeammateCreate, image: ImageFile) -> ClientResult<Teammate> {
        draft.validate()?;
        let form = FormBuilder::new()
            .text("name", draft.name.clone())
            .text("role", draft.role.clone())
            .text("description", draft.description.clone())
            .image("image", image)?
            .text("locale", draft.locale.as_str())
            .build();
        let teammate: Teammate = self.client.http.post_multipart("teammates", form).await?;
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(teammate)
    }

    /// Patch a teammate; a new image is optional.
    pub async fn update(
        &self,
        id: &str,
        patch: &TeammateUpdate,
        image: Option<ImageFile>,
    ) -> ClientResult<Teammate> {
        patch.validate()?;
        let form = FormBuilder::new()
            .opt_text("name", patch.name.clone())
            .opt_text("role", patch.role.clone())
            .opt_text("description", patch.description.clone())
            .opt_image("image", image)?
            .opt_text("locale", patch.locale.map(|l| l.as_str()))
            .build();
        let teammate: Teammate = self
            .client
            .http
            .patch_multipart(&format!("teammates/{id}"), form)
            .await?;
        self.client.cache.invalidate_prefix(PREFIX);
        self.client.cache.overwrite(&detail_key(id), teammate.clone());
        Ok(teammate)
    }

    /// Delete a teammate by id and locale. The server answers 204; both the
    /// detail entry and every teammates list drop out of the cache.
    pub async fn delete(&self, id: &str, locale: Locale) -> ClientResult<()> {
        self.client
            .http
            .delete_with_query(&format!("teammates/{id}"), &[("locale", locale.as_str())])
            .await?;
        self.client.cache.remove(&detail_key(id));
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(())
    }
}
