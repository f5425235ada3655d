//! Partners API
//!
//! Partners are listed in one flat call and filtered by language
//! client-side; writes carry the logo image as multipart.

use crate::api::AdminClient;
use crate::error::ClientResult;
use crate::multipart::{FormBuilder, ImageFile};
use shared::models::{Partner, PartnerCreate, PartnerUpdate};
use std::sync::Arc;

const PREFIX: &str = "partners";

/// Partners API operations.
pub struct PartnersApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl PartnersApi<'_> {
    /// All partners, every locale.
    pub async fn list(&self) -> ClientResult<Arc<Vec<Partner>>> {
        self.client
            .cache
            .fetch(PREFIX, || async move {
                self.client.http.get("partners").await
            })
            .await
    }

    /// Create a partner: image, organization name, outbound link, language.
    pub async fn create(&self, draft: &PartnerCreate, image: ImageFile) -> ClientResult<Partner> {
        draft.validate()?;
        let form = FormBuilder::new()
            .image("image", image)?
            .text("logo", draft.logo.clone())
            .text("link", draft.link.clone())
            .text("language", draft.language.as_str())
            .build();
        let partner: Partner = self.client.http.post_multipart("partners", form).await?;
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(partner)
    }

    /// Patch a partner; a new image is optional.
    pub async fn update(
        &self,
        id: &str,
        patch: &PartnerUpdate,
        image: Option<ImageFile>,
    ) -> ClientResult<Partner> {
        patch.validate()?;
        let form = FormBuilder::new()
            .opt_image("image", image)?
            .opt_text("logo", patch.logo.clone())
            .opt_text("link", patch.link.clone())
            .opt_text("language", patch.language.map(|l| l.as_str()))
            .build();
        let partner: Partner = self
            .client
            .http
            .patch_multipart(&format!("partners/{id}"), form)
            .await?;
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(partner)
    }

    /// Delete a partner. The server answers 204.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .http
            .delete_no_content(&format!("partners/{id}"))
            .await?;
        self.client.cache.invalidate_prefix(PREFIX);
        Ok(())
    }
}
