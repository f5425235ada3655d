//! Partner organization model

use crate::image::ImageRef;
use crate::locale::Locale;
use crate::validate::{require, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partner organization shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub image: ImageRef,
    /// Organization name shown under the logo.
    pub logo: String,
    /// Outbound link to the partner's site.
    pub link: String,
    pub language: Locale,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a partner; travels as multipart with the image file.
#[derive(Debug, Clone)]
pub struct PartnerCreate {
    pub logo: String,
    pub link: String,
    pub language: Locale,
}

impl PartnerCreate {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("logo", &self.logo)?;
        require("link", &self.link)
    }
}

/// Partial partner update; the image file is optional.
#[derive(Debug, Clone, Default)]
pub struct PartnerUpdate {
    pub logo: Option<String>,
    pub link: Option<String>,
    pub language: Option<Locale>,
}

impl PartnerUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(logo) = &self.logo {
            require("logo", logo)?;
        }
        if let Some(link) = &self.link {
            require("link", link)?;
        }
        Ok(())
    }
}
