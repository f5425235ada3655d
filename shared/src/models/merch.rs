//! Merch promotion settings
//!
//! A per-locale singleton: the public site's merch button is toggled on or
//! off and pointed at an external store. There is no id and no create or
//! delete; a locale either has settings or it does not.

use crate::locale::Locale;
use crate::validate::{require, FieldError};
use serde::{Deserialize, Serialize};

/// Visibility of the merch promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchStatus {
    On,
    Off,
}

impl MerchStatus {
    pub fn is_on(&self) -> bool {
        matches!(self, MerchStatus::On)
    }
}

/// Merch settings for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merch {
    pub status: MerchStatus,
    /// Promotional text shown next to the button.
    pub content: String,
    /// Outbound store link.
    pub link: String,
    pub locale: Locale,
}

/// Wholesale update of one locale's merch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchUpdate {
    pub status: MerchStatus,
    pub content: String,
    pub link: String,
}

impl MerchUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("content", &self.content)?;
        require("link", &self.link)
    }
}
