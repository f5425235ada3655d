//! Fundraising collection model
//!
//! Collections are created per locale; translations of one campaign share
//! the cross-locale `value` key. Amounts are decimals with no attached
//! currency semantics.

use crate::image::ImageSet;
use crate::locale::Locale;
use crate::response::Pagination;
use crate::validate::{max_len, require, require_max, FieldError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Collection lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Active,
    Closed,
}

impl CollectionStatus {
    /// Lowercase wire form, also used in form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Active => "active",
            CollectionStatus::Closed => "closed",
        }
    }
}

/// Editorial importance tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Urgent,
    Important,
    NonUrgent,
    Permanent,
}

impl Importance {
    /// Kebab-case wire form, also used in form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Urgent => "urgent",
            Importance::Important => "important",
            Importance::NonUrgent => "non-urgent",
            Importance::Permanent => "permanent",
        }
    }
}

/// Long-form description, split into up to three sections. At least one
/// section is always non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDescription {
    #[serde(default)]
    pub section1: String,
    #[serde(default)]
    pub section2: String,
    #[serde(default)]
    pub section3: String,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl LongDescription {
    /// Non-empty sections in order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        [&self.section1, &self.section2, &self.section3]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// A fundraising collection as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: ImageSet,
    pub collected: Decimal,
    pub target: Decimal,
    #[serde(default)]
    pub alt: String,
    #[serde(rename = "peopleDonate", default)]
    pub people_donate: u64,
    #[serde(rename = "peopleDonate_title", default)]
    pub people_donate_title: String,
    pub desc: String,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub language: Locale,
    pub long_desc: LongDescription,
    pub status: CollectionStatus,
    /// Cross-locale grouping key tying translations of one campaign together.
    #[serde(default)]
    pub value: String,
    pub importance: Importance,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a collection. Encoded as multipart together with a
/// mandatory image file.
#[derive(Debug, Clone)]
pub struct CollectionCreate {
    pub title: String,
    pub collected: Decimal,
    pub target: Decimal,
    pub alt: String,
    pub people_donate: u64,
    pub people_donate_title: String,
    pub desc: String,
    pub days: Option<u32>,
    pub period: String,
    pub quantity: Option<u64>,
    pub status: Option<CollectionStatus>,
    pub value: String,
    pub importance: Importance,
    /// Ordered long-description sections; at least one, at most three.
    pub long_desc: Vec<String>,
}

impl CollectionCreate {
    pub fn validate(&self) -> Result<(), FieldError> {
        require_max("title", &self.title, 48)?;
        require_max("desc", &self.desc, 144)?;
        require_max("alt", &self.alt, 24)?;
        require("peopleDonate_title", &self.people_donate_title)?;
        require("period", &self.period)?;
        require_max("value", &self.value, 48)?;
        validate_amount("collected", self.collected)?;
        validate_amount("target", self.target)?;
        validate_long_desc(&self.long_desc)
    }
}

/// Partial collection update; the image file is optional and travels
/// alongside as a separate multipart part when present.
#[derive(Debug, Clone, Default)]
pub struct CollectionUpdate {
    pub title: Option<String>,
    pub collected: Option<Decimal>,
    pub target: Option<Decimal>,
    pub alt: Option<String>,
    pub people_donate: Option<u64>,
    pub people_donate_title: Option<String>,
    pub desc: Option<String>,
    pub days: Option<u32>,
    pub period: Option<String>,
    pub quantity: Option<u64>,
    pub status: Option<CollectionStatus>,
    pub value: Option<String>,
    pub importance: Option<Importance>,
    pub long_desc: Option<Vec<String>>,
}

impl CollectionUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(title) = &self.title {
            require_max("title", title, 48)?;
        }
        if let Some(desc) = &self.desc {
            require_max("desc", desc, 144)?;
        }
        if let Some(alt) = &self.alt {
            max_len("alt", alt, 24)?;
        }
        if let Some(value) = &self.value {
            max_len("value", value, 48)?;
        }
        if let Some(collected) = self.collected {
            validate_amount("collected", collected)?;
        }
        if let Some(target) = self.target {
            validate_amount("target", target)?;
        }
        if let Some(long_desc) = &self.long_desc {
            validate_long_desc(long_desc)?;
        }
        Ok(())
    }
}

fn validate_amount(field: &'static str, amount: Decimal) -> Result<(), FieldError> {
    if amount.is_sign_negative() {
        return Err(FieldError::new(field, "must be 0 or greater"));
    }
    Ok(())
}

fn validate_long_desc(sections: &[String]) -> Result<(), FieldError> {
    if sections.is_empty() || sections.iter().all(|s| s.trim().is_empty()) {
        return Err(FieldError::new("long_desc", "at least one section is required"));
    }
    if sections.len() > 3 {
        return Err(FieldError::new("long_desc", "at most three sections are allowed"));
    }
    if sections.iter().any(|s| s.trim().is_empty()) {
        return Err(FieldError::new("long_desc", "sections cannot be empty"));
    }
    Ok(())
}

/// Collection list payload: the server partitions rows by status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionsPage {
    #[serde(rename = "activeCollections", default)]
    pub active: Vec<Collection>,
    #[serde(rename = "closedCollections", default)]
    pub closed: Vec<Collection>,
}

impl CollectionsPage {
    /// Active then closed, for a single flat table.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.active.iter().chain(self.closed.iter())
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.closed.is_empty()
    }
}

/// Paginated collection list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedCollections {
    pub data: CollectionsPage,
    pub pagination: Pagination,
}
