//! Monthly report model
//!
//! Reports are links to externally hosted documents, one per month and
//! locale. Month is free text ("Січень", "January").

use crate::locale::Locale;
use crate::validate::{require, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published monthly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub year: String,
    pub month: String,
    /// Link to the hosted report document.
    pub url: String,
    pub language: Locale,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCreate {
    pub year: String,
    pub month: String,
    pub url: String,
    pub language: Locale,
}

impl ReportCreate {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("year", &self.year)?;
        require("month", &self.month)?;
        require("url", &self.url)
    }
}

/// Partial report update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

impl ReportUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(year) = &self.year {
            require("year", year)?;
        }
        if let Some(month) = &self.month {
            require("month", month)?;
        }
        if let Some(url) = &self.url {
            require("url", url)?;
        }
        Ok(())
    }
}
