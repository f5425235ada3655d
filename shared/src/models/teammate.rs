//! Team member model
//!
//! The list endpoint's wire shape has varied over the API's life: sometimes a
//! bare array of teammates, sometimes an array of per-locale wrappers. Both
//! are accepted and normalized to a flat list before anything else sees them.

use crate::image::ImageRef;
use crate::locale::Locale;
use crate::validate::{require, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teammate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Role title shown on the profile card, not an authorization role.
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-locale wrapper the list endpoint sometimes answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct TeammateGroup {
    pub locale: Locale,
    pub teammates: Vec<Teammate>,
}

/// Union of the list endpoint's observed wire shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeammatesWire {
    Grouped(Vec<TeammateGroup>),
    Flat(Vec<Teammate>),
}

impl TeammatesWire {
    /// Flatten to the teammates of `locale`, stamping the locale onto each
    /// row so consumers never see the wrapper shape.
    pub fn normalize(self, locale: Locale) -> Vec<Teammate> {
        match self {
            TeammatesWire::Grouped(groups) => {
                let group = groups
                    .iter()
                    .position(|g| g.locale == locale)
                    .unwrap_or(0);
                groups
                    .into_iter()
                    .nth(group)
                    .map(|g| {
                        let group_locale = g.locale;
                        g.teammates
                            .into_iter()
                            .map(|mut t| {
                                t.locale = group_locale;
                                t
                            })
                            .collect()
                    })
                    .unwrap_or_default()
            }
            TeammatesWire::Flat(teammates) => teammates
                .into_iter()
                .map(|mut t| {
                    t.locale = locale;
                    t
                })
                .collect(),
        }
    }
}

/// Payload for creating a teammate; travels as multipart with the image file.
#[derive(Debug, Clone)]
pub struct TeammateCreate {
    pub name: String,
    pub role: String,
    pub description: String,
    pub locale: Locale,
}

impl TeammateCreate {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("description", &self.description)
    }
}

/// Partial teammate update; the image file is optional.
#[derive(Debug, Clone, Default)]
pub struct TeammateUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub locale: Option<Locale>,
}

impl TeammateUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(role) = &self.role {
            require("role", role)?;
        }
        if let Some(description) = &self.description {
            require("description", description)?;
        }
        Ok(())
    }
}
