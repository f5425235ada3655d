//! Aggregate impact statistics
//!
//! A fixed set of six named counters shown on the public site's impact
//! section. The resource is a singleton with no locale and no id; updates
//! replace it wholesale.

use crate::validate::{require, FieldError};
use serde::{Deserialize, Serialize};

/// One impact counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub amount: u64,
    /// Human description of what the amount counts.
    pub title: String,
}

impl StatEntry {
    pub fn new(amount: u64, title: impl Into<String>) -> Self {
        Self {
            amount,
            title: title.into(),
        }
    }
}

/// The platform's aggregate impact counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    #[serde(rename = "fedPeople")]
    pub fed_people: StatEntry,
    #[serde(rename = "providedWithClothing")]
    pub provided_with_clothing: StatEntry,
    #[serde(rename = "providedWithWater")]
    pub provided_with_water: StatEntry,
    #[serde(rename = "receivedMedications")]
    pub received_medications: StatEntry,
    #[serde(rename = "fedAnimals")]
    pub fed_animals: StatEntry,
    #[serde(rename = "providedWithElectricity")]
    pub provided_with_electricity: StatEntry,
}

impl ImpactStats {
    /// The counters in display order, with their wire names.
    pub fn entries(&self) -> [(&'static str, &StatEntry); 6] {
        [
            ("fedPeople", &self.fed_people),
            ("providedWithClothing", &self.provided_with_clothing),
            ("providedWithWater", &self.provided_with_water),
            ("receivedMedications", &self.received_medications),
            ("fedAnimals", &self.fed_animals),
            ("providedWithElectricity", &self.provided_with_electricity),
        ]
    }

    /// Every counter needs a human description before submission.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (name, entry) in self.entries() {
            require(name, &entry.title)?;
        }
        Ok(())
    }
}
