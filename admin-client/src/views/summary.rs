//! Client-side summaries
//!
//! The numbers on the pages' stat cards are reduced from the currently
//! loaded lists, never requested from the server. They describe what the
//! operator is looking at, not the whole database.

use rust_decimal::Decimal;
use shared::models::{Collection, CollectionStatus, Importance, Merch, Partner, Report, Teammate};
use shared::{Locale, Role, User};

/// Stat cards for the collections page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionsSummary {
    pub total: usize,
    pub active: usize,
    pub closed: usize,
    pub urgent: usize,
    /// Sum of collected amounts over the loaded rows.
    pub collected: Decimal,
    /// Sum of target amounts over the loaded rows.
    pub target: Decimal,
    /// Sum of donor counts over the loaded rows.
    pub donors: u64,
}

impl CollectionsSummary {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Collection>) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.total += 1;
            match row.status {
                CollectionStatus::Active => summary.active += 1,
                CollectionStatus::Closed => summary.closed += 1,
            }
            if row.importance == Importance::Urgent {
                summary.urgent += 1;
            }
            summary.collected += row.collected;
            summary.target += row.target;
            summary.donors += row.people_donate;
        }
        summary
    }
}

/// Stat cards for the users page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersSummary {
    pub total: usize,
    pub admins: usize,
    pub editors: usize,
}

impl UsersSummary {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a User>) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.total += 1;
            match row.role {
                Role::Admin => summary.admins += 1,
                Role::Editor => summary.editors += 1,
                Role::User => {}
            }
        }
        summary
    }
}

/// Per-resource counts for the dashboard, scoped to the selected locale
/// where the resource is locale-partitioned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub collections: usize,
    pub partners: usize,
    pub reports: usize,
    pub teammates: usize,
    pub users: usize,
    pub merch: usize,
}

impl DashboardCounts {
    #[allow(clippy::too_many_arguments)]
    pub fn for_locale(
        locale: Locale,
        collections: &[Collection],
        partners: &[Partner],
        reports: &[Report],
        teammates: &[Teammate],
        users: &[User],
        merch: &[Merch],
    ) -> Self {
        Self {
            collections: collections.len(),
            partners: partners.iter().filter(|p| p.language == locale).count(),
            reports: reports.iter().filter(|r| r.language == locale).count(),
            teammates: teammates.len(),
            users: users.len(),
            merch: merch.iter().filter(|m| m.locale == locale).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::LongDescription;

    fn collection(status: CollectionStatus, importance: Importance, collected: i64) -> Collection {
        Collection {
            id: "c".into(),
            title: "T".into(),
            image: Default::default(),
            collected: Decimal::new(collected, 0),
            target: Decimal::new(1000, 0),
            alt: String::new(),
            people_donate: 10,
            people_donate_title: "donors".into(),
            desc: "d".into(),
            days: None,
            period: None,
            quantity: None,
            currency: None,
            language: Locale::Ua,
            long_desc: LongDescription::default(),
            status,
            value: String::new(),
            importance,
            created_at: None,
        }
    }

    #[test]
    fn collections_summary_counts_and_sums() {
        let rows = [
            collection(CollectionStatus::Active, Importance::Urgent, 100),
            collection(CollectionStatus::Active, Importance::Permanent, 250),
            collection(CollectionStatus::Closed, Importance::Urgent, 1000),
        ];
        let summary = CollectionsSummary::from_rows(&rows);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.closed, 1);
        assert_eq!(summary.urgent, 2);
        assert_eq!(summary.collected, Decimal::new(1350, 0));
        assert_eq!(summary.target, Decimal::new(3000, 0));
        assert_eq!(summary.donors, 30);
    }

    #[test]
    fn empty_list_reduces_to_zeroes() {
        let summary = CollectionsSummary::from_rows([]);
        assert_eq!(summary, CollectionsSummary::default());
    }
}
