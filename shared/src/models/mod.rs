//! Domain models mirrored from the platform API

pub mod collection;
pub mod merch;
pub mod partner;
pub mod report;
pub mod stats;
pub mod teammate;

pub use collection::{
    Collection, CollectionCreate, CollectionStatus, CollectionUpdate, CollectionsPage, Importance,
    LongDescription, PaginatedCollections,
};
pub use merch::{Merch, MerchStatus, MerchUpdate};
pub use partner::{Partner, PartnerCreate, PartnerUpdate};
pub use report::{Report, ReportCreate, ReportUpdate};
pub use stats::{ImpactStats, StatEntry};
pub use teammate::{Teammate, TeammateCreate, TeammateGroup, TeammateUpdate, TeammatesWire};
