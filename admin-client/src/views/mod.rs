//! View models
//!
//! Toolkit-agnostic state behind the console's pages: locale switching,
//! dialog flow, client-side summary cards, transient notices, and the
//! console's own UI copy. Whatever renders these (terminal, desktop shell,
//! web view) holds no logic of its own.

pub mod copy;
pub mod dialog;
pub mod pages;
pub mod summary;

pub use copy::{label, CopyKey};
pub use dialog::DialogState;
pub use pages::{merch_empty_message, Notice, NoticeKind, Pager, ResourcePage};
pub use summary::{CollectionsSummary, DashboardCounts, UsersSummary};
