//! Page scaffolding
//!
//! The state every resource page shares: the selected locale driving which
//! cache keys are active, the dialog flow, a queue of transient notices, and
//! pagination where the resource is paginated.

use crate::views::copy::{label, CopyKey};
use crate::views::dialog::DialogState;
use shared::{Locale, Pagination};
use std::collections::VecDeque;

/// Kind of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-facing notice (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Shared state of one resource page.
#[derive(Debug)]
pub struct ResourcePage<T> {
    pub locale: Locale,
    pub dialog: DialogState<T>,
    notices: VecDeque<Notice>,
}

impl<T> ResourcePage<T> {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            dialog: DialogState::Closed,
            notices: VecDeque::new(),
        }
    }

    /// Switch the active locale. Any open dialog refers to a row of the old
    /// locale, so it closes.
    pub fn switch_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            self.locale = locale;
            self.dialog.close();
        }
    }

    /// Queue a success notice.
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        });
    }

    /// Queue a failure notice. Mutation failures surface here; no local
    /// state is rolled back because none was changed.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    /// Pop the next notice to show, oldest first.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}

/// Pagination cursor for the collections table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(crate::api::collections::DEFAULT_PER_PAGE)
    }
}

impl Pager {
    pub fn new(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    /// Advance if the server reported a further page.
    pub fn next(&mut self, pagination: &Pagination) {
        if pagination.has_next() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump back to the first page (used when the locale switches).
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// Empty-state line for the merch page when a locale has no settings yet,
/// e.g. "No merch settings found for EN".
pub fn merch_empty_message(ui_locale: Locale, target: Locale) -> String {
    format!(
        "{} {}",
        label(ui_locale, CopyKey::NoMerchSettings),
        target.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_switch_closes_the_dialog() {
        let mut page: ResourcePage<&str> = ResourcePage::new(Locale::Ua);
        page.dialog.open_edit("row");
        page.switch_locale(Locale::En);
        assert!(!page.dialog.is_open());

        // switching to the same locale is a no-op
        page.dialog.open_edit("row");
        page.switch_locale(Locale::En);
        assert!(page.dialog.is_open());
    }

    #[test]
    fn notices_drain_oldest_first() {
        let mut page: ResourcePage<&str> = ResourcePage::new(Locale::Ua);
        page.notify_error("first");
        page.notify_success("second");

        assert_eq!(page.take_notice().unwrap().message, "first");
        assert_eq!(page.take_notice().unwrap().kind, NoticeKind::Success);
        assert_eq!(page.take_notice(), None);
    }

    #[test]
    fn pager_respects_server_bounds() {
        let pagination = Pagination {
            total_items: 7,
            total_pages: 2,
            current_page: 1,
            per_page: 6,
        };
        let mut pager = Pager::new(6);
        pager.prev();
        assert_eq!(pager.page, 1);

        pager.next(&pagination);
        assert_eq!(pager.page, 2);

        let last = Pagination {
            current_page: 2,
            ..pagination
        };
        pager.next(&last);
        assert_eq!(pager.page, 2);
    }

    #[test]
    fn merch_empty_state_names_the_locale() {
        assert_eq!(
            merch_empty_message(Locale::En, Locale::En),
            "No merch settings found for EN"
        );
    }
}
