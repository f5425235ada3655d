//! Console UI copy
//!
//! The console's own labels, as one key→string table per locale resolved at
//! render time. Long-form site content never lives here, only the strings
//! the console itself shows.

use shared::Locale;

/// Keys for the console's UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKey {
    CollectionsTitle,
    PartnersTitle,
    ReportsTitle,
    TeammatesTitle,
    MerchTitle,
    StatsTitle,
    UsersTitle,
    DashboardTitle,
    LanguageLabel,
    LoadingLabel,
    NoRecords,
    NoMerchSettings,
    ConfirmDelete,
    DeleteWarning,
    SaveAction,
    CancelAction,
    MutationFailed,
}

/// Resolve one UI string for a locale.
pub fn label(locale: Locale, key: CopyKey) -> &'static str {
    match locale {
        Locale::Ua => ua(key),
        Locale::En => en(key),
    }
}

fn ua(key: CopyKey) -> &'static str {
    match key {
        CopyKey::CollectionsTitle => "Управління зборами",
        CopyKey::PartnersTitle => "Управління партнерами",
        CopyKey::ReportsTitle => "Управління звітами",
        CopyKey::TeammatesTitle => "Управління командою",
        CopyKey::MerchTitle => "Управління мерчем",
        CopyKey::StatsTitle => "Управління статистикою",
        CopyKey::UsersTitle => "Управління користувачами",
        CopyKey::DashboardTitle => "Панель керування",
        CopyKey::LanguageLabel => "Мова",
        CopyKey::LoadingLabel => "Завантаження...",
        CopyKey::NoRecords => "Записів не знайдено",
        CopyKey::NoMerchSettings => "Налаштування мерчу не знайдено для",
        CopyKey::ConfirmDelete => "Видалити запис?",
        CopyKey::DeleteWarning => "Цю дію неможливо скасувати",
        CopyKey::SaveAction => "Зберегти",
        CopyKey::CancelAction => "Скасувати",
        CopyKey::MutationFailed => "Не вдалося зберегти зміни",
    }
}

fn en(key: CopyKey) -> &'static str {
    match key {
        CopyKey::CollectionsTitle => "Collections Management",
        CopyKey::PartnersTitle => "Partners Management",
        CopyKey::ReportsTitle => "Reports Management",
        CopyKey::TeammatesTitle => "Team Management",
        CopyKey::MerchTitle => "Merch Management",
        CopyKey::StatsTitle => "Stats Management",
        CopyKey::UsersTitle => "Users Management",
        CopyKey::DashboardTitle => "Dashboard",
        CopyKey::LanguageLabel => "Language",
        CopyKey::LoadingLabel => "Loading...",
        CopyKey::NoRecords => "No records found",
        CopyKey::NoMerchSettings => "No merch settings found for",
        CopyKey::ConfirmDelete => "Delete this record?",
        CopyKey::DeleteWarning => "This action cannot be undone",
        CopyKey::SaveAction => "Save",
        CopyKey::CancelAction => "Cancel",
        CopyKey::MutationFailed => "Failed to save changes",
    }
}
