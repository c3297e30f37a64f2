//! i18n - Internationalization Module
//!
//! Grid labels backed by rust-i18n; translations live in `locales/`.

use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Locale code as used by the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh-CN",
        }
    }
}

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).into_owned()
}

/// "Page 2 of 7"
pub fn page_of(locale: Locale, current: usize, total: usize) -> String {
    t!("grid.page_of", locale = locale.code(), current = current, total = total).into_owned()
}

/// "25 items"
pub fn item_count(locale: Locale, count: usize) -> String {
    t!("grid.items", locale = locale.code(), count = count).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        assert_eq!(tr(Locale::EnUS, "grid.next"), "Next");
        assert_eq!(page_of(Locale::EnUS, 1, 3), "Page 1 of 3");
        assert_eq!(item_count(Locale::EnUS, 25), "25 items");
    }

    #[test]
    fn test_chinese_labels() {
        assert_eq!(tr(Locale::ZhCN, "grid.no_data"), "无数据");
        assert_eq!(page_of(Locale::ZhCN, 2, 5), "第 2 页，共 5 页");
    }
}
