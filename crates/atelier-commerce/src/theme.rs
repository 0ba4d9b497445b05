//! Site theme settings.
//!
//! Edited from the admin console, applied globally by the storefront shell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site-wide theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Named palette entries (name -> hex), e.g. "primary" -> "#1a1a1a".
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    /// Font family for headings.
    pub heading_font: String,
    /// Font family for body text.
    pub body_font: String,
    /// Announcement banner text.
    #[serde(default)]
    pub announcement: Option<String>,
    /// Whether the announcement banner is shown.
    #[serde(default)]
    pub announcement_enabled: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        let mut palette = BTreeMap::new();
        palette.insert("primary".to_string(), "#1a1a1a".to_string());
        palette.insert("accent".to_string(), "#b08d57".to_string());
        palette.insert("background".to_string(), "#faf8f5".to_string());

        Self {
            palette,
            heading_font: "Playfair Display".to_string(),
            body_font: "Inter".to_string(),
            announcement: None,
            announcement_enabled: false,
        }
    }
}

impl ThemeSettings {
    /// Look up a palette entry by name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.palette.get(name).map(String::as_str)
    }

    /// Set or replace a palette entry.
    pub fn set_color(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        self.palette.insert(name.into(), hex.into());
    }

    /// The banner text to render, if the banner is enabled and non-empty.
    pub fn visible_announcement(&self) -> Option<&str> {
        if !self.announcement_enabled {
            return None;
        }
        self.announcement
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Check a palette value is a well-formed hex color ("#rgb" or "#rrggbb").
pub fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
