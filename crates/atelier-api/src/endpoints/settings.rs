//! Theme settings endpoints.

use crate::client::ApiClient;
use crate::error::FetchError;
use atelier_commerce::theme::ThemeSettings;

impl ApiClient {
    /// Fetch the active theme settings.
    pub fn theme_settings(&self) -> Result<ThemeSettings, FetchError> {
        self.send(self.get("/settings/theme"))?
            .error_for_status()?
            .json()
    }

    /// Replace the theme settings (admin).
    pub fn update_theme(&self, theme: &ThemeSettings) -> Result<ThemeSettings, FetchError> {
        self.send(self.put("/settings/theme").json(theme)?)?
            .error_for_status()?
            .json()
    }
}
