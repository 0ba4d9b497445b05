//! Shipping address.

use serde::{Deserialize, Serialize};

/// A shipping address as collected by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient full name.
    pub full_name: String,
    /// Street address, line 1.
    pub line1: String,
    /// Street address, line 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// State, province or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// ISO country code (e.g., "US").
    pub country: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShippingAddress {
    /// Check that all required fields are filled in.
    ///
    /// The backend validates again; this only gates the submit button.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.line1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.postal_code.trim().is_empty()
            && !self.country.trim().is_empty()
    }

    /// Missing required field names, for form error display.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("fullName");
        }
        if self.line1.trim().is_empty() {
            missing.push("line1");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.postal_code.trim().is_empty() {
            missing.push("postalCode");
        }
        if self.country.trim().is_empty() {
            missing.push("country");
        }
        missing
    }
}
