// SPDX-License-Identifier: MPL-2.0
//! Restaurant identity and contact details.

/// Opening hours for a day or range of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub day: String,
    pub open: String,
    pub close: String,
}

/// Primary call to action (e.g. online ordering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// Restaurant name, contact information and hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: Vec<OpeningHours>,
    pub cta: Option<CallToAction>,
    pub instagram: Option<String>,
    pub maps: Option<String>,
}

impl OpeningHours {
    /// Formats the hours as `open – close`.
    #[must_use]
    pub fn span(&self) -> String {
        format!("{} – {}", self.open, self.close)
    }
}
