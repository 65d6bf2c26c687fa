//! User-facing strings of the form.
//!
//! All values can be overridden from a config file; missing keys fall back
//! to the defaults below.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::outcome::BannerKind;

pub const DEFAULT_SUCCESS_BANNER: &str = "Thank you for submitting! We'll be in touch";
pub const DEFAULT_ERROR_BANNER: &str = "Sorry something went wrong";

/// Banner texts keyed by outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerCopy {
    /// Shown after an accepted submit.
    pub success: String,
    /// Shown after a rejected submit.
    pub error: String,
}

impl Default for BannerCopy {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_BANNER.to_string(),
            error: DEFAULT_ERROR_BANNER.to_string(),
        }
    }
}

impl BannerCopy {
    pub fn text(&self, kind: BannerKind) -> &str {
        match kind {
            BannerKind::Success => &self.success,
            BannerKind::Error => &self.error,
        }
    }
}

/// Labels, placeholder and banners for one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCopy {
    /// Accessible name of the form region.
    pub title: String,
    pub name_label: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub submit_label: String,
    pub banners: BannerCopy,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            title: "Contact".to_string(),
            name_label: "Name".to_string(),
            email_label: "Email".to_string(),
            email_placeholder: "e.g. test@test.com".to_string(),
            submit_label: "Sign In".to_string(),
            banners: BannerCopy::default(),
        }
    }
}

impl FormCopy {
    /// Label rendered next to a field.
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_label,
            Field::Email => &self.email_label,
        }
    }

    /// Placeholder text for a field, if it has one.
    pub fn placeholder(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => None,
            Field::Email => Some(&self.email_placeholder),
        }
    }
}
