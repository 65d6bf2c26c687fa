use std::fmt;

use serde::{Deserialize, Serialize};

use crate::copy::BannerCopy;

/// Result of evaluating the form fields.
///
/// `Pending` holds until the first submit and again after any edit that
/// follows a submit. `Accepted` and `Rejected` only come from a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationOutcome {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ValidationOutcome {
    /// Build the submit-time outcome from a validity flag.
    pub const fn from_valid(valid: bool) -> Self {
        if valid { Self::Accepted } else { Self::Rejected }
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Banner kind shown for this outcome, if any.
    pub const fn banner_kind(&self) -> Option<BannerKind> {
        match self {
            Self::Pending => None,
            Self::Accepted => Some(BannerKind::Success),
            Self::Rejected => Some(BannerKind::Error),
        }
    }

    /// Banner text for this outcome. `None` before submit.
    pub fn banner_text<'a>(&self, copy: &'a BannerCopy) -> Option<&'a str> {
        self.banner_kind().map(|kind| copy.text(kind))
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two mutually exclusive banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}
