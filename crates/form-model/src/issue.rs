//! Validation issue types.
//!
//! An issue explains why a submit was rejected. A report with no issues is
//! an accepted submit.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::outcome::ValidationOutcome;

/// Validation issue for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    // Name checks
    /// Name is empty or only whitespace
    NameBlank,

    // Email checks
    /// Email is empty
    EmailEmpty,
    /// Email contains a space, tab or line break
    EmailContainsWhitespace,
    /// Email has no `@`
    EmailMissingAt,
    /// Email has an `@` but no local part or no dotted domain
    EmailMalformed,
}

impl Issue {
    /// Stable identifier for reports and logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Issue::NameBlank => "name.blank",
            Issue::EmailEmpty => "email.empty",
            Issue::EmailContainsWhitespace => "email.whitespace",
            Issue::EmailMissingAt => "email.missing_at",
            Issue::EmailMalformed => "email.malformed",
        }
    }

    /// Field the issue belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Issue::NameBlank => Field::Name,
            Issue::EmailEmpty
            | Issue::EmailContainsWhitespace
            | Issue::EmailMissingAt
            | Issue::EmailMalformed => Field::Email,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Issue::NameBlank => "Name must not be blank",
            Issue::EmailEmpty => "Email must not be empty",
            Issue::EmailContainsWhitespace => "Email must not contain whitespace",
            Issue::EmailMissingAt => "Email must contain an @",
            Issue::EmailMalformed => {
                "Email needs a local part and a domain with a dot (user@example.com)"
            }
        }
    }
}

/// Issues found while evaluating one submit, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues attached to one field.
    pub fn issues_for(&self, field: Field) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.field() == field)
    }

    /// Submit outcome: accepted when no issue was found.
    pub fn outcome(&self) -> ValidationOutcome {
        ValidationOutcome::from_valid(!self.has_errors())
    }
}
