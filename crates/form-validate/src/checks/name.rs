//! Name presence check.

use form_model::Issue;

/// Name must contain at least one non-whitespace character.
pub fn check(name: &str) -> Option<Issue> {
    is_blank(name).then_some(Issue::NameBlank)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
