//! Email shape check.
//!
//! Accepts anything shaped like `local@domain.tld`: no whitespace, a
//! non-empty local part, an `@`, and a domain with a dot that has at least
//! one character on each side. Case is irrelevant.

use std::sync::LazyLock;

use form_model::Issue;
use regex::Regex;

static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Invalid email shape regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(email)
}

/// Check the email shape, naming the first thing that is wrong with it.
pub fn check(email: &str) -> Option<Issue> {
    if is_valid_email(email) {
        return None;
    }
    let issue = if email.trim().is_empty() {
        Issue::EmailEmpty
    } else if email.chars().any(char::is_whitespace) {
        Issue::EmailContainsWhitespace
    } else if !email.contains('@') {
        Issue::EmailMissingAt
    } else {
        Issue::EmailMalformed
    };
    Some(issue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "john@gmail.com",
            "Paul@Hardman.com",
            "first.last+tag@sub.example.co.uk",
            "a@b.c",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
            assert_eq!(check(email), None);
        }
    }

    #[test]
    fn reports_first_problem() {
        assert_eq!(check(""), Some(Issue::EmailEmpty));
        assert_eq!(check("  "), Some(Issue::EmailEmpty));
        assert_eq!(
            check("user @example.com"),
            Some(Issue::EmailContainsWhitespace)
        );
        assert_eq!(
            check(" john@gmail.com"),
            Some(Issue::EmailContainsWhitespace)
        );
        assert_eq!(check("notvalidemail"), Some(Issue::EmailMissingAt));
        assert_eq!(check("Paul"), Some(Issue::EmailMissingAt));
        assert_eq!(check("@example.com"), Some(Issue::EmailMalformed));
        assert_eq!(check("user@example"), Some(Issue::EmailMalformed));
        assert_eq!(check("user@.com"), Some(Issue::EmailMalformed));
        assert_eq!(check("user@example."), Some(Issue::EmailMalformed));
    }
}
