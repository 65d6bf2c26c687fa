//! Property-based tests for the form validator.

use form_model::ValidationOutcome;
use form_validate::{check_fields, is_valid_email, validate};
use proptest::prelude::*;

/// Strategy for non-blank names.
fn name_strategy() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z][A-Za-z .'-]{0,20}"
}

/// Strategy for names made only of whitespace.
fn blank_name_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

/// Strategy for emails shaped like `local@domain.tld`.
fn email_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._%+-]{1,12}@[A-Za-z0-9-]{1,12}(\\.[A-Za-z0-9-]{1,8}){1,3}"
}

/// Strategy for strings without an `@`.
fn no_at_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9. ]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn present_name_and_shaped_email_are_accepted(
        name in name_strategy(),
        email in email_strategy(),
    ) {
        prop_assert_eq!(validate(&name, &email), ValidationOutcome::Accepted);
    }

    #[test]
    fn blank_name_is_always_rejected(
        name in blank_name_strategy(),
        email in ".{0,30}",
    ) {
        prop_assert_eq!(validate(&name, &email), ValidationOutcome::Rejected);
    }

    #[test]
    fn email_without_at_is_always_rejected(
        name in ".{0,20}",
        email in no_at_strategy(),
    ) {
        prop_assert!(!is_valid_email(&email));
        prop_assert_eq!(validate(&name, &email), ValidationOutcome::Rejected);
    }

    #[test]
    fn email_with_whitespace_is_always_rejected(
        name in name_strategy(),
        email in email_strategy(),
        at in 0usize..8,
    ) {
        let mut broken = email.clone();
        let index = broken
            .char_indices()
            .map(|(i, _)| i)
            .nth(at % email.chars().count())
            .unwrap_or(0);
        broken.insert(index, ' ');
        prop_assert_eq!(validate(&name, &broken), ValidationOutcome::Rejected);
    }

    #[test]
    fn email_case_does_not_matter(
        name in name_strategy(),
        email in email_strategy(),
    ) {
        prop_assert_eq!(
            validate(&name, &email.to_uppercase()),
            validate(&name, &email.to_lowercase())
        );
    }

    #[test]
    fn validate_is_idempotent(name in ".{0,20}", email in ".{0,30}") {
        let first = validate(&name, &email);
        prop_assert_eq!(validate(&name, &email), first);
        prop_assert!(!first.is_pending());
    }

    #[test]
    fn report_agrees_with_outcome(name in ".{0,20}", email in ".{0,30}") {
        let report = check_fields(&name, &email);
        prop_assert_eq!(report.outcome(), validate(&name, &email));
        prop_assert!(report.error_count() <= 2);
    }
}
