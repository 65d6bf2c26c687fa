//! Submit scenarios for the form validator.

use form_model::{Field, FormState, Issue, ValidationOutcome};
use form_validate::{check_fields, check_state, submit, validate};

#[test]
fn blank_name_and_bad_email_is_rejected() {
    assert_eq!(validate("", "notvalidemail"), ValidationOutcome::Rejected);

    let report = check_fields("", "notvalidemail");
    assert_eq!(report.issues, vec![Issue::NameBlank, Issue::EmailMissingAt]);
}

#[test]
fn blank_name_and_bare_word_email_is_rejected() {
    assert_eq!(validate("", "Paul"), ValidationOutcome::Rejected);
}

#[test]
fn valid_details_are_accepted() {
    assert_eq!(
        validate("John Doe", "john@gmail.com"),
        ValidationOutcome::Accepted
    );
    assert!(!check_fields("John Doe", "john@gmail.com").has_errors());
}

#[test]
fn mixed_case_email_is_accepted() {
    assert_eq!(
        validate("Paul Hardman", "Paul@Hardman.com"),
        ValidationOutcome::Accepted
    );
}

#[test]
fn blank_name_rejects_a_good_email() {
    let report = check_fields("   ", "john@gmail.com");
    assert_eq!(report.outcome(), ValidationOutcome::Rejected);
    assert_eq!(report.issues, vec![Issue::NameBlank]);
}

#[test]
fn bad_email_rejects_a_good_name() {
    let report = check_fields("John Doe", "john@gmail");
    assert_eq!(report.outcome(), ValidationOutcome::Rejected);
    assert_eq!(report.issues_for(Field::Name).count(), 0);
    assert_eq!(report.issues, vec![Issue::EmailMalformed]);
}

#[test]
fn validate_never_returns_pending() {
    for (name, email) in [("", ""), ("a", "b"), ("a", "b@c.d")] {
        assert!(!validate(name, email).is_pending());
    }
}

#[test]
fn submit_records_outcome_on_state() {
    let mut state = FormState::new();
    assert_eq!(submit(&mut state), ValidationOutcome::Rejected);
    assert!(state.submitted());

    state.set(Field::Name, "John Doe");
    state.set(Field::Email, "john@gmail.com");
    assert_eq!(state.outcome(), ValidationOutcome::Pending);

    assert_eq!(submit(&mut state), ValidationOutcome::Accepted);
    assert_eq!(state.outcome(), ValidationOutcome::Accepted);
}

#[test]
fn resubmitting_unchanged_values_gives_same_outcome() {
    let mut state = FormState::with_values("John Doe", "john@gmail.com");
    let first = submit(&mut state);
    let second = submit(&mut state);
    assert_eq!(first, second);
    assert_eq!(check_state(&state).outcome(), first);
}
