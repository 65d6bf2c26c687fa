//! Contact form validation.
//!
//! Decides whether a submit is accepted from the current name and email.
//! Invalid input is a normal [`ValidationOutcome::Rejected`], never an error.
//!
//! ```
//! use form_model::ValidationOutcome;
//! use form_validate::validate;
//!
//! assert_eq!(validate("John Doe", "john@gmail.com"), ValidationOutcome::Accepted);
//! assert_eq!(validate("", "notvalidemail"), ValidationOutcome::Rejected);
//! ```

pub mod checks;

use form_model::{FormState, ValidationOutcome, ValidationReport};
use tracing::debug;

pub use checks::email::is_valid_email;
pub use checks::name::is_blank;

/// Evaluate a submit. Returns `Accepted` or `Rejected`, never `Pending`.
pub fn validate(name: &str, email: &str) -> ValidationOutcome {
    check_fields(name, email).outcome()
}

/// Evaluate a submit and keep the per-field issues.
pub fn check_fields(name: &str, email: &str) -> ValidationReport {
    let report = checks::run_all(name, email);
    debug!(
        outcome = %report.outcome(),
        issues = report.error_count(),
        "evaluated form fields"
    );
    report
}

/// Evaluate the values currently held by a form state.
pub fn check_state(state: &FormState) -> ValidationReport {
    check_fields(state.name(), state.email())
}

/// Evaluate the current values and record the outcome on the state.
pub fn submit(state: &mut FormState) -> ValidationOutcome {
    let outcome = check_state(state).outcome();
    state.record_submission(outcome);
    outcome
}
