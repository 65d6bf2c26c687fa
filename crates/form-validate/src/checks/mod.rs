//! Validation check modules.
//!
//! Each module checks a single field.

pub mod email;
pub mod name;

use form_model::ValidationReport;

/// Run all field checks, name first.
pub fn run_all(name: &str, email: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Name presence
    report.extend(name::check(name));

    // 2. Email shape
    report.extend(email::check(email));

    report
}
