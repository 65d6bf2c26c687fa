pub mod copy;
pub mod error;
pub mod field;
pub mod issue;
pub mod outcome;
pub mod state;

pub use copy::{BannerCopy, DEFAULT_ERROR_BANNER, DEFAULT_SUCCESS_BANNER, FormCopy};
pub use error::{ModelError, Result};
pub use field::Field;
pub use issue::{Issue, ValidationReport};
pub use outcome::{BannerKind, ValidationOutcome};
pub use state::FormState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let report = ValidationReport {
            issues: vec![Issue::NameBlank, Issue::EmailMissingAt],
        };
        assert_eq!(report.error_count(), 2);
        assert!(report.has_errors());
        assert_eq!(report.issues_for(Field::Email).count(), 1);
        assert_eq!(report.outcome(), ValidationOutcome::Rejected);
    }

    #[test]
    fn report_serializes() {
        let report = ValidationReport {
            issues: vec![Issue::EmailMalformed],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        assert_eq!(json, r#"{"issues":["email_malformed"]}"#);
        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
