//! Tests for CSV batch validation.

use form_cli::batch::check_reader;
use form_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, default_directives, redact_value};
use form_model::{Issue, ValidationOutcome};
use tracing::level_filters::LevelFilter;

#[test]
fn rows_are_validated_in_order() {
    let input = "\
name,email
John Doe,john@gmail.com
,notvalidemail
Paul Hardman,Paul@Hardman.com
";
    let result = check_reader(input.as_bytes()).unwrap();

    assert_eq!(result.entries.len(), 3);
    assert_eq!(result.accepted_count(), 2);
    assert_eq!(result.rejected_count(), 1);
    assert!(result.has_rejections());

    let rejected = &result.entries[1];
    assert_eq!(rejected.row, 2);
    assert_eq!(rejected.outcome, ValidationOutcome::Rejected);
    assert_eq!(
        rejected.report.issues,
        vec![Issue::NameBlank, Issue::EmailMissingAt]
    );
}

#[test]
fn headers_are_case_insensitive_and_extra_columns_ignored() {
    let input = "id,Email,NAME\n7,john@gmail.com,John Doe\n";
    let result = check_reader(input.as_bytes()).unwrap();
    assert_eq!(result.entries[0].name, "John Doe");
    assert_eq!(result.entries[0].outcome, ValidationOutcome::Accepted);
    assert!(!result.has_rejections());
}

#[test]
fn missing_column_is_an_error() {
    let error = check_reader("name\nJohn\n".as_bytes()).unwrap_err();
    assert!(error.to_string().contains("missing `email` column"));
}

#[test]
fn short_rows_count_as_empty_fields() {
    let result = check_reader("name,email\nJohn Doe\n".as_bytes()).unwrap();
    assert_eq!(result.entries[0].email, "");
    assert_eq!(result.entries[0].report.issues, vec![Issue::EmailEmpty]);
}

#[test]
fn batch_result_serializes() {
    let result = check_reader("name,email\nJohn Doe,john@gmail.com\n".as_bytes()).unwrap();
    insta::assert_json_snapshot!(result, @r#"
    {
      "entries": [
        {
          "row": 1,
          "name": "John Doe",
          "email": "john@gmail.com",
          "outcome": "accepted",
          "report": {
            "issues": []
          }
        }
      ]
    }
    "#);
}

#[test]
fn field_values_are_redacted_by_default() {
    assert_eq!(redact_value("john@gmail.com"), REDACTED_VALUE);
}

#[test]
fn log_directives_cover_workspace_crates() {
    let config = LogConfig::default()
        .with_level(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_log_data(true);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.log_data);
    assert_eq!(
        default_directives(config.level_filter),
        "warn,form_cli=debug,form_model=debug,form_validate=debug,form_view=debug"
    );
}
