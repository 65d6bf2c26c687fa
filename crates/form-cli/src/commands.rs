//! Command implementations shared by the binary and its tests.

use anyhow::{Context, Result};
use form_model::{Field, FormCopy, Issue, ValidationOutcome};
use form_view::{FormEvent, FormSession, View};
use serde::Serialize;
use tracing::{info, info_span};

use crate::batch::BatchResult;
use crate::logging::redact_value;

/// Result of the `check` command.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub outcome: ValidationOutcome,
    pub banner: Option<String>,
    pub issues: Vec<Issue>,
}

impl CheckResult {
    pub fn is_rejected(&self) -> bool {
        self.outcome.is_rejected()
    }

    /// Process exit code: 1 for a rejected submission.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.is_rejected())
    }
}

impl BatchResult {
    /// Process exit code: 1 when any row was rejected.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_rejections())
    }
}

pub fn run_check(name: &str, email: &str, copy: &FormCopy) -> CheckResult {
    let span = info_span!(
        "check",
        name = redact_value(name),
        email = redact_value(email)
    );
    let _guard = span.enter();
    let report = form_validate::check_fields(name, email);
    let outcome = report.outcome();
    info!(%outcome, issues = report.error_count(), "submission checked");
    CheckResult {
        outcome,
        banner: outcome.banner_text(&copy.banners).map(str::to_string),
        issues: report.issues,
    }
}

/// Type the given values into a fresh form, optionally submit, and render it.
pub fn run_render(
    name: Option<&str>,
    email: Option<&str>,
    submit: bool,
    copy: &FormCopy,
) -> View {
    let mut session = FormSession::new(copy.clone());
    for (field, text) in [(Field::Name, name), (Field::Email, email)] {
        if let Some(text) = text {
            session.dispatch(FormEvent::Type {
                field,
                text: text.to_string(),
            });
        }
    }
    if submit {
        let outcome = session.dispatch(FormEvent::Submit);
        info!(%outcome, "form submitted");
    }
    session.render()
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize JSON output")
}
