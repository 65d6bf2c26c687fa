//! Batch validation of submissions read from CSV.
//!
//! The input needs a `name` and an `email` column (header match is
//! case-insensitive); other columns are ignored. Cell values are used as-is,
//! so surrounding whitespace counts against the email.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use form_model::{Field, ValidationOutcome, ValidationReport};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// One validated CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub name: String,
    pub email: String,
    pub outcome: ValidationOutcome,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
}

impl BatchResult {
    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_accepted())
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_rejected())
            .count()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected_count() > 0
    }
}

pub fn check_file(path: &Path) -> Result<BatchResult> {
    let span = info_span!("batch", path = %path.display());
    let _guard = span.enter();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    check_reader(file).with_context(|| format!("read {}", path.display()))
}

pub fn check_reader<R: Read>(reader: R) -> Result<BatchResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers().context("read CSV header")?.clone();
    let name_index = column_index(&headers, Field::Name)?;
    let email_index = column_index(&headers, Field::Email)?;

    let mut result = BatchResult::default();
    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = record.with_context(|| format!("read CSV row {row}"))?;
        let name = record.get(name_index).unwrap_or_default().to_string();
        let email = record.get(email_index).unwrap_or_default().to_string();
        let report = form_validate::check_fields(&name, &email);
        let outcome = report.outcome();
        if outcome.is_rejected() {
            debug!(
                row,
                email = redact_value(&email),
                issues = report.error_count(),
                "submission rejected"
            );
        } else {
            debug!(row, name = redact_value(&name), "submission accepted");
        }
        result.entries.push(BatchEntry {
            row,
            name,
            email,
            outcome,
            report,
        });
    }
    info!(
        rows = result.entries.len(),
        accepted = result.accepted_count(),
        rejected = result.rejected_count(),
        "batch complete"
    );
    Ok(result)
}

fn column_index(headers: &csv::StringRecord, field: Field) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.parse::<Field>().is_ok_and(|parsed| parsed == field))
        .ok_or_else(|| anyhow!("missing `{field}` column in CSV header"))
}
