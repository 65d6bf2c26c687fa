use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::outcome::ValidationOutcome;

/// Current values of the form and the outcome of the last submit.
///
/// Every edit resets the outcome to [`ValidationOutcome::Pending`], so a
/// shown banner always describes the values currently in the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    name: String,
    email: String,
    outcome: ValidationOutcome,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State pre-filled with values, not yet submitted.
    pub fn with_values(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            outcome: ValidationOutcome::Pending,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
        }
    }

    pub fn outcome(&self) -> ValidationOutcome {
        self.outcome
    }

    /// True once a submit has been evaluated for the current values.
    pub fn submitted(&self) -> bool {
        !self.outcome.is_pending()
    }

    /// Overwrite a field value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.outcome = ValidationOutcome::Pending;
    }

    /// Append text to a field value.
    pub fn append(&mut self, field: Field, text: &str) {
        self.value_mut(field).push_str(text);
        self.outcome = ValidationOutcome::Pending;
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, String::new());
    }

    /// Record the outcome of a submit.
    ///
    /// A `Pending` outcome is ignored: only an evaluation can mark the form
    /// as submitted.
    pub fn record_submission(&mut self, outcome: ValidationOutcome) {
        if outcome.is_pending() {
            return;
        }
        self.outcome = outcome;
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
        }
    }
}
