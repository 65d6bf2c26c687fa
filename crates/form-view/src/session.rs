//! Interactive form session.
//!
//! A session owns the form values and drives the outcome state machine:
//!
//! ```text
//! Pending --submit(valid)-->   Accepted
//! Pending --submit(invalid)--> Rejected
//! Accepted | Rejected --edit--> Pending
//! ```

use form_model::{BannerKind, Field, FormCopy, FormState, ValidationOutcome};
use tracing::{debug, trace};

use crate::error::{QueryError, Result};
use crate::view::{Element, Role, TextMatch, View};

/// User interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field value.
    Edit { field: Field, value: String },
    /// Type characters at the end of a field.
    Type { field: Field, text: String },
    Clear { field: Field },
    Submit,
}

/// Banner currently shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn role(&self) -> Role {
        match self.kind {
            BannerKind::Success => Role::Status,
            BannerKind::Error => Role::Alert,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    copy: FormCopy,
    state: FormState,
}

impl FormSession {
    pub fn new(copy: FormCopy) -> Self {
        Self {
            copy,
            state: FormState::new(),
        }
    }

    pub fn copy(&self) -> &FormCopy {
        &self.copy
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn outcome(&self) -> ValidationOutcome {
        self.state.outcome()
    }

    /// Apply one event and return the resulting outcome.
    pub fn dispatch(&mut self, event: FormEvent) -> ValidationOutcome {
        match event {
            FormEvent::Edit { field, value } => {
                trace!(%field, "field edited");
                self.state.set(field, value);
            }
            FormEvent::Type { field, text } => {
                trace!(%field, chars = text.chars().count(), "text typed");
                self.state.append(field, &text);
            }
            FormEvent::Clear { field } => {
                trace!(%field, "field cleared");
                self.state.clear(field);
            }
            FormEvent::Submit => {
                let outcome = form_validate::submit(&mut self.state);
                debug!(%outcome, "form submitted");
            }
        }
        self.state.outcome()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> ValidationOutcome {
        self.dispatch(FormEvent::Edit {
            field,
            value: value.into(),
        })
    }

    pub fn type_text(&mut self, field: Field, text: impl Into<String>) -> ValidationOutcome {
        self.dispatch(FormEvent::Type {
            field,
            text: text.into(),
        })
    }

    pub fn clear(&mut self, field: Field) -> ValidationOutcome {
        self.dispatch(FormEvent::Clear { field })
    }

    pub fn submit(&mut self) -> ValidationOutcome {
        self.dispatch(FormEvent::Submit)
    }

    /// Type into the textbox found by `label` in the current render.
    pub fn type_into_label(
        &mut self,
        label: impl Into<TextMatch>,
        text: impl Into<String>,
    ) -> Result<ValidationOutcome> {
        let label = label.into();
        let view = self.render();
        let element = view.get_by_label(label.clone())?;
        let field = element.field.ok_or_else(|| QueryError::NotAField {
            query: format!("with label {label}"),
        })?;
        Ok(self.type_text(field, text))
    }

    /// Click the button found by `name`. Every button on the form submits it.
    pub fn click(&mut self, name: impl Into<TextMatch>) -> Result<ValidationOutcome> {
        self.render().get_by_role_named(Role::Button, name)?;
        Ok(self.submit())
    }

    pub fn banner(&self) -> Option<Banner> {
        let kind = self.outcome().banner_kind()?;
        Some(Banner {
            kind,
            text: self.copy.banners.text(kind).to_string(),
        })
    }

    pub fn render(&self) -> View {
        let mut elements = vec![Element::new(Role::Form, &self.copy.title)];
        for field in Field::all().iter().copied() {
            elements.push(
                Element::textbox(field, self.copy.label(field), self.state.value(field))
                    .placeholder(self.copy.placeholder(field)),
            );
        }
        elements.push(Element::with_text(Role::Button, &self.copy.submit_label));
        if let Some(banner) = self.banner() {
            elements.push(Element::with_text(banner.role(), &banner.text));
        }
        View::new(elements)
    }
}
