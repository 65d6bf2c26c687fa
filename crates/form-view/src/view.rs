//! Headless render tree and element queries.
//!
//! Elements are addressed the way a user finds them: by role, accessible
//! name, label, visible text or placeholder. `get_*` queries require exactly
//! one match; `query_*` queries allow none.

use std::fmt;

use form_model::Field;
use regex::Regex;
use serde::Serialize;

use crate::error::{QueryError, Result};

/// Accessible role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Form,
    Textbox,
    Button,
    /// Success banner
    Status,
    /// Error banner
    Alert,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Textbox => "textbox",
            Self::Button => "button",
            Self::Status => "status",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub role: Role,
    /// Accessible name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Visible text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Backing form field for text inputs.
    #[serde(skip)]
    pub field: Option<Field>,
}

impl Element {
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            label: None,
            value: None,
            placeholder: None,
            text: None,
            field: None,
        }
    }

    /// Text input bound to a form field, labelled and named by `label`.
    pub fn textbox(field: Field, label: &str, value: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            value: Some(value.to_string()),
            field: Some(field),
            ..Self::new(Role::Textbox, label)
        }
    }

    /// Element whose visible text is also its accessible name.
    pub fn with_text(role: Role, text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::new(role, text)
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: Option<&str>) -> Self {
        self.placeholder = placeholder.map(str::to_string);
        self
    }
}

/// How a query matches a string.
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    Pattern(Regex),
}

impl TextMatch {
    /// Build a regex matcher, e.g. `(?i)sign in`.
    pub fn pattern(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(expected) => candidate == expected,
            Self::Pattern(regex) => regex.is_match(candidate),
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(expected) => write!(f, "{expected:?}"),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl From<Regex> for TextMatch {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

/// A rendered form. The first element is the form region; the rest are its
/// children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    elements: Vec<Element>,
}

impl View {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get_by_role(&self, role: Role) -> Result<&Element> {
        self.single(format!("with role {role}"), |e| e.role == role)
    }

    pub fn query_by_role(&self, role: Role) -> Result<Option<&Element>> {
        self.optional(format!("with role {role}"), |e| e.role == role)
    }

    pub fn get_by_role_named(&self, role: Role, name: impl Into<TextMatch>) -> Result<&Element> {
        let name = name.into();
        self.single(format!("with role {role} and name {name}"), |e| {
            e.role == role && name.matches(&e.name)
        })
    }

    pub fn get_all_by_role(&self, role: Role) -> Result<Vec<&Element>> {
        let matches = self.find(|e| e.role == role);
        if matches.is_empty() {
            return Err(QueryError::NotFound {
                query: format!("with role {role}"),
            });
        }
        Ok(matches)
    }

    pub fn get_by_label(&self, label: impl Into<TextMatch>) -> Result<&Element> {
        let label = label.into();
        self.single(format!("with label {label}"), |e| {
            e.label.as_deref().is_some_and(|l| label.matches(l))
        })
    }

    pub fn query_by_label(&self, label: impl Into<TextMatch>) -> Result<Option<&Element>> {
        let label = label.into();
        self.optional(format!("with label {label}"), |e| {
            e.label.as_deref().is_some_and(|l| label.matches(l))
        })
    }

    pub fn get_by_text(&self, text: impl Into<TextMatch>) -> Result<&Element> {
        let text = text.into();
        self.single(format!("with text {text}"), |e| {
            e.text.as_deref().is_some_and(|t| text.matches(t))
        })
    }

    pub fn query_by_text(&self, text: impl Into<TextMatch>) -> Result<Option<&Element>> {
        let text = text.into();
        self.optional(format!("with text {text}"), |e| {
            e.text.as_deref().is_some_and(|t| text.matches(t))
        })
    }

    pub fn get_by_placeholder(&self, placeholder: impl Into<TextMatch>) -> Result<&Element> {
        let placeholder = placeholder.into();
        self.single(format!("with placeholder {placeholder}"), |e| {
            e.placeholder
                .as_deref()
                .is_some_and(|p| placeholder.matches(p))
        })
    }

    fn find(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements.iter().filter(|&e| predicate(e)).collect()
    }

    fn single(&self, query: String, predicate: impl Fn(&Element) -> bool) -> Result<&Element> {
        self.optional(query.clone(), predicate)?
            .ok_or(QueryError::NotFound { query })
    }

    fn optional(
        &self,
        query: String,
        predicate: impl Fn(&Element) -> bool,
    ) -> Result<Option<&Element>> {
        let matches = self.find(predicate);
        match matches.as_slice() {
            [] => Ok(None),
            [element] => Ok(Some(*element)),
            _ => Err(QueryError::Multiple {
                query,
                count: matches.len(),
            }),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.elements.iter().enumerate() {
            let indent = if index == 0 { "" } else { "  " };
            write!(f, "{indent}{} {:?}", element.role, element.name)?;
            if let Some(value) = &element.value {
                write!(f, " value={value:?}")?;
            }
            if let Some(placeholder) = &element.placeholder {
                write!(f, " placeholder={placeholder:?}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
