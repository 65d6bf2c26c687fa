//! Headless rendering of the contact form.
//!
//! [`FormSession`] holds the field values and the submit outcome and renders
//! them into a [`View`] that can be queried by role, label, text or
//! placeholder.

pub mod error;
pub mod session;
pub mod view;

pub use error::{QueryError, Result};
pub use session::{Banner, FormEvent, FormSession};
pub use view::{Element, Role, TextMatch, View};
