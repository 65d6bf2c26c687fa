//! CLI library components for the contact form validator.

pub mod batch;
pub mod commands;
pub mod config;
pub mod logging;
