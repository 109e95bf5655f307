//! Engine crate for the job-board client.
//!
//! Holds everything the UI shell does not: typed form state for the resume
//! and job-posting wizards, step gating, pure validators, payload shaping,
//! and the HTTP boundary to the backend API and automation webhooks. The
//! shell owns rendering and input; this crate owns the rules.

pub mod api;
pub mod config;
pub mod errors;
pub mod flows;
pub mod forms;
pub mod logging;
pub mod models;
pub mod submit;
pub mod wizard;

pub use config::Config;
pub use errors::ClientError;
