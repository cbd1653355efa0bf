pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::WebhookClient;
pub use crate::config::{SettingsOverrides, SignupSettings};
pub use crate::core::controller::{FieldState, FormController, SubmissionTicket};
pub use crate::core::validator::{validate, validate_field, ValidationResult};
pub use crate::domain::model::{
    Field, FieldEdit, FormStatus, SignupPayload, SignupRequest, SubmissionOutcome,
    SubmissionReceipt,
};
pub use crate::utils::error::{Result, SignupError};
