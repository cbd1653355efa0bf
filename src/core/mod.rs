pub mod controller;
pub mod validator;

pub use crate::domain::model::{FormStatus, SignupRequest, SubmissionOutcome, SubmissionReceipt};
pub use crate::domain::ports::{ConfigProvider, SubmissionClient};
pub use crate::utils::error::Result;
