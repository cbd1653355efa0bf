use crate::domain::model::{SignupRequest, SubmissionReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn webhook_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn source_tag(&self) -> &str;
}

/// Delivers a validated signup to the external collaborator.
///
/// Implementations make exactly one attempt per call and report every
/// failure through the returned `Result`.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, request: &SignupRequest) -> Result<SubmissionReceipt>;
}
