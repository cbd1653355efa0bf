use crate::domain::model::{SignupPayload, SignupRequest, SubmissionReceipt};
use crate::domain::ports::{ConfigProvider, SubmissionClient};
use crate::utils::error::{Result, SignupError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Posts signups to the configured webhook, one attempt per submission.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
    timeout: Duration,
    source: String,
}

impl WebhookClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SignupError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            url: config.webhook_url().to_string(),
            timeout: config.request_timeout(),
            source: config.source_tag().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn post_payload(&self, payload: &SignupPayload) -> Result<SubmissionReceipt> {
        tracing::debug!(
            "📡 POST {} for {} (source: {})",
            self.url,
            mask_email(&payload.request.email),
            payload.source
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_vec(payload)?)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!("📡 Webhook response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            tracing::warn!("Webhook rejected signup with HTTP {}", status.as_u16());
            return Err(SignupError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SignupError::MalformedResponse {
                message: format!("{} (body: {:?})", e, truncate(&body, 200)),
            })?;

        tracing::info!("✅ Signup delivered to webhook (HTTP {})", status.as_u16());
        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
        })
    }

    /// The webhook URL carries its secret token, so it is stripped before logging.
    fn transport_error(&self, e: reqwest::Error) -> SignupError {
        let e = e.without_url();
        if e.is_timeout() {
            tracing::warn!("Webhook request timed out after {:?}", self.timeout);
            SignupError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            tracing::warn!("Webhook request failed: {}", e);
            SignupError::NetworkError {
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl SubmissionClient for WebhookClient {
    async fn submit(&self, request: &SignupRequest) -> Result<SubmissionReceipt> {
        let payload = SignupPayload::new(request, chrono::Utc::now(), &self.source);
        self.post_payload(&payload).await
    }
}

/// Keeps the first character of the local part, e.g. `a***@uni.ac.at`.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
