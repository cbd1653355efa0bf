#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;
pub const DEFAULT_SOURCE: &str = "ai-productivity-course-landing";

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub webhook_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub source: Option<String>,
    pub log_format: Option<LogFormat>,
    pub verbose: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSettings {
    pub webhook_url: String,
    pub timeout_seconds: u64,
    pub source: String,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl SignupSettings {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            source: DEFAULT_SOURCE.to_string(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Merges command line > file > defaults. The webhook URL has no default.
    pub fn resolve(file: Option<&TomlConfig>, overrides: SettingsOverrides) -> Result<Self> {
        let webhook = file.map(|f| &f.webhook);

        let url = overrides
            .webhook_url
            .or_else(|| webhook.and_then(|w| w.url.clone()));
        let webhook_url = validation::validate_required_field("webhook.url", &url)?.clone();

        let settings = Self {
            webhook_url,
            timeout_seconds: overrides
                .timeout_seconds
                .or_else(|| webhook.and_then(|w| w.timeout_seconds))
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            source: overrides
                .source
                .or_else(|| webhook.and_then(|w| w.source.clone()))
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            log_format: overrides
                .log_format
                .or_else(|| file.and_then(|f| f.log_format()))
                .unwrap_or_default(),
            verbose: overrides.verbose || file.map(|f| f.verbose()).unwrap_or(false),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for SignupSettings {
    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn source_tag(&self) -> &str {
        &self.source
    }
}

impl Validate for SignupSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("webhook.url", &self.webhook_url)?;
        validation::validate_range(
            "webhook.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_non_empty_string("webhook.source", &self.source)?;
        Ok(())
    }
}
