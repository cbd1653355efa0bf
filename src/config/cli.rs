use crate::config::toml_config::TomlConfig;
use crate::config::{SettingsOverrides, SignupSettings};
use crate::domain::model::SignupRequest;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-signup")]
#[command(about = "Landing page and signup form for the AI productivity course")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Webhook that receives signups")]
    pub webhook_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Source tag attached to every signup")]
    pub source: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the landing page
    Page,
    /// Validate and send a single signup
    Submit(SubmitArgs),
    /// Fill in the form step by step
    Interactive,
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, help = "Consent to data processing and course updates")]
    pub consent: bool,

    #[arg(long, help = "Also send AI productivity tips")]
    pub want_tips: bool,
}

impl From<&SubmitArgs> for SignupRequest {
    fn from(args: &SubmitArgs) -> Self {
        SignupRequest {
            name: args.name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            gdpr_consent_and_updates: args.consent,
            want_tips: args.want_tips,
        }
    }
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            webhook_url: self.webhook_url.clone(),
            timeout_seconds: self.timeout_seconds,
            source: self.source.clone(),
            log_format: self.json_logs.then_some(LogFormat::Json),
            verbose: self.verbose,
        }
    }

    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()
    }

    pub fn load_settings(&self) -> Result<SignupSettings> {
        let file = self.load_file()?;
        SignupSettings::resolve(file.as_ref(), self.overrides())
    }
}
