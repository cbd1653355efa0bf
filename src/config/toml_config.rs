use crate::utils::error::{Result, SignupError};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SignupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SignupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SIGNUP_WEBHOOK_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref().and_then(|l| l.format)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[webhook]
url = "https://hooks.example.com/signup"
timeout_seconds = 15
source = "spring-campaign"

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.example.com/signup")
        );
        assert_eq!(config.webhook.timeout_seconds, Some(15));
        assert_eq!(config.webhook.source.as_deref(), Some("spring-campaign"));
        assert_eq!(config.log_format(), Some(LogFormat::Json));
        assert!(config.verbose());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.webhook.url.is_none());
        assert!(config.log_format().is_none());
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COURSE_SIGNUP_TEST_HOOK", "https://test.hooks.com/abc");

        let toml_content = r#"
[webhook]
url = "${COURSE_SIGNUP_TEST_HOOK}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://test.hooks.com/abc")
        );

        std::env::remove_var("COURSE_SIGNUP_TEST_HOOK");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[webhook]
url = "${COURSE_SIGNUP_SURELY_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("${COURSE_SIGNUP_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[webhook\nurl = ");
        assert!(matches!(result, Err(SignupError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[webhook]
url = "https://hooks.example.com/file"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.example.com/file")
        );
    }
}
