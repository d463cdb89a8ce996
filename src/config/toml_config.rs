use crate::config::ClientConfig;
use crate::utils::error::{RavelryError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file with a single `[ravelry]` table.
///
/// ```toml
/// [ravelry]
/// api_base = "https://api.ravelry.com"
/// access_key = "${RAV_ACCESS}"
/// personal_key = "${RAV_PERSONAL}"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub ravelry: ClientConfig,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RavelryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // expand ${VAR} references first
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RavelryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references (e.g. `${RAV_ACCESS}`); unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RavelryError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_client_config(self) -> ClientConfig {
        self.ravelry
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.ravelry.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[ravelry]
api_base = "http://localhost:8080"
access_key = "access"
personal_key = "personal"
timeout_seconds = 15
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.ravelry.api_base, "http://localhost:8080");
        assert_eq!(config.ravelry.access_key, "access");
        assert_eq!(config.ravelry.timeout_seconds, Some(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_base_defaults() {
        let toml_content = r#"
[ravelry]
access_key = "access"
personal_key = "personal"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.into_client_config().api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RAVELRY_PATTERNS_TEST_ACCESS", "from-env");

        let toml_content = r#"
[ravelry]
access_key = "${RAVELRY_PATTERNS_TEST_ACCESS}"
personal_key = "${RAVELRY_PATTERNS_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.ravelry.access_key, "from-env");
        assert_eq!(
            config.ravelry.personal_key,
            "${RAVELRY_PATTERNS_TEST_UNSET_VAR}"
        );

        std::env::remove_var("RAVELRY_PATTERNS_TEST_ACCESS");
    }

    #[test]
    fn test_missing_table_is_config_error() {
        let err = TomlConfig::from_toml_str("[other]\nkey = 1\n").unwrap_err();
        assert!(matches!(err, RavelryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[ravelry]
access_key = "file-access"
personal_key = "file-personal"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.ravelry.personal_key, "file-personal");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/ravelry.toml").unwrap_err();
        assert!(matches!(err, RavelryError::IoError(_)));
    }
}
