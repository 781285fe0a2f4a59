use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                name: "testproject".to_string(),
            },
            logging: None,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，先替換 `${VAR}` 環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // 未設定的環境變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;

        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[app]
name = "greeter"

[logging]
level = "debug"
json = true
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.app.name, "greeter");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = AppConfig::from_toml_str("[app]\nname = \"greeter\"\n").unwrap();
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TESTPROJECT_APP_NAME", "from-env");

        let config = AppConfig::from_toml_str("[app]\nname = \"${TESTPROJECT_APP_NAME}\"\n").unwrap();
        assert_eq!(config.app.name, "from-env");

        std::env::remove_var("TESTPROJECT_APP_NAME");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let config =
            AppConfig::from_toml_str("[app]\nname = \"${TESTPROJECT_SURELY_UNSET}\"\n").unwrap();
        assert_eq!(config.app.name, "${TESTPROJECT_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let bad_level = AppConfig::from_toml_str(
            "[app]\nname = \"greeter\"\n\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();
        assert!(bad_level.validate().is_err());

        let empty_name = AppConfig::from_toml_str("[app]\nname = \"  \"\n").unwrap();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = AppConfig::from_toml_str("[app\nname = ").unwrap_err();
        assert!(matches!(err, AppError::ConfigError { .. }));
        assert!(err.user_friendly_message().contains("TOML parsing error"));
        assert!(!err.user_friendly_message().contains("toml_parsing"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[app]\nname = \"file-test\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.app.name, "file-test");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
