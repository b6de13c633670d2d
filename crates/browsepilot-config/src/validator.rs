//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse the errors into a single [`ConfigError::Invalid`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.errors.is_empty() {
            return Ok(self.warnings);
        }
        let message = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(message))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    ///
    /// `require_api_key` is set when the run will use the chat completions planner.
    pub fn validate(config: &Config, require_api_key: bool) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_browser(config, &mut result);
        Self::validate_orchestrator(config, &mut result);
        Self::validate_planner(config, require_api_key, &mut result);

        Ok(result)
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        let browser = &config.browser;

        if browser.viewport.width == 0 || browser.viewport.height == 0 {
            result.add_error(ValidationError::new(
                "browser.viewport",
                "Viewport width and height must be greater than 0",
            ));
        }

        let timeouts = &browser.timeouts;
        for (name, value) in [
            ("navigation_ms", timeouts.navigation_ms),
            ("click_wait_ms", timeouts.click_wait_ms),
            ("command_ms", timeouts.command_ms),
            ("startup_ms", timeouts.startup_ms),
            ("max_wait_seconds", timeouts.max_wait_seconds),
        ] {
            if value == 0 {
                result.add_error(ValidationError::new(
                    format!("browser.timeouts.{}", name),
                    format!("{} must be greater than 0", name),
                ));
            }
        }

        if !browser.sandbox {
            result.add_warning(ValidationWarning::new(
                "browser.sandbox",
                "Chrome sandbox is disabled; pages run with reduced isolation",
            ));
        }
        if !browser.disable_file_access {
            result.add_warning(ValidationWarning::new(
                "browser.disable_file_access",
                "Pages may read local files",
            ));
        }

        if let Some(ref executable) = browser.executable {
            if !executable.exists() {
                result.add_error(ValidationError::new(
                    "browser.executable",
                    format!("Chrome executable does not exist: {:?}", executable),
                ));
            }
        }
    }

    fn validate_orchestrator(config: &Config, result: &mut ValidationResult) {
        if config.orchestrator.max_turns == 0 {
            result.add_error(ValidationError::new(
                "orchestrator.max_turns",
                "max_turns must be greater than 0",
            ));
        }

        if config.orchestrator.max_turns > 200 {
            result.add_warning(ValidationWarning::new(
                "orchestrator.max_turns",
                "max_turns is very high (>200), a stuck planner will run for a long time",
            ));
        }
    }

    fn validate_planner(config: &Config, require_api_key: bool, result: &mut ValidationResult) {
        let planner = &config.planner;

        let missing_key = planner
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty());
        if require_api_key && missing_key {
            result.add_error(ValidationError::new(
                "planner.api_key",
                "API key is not set; set planner.api_key (e.g. \"${OPENAI_API_KEY}\")",
            ));
        }

        if !planner.api_url.starts_with("http://") && !planner.api_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "planner.api_url",
                "api_url must start with http:// or https://",
            ));
        }

        if let Some(temperature) = planner.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                result.add_error(ValidationError::new(
                    "planner.temperature",
                    "temperature must be between 0 and 2",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
