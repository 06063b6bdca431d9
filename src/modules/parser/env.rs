//! Environment variable substitution

use dataport_core::DataportError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Environment variable substitutor
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a substitutor in strict mode (fails on missing vars)
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a substitutor in lenient mode (leaves placeholders in place)
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    pub fn substitute(&self, content: &str) -> Result<String, DataportError> {
        // Load .env if present, ignore errors
        let _ = dotenvy::dotenv();

        let mut missing: Vec<String> = Vec::new();

        let result = ENV_PATTERN.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if self.strict {
                        missing.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if !missing.is_empty() {
            return Err(DataportError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result.into_owned())
    }

    /// Check if a string contains environment variable placeholders
    pub fn has_placeholders(content: &str) -> bool {
        ENV_PATTERN.is_match(content)
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}
