// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and non-zero token limits.

use crate::diagnostic::ConfigError;
use crate::model::{DoctriageConfig, TextAgentMode};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DoctriageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty
    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    }

    // Validate host looks like a valid IP or hostname
    if !config.server.host.trim().is_empty() {
        let addr = config.server.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{addr}` is not a valid IP address or hostname"),
            });
        }
    }

    // Validate bearer token, when set, is not blank
    if let Some(token) = &config.server.bearer_token {
        if token.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "server.bearer_token must not be blank (omit the key to disable auth)"
                    .to_string(),
            });
        }
    }

    // Validate token ceiling
    if config.anthropic.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.max_tokens must be greater than zero".to_string(),
        });
    }

    // Validate model is not empty
    if config.anthropic.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "anthropic.model must not be empty".to_string(),
        });
    }

    // LLM mode needs an API key from config or environment
    if config.router.text_agent == TextAgentMode::Llm
        && config.anthropic.api_key.is_none()
        && std::env::var("ANTHROPIC_API_KEY").is_err()
    {
        errors.push(ConfigError::Validation {
            message: "router.text_agent = \"llm\" requires anthropic.api_key or the \
                      ANTHROPIC_API_KEY environment variable"
                .to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
