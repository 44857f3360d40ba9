// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./doctriage.toml` > `~/.config/doctriage/doctriage.toml`
//! > `/etc/doctriage/doctriage.toml` with environment variable overrides via
//! the `DOCTRIAGE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::DoctriageConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/doctriage/doctriage.toml` (system-wide)
/// 3. `~/.config/doctriage/doctriage.toml` (user XDG config)
/// 4. `./doctriage.toml` (local directory)
/// 5. `DOCTRIAGE_*` environment variables
pub fn load_config() -> Result<DoctriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DoctriageConfig::default()))
        .merge(Toml::file("/etc/doctriage/doctriage.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("doctriage/doctriage.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("doctriage.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<DoctriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DoctriageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DoctriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DoctriageConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `DOCTRIAGE_SERVER_BEARER_TOKEN` must map
/// to `server.bearer_token`, not `server.bearer.token`.
fn env_provider() -> Env {
    Env::prefixed("DOCTRIAGE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: DOCTRIAGE_ANTHROPIC_API_KEY -> "anthropic_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("router_", "router.", 1);
        mapped.into()
    })
}
