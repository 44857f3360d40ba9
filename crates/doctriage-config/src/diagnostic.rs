// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Every config key has a compiled default, so extraction can only fail on
//! an unknown key or a wrong type. Unknown keys get a source span and a
//! "did you mean?" suggestion via Jaro-Winkler similarity; type errors get
//! the offending dotted key path and the expected type.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `naem` -> `name` or `max_tokns` ->
/// `max_tokens` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(doctriage::config::unknown_key),
        help("{}", match suggestion {
            Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
            None => format!("valid keys: {valid_keys}"),
        })
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
        /// Source span for the offending key.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The source file content for context display.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(
        code(doctriage::config::invalid_type),
        help("expected {expected}")
    )]
    InvalidType {
        /// Dotted path of the key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(doctriage::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(doctriage::config::other))]
    Other(String),
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may bundle several individual errors; each becomes one
/// diagnostic. `toml_sources` maps file paths to their contents so unknown
/// keys can be underlined in the file they came from.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => unknown_key_error(&error, field, expected, toml_sources),
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: dotted_path(&error),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Build an `UnknownKey` diagnostic with suggestion and, when the source
/// file is known, an underline span.
fn unknown_key_error(
    error: &figment::error::Error,
    field: &str,
    expected: &[&str],
    toml_sources: &[(String, String)],
) -> ConfigError {
    let suggestion = suggest_key(field, expected);

    let located = source_file_for(error, toml_sources).and_then(|(path, content)| {
        let section: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
        find_key_offset(content, &section, field).map(|offset| {
            (
                SourceSpan::new(offset.into(), field.len()),
                NamedSource::new(path, content.to_string()),
            )
        })
    });
    let (span, src) = match located {
        Some((span, src)) => (Some(span), Some(src)),
        None => (None, None),
    };

    ConfigError::UnknownKey {
        key: field.to_string(),
        suggestion,
        valid_keys: expected.join(", "),
        span,
        src,
    }
}

/// Dotted key path of a figment error, e.g. `server.port`.
fn dotted_path(error: &figment::error::Error) -> String {
    error
        .path
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Look up the TOML source the error originated from, if figment recorded
/// a file source and we read that file.
fn source_file_for<'a>(
    error: &figment::error::Error,
    toml_sources: &'a [(String, String)],
) -> Option<(&'a str, &'a str)> {
    let path = error.metadata.as_ref()?.source.as_ref().and_then(|s| match s {
        figment::Source::File(path) => Some(path.display().to_string()),
        _ => None,
    })?;

    toml_sources
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(p, content)| (p.as_str(), content.as_str()))
}

/// Find the byte offset of `field` in TOML content.
///
/// When `path` names a section (e.g. `["server"]`), the scan starts after
/// its `[server]` header; top-level fields are scanned from the start. A
/// line matches when it begins with the field name followed by `=` or
/// whitespace.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let search_start = match path.first() {
        None => 0,
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    let mut line_start = search_start;
    for line in content[search_start..].lines() {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(field) {
            let delimited = matches!(after.as_bytes().first(), Some(b'=' | b' ' | b'\t'));
            if delimited {
                return Some(line_start + (line.len() - trimmed.len()));
            }
        }
        line_start += line.len() + 1; // +1 for newline
    }

    None
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best-scoring valid key above the threshold, or `None` when
/// nothing is close enough.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (*key, strsim::jaro_winkler(unknown, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(key, _)| key.to_string())
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
