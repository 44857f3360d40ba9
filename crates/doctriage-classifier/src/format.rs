// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic document format detection.
//!
//! Zero-cost structural checks, no parsing. The JSON agent does the real
//! parse later; this only decides which agent gets the document.

use doctriage_core::DocFormat;

/// Detects a document's format from structural signals.
///
/// Precedence: JSON (brace-delimited) > Email (address plus header lines)
/// > Plain Text. Empty input is Plain Text.
pub fn classify_format(input: &str) -> DocFormat {
    let trimmed = input.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return DocFormat::Json;
    }

    // An address alone is not enough: a one-line "mail me at x@y" note is
    // plain text. Header/body structure requires at least one line break.
    if input.contains('@') && (input.contains('\n') || input.contains("\r\n")) {
        return DocFormat::Email;
    }

    DocFormat::PlainText
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_classify_as_json() {
        assert_eq!(
            classify_format(r#"{"order_id": "12345", "amount": 2500}"#),
            DocFormat::Json
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(classify_format("  \n {\"a\": 1} \n"), DocFormat::Json);
    }

    #[test]
    fn unbalanced_braces_are_not_json() {
        assert_eq!(classify_format("{\"a\": 1"), DocFormat::PlainText);
        assert_eq!(classify_format("\"a\": 1}"), DocFormat::PlainText);
    }

    #[test]
    fn address_with_newline_is_email() {
        let text = "From: user@example.com\nSubject: Hello\n\nBody here.";
        assert_eq!(classify_format(text), DocFormat::Email);
    }

    #[test]
    fn address_with_crlf_is_email() {
        let text = "From: user@example.com\r\nSubject: Hello\r\n\r\nBody.";
        assert_eq!(classify_format(text), DocFormat::Email);
    }

    #[test]
    fn address_without_newline_is_plain_text() {
        assert_eq!(
            classify_format("please reach me at user@example.com"),
            DocFormat::PlainText
        );
    }

    #[test]
    fn ordinary_prose_is_plain_text() {
        assert_eq!(
            classify_format("I have an issue with my recent payment invoice."),
            DocFormat::PlainText
        );
    }

    #[test]
    fn empty_input_is_plain_text() {
        assert_eq!(classify_format(""), DocFormat::PlainText);
        assert_eq!(classify_format("   "), DocFormat::PlainText);
    }

    #[test]
    fn json_wins_over_email_signals() {
        // Braces take precedence even when the body holds an address.
        assert_eq!(
            classify_format("{\"contact\": \"user@example.com\"\n}"),
            DocFormat::Json
        );
    }
}
