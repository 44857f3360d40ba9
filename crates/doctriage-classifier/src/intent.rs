// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based business intent matching.
//!
//! Case-insensitive substring matching against a fixed-order rule table.
//! First match wins, so rule order is part of the contract: a document
//! mentioning both a payment and a problem is an Invoice, not a Complaint.

use doctriage_core::Intent;

/// Invoice indicators (contains, case-insensitive).
const INVOICE_KEYWORDS: &[&str] = &["invoice", "bill", "payment due", "amount due", "payment"];

/// Complaint indicators.
const COMPLAINT_KEYWORDS: &[&str] = &[
    "complaint", "issue", "problem", "not working", "failure", "error", "bad service",
];

/// Request-for-quote indicators.
const RFQ_KEYWORDS: &[&str] = &[
    "rfq", "request for quote", "quote", "pricing", "price", "quotation",
];

/// Regulation indicators.
const REGULATION_KEYWORDS: &[&str] = &[
    "regulation", "policy", "compliance", "law", "rule", "guideline",
];

/// Order indicators.
const ORDER_KEYWORDS: &[&str] = &["order", "purchase", "buy", "shipment", "delivery"];

/// Support indicators.
const SUPPORT_KEYWORDS: &[&str] = &[
    "support", "help", "assist", "technical assistance", "customer service",
];

/// Intent rules in precedence order. First match wins.
const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::Invoice, INVOICE_KEYWORDS),
    (Intent::Complaint, COMPLAINT_KEYWORDS),
    (Intent::Rfq, RFQ_KEYWORDS),
    (Intent::Regulation, REGULATION_KEYWORDS),
    (Intent::Order, ORDER_KEYWORDS),
    (Intent::Support, SUPPORT_KEYWORDS),
];

/// Guesses the business intent of a document from keyword signals.
///
/// Returns [`Intent::Unknown`] when no keyword list matches.
pub fn classify_intent(input: &str) -> Intent {
    let lower = input.to_lowercase();

    for (intent, keywords) in INTENT_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *intent;
        }
    }

    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_invoice() {
        assert_eq!(classify_intent("Please find the attached invoice"), Intent::Invoice);
        assert_eq!(classify_intent("your payment is overdue"), Intent::Invoice);
        assert_eq!(classify_intent("AMOUNT DUE: $250"), Intent::Invoice);
    }

    #[test]
    fn classify_complaint() {
        assert_eq!(classify_intent("the device is not working"), Intent::Complaint);
        assert_eq!(classify_intent("I want to file a complaint"), Intent::Complaint);
        assert_eq!(classify_intent("we got an error at checkout"), Intent::Complaint);
    }

    #[test]
    fn classify_rfq() {
        assert_eq!(
            classify_intent("I would like to request a quote for 100 units"),
            Intent::Rfq
        );
        assert_eq!(classify_intent("what is your pricing?"), Intent::Rfq);
    }

    #[test]
    fn classify_regulation() {
        assert_eq!(
            classify_intent("new compliance guideline attached"),
            Intent::Regulation
        );
    }

    #[test]
    fn classify_order() {
        assert_eq!(classify_intent("when will my shipment arrive"), Intent::Order);
        assert_eq!(classify_intent("I want to buy two chairs"), Intent::Order);
    }

    #[test]
    fn classify_support() {
        assert_eq!(
            classify_intent("I need technical assistance with setup"),
            Intent::Support
        );
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(classify_intent("the weather is lovely today"), Intent::Unknown);
        assert_eq!(classify_intent(""), Intent::Unknown);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_intent("INVOICE ENCLOSED"), Intent::Invoice);
    }

    #[test]
    fn first_rule_wins_on_overlap() {
        // Mentions both a payment problem and an issue; invoice rules run first.
        assert_eq!(
            classify_intent("I have an issue with my recent payment invoice."),
            Intent::Invoice
        );
        // "order" appears inside "order_id" and "quote" never does; order rules
        // run after rfq, so only order matches here.
        assert_eq!(
            classify_intent(r#"{"order_id": "12345", "amount": 2500}"#),
            Intent::Order
        );
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "buy" inside "buying" still matches; substring semantics are intended.
        assert_eq!(classify_intent("thinking about buying more"), Intent::Order);
    }
}
