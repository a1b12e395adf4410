//! The evaluate step: one payload in, one consistent snapshot of validity
//! and metrics out. No caching, no state; callers re-run it on every edit
//! and render whatever comes back.

use crate::diagnose::{classify, SyntaxError};
use crate::metrics::{measure, Metrics};

/// Outcome of checking a payload as JSON.
///
/// Blank payloads are reported valid: an empty text box is untested, not
/// wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Present exactly when `valid` is false, and never empty.
    pub error_message: Option<String>,
}

/// A full snapshot derived from one payload: validity plus measurements.
/// Metrics are computed on the raw text whether or not it parses.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub validation: ValidationResult,
    pub metrics: Metrics,
}

/// Check a payload against the JSON grammar, keeping the full diagnostic.
///
/// This is the form the CLI renders through miette; [`validate`] flattens
/// it to a plain message for callers that only want a string.
pub fn check(text: &str) -> Result<(), SyntaxError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<serde_json::Value>(text)
        .map(|_| ())
        .map_err(|err| classify(err, text))
}

/// Check a payload and flatten the outcome to a [`ValidationResult`].
pub fn validate(text: &str) -> ValidationResult {
    match check(text) {
        Ok(()) => ValidationResult {
            valid: true,
            error_message: None,
        },
        Err(err) => ValidationResult {
            valid: false,
            error_message: Some(err.to_string()),
        },
    }
}

/// Evaluate a payload in one pass: validation and metrics together.
pub fn evaluate(text: &str) -> Evaluation {
    Evaluation {
        validation: validate(text),
        metrics: measure(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_documents_validate() {
        for good in [
            "{}",
            "[]",
            "null",
            "true",
            "-12.5e3",
            "\"text\"",
            "{\"a\":1,\"b\":[1,2,3]}",
            "  [1, 2, 3]  ",
        ] {
            let result = validate(good);
            assert!(result.valid, "{good:?}");
            assert_eq!(result.error_message, None);
        }
    }

    #[test]
    fn blank_payloads_are_neutral_not_invalid() {
        for blank in ["", "   ", "\n\t  \n"] {
            let result = validate(blank);
            assert!(result.valid, "{blank:?}");
            assert_eq!(result.error_message, None);
        }
    }

    #[test]
    fn malformed_documents_carry_a_message() {
        for bad in ["{", "{\"a\":1,}", "[1 2]", "{'a': 1}", "undefined"] {
            let result = validate(bad);
            assert!(!result.valid, "{bad:?}");
            let message = result.error_message.expect("message expected");
            assert!(!message.is_empty(), "{bad:?}");
        }
    }

    #[test]
    fn evaluation_measures_the_raw_text_even_when_invalid() {
        let snapshot = evaluate("{\"a\":1,}");
        assert!(!snapshot.validation.valid);
        assert_eq!(snapshot.metrics.byte_count, 8);
        assert_eq!(snapshot.metrics.line_count, 1);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let payload = "{\"a\": [1, 2, 3]}";
        assert_eq!(evaluate(payload), evaluate(payload));
    }
}
