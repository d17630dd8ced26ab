use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// Accuracy over zero expected labels is undefined.
    #[error("expected label list is empty")]
    EmptyExpected,
}

/// Result of comparing predictions against an answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Predictions that exactly matched the expected label.
    pub matches: usize,
    /// Number of expected labels compared against.
    pub total: usize,
}

impl Evaluation {
    /// Accuracy as a percentage in `[0, 100]`.
    pub fn accuracy(&self) -> f64 {
        self.matches as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accuracy = {:.2}%", self.accuracy())
    }
}

/// Compares predictions against expected labels, index by index, over the
/// length of `expected`.
///
/// A `None` prediction (the detector found no language) and a missing
/// prediction (the prediction list is shorter than the answer key) both
/// count as plain misses: they never match and never abort the
/// evaluation.
///
/// # Errors
/// [`EvaluationError::EmptyExpected`] if `expected` is empty.
pub fn evaluate(
    expected: &[String],
    predictions: &[Option<String>],
) -> Result<Evaluation, EvaluationError> {
    if expected.is_empty() {
        return Err(EvaluationError::EmptyExpected);
    }
    let mut matches = 0;
    for (index, label) in expected.iter().enumerate() {
        if let Some(Some(predicted)) = predictions.get(index) {
            if predicted == label {
                matches += 1;
            }
        }
    }
    Ok(Evaluation {
        matches,
        total: expected.len(),
    })
}

/// Parses an answer-key file: one query per line, two whitespace-separated
/// fields, of which the second is the expected language identifier. Lines
/// without a second field are skipped, mirroring the profile store's
/// malformed-record policy.
pub fn parse_answer_key(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            fields.next()?;
            fields.next().map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn predictions(names: &[&str]) -> Vec<Option<String>> {
        names.iter().map(|name| Some(name.to_string())).collect()
    }

    #[test]
    fn test_two_of_three_formats_to_two_decimals() {
        let evaluation = evaluate(
            &labels(&["en", "es", "en"]),
            &predictions(&["en", "es", "fr"]),
        )
        .unwrap();
        assert_eq!(evaluation.matches, 2);
        assert_eq!(evaluation.total, 3);
        assert_eq!(evaluation.to_string(), "Accuracy = 66.67%");
    }

    #[test]
    fn test_perfect_and_zero_accuracy() {
        let evaluation = evaluate(&labels(&["en"]), &predictions(&["en"])).unwrap();
        assert_eq!(evaluation.to_string(), "Accuracy = 100.00%");
        let evaluation = evaluate(&labels(&["en"]), &predictions(&["fr"])).unwrap();
        assert_eq!(evaluation.to_string(), "Accuracy = 0.00%");
    }

    #[test]
    fn test_no_detection_counts_as_miss() {
        let evaluation = evaluate(&labels(&["en", "es"]), &[Some("en".to_string()), None]).unwrap();
        assert_eq!(evaluation.matches, 1);
        assert_eq!(evaluation.total, 2);
    }

    #[test]
    fn test_short_prediction_list_counts_missing_as_misses() {
        let evaluation = evaluate(
            &labels(&["en", "es", "fr"]),
            &predictions(&["en"]),
        )
        .unwrap();
        assert_eq!(evaluation.matches, 1);
        assert_eq!(evaluation.total, 3);
    }

    #[test]
    fn test_extra_predictions_are_ignored() {
        let evaluation = evaluate(&labels(&["en"]), &predictions(&["en", "es", "fr"])).unwrap();
        assert_eq!(evaluation.matches, 1);
        assert_eq!(evaluation.total, 1);
    }

    #[test]
    fn test_empty_expected_is_an_error() {
        assert_eq!(evaluate(&[], &[]), Err(EvaluationError::EmptyExpected));
    }

    #[test]
    fn test_answer_key_parsing() {
        let key = "q1 english\nq2\tspanish\n\nmalformed\nq4 french extra";
        assert_eq!(parse_answer_key(key), labels(&["english", "spanish", "french"]));
    }
}
