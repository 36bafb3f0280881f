//! Structured-output recovery: pulls one JSON value out of free-form model text.
//!
//! Models wrap JSON in prose, code fences and apologies. The span taken is the widest one:
//! first opening delimiter to last closing delimiter of the same kind, across lines.
//!
//! Recovery never fails. Anything that goes wrong (generation error, no span, malformed JSON)
//! yields the target type's `Default`, which is what the caller renders.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::LlmError;

/// Which JSON value the caller expects the model to have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    fn delimiters(self) -> (char, char) {
        match self {
            Shape::Object => ('{', '}'),
            Shape::Array => ('[', ']'),
        }
    }
}

/// Why a response was replaced by its default. Internal outcome only; never returned past
/// [`recover_or_default`].
#[derive(Debug, Error)]
pub enum ParseRecoveryFailure {
    #[error("generation call failed: {0}")]
    Generation(#[from] LlmError),

    #[error("no {0:?} span found in model output")]
    NoSpan(Shape),

    #[error("malformed JSON in model output: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Returns the widest `open … close` span in `text`, or `None` when there is no closing
/// delimiter after the first opening one.
pub fn find_json_span(text: &str, shape: Shape) -> Option<&str> {
    let (open, close) = shape.delimiters();
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Locates and decodes the embedded JSON value.
pub fn decode_embedded<T: DeserializeOwned>(
    text: &str,
    shape: Shape,
) -> Result<T, ParseRecoveryFailure> {
    let span = find_json_span(text, shape).ok_or(ParseRecoveryFailure::NoSpan(shape))?;
    debug!("Decoding {:?} span of {} chars", shape, span.len());
    Ok(serde_json::from_str(span)?)
}

/// Turns a raw generation result into a renderable value.
///
/// Returns the decoded value on success and `T::default()` on every failure path.
pub fn recover_or_default<T>(response: Result<String, LlmError>, shape: Shape) -> T
where
    T: DeserializeOwned + Default,
{
    let decoded = response
        .map_err(ParseRecoveryFailure::from)
        .and_then(|text| decode_embedded(&text, shape));

    match decoded {
        Ok(value) => value,
        Err(failure) => {
            warn!("Structured output recovered to default: {failure}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{AnalysisResult, Recommendation};
    use serde_json::json;

    #[test]
    fn test_object_span_surrounded_by_noise() {
        let value: serde_json::Value =
            recover_or_default(Ok("noise {\"a\":1} more noise".to_string()), Shape::Object);
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_span_is_widest_match() {
        let text = "a {\"x\": {\"y\": 2}} b } c";
        assert_eq!(find_json_span(text, Shape::Object), Some("{\"x\": {\"y\": 2}} b }"));
    }

    #[test]
    fn test_span_crosses_lines() {
        let text = "Here you go:\n```json\n[\n  {\"next_role\": \"Lead\"}\n]\n```\nGood luck!";
        assert_eq!(
            find_json_span(text, Shape::Array),
            Some("[\n  {\"next_role\": \"Lead\"}\n]")
        );
    }

    #[test]
    fn test_no_span_when_close_precedes_open() {
        assert_eq!(find_json_span("} nothing {", Shape::Object), None);
        assert_eq!(find_json_span("no brackets here", Shape::Array), None);
    }

    #[test]
    fn test_no_braces_defaults_analysis() {
        let analysis: AnalysisResult =
            recover_or_default(Ok("I could not read the resume.".to_string()), Shape::Object);
        assert_eq!(analysis, AnalysisResult::default());
    }

    #[test]
    fn test_malformed_json_defaults_analysis() {
        let analysis: AnalysisResult = recover_or_default(
            Ok("{\"skills\": [\"Rust\", } trailing".to_string()),
            Shape::Object,
        );
        assert_eq!(analysis, AnalysisResult::default());
    }

    #[test]
    fn test_generation_error_defaults() {
        let analysis: AnalysisResult =
            recover_or_default(Err(LlmError::EmptyContent), Shape::Object);
        assert_eq!(analysis, AnalysisResult::default());

        let recs: Vec<Recommendation> =
            recover_or_default(Err(LlmError::EmptyContent), Shape::Array);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_array_mode_decodes_recommendations() {
        let text = r#"Sure! [{"next_role": "Data Scientist", "skills_match": 80}, {"next_role": "ML Engineer"}]"#;
        let recs: Vec<Recommendation> = recover_or_default(Ok(text.to_string()), Shape::Array);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].next_role, "Data Scientist");
        assert_eq!(recs[0].skills_match, 80);
        assert_eq!(recs[1].skills_match, 0);
    }

    #[test]
    fn test_array_mode_ignores_braces_only() {
        let recs: Vec<Recommendation> =
            recover_or_default(Ok("{\"next_role\": \"Lead\"}".to_string()), Shape::Array);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_decode_embedded_reports_reason() {
        let err = decode_embedded::<serde_json::Value>("plain", Shape::Object).unwrap_err();
        assert!(matches!(err, ParseRecoveryFailure::NoSpan(Shape::Object)));

        let err = decode_embedded::<serde_json::Value>("{oops}", Shape::Object).unwrap_err();
        assert!(matches!(err, ParseRecoveryFailure::Malformed(_)));
    }
}
