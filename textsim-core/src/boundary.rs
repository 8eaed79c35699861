//! JSON request/response contract for a plagiarism-check endpoint.
//!
//! This module is transport-agnostic: a host hands over the raw request body
//! and writes back whatever [`CheckResponse`] serializes to. No routing, no
//! status codes.
//!
//! Request:
//!
//! ```json
//! { "textA": "first text", "textB": "second text" }
//! ```
//!
//! Both fields are optional. Missing or `null` fields are empty text, and
//! numbers or booleans are compared as their printed form (`true`, `1000`,
//! `2.5`).
//!
//! Response, on success:
//!
//! ```json
//! { "ok": true, "jaccard": 1.0, "cosine": 1.0,
//!   "tokensA": ["hello"], "tokensB": ["hello"], "lengthA": 1, "lengthB": 1 }
//! ```
//!
//! and on a body that could not be decoded:
//!
//! ```json
//! { "ok": false, "error": "malformed request body: ..." }
//! ```

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use textsim_types::SimilarityResult;
use tracing::warn;

use crate::similarity::SimilarityEngine;

/// Errors raised while decoding a request body.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The body is not valid JSON, or a field has an unusable type.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    /// The body is valid JSON but not an object.
    #[error("request body must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// Decoded comparison request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityRequest {
    /// First text. Empty when absent.
    #[serde(deserialize_with = "lenient_text")]
    pub text_a: String,
    /// Second text. Empty when absent.
    #[serde(deserialize_with = "lenient_text")]
    pub text_b: String,
}

impl SimilarityRequest {
    /// Builds a request from two texts.
    pub fn new(text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            text_a: text_a.into(),
            text_b: text_b.into(),
        }
    }

    /// Decodes a request from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::MalformedBody`] for invalid JSON or fields
    /// holding arrays/objects, and [`BoundaryError::NotAnObject`] when the
    /// top-level value is not an object.
    pub fn from_json(body: &str) -> Result<Self, BoundaryError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(BoundaryError::NotAnObject {
                found: json_kind(&value),
            });
        }
        Ok(Self::deserialize(value)?)
    }
}

/// Response body: `ok` plus either the flattened result or an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResponse {
    /// Whether the comparison ran.
    pub ok: bool,
    /// Comparison outcome, present when `ok`.
    #[serde(flatten)]
    pub result: Option<SimilarityResult>,
    /// Failure description, present when not `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResponse {
    /// Successful response carrying `result`.
    pub fn success(result: SimilarityResult) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Failed response carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

impl From<BoundaryError> for CheckResponse {
    fn from(err: BoundaryError) -> Self {
        Self::failure(err.to_string())
    }
}

impl SimilarityEngine {
    /// Runs a decoded request.
    pub fn handle(&self, request: &SimilarityRequest) -> CheckResponse {
        CheckResponse::success(self.compare(&request.text_a, &request.text_b))
    }

    /// Decodes `body`, compares, and returns the response to send back.
    /// Decoding failures become an `ok: false` response.
    pub fn handle_json(&self, body: &str) -> CheckResponse {
        match SimilarityRequest::from_json(body) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                warn!(error = %err, "rejected similarity request");
                err.into()
            }
        }
    }
}

/// [`SimilarityEngine::handle_json`] with the default engine.
#[inline]
pub fn check_json(body: &str) -> CheckResponse {
    SimilarityEngine::default().handle_json(body)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_text(&n)),
        other => Err(D::Error::custom(format!(
            "expected text, found {}",
            json_kind(&other)
        ))),
    }
}

/// Spells a JSON number the way a browser client would see it printed:
/// integral floats drop their fraction (`1e3` is `1000`), and very large or
/// very small magnitudes use exponent notation with an explicit sign.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        // shortest round-trip digits, never an exponent
        return f.to_string();
    }

    let exp = format!("{f:e}");
    if exp.contains("e-") {
        exp
    } else {
        exp.replacen('e', "e+", 1)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
