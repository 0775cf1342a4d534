//! Factor request parsing and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Validation failure for an incoming factor request.
///
/// Messages carry the offending raw value so callers can see what was
/// actually rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Body is not a JSON object.
    #[error("request body must be a JSON object, got {raw}")]
    NotAnObject {
        /// The raw body that was rejected.
        raw: String,
    },

    /// The `number` field is absent.
    #[error("missing required field 'number'")]
    MissingNumber,

    /// The `number` field cannot be read as a positive integer.
    #[error("field 'number' must be a positive integer, got {raw}")]
    NotAPositiveInteger {
        /// The raw field value that was rejected.
        raw: String,
    },
}

/// A validated factoring request.
///
/// The input is assumed semiprime but not pre-verified; the oracle decides
/// whether it is factorable at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRequest {
    /// The integer to factor.
    pub number: u64,
}

impl FactorRequest {
    /// Parse and validate raw request data.
    ///
    /// Accepts integer JSON numbers and, matching the original service's
    /// `int(...)` coercion, strings holding a base-10 positive integer.
    /// Everything else fails with a message quoting the raw value.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let object = body.as_object().ok_or_else(|| RequestError::NotAnObject {
            raw: body.to_string(),
        })?;
        let value = object.get("number").ok_or(RequestError::MissingNumber)?;

        let number = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };

        match number.filter(|&n| n > 0) {
            Some(number) => Ok(Self { number }),
            None => Err(RequestError::NotAPositiveInteger {
                raw: value.to_string(),
            }),
        }
    }
}
