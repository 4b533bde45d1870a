//! Error types for the request processor and the factorial calculator.
//!
//! # Design
//! `ProcessError` never reaches a caller of [`crate::process::handle`]: each
//! variant maps to exactly one JSON error response, and `Internal` carries
//! detail for the logs only. `FactorialError` is returned as-is by
//! [`crate::factorial`] since that API has no response to shape.

use serde_json::{json, Value};
use thiserror::Error;

use crate::http::HttpResponse;

/// Why a request to the name processor could not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// No `name` in the query string or the JSON body.
    #[error("no name parameter in query string or request body")]
    MissingParameter,

    /// A name was supplied but is blank after trimming.
    #[error("name is empty")]
    EmptyName,

    /// A name was supplied but is not a string. `found` is the JSON type.
    #[error("name must be a string, got {found}")]
    InvalidInputType { found: &'static str },

    /// Anything unexpected. The message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProcessError {
    /// Value of the `error_code` field in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ProcessError::MissingParameter => "MISSING_PARAMETER",
            ProcessError::EmptyName => "EMPTY_NAME",
            ProcessError::InvalidInputType { .. } => "INVALID_INPUT_TYPE",
            ProcessError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ProcessError::Internal(_) => 500,
            _ => 400,
        }
    }

    /// Value of the `message` field in the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProcessError::MissingParameter => {
                "Please provide a 'name' parameter in the query string or request body"
            }
            ProcessError::EmptyName => "Name cannot be empty",
            ProcessError::InvalidInputType { .. } => "Name must be a string",
            ProcessError::Internal(_) => {
                "An unexpected error occurred while processing your request"
            }
        }
    }

    pub fn into_response(self) -> HttpResponse {
        let mut body = json!({
            "status": "error",
            "message": self.public_message(),
            "error_code": self.code(),
        });
        if self == ProcessError::MissingParameter {
            body["example"] = missing_parameter_example();
        }
        HttpResponse::json(self.status(), body)
    }
}

fn missing_parameter_example() -> Value {
    json!({
        "query": "?name=YourName",
        "body": { "name": "YourName" },
    })
}

/// Errors returned by the factorial calculator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactorialError {
    /// The input is not an integral value. `found` names its type.
    #[error("expected an integer, got {found}")]
    NotAnInteger { found: &'static str },

    #[error("factorial is not defined for negative integers, got {0}")]
    Negative(i64),
}
