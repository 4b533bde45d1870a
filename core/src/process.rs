//! Name validation and JSON response shaping.
//!
//! # Design
//! [`validate`] runs the whole check chain and returns either a
//! [`ValidName`] or a [`ProcessError`]. [`handle`] is the single wrapping
//! step that turns either outcome into an [`HttpResponse`], so no failure
//! escapes to the host.
//!
//! The name is looked up by an ordered list of strategies (query string,
//! then JSON body); the first one that finds a value wins. A lookup
//! distinguishes "found, of any JSON type" from "not found", so a
//! non-string name is reported as such instead of as missing.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::error::ProcessError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::json_type_name;

/// Version reported by [`health_check`].
pub const API_VERSION: &str = "1.0.0";

/// Field looked up in the query string and the JSON body.
const NAME_FIELD: &str = "name";

/// Result of one lookup strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum NameLookup {
    Found(Value),
    NotFound,
}

type LookupStrategy = fn(&HttpRequest) -> Result<NameLookup, ProcessError>;

const LOOKUPS: [(&str, LookupStrategy); 2] = [("query", lookup_query), ("body", lookup_body)];

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName {
    /// The name exactly as supplied (not trimmed).
    pub name: String,
    pub method: HttpMethod,
}

impl ValidName {
    pub fn into_response(self) -> HttpResponse {
        let message = format!(
            "Hello, {}! Your request was processed successfully.",
            self.name
        );
        HttpResponse::json(
            200,
            json!({
                "status": "success",
                "message": message,
                "data": {
                    "name": self.name,
                    "method": self.method.as_str(),
                },
            }),
        )
    }
}

/// Processes a request carrying a `name` and returns the JSON response.
///
/// Always returns a response: 200 on success, 400 for caller mistakes,
/// 500 for anything unexpected.
pub fn handle(request: &HttpRequest) -> HttpResponse {
    info!(method = %request.method, "processing request");

    match validate(request) {
        Ok(valid) => {
            info!(name = %valid.name, "request processed");
            valid.into_response()
        }
        Err(err) => {
            match &err {
                ProcessError::MissingParameter => {
                    warn!("request received without name parameter")
                }
                ProcessError::EmptyName => warn!("empty name provided"),
                ProcessError::InvalidInputType { found } => {
                    error!(found = *found, "invalid input type for name")
                }
                ProcessError::Internal(detail) => {
                    error!(error = %detail, "unexpected error while processing request")
                }
            }
            err.into_response()
        }
    }
}

/// Extracts and checks the name without shaping a response.
pub fn validate(request: &HttpRequest) -> Result<ValidName, ProcessError> {
    let value = find_name(request)?.ok_or(ProcessError::MissingParameter)?;

    let name = match value {
        Value::String(name) => name,
        other => {
            return Err(ProcessError::InvalidInputType {
                found: json_type_name(&other),
            })
        }
    };
    if name.trim().is_empty() {
        return Err(ProcessError::EmptyName);
    }

    Ok(ValidName {
        name,
        method: request.method.clone(),
    })
}

/// Runs the lookup strategies in order; the first `Found` wins.
pub fn find_name(request: &HttpRequest) -> Result<Option<Value>, ProcessError> {
    for (source, lookup) in LOOKUPS {
        if let NameLookup::Found(value) = lookup(request)? {
            tracing::debug!(source, "name found");
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn lookup_query(request: &HttpRequest) -> Result<NameLookup, ProcessError> {
    Ok(match request.query.get(NAME_FIELD) {
        Some(name) if !name.is_empty() => NameLookup::Found(Value::String(name.clone())),
        _ => NameLookup::NotFound,
    })
}

/// Reads `name` from a JSON object body.
///
/// An absent, empty or unparseable body is logged and otherwise ignored: the
/// request may still be answered with `MISSING_PARAMETER`. A body that parses
/// but is not an object is an `Internal` failure.
fn lookup_body(request: &HttpRequest) -> Result<NameLookup, ProcessError> {
    let body = request.body.as_deref().unwrap_or_default();
    if body.is_empty() {
        warn!(error = "empty body", "invalid JSON in request body");
        return Ok(NameLookup::NotFound);
    }

    let parsed: Value = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "invalid JSON in request body");
            return Ok(NameLookup::NotFound);
        }
    };

    let mut fields = match parsed {
        Value::Object(fields) => fields,
        other => {
            return Err(ProcessError::Internal(format!(
                "request body is a JSON {}, expected an object",
                json_type_name(&other)
            )))
        }
    };

    Ok(match fields.remove(NAME_FIELD) {
        Some(value) if is_present(&value) => NameLookup::Found(value),
        _ => NameLookup::NotFound,
    })
}

/// Empty-like JSON values (`null`, `false`, `0`, `""`, `[]`, `{}`) count as
/// not supplied.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

/// Liveness probe. 200 with the API version, or 503 if the payload cannot
/// be built.
pub fn health_check(_request: &HttpRequest) -> HttpResponse {
    info!("health check endpoint called");

    let status = HealthStatus {
        status: "healthy",
        message: "Service is running",
        version: API_VERSION,
    };
    match serde_json::to_value(status) {
        Ok(body) => HttpResponse::json(200, body),
        Err(e) => {
            error!(error = %e, "health check failed");
            HttpResponse::json(
                503,
                json!({
                    "status": "unhealthy",
                    "message": "Health check failed",
                }),
            )
        }
    }
}
