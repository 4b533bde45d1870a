//! Synchronous core for the greeter service.
//!
//! # Overview
//! Consumes `HttpRequest` values and produces `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller receives and
//! sends the actual HTTP messages, making the core fully deterministic and
//! testable.
//!
//! # Design
//! - `process` validates a `name` from the query string or a JSON body and
//!   shapes a JSON success/error response. It is stateless and never fails:
//!   every outcome becomes an `HttpResponse`.
//! - `factorial` is an independent arbitrary-precision calculator that
//!   returns typed errors to its caller.

pub mod error;
pub mod factorial;
pub mod http;
pub mod process;

pub use error::{FactorialError, ProcessError};
pub use factorial::{factorial, factorial_of};
pub use http::{HttpMethod, HttpRequest, HttpResponse, CONTENT_TYPE_JSON};
pub use process::{handle, health_check, validate, NameLookup, ValidName, API_VERSION};

pub use num_bigint::BigUint;

use serde_json::Value;

/// JSON type name of `value`, as used in error messages and logs.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
