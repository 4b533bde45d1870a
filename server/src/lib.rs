//! axum adapter for the greeter core.
//!
//! Each handler converts the incoming axum request into a plain
//! [`greeter_core::HttpRequest`], lets the core produce an
//! [`greeter_core::HttpResponse`], and writes that back out. No state is
//! shared between requests.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use greeter_core::{HttpMethod, HttpRequest, HttpResponse, ProcessError};
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod logger;

pub use config::ServerConfig;
pub use error::ServerError;

/// A core response ready to be written by axum.
pub struct CoreResponse(pub HttpResponse);

impl IntoResponse for CoreResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, self.0.content_type)],
            self.0.body_bytes(),
        )
            .into_response()
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/process", get(process).post(process))
        .route("/health", get(health))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn core_request(method: &Method, query: HashMap<String, String>, body: Bytes) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::from(method.as_str()),
        query,
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}

/// Extractor rejections (oversized body, undecodable query) are answered
/// with the core's `INTERNAL_ERROR` JSON instead of axum's plain-text body.
async fn process(
    method: Method,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> CoreResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };

    let request = core_request(&method, query, body);
    CoreResponse(greeter_core::handle(&request))
}

fn rejected(status: StatusCode, detail: String) -> CoreResponse {
    tracing::error!(%status, error = %detail, "request rejected before processing");
    CoreResponse(ProcessError::Internal(detail).into_response())
}

async fn health(method: Method) -> CoreResponse {
    let request = core_request(&method, HashMap::new(), Bytes::new());
    CoreResponse(greeter_core::health_check(&request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn core_request_maps_method_and_query() {
        let query = HashMap::from([("name".to_string(), "Ada".to_string())]);
        let req = core_request(&Method::POST, query, Bytes::from_static(b"{}"));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.query.get("name").map(String::as_str), Some("Ada"));
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn empty_body_becomes_none() {
        let req = core_request(&Method::GET, HashMap::new(), Bytes::new());
        assert!(req.body.is_none());
    }

    #[test]
    fn rejection_becomes_internal_error_json() {
        let resp = rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into());
        assert_eq!(resp.0.status, 500);
        assert_eq!(resp.0.body["error_code"], "INTERNAL_ERROR");
        assert!(!resp.0.body.to_string().contains("length limit"));
    }

    #[test]
    fn core_response_sets_status_and_content_type() {
        let resp = CoreResponse(HttpResponse::json(503, json!({"status": "unhealthy"})))
            .into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
