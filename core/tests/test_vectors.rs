//! Verify the processor and the calculator against JSON test vectors stored
//! in `test-vectors/`.
//!
//! Each process vector describes a request and the exact response it must
//! produce. Comparing parsed JSON (not raw strings) avoids false negatives
//! from field-ordering differences.

use greeter_core::{factorial_of, handle, BigUint, FactorialError, HttpMethod, HttpRequest};

/// Build an `HttpRequest` from a vector's `request` object.
fn request_from(vector: &serde_json::Value) -> HttpRequest {
    let mut req = HttpRequest::new(HttpMethod::from(vector["method"].as_str().unwrap()));
    for (key, value) in vector["query"].as_object().unwrap() {
        req = req.with_query(key.as_str(), value.as_str().unwrap());
    }
    if let Some(body) = vector["body"].as_str() {
        req = req.with_body(body.as_bytes().to_vec());
    }
    req
}

#[test]
fn process_test_vectors() {
    let raw = include_str!("../../test-vectors/process.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_response"];

        let resp = handle(&request_from(&case["request"]));

        assert_eq!(
            u64::from(resp.status),
            expected["status"].as_u64().unwrap(),
            "{name}: status"
        );
        assert_eq!(resp.content_type, "application/json", "{name}: content type");
        assert_eq!(resp.body, expected["body"], "{name}: body");

        let wire: serde_json::Value = serde_json::from_slice(&resp.body_bytes()).unwrap();
        assert_eq!(wire, expected["body"], "{name}: serialized body");
    }
}

#[test]
fn factorial_test_vectors() {
    let raw = include_str!("../../test-vectors/factorial.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let input = &case["input"];
        let result = factorial_of(input);

        match case["error"].as_str() {
            None => {
                let expected: BigUint = case["expected"].as_str().unwrap().parse().unwrap();
                assert_eq!(result.unwrap(), expected, "{input}!");
            }
            Some("negative") => {
                assert!(matches!(result, Err(FactorialError::Negative(_))), "{input}");
            }
            Some("not_an_integer") => {
                assert!(
                    matches!(result, Err(FactorialError::NotAnInteger { .. })),
                    "{input}"
                );
            }
            Some(other) => panic!("unknown error kind in vector: {other}"),
        }
    }
}
