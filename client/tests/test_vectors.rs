//! Verify the generic request/response contract against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected built requests, and
//! simulated responses with their expected interpretation. Comparing
//! parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use serde_json::Value;
use todo_client::{ApiService, HttpMethod, HttpResponse, RequestOptions};

const BASE_URL: &str = "http://localhost:8080/api";

fn service() -> ApiService {
    ApiService::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn headers_from(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn options_from(value: &Value) -> RequestOptions {
    let mut options = RequestOptions::default();
    if let Some(method) = value.get("method").and_then(Value::as_str) {
        options.method = parse_method(method);
    }
    if let Some(body) = value.get("body").and_then(Value::as_str) {
        options.body = Some(body.to_string());
    }
    if let Some(headers) = value.get("headers") {
        options.headers = headers_from(headers);
    }
    options
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let service = service();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let endpoint = case["endpoint"].as_str().unwrap();
        let options = options_from(&case["options"]);
        let expected = &case["expected_request"];

        let req = service.build_request(endpoint, &options);
        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.headers, headers_from(&expected["headers"]), "{name}: headers");
        assert_eq!(
            req.body.as_deref(),
            expected["body"].as_str(),
            "{name}: body"
        );
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let service = service();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: headers_from(&sim["headers"]),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        let result = service.parse_response(response);

        if let Some(expected) = case.get("expected_value") {
            let value = result.unwrap();
            assert_eq!(value.as_ref(), Some(expected), "{name}: parsed value");
        } else if case.get("expected_absent").is_some() {
            assert_eq!(result.unwrap(), None, "{name}: expected absent value");
        } else if let Some(message) = case.get("expected_error").and_then(Value::as_str) {
            let err = result.unwrap_err();
            assert_eq!(err.message(), message, "{name}: error message");
        } else if let Some(fragment) = case.get("expected_error_contains").and_then(Value::as_str) {
            let err = result.unwrap_err();
            assert!(
                err.message().contains(fragment),
                "{name}: expected error containing {fragment:?}, got {:?}",
                err.message()
            );
        } else {
            panic!("{name}: vector has no expectation");
        }
    }
}
