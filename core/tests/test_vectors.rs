//! Verify `build_request` against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes a config, optional payload file contents, and either
//! the expected request or the expected error variant. Payloads are written
//! to a fresh temp directory so a `null` payload means "file does not exist".

use apicall_core::{build_request, ApiError, Config, HttpMethod};

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn error_name(err: &ApiError) -> &'static str {
    match err {
        ApiError::MissingFields(_) => "MissingFields",
        ApiError::UnsupportedMethod(_) => "UnsupportedMethod",
        ApiError::PayloadOpen { .. } => "PayloadOpen",
        ApiError::Transport(_) => "Transport",
        ApiError::ReadBody(_) => "ReadBody",
    }
}

#[test]
fn build_request_test_vectors() {
    let raw = include_str!("../../test-vectors/build_request.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let payload = dir.path().join("payload.json");
        if let Some(contents) = case["payload"].as_str() {
            std::fs::write(&payload, contents).unwrap();
        }

        let input = &case["config"];
        let config = Config {
            endpoint: input["endpoint"].as_str().unwrap().to_string(),
            target_url: input["target_url"].as_str().unwrap().to_string(),
            request_type: input["request_type"].as_str().unwrap().to_string(),
            token: input["token"].as_str().unwrap().to_string(),
            payload,
        };

        let result = build_request(&config);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(error_name(&err), expected_error.as_str().unwrap(), "{name}: error");
            continue;
        }

        let req = result.unwrap();
        let expected_req = &case["expected_request"];
        assert_eq!(
            req.method,
            parse_method(expected_req["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let expected_body = expected_req["body"].as_str().map(|b| b.as_bytes().to_vec());
        assert_eq!(req.body, expected_body, "{name}: body");
    }
}

#[test]
fn binary_payload_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let payload = dir.path().join("payload.bin");
    let bytes: Vec<u8> = (0..=255u8).collect();
    std::fs::write(&payload, &bytes).unwrap();

    let config = Config {
        endpoint: "/x".to_string(),
        target_url: "https://h/api".to_string(),
        request_type: "PUT".to_string(),
        token: "T".to_string(),
        payload,
    };
    let req = build_request(&config).unwrap();
    assert_eq!(req.body, Some(bytes));
}
