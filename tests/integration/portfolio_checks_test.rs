// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use std::time::Duration;
use walletprobe::api::{ApiClient, Network, PortfolioApi};
use walletprobe::application::PortfolioChecks;
use walletprobe::runner::SuiteRunner;
use walletprobe::utils::errors::CheckError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::fixtures::{
    api_settings, devnet_body, devnet_only_token, invalid_network_body, mainnet_body, sol_token,
    usdc_token, OWNER, TOKENS_PATH,
};

fn checks(server: &MockServer) -> PortfolioChecks {
    let client = ApiClient::new(&api_settings(&server.uri(), None)).unwrap();
    PortfolioChecks::new(PortfolioApi::new(client), OWNER)
}

async fn mount_network(server: &MockServer, network: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .and(query_param("network", network))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts the happy-path API. Network-specific mocks go first so the
/// catch-all default-network mock only answers requests without `network`.
async fn healthy_api() -> MockServer {
    let server = MockServer::start().await;
    mount_network(&server, "mainnet", 200, mainnet_body()).await;
    mount_network(&server, "devnet", 200, devnet_body()).await;
    mount_network(&server, "green", 400, invalid_network_body()).await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(mainnet_body()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_every_case_passes_against_healthy_api() {
    let server = healthy_api().await;
    let checks = checks(&server);
    let mut runner = SuiteRunner::new(Duration::from_secs(30));

    for (name, case) in checks.cases() {
        runner.run_case(name, case).await;
    }
    let report = runner.finish();

    assert_eq!(report.total, 7);
    assert!(
        report.is_success(),
        "failures: {:?}",
        report.failures().collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_devnet_validation_requires_solana() {
    let server = MockServer::start().await;
    mount_network(
        &server,
        "devnet",
        200,
        json!({ "tokens": [usdc_token(), devnet_only_token()] }),
    )
    .await;

    let err = checks(&server).devnet_token_validation().await.unwrap_err();
    match err {
        CheckError::Assertion(failure) => {
            assert_eq!(failure.message, "devnet token names include Solana")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_devnet_validation_requires_a_priced_token() {
    let mut unpriced_sol = sol_token();
    unpriced_sol["price"] = json!(null);

    let server = MockServer::start().await;
    mount_network(
        &server,
        "devnet",
        200,
        json!({ "tokens": [unpriced_sol, devnet_only_token()] }),
    )
    .await;

    let err = checks(&server).devnet_token_validation().await.unwrap_err();
    assert!(matches!(err, CheckError::Assertion(ref f) if f.message == "priced devnet tokens"));
}

#[tokio::test]
async fn test_field_contract_reports_wrong_types() {
    let mut broken = usdc_token();
    broken["totalUiAmount"] = json!("10");

    let server = MockServer::start().await;
    mount_network(&server, "mainnet", 200, json!({ "tokens": [sol_token(), broken] })).await;

    let err = checks(&server)
        .token_field_contract(Network::Mainnet)
        .await
        .unwrap_err();
    match err {
        CheckError::Contract(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations.violations[0].path, "tokens[1].totalUiAmount");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unexpected_status_fails_the_case() {
    let server = MockServer::start().await;
    mount_network(&server, "devnet", 503, json!({ "message": "unavailable" })).await;

    let err = checks(&server)
        .token_field_contract(Network::Devnet)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Assertion failed: status for devnet network: expected 200, got 503"
    );
}

#[tokio::test]
async fn test_sol_contract_rejects_extra_price_keys() {
    let mut sol = sol_token();
    sol["price"]["marketCap"] = json!(1.0);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tokens": [sol] })))
        .mount(&server)
        .await;

    let err = checks(&server)
        .default_network_sol_contract()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unexpected keys [\"marketCap\"]"));
}

#[tokio::test]
async fn test_sol_contract_requires_sol_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "tokens": [usdc_token()] })),
        )
        .mount(&server)
        .await;

    let err = checks(&server)
        .default_network_sol_contract()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Contract violated: 1 violation(s): tokens: no SOL entry");
}

#[tokio::test]
async fn test_network_switch_detects_changed_mainnet_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .and(query_param("network", "mainnet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mainnet_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_network(
        &server,
        "mainnet",
        200,
        json!({ "tokens": [usdc_token(), sol_token()] }),
    )
    .await;
    mount_network(&server, "devnet", 200, devnet_body()).await;

    let err = checks(&server)
        .network_switch_is_idempotent()
        .await
        .unwrap_err();
    match err {
        CheckError::Assertion(failure) => {
            assert!(failure.message.ends_with("first difference at tokens[0]"));
            assert!(failure.expected.contains("\"name\":\"Solana\""));
            assert!(failure.actual.contains("\"name\":\"USD Coin\""));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_network_switch_reports_changed_field_value() {
    let mut repriced = sol_token();
    repriced["price"]["price"] = json!(153.0);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .and(query_param("network", "mainnet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mainnet_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_network(
        &server,
        "mainnet",
        200,
        json!({ "tokens": [repriced, usdc_token()] }),
    )
    .await;
    mount_network(&server, "devnet", 200, devnet_body()).await;

    let err = checks(&server)
        .network_switch_is_idempotent()
        .await
        .unwrap_err();
    match err {
        CheckError::Assertion(failure) => {
            assert!(failure.message.ends_with("tokens[0]"));
            assert!(failure.expected.contains("152.31"));
            assert!(failure.actual.contains("153.0"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_network_switch_detects_key_order_change() {
    let first = r#"{"tokens":[{"name":"Solana","mint":"11111111111111111111111111111111"}]}"#;
    let second = r#"{"tokens":[{"mint":"11111111111111111111111111111111","name":"Solana"}]}"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .and(query_param("network", "mainnet"))
        .respond_with(ResponseTemplate::new(200).set_body_string(first))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOKENS_PATH))
        .and(query_param("network", "mainnet"))
        .respond_with(ResponseTemplate::new(200).set_body_string(second))
        .mount(&server)
        .await;
    mount_network(&server, "devnet", 200, devnet_body()).await;

    let err = checks(&server)
        .network_switch_is_idempotent()
        .await
        .unwrap_err();
    match err {
        CheckError::Assertion(failure) => {
            assert!(failure.message.ends_with("same values, different encoding"));
            assert_eq!(failure.expected, r#"[{"name":"Solana","mint":"11111111111111111111111111111111"}]"#);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_invalid_network_status_code_must_match() {
    let server = MockServer::start().await;
    mount_network(
        &server,
        "green",
        400,
        json!({
            "statusCode": 422,
            "message": "\"network\" must be one of [mainnet, devnet, testnet]"
        }),
    )
    .await;

    let err = checks(&server)
        .invalid_network_is_rejected()
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Assertion failed: statusCode in error body: expected 400, got 422"
    );
}

#[tokio::test]
async fn test_devnet_without_exclusive_tokens_fails() {
    let server = MockServer::start().await;
    mount_network(&server, "mainnet", 200, mainnet_body()).await;
    mount_network(&server, "devnet", 200, json!({ "tokens": [sol_token()] })).await;

    let err = checks(&server)
        .devnet_has_exclusive_tokens()
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::Assertion(_)));
}

#[tokio::test]
async fn test_invalid_network_must_be_rejected() {
    let server = MockServer::start().await;
    mount_network(&server, "green", 200, mainnet_body()).await;

    let err = checks(&server)
        .invalid_network_is_rejected()
        .await
        .unwrap_err();
    match err {
        CheckError::Contract(violations) => {
            let paths: Vec<&str> = violations.violations.iter().map(|v| v.path.as_str()).collect();
            assert_eq!(paths, vec!["status", "message"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_invalid_network_message_must_match_exactly() {
    let server = MockServer::start().await;
    mount_network(
        &server,
        "green",
        400,
        json!({ "message": "\"network\" must be one of [mainnet, devnet]" }),
    )
    .await;

    let err = checks(&server)
        .invalid_network_is_rejected()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("message: expected"));
}
