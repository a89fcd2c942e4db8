/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{mock_client, mock_jwt_token, setup_mock_server};
use ledgerx_adapter::{
    ClientConfig, ContractId, ContractsQuery, Credentials, DerivativeType, LedgerxClient,
    LedgerxError, NewOrderRequest, PageQuery,
};
use rstest::rstest;
use serde_json::json;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(LedgerxClient::new(Credentials::new(mock_jwt_token())));
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
    };
    let _client = assert_ok!(LedgerxClient::with_config(
        config,
        Credentials::new(mock_jwt_token())
    ));
}

#[test]
fn test_client_rejects_bad_base_url() {
    let result = LedgerxClient::with_config_and_base_urls(
        ClientConfig::default(),
        Credentials::new(mock_jwt_token()),
        "not a url",
        "https://trade.ledgerx.com",
    );
    assert!(matches!(result, Err(LedgerxError::UrlParse(_))));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/trading/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "no prefix" })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/trading/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v1", server.uri());
    let client = assert_ok!(LedgerxClient::with_config_and_base_urls(
        ClientConfig::default(),
        Credentials::new(mock_jwt_token()),
        &base,
        &base,
    ));

    let contracts = assert_ok!(client.get_contracts(&ContractsQuery::default()).await);
    assert_eq!(contracts, json!([]));
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(LedgerxClient::new(Credentials::new("first")));
    client.set_credentials(Credentials::new(mock_jwt_token()));

    assert_eq!(client.credentials().jwt_token, mock_jwt_token());
}

#[tokio::test]
async fn test_replaced_credentials_are_sent() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/open-orders"))
        .and(header("authorization", "JWT rotated-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = mock_client(&server);
    client.set_credentials(Credentials::new("rotated-token"));

    let orders = assert_ok!(client.get_open_orders().await);
    assert_eq!(orders, json!([]));
}

#[rstest]
#[case(400, false, false)]
#[case(401, true, false)]
#[case(403, true, false)]
#[case(429, false, true)]
#[case(500, false, false)]
#[case(503, false, false)]
#[tokio::test]
async fn test_error_statuses_are_not_masked(
    #[case] status: u16,
    #[case] auth: bool,
    #[case] rate_limited: bool,
) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/trading/positions"))
        .respond_with(ResponseTemplate::new(status).set_body_string("rejected"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .get_positions(&PageQuery::default())
        .await
        .expect_err("error status must surface");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    assert_eq!(err.is_auth_error(), auth);
    assert_eq!(err.is_rate_limited(), rate_limited);
}

#[tokio::test]
async fn test_legitimately_empty_dataset_is_ok() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/trading/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "total_count": 0 },
            "data": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let positions = assert_ok!(client.get_positions(&PageQuery::default()).await);
    assert_eq!(positions, json!([]));
}

#[tokio::test]
async fn test_list_then_order_flow() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/trading/contracts"))
        .and(query_param("active", "true"))
        .and(query_param("derivative_type", "future_contract"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 22202469, "label": "BTC-Mini-31MAR2023-Future" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "contract_id": 22202469,
            "order_type": "limit",
            "is_ask": false,
            "size": 1,
            "price": 2_000_000,
            "volatile": false,
            "swap_purpose": "undisclosed",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "mid": "abc123" } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/orders/abc123"))
        .and(query_param("contract_id", "22202469"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let contracts = assert_ok!(
        client
            .get_contracts(&ContractsQuery {
                active: Some(true),
                derivative_type: Some(DerivativeType::FutureContract),
                limit: Some(5),
                ..Default::default()
            })
            .await
    );
    let contract_id = contracts[0]["id"].as_u64().map(ContractId::Id).expect("contract id");

    let ack = assert_ok!(
        client
            .create_order(&NewOrderRequest::limit(contract_id.clone(), false, 1, 2_000_000))
            .await
    );
    let mid = ack["mid"].as_str().expect("mid");

    let cancelled = assert_ok!(client.delete_single_order(mid, &contract_id).await);
    assert_eq!(cancelled, json!({ "status": 200 }));
}
