use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_futures_bot::config_loader::ExchangeConfig;
use binance_futures_bot::domain::enums::{OrderSide, TimeInForce};
use binance_futures_bot::domain::errors::OrderError;
use binance_futures_bot::domain::model::order::OrderRequest;
use binance_futures_bot::infrastructure::exchange::binance::signer::BinanceSigner;
use binance_futures_bot::infrastructure::exchange::binance::{BinanceFuturesClient, BinanceKeys};
use binance_futures_bot::services::OrderSubmitter;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn client_for(base_url: &str) -> BinanceFuturesClient {
    let keys = BinanceKeys {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
    };
    let config = ExchangeConfig {
        base_url: base_url.to_string(),
        recv_window_ms: 5000,
        timeout_ms: 2000,
    };
    BinanceFuturesClient::new(keys, &config).unwrap()
}

#[tokio::test]
async fn test_market_order_sends_no_price_fields_and_passes_response_through() {
    let server = MockServer::start().await;
    let venue_response = json!({
        "orderId": 3943825478u64,
        "symbol": "BTCUSDT",
        "status": "NEW",
        "clientOrderId": "abc123",
        "executedQty": "0.000",
        "cumQuote": "0.00000",
        "type": "MARKET",
        "side": "BUY"
    });

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", "test-key"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "MARKET"))
        .and(query_param("quantity", "0.001"))
        .and(query_param_is_missing("price"))
        .and(query_param_is_missing("stopPrice"))
        .and(query_param_is_missing("timeInForce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(venue_response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec("0.001"));

    let result = submitter.submit(&order).await.unwrap();

    assert_eq!(result.raw(), &venue_response);
    assert_eq!(result.status().as_deref(), Some("NEW"));
}

#[tokio::test]
async fn test_limit_order_defaults_time_in_force_to_gtc() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("price", "30000"))
        .and(query_param("timeInForce", "GTC"))
        .and(query_param_is_missing("stopPrice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "orderId": 1, "status": "NEW" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::limit("BTCUSDT", OrderSide::Buy, dec("0.001"), dec("30000"), None);

    submitter.submit(&order).await.unwrap();
}

#[tokio::test]
async fn test_stop_limit_goes_out_as_stop_with_both_prices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "STOP"))
        .and(query_param("price", "29000"))
        .and(query_param("stopPrice", "29500"))
        .and(query_param("timeInForce", "IOC"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "orderId": 2, "status": "NEW" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::stop_limit(
        "BTCUSDT",
        OrderSide::Sell,
        dec("0.001"),
        dec("29000"),
        dec("29500"),
        Some(TimeInForce::IOC),
    );

    submitter.submit(&order).await.unwrap();
}

#[tokio::test]
async fn test_request_is_signed_over_its_own_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderId": 3 })))
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::market("ETHUSDT", OrderSide::Sell, dec("1.5"));
    submitter.submit(&order).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let query = requests[0].url.query().unwrap().to_string();
    let (unsigned, signature) = query.split_once("&signature=").unwrap();
    assert!(unsigned
        .starts_with("symbol=ETHUSDT&side=SELL&type=MARKET&quantity=1.5&recvWindow=5000&timestamp="));
    assert_eq!(signature, BinanceSigner::new("test-secret").sign(unsigned));
}

#[tokio::test]
async fn test_lot_size_violation_is_a_remote_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "code": -1013, "msg": "Filter failure: LOT_SIZE" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec("0.0000001"));

    match submitter.submit(&order).await {
        Err(OrderError::RemoteRejection { code, message }) => {
            assert_eq!(code, -1013);
            assert_eq!(message, "Filter failure: LOT_SIZE");
        }
        other => panic!("Expected RemoteRejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_a_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let order = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec("0.001"));

    let err = submitter.submit(&order).await.unwrap_err();
    assert!(matches!(err, OrderError::Transport(_)));
}

#[tokio::test]
async fn test_slow_venue_times_out_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "orderId": 4 }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let keys = BinanceKeys {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
    };
    let config = ExchangeConfig {
        base_url: server.uri(),
        recv_window_ms: 5000,
        timeout_ms: 50,
    };
    let submitter = OrderSubmitter::new(BinanceFuturesClient::new(keys, &config).unwrap());
    let order = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec("0.001"));

    let err = submitter.submit(&order).await.unwrap_err();
    assert!(matches!(err, OrderError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_venue_is_a_transport_failure() {
    // Nothing listens on port 1
    let submitter = OrderSubmitter::new(client_for("http://127.0.0.1:1"));
    let order = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec("0.001"));

    let err = submitter.submit(&order).await.unwrap_err();
    assert_eq!(err.kind(), "TransportFailure");
}

#[tokio::test]
async fn test_invalid_order_never_hits_the_venue() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let submitter = OrderSubmitter::new(client_for(&server.uri()));
    let mut order = OrderRequest::stop_limit(
        "BTCUSDT",
        OrderSide::Buy,
        dec("0.001"),
        dec("29000"),
        dec("29500"),
        None,
    );
    order.stop_price = None;

    let err = submitter.submit(&order).await.unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server.uri()).ping().await.unwrap();

    let err = client_for("http://127.0.0.1:1").ping().await.unwrap_err();
    assert!(matches!(err, OrderError::Transport(_)));
}
