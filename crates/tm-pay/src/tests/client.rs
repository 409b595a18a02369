use crate::{PayError, PaymentIntentClient, DEFAULT_AMOUNT_SCALE};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PaymentIntentClient {
    PaymentIntentClient::new(base_url, "sk_test_secret", "usd", DEFAULT_AMOUNT_SCALE)
}

#[tokio::test]
async fn create_intent_returns_client_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("authorization", "Bearer sk_test_secret"))
        .and(body_string_contains("amount=50000"))
        .and(body_string_contains("currency=usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_123",
            "client_secret": "pi_123_secret_abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let intent = client.create_intent(50.0).await.unwrap();
    assert_eq!(intent.client_secret, "pi_123_secret_abc");
}

#[tokio::test]
async fn provider_rejection_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": { "message": "Your card was declined." }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.create_intent(50.0).await.unwrap_err();
    match err {
        PayError::Provider {
            status, message, ..
        } => {
            assert_eq!(status, 402);
            assert_eq!(message, "Your card was declined.");
        }
        other => panic!("Expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_client_secret_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "pi_123" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.create_intent(50.0).await.unwrap_err();
    assert!(matches!(err, PayError::MalformedResponse { .. }));
}

#[tokio::test]
async fn non_positive_or_non_finite_prices_never_reach_the_wire() {
    let client = test_client("http://127.0.0.1:1");

    for price in [0.0, -3.5, f64::NAN, f64::INFINITY] {
        let err = client.create_intent(price).await.unwrap_err();
        assert!(matches!(err, PayError::InvalidAmount { .. }));
    }
}

#[test]
fn minor_units_rounds_to_nearest() {
    let client = test_client("http://127.0.0.1:1");

    assert_eq!(client.minor_units(50.0).unwrap(), 50_000);
    assert_eq!(client.minor_units(0.0015).unwrap(), 2);
    assert_eq!(client.minor_units(19.99).unwrap(), 19_990);
}
