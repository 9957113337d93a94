use beer_subscription::payment::{process_payment, PaymentClient, PaymentError};
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_process_payment_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .and(body_json(21.11))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let body = process_payment(&server.uri(), 21.11).await.unwrap();
    assert_eq!(body, b"OK".to_vec());
}

#[tokio::test]
async fn test_process_payment_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = PaymentClient::new(server.uri());
    assert_eq!(client.endpoint(), server.uri());
    let err = client.process_payment(21.11).await.unwrap_err();

    assert!(matches!(err, PaymentError::Server { status: 500 }));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "payment server error: 500");
}

#[tokio::test]
async fn test_process_payment_client_error_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = process_payment(&server.uri(), 1.0).await.unwrap_err();
    assert!(matches!(err, PaymentError::Server { status: 400 }));
}

#[tokio::test]
async fn test_process_payment_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = process_payment(&uri, 21.11).await.unwrap_err();
    assert!(matches!(err, PaymentError::Transport(_)));
    assert_eq!(err.status(), None);
}
