use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use primepillar_backend::config::RecaptchaConfig;
use primepillar_backend::util::recaptcha::{
    GoogleRecaptchaVerifier, RecaptchaError, RecaptchaVerifier,
};

fn config_for(server: &MockServer) -> RecaptchaConfig {
    let mut config = RecaptchaConfig::from_test_env();
    config.verify_url = format!("{}/siteverify", server.uri());
    config
}

#[tokio::test]
async fn test_verify_accepts_valid_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .and(body_string_contains("secret=test-secret-key"))
        .and(body_string_contains("response=some-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = GoogleRecaptchaVerifier::new(config_for(&server)).unwrap();
    assert!(verifier.verify("some-token").await.is_ok());
}

#[tokio::test]
async fn test_verify_maps_failure_flag_to_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error-codes": ["invalid-input-response"]
        })))
        .mount(&server)
        .await;

    let verifier = GoogleRecaptchaVerifier::new(config_for(&server)).unwrap();
    let err = verifier.verify("bad-token").await.unwrap_err();
    assert!(matches!(err, RecaptchaError::Rejected));
}

#[tokio::test]
async fn test_verify_maps_server_error_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let verifier = GoogleRecaptchaVerifier::new(config_for(&server)).unwrap();
    let err = verifier.verify("some-token").await.unwrap_err();
    assert!(matches!(err, RecaptchaError::Unavailable(_)));
}

#[tokio::test]
async fn test_verify_maps_malformed_body_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let verifier = GoogleRecaptchaVerifier::new(config_for(&server)).unwrap();
    let err = verifier.verify("some-token").await.unwrap_err();
    assert!(matches!(err, RecaptchaError::Unavailable(_)));
}

#[tokio::test]
async fn test_verifier_refuses_empty_secret() {
    let mut config = RecaptchaConfig::from_test_env();
    config.secret_key = "".to_string();
    let err = GoogleRecaptchaVerifier::new(config).unwrap_err();
    assert!(matches!(err, RecaptchaError::NotConfigured));
}
