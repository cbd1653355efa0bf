use course_signup::domain::ports::SubmissionClient;
use course_signup::{
    Field, FieldEdit, FieldState, FormController, FormStatus, SignupError, SignupRequest,
    SignupSettings, SubmissionOutcome, WebhookClient,
};
use course_signup::presentation::{BannerKind, StatusBanner};
use httpmock::prelude::*;

fn fill_anna<C: SubmissionClient>(form: &mut FormController<C>) {
    form.apply(FieldEdit::Name("Anna Weber".to_string()));
    form.apply(FieldEdit::Email("anna@uni.ac.at".to_string()));
    form.apply(FieldEdit::Phone("+436601234567".to_string()));
    form.apply(FieldEdit::Consent(true));
    form.apply(FieldEdit::WantTips(false));
}

#[tokio::test]
async fn test_accepted_signup_reaches_success_and_clears_form() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/signup")
            .json_body_partial(r#"{"name": "Anna Weber", "gdprConsentAndUpdates": true}"#);
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let settings = SignupSettings::new(server.url("/signup"));
    let mut form = FormController::new(WebhookClient::new(&settings).unwrap());
    fill_anna(&mut form);
    assert!(form.validation().is_valid());
    assert!(form.can_submit());

    let status = form.submit().await.unwrap();

    hook.assert_hits(1);
    assert_eq!(status, FormStatus::Success);
    assert_eq!(form.values(), &SignupRequest::default());
    assert_eq!(form.field_state(Field::Name), FieldState::Pristine);

    form.dismiss();
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test]
async fn test_server_error_keeps_input_for_retry() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(500);
    });

    let settings = SignupSettings::new(server.url("/signup"));
    let mut form = FormController::new(WebhookClient::new(&settings).unwrap());
    fill_anna(&mut form);

    let status = form.submit().await.unwrap();
    assert!(matches!(status, FormStatus::Error(_)));
    assert_eq!(form.values().name, "Anna Weber");
    assert!(form.can_submit());
    failing.assert_hits(1);

    // The webhook recovers; resubmitting uses the retained values.
    failing.delete();
    let recovered = server.mock(|when, then| {
        when.method(POST)
            .path("/signup")
            .json_body_partial(r#"{"email": "anna@uni.ac.at"}"#);
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let status = form.submit().await.unwrap();
    assert_eq!(status, FormStatus::Success);
    recovered.assert_hits(1);
}

#[tokio::test]
async fn test_in_flight_guard_allows_a_single_request() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let settings = SignupSettings::new(server.url("/signup"));
    let mut form = FormController::new(WebhookClient::new(&settings).unwrap());
    fill_anna(&mut form);

    let ticket = form.begin_submission().unwrap();
    assert_eq!(
        StatusBanner::for_status(&form.status()).map(|b| b.kind),
        Some(BannerKind::Progress)
    );
    assert!(matches!(
        form.begin_submission(),
        Err(SignupError::SubmissionInFlight)
    ));
    assert!(matches!(
        form.submit().await,
        Err(SignupError::SubmissionInFlight)
    ));

    let result = form.client().submit(ticket.request()).await;
    let status = form.complete_submission(ticket, result);

    assert_eq!(status, FormStatus::Success);
    hook.assert_hits(1);
}

#[tokio::test]
async fn test_missing_consent_never_calls_webhook() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(200).json_body(serde_json::json!({}));
    });

    let settings = SignupSettings::new(server.url("/signup"));
    let mut form = FormController::new(WebhookClient::new(&settings).unwrap());
    fill_anna(&mut form);
    form.apply(FieldEdit::Consent(false));

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, SignupError::ValidationError { .. }));
    assert_ne!(err.exit_code(), 0);
    assert_eq!(
        form.field_state(Field::GdprConsentAndUpdates),
        FieldState::Invalid("You must consent to data processing and course updates to continue")
    );
    assert!(form.outcome().is_none());
    hook.assert_hits(0);
}

#[tokio::test]
async fn test_malformed_response_is_reported_as_error_outcome() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(200).body("<html>ok</html>");
    });

    let settings = SignupSettings::new(server.url("/signup"));
    let mut form = FormController::new(WebhookClient::new(&settings).unwrap());
    fill_anna(&mut form);

    form.submit().await.unwrap();
    match form.outcome() {
        Some(SubmissionOutcome::Failure(reason)) => {
            assert!(reason.starts_with("Malformed webhook response"))
        }
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert_eq!(form.values().phone, "+436601234567");
}
