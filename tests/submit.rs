use std::process::Command;

use httpmock::prelude::*;
use secrecy::SecretString;
use url::Url;

use b12_apply::{Applicant, Kind, SubmissionPayload, SubmitClient, canonical_bytes, sign};

fn sample_payload() -> SubmissionPayload {
    let applicant = Applicant {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        resume_link: "https://example.com/resume.pdf".to_owned(),
        repository_link: "https://github.com/ada/submission".to_owned(),
        action_run_link: "https://github.com/ada/submission/actions/runs/1".to_owned(),
    };
    SubmissionPayload::new(&applicant, "2026-08-07T12:00:00.000Z".to_owned())
}

fn secret() -> SecretString {
    SecretString::from("shared-secret".to_owned())
}

#[tokio::test]
async fn submit_returns_receipt_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/apply/submission")
                .header("content-type", "application/json");
            then.status(200).body(r#"{"status":"ok"}"#);
        })
        .await;

    let client =
        SubmitClient::new(Url::parse(&server.url("/apply/submission")).unwrap(), secret())
            .unwrap();
    let receipt = client.submit(&sample_payload()).await.unwrap();

    assert_eq!(receipt, r#"{"status":"ok"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn sent_signature_covers_exact_body() {
    let server = MockServer::start_async().await;

    let payload = sample_payload();
    let body = canonical_bytes(&payload).unwrap();
    let expected = sign::sign(&secret(), &body);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/apply/submission")
                .header(sign::SIGNATURE_HEADER, expected.header_value())
                .body(std::str::from_utf8(&body).unwrap());
            then.status(200).body(r#"{"status":"ok"}"#);
        })
        .await;

    let client = SubmitClient::with_client(
        Url::parse(&server.url("/apply/submission")).unwrap(),
        secret(),
        reqwest::Client::new(),
    );
    client.submit(&payload).await.unwrap();

    // The mock only matches when the signature header verifies against the
    // exact received body, so one hit proves signed bytes == sent bytes.
    mock.assert_async().await;
}

#[tokio::test]
async fn rejection_surfaces_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/apply/submission");
            then.status(500).body("boom");
        })
        .await;

    let client =
        SubmitClient::new(Url::parse(&server.url("/apply/submission")).unwrap(), secret())
            .unwrap();
    let err = client.submit(&sample_payload()).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Status);
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("500"));
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Nothing listens on the discard port.
    let client = SubmitClient::new(
        Url::parse("http://127.0.0.1:9/apply/submission").unwrap(),
        secret(),
    )
    .unwrap();

    let err = client.submit(&sample_payload()).await.unwrap_err();
    assert_eq!(err.kind(), Kind::Network);
}

#[test]
fn binary_prints_receipt_and_exits_zero() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/apply/submission");
        then.status(200).body(r#"{"status":"ok"}"#);
    });

    let output = Command::new(env!("CARGO_BIN_EXE_b12-apply"))
        .env_clear()
        .env("B12_SECRET", "shared-secret")
        .env("B12_NAME", "Ada Lovelace")
        .env("B12_EMAIL", "ada@example.com")
        .env("B12_RESUME_LINK", "https://example.com/resume.pdf")
        .env("B12_REPOSITORY_LINK", "https://github.com/ada/submission")
        .env(
            "B12_ACTION_RUN_LINK",
            "https://github.com/ada/submission/actions/runs/1",
        )
        .env("B12_SUBMISSION_URL", server.url("/apply/submission"))
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"status\":\"ok\"}\n"
    );
    mock.assert();
}

#[test]
fn missing_secret_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let output = Command::new(env!("CARGO_BIN_EXE_b12-apply"))
        .env_clear()
        .env("B12_NAME", "Ada Lovelace")
        .env("B12_EMAIL", "ada@example.com")
        .env("B12_RESUME_LINK", "https://example.com/resume.pdf")
        .env("B12_REPOSITORY_LINK", "https://github.com/ada/submission")
        .env(
            "B12_ACTION_RUN_LINK",
            "https://github.com/ada/submission/actions/runs/1",
        )
        .env("B12_SUBMISSION_URL", server.url("/apply/submission"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("B12_SECRET"));
    assert_eq!(mock.hits(), 0);
}
