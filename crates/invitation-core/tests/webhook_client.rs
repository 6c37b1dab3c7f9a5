//! Webhook client tests against a local HTTP server

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use invitation_core::{
    GuestEntry, InvitationError, ResponseMode, SubmissionConfig, SubmissionPayload, Submitter,
    WebhookClient,
};

/// What the fake webhook saw
struct Captured {
    method: String,
    content_type: Option<String>,
    body: String,
}

/// Serve exactly one request with `status`, reporting what was received
fn one_shot_server(status: u16) -> (String, mpsc::Receiver<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let url = format!("http://{}/exec", server.server_addr());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok(mut req) = server.recv() {
            let mut body = String::new();
            req.as_reader().read_to_string(&mut body).unwrap();
            let content_type = req
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string());
            let captured = Captured {
                method: req.method().as_str().to_string(),
                content_type,
                body,
            };
            let _ = req.respond(tiny_http::Response::from_string("ok").with_status_code(status));
            let _ = tx.send(captured);
        }
    });

    (url, rx)
}

fn payload() -> SubmissionPayload {
    let guests = vec![GuestEntry::named("Ana"), GuestEntry::blank()];
    SubmissionPayload::new(&guests, "11999999999").unwrap()
}

#[tokio::test]
async fn test_posts_json_payload() {
    let (url, rx) = one_shot_server(200);
    let client = WebhookClient::new(SubmissionConfig::new(&url).unwrap()).unwrap();

    client.submit(&payload()).await.unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "guests": [{ "name": "Ana" }], "phone": "11999999999" })
    );
}

#[tokio::test]
async fn test_opaque_mode_ignores_rejection() {
    let (url, rx) = one_shot_server(500);
    let client = WebhookClient::new(SubmissionConfig::new(&url).unwrap()).unwrap();

    assert!(client.submit(&payload()).await.is_ok());
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
}

#[tokio::test]
async fn test_inspect_mode_reports_rejection() {
    let (url, _rx) = one_shot_server(500);
    let config = SubmissionConfig::new(&url)
        .unwrap()
        .with_response_mode(ResponseMode::Inspect);
    let client = WebhookClient::new(config).unwrap();

    let err = client.submit(&payload()).await.unwrap_err();
    assert!(matches!(err, InvitationError::Rejected(500)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_inspect_mode_accepts_success() {
    let (url, _rx) = one_shot_server(200);
    let config = SubmissionConfig::new(&url)
        .unwrap()
        .with_response_mode(ResponseMode::Inspect);
    let client = WebhookClient::new(config).unwrap();

    assert!(client.submit(&payload()).await.is_ok());
}
