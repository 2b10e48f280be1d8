//! End-to-end turns against a mock SSE endpoint.
//!
//! Each test serves a canned event stream with wiremock and drives the real
//! `SseConnector` through `run_interactive`, recording what gets rendered.

use s3gen_chat::session::run_interactive;
use s3gen_chat::stream::SseConnector;
use s3gen_chat::ui::{RecordingSink, Rendered};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Concatenate `data:` blocks into one SSE body.
fn sse_body(payloads: &[&str]) -> String {
    payloads
        .iter()
        .map(|data| format!("data: {data}\n\n"))
        .collect()
}

fn event_stream(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "text/event-stream")
}

/// Run one chat session that submits `lines` and then closes input.
async fn chat(endpoint: &str, lines: &[&str]) -> RecordingSink {
    let recorder = RecordingSink::new();
    let (tx, rx) = mpsc::channel(lines.len().max(1));
    for line in lines {
        tx.send(line.to_string()).await.expect("queue line");
    }
    drop(tx);

    let endpoint = Url::parse(endpoint).expect("endpoint url");
    timeout(
        Duration::from_secs(10),
        run_interactive(
            endpoint,
            SseConnector::new(Duration::from_secs(5)),
            recorder.clone(),
            rx,
            std::future::pending(),
        ),
    )
    .await
    .expect("chat loop finished");
    recorder
}

#[tokio::test]
async fn streamed_tokens_render_progressively() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .and(query_param("message", "hello"))
        .and(header("accept", "text/event-stream"))
        .respond_with(event_stream(sse_body(&["Hi", "there", "!", "[DONE]"])))
        .expect(1)
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hello"]).await;

    assert_eq!(
        recorder.entries(),
        vec![
            Rendered::StartupHint,
            Rendered::Prompt,
            Rendered::User("hello".into()),
            Rendered::Connected,
            Rendered::Bot("Hi".into()),
            Rendered::Bot("Hi there".into()),
            Rendered::Bot("Hi there!".into()),
            Rendered::TurnEnded,
            Rendered::Prompt,
        ]
    );
}

#[tokio::test]
async fn message_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .and(query_param("message", "안녕, 친구 & 가족?"))
        .respond_with(event_stream(sse_body(&["네", "[DONE]"])))
        .expect(1)
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["안녕, 친구 & 가족?"]).await;

    assert_eq!(recorder.bot_lines(), vec!["네".to_string()]);
    assert!(recorder.errors().is_empty());
}

#[tokio::test]
async fn blank_lines_make_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(event_stream(sse_body(&["[DONE]"])))
        .expect(0)
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["", "  "]).await;

    assert_eq!(
        recorder.entries(),
        vec![
            Rendered::StartupHint,
            Rendered::Prompt,
            Rendered::Prompt,
            Rendered::Prompt,
        ]
    );
}

#[tokio::test]
async fn error_status_ends_turn_without_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hello"]).await;

    assert_eq!(recorder.errors(), vec!["status 503: overloaded".to_string()]);
    assert!(recorder.bot_lines().is_empty());
    assert!(!recorder.entries().contains(&Rendered::Connected));
    assert_eq!(recorder.entries().last(), Some(&Rendered::Prompt));
}

#[tokio::test]
async fn non_event_stream_response_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"reply":"hi"}"#, "application/json"))
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hello"]).await;

    let errors = recorder.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("text/event-stream"), "got: {errors:?}");
}

#[tokio::test]
async fn stream_closed_before_sentinel_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(event_stream(sse_body(&["partial", "reply"])))
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hello"]).await;

    assert_eq!(
        recorder.bot_lines(),
        vec!["partial".to_string(), "partial reply".to_string()]
    );
    assert_eq!(
        recorder.errors(),
        vec!["stream closed before [DONE]".to_string()]
    );
    assert!(!recorder.entries().contains(&Rendered::TurnEnded));
}

#[tokio::test]
async fn named_events_and_comments_are_skipped() {
    let server = MockServer::start().await;
    let body = concat!(
        ": keep-alive\n\n",
        "event: ping\n",
        "data: ignored\n\n",
        "data: Hello\n\n",
        "event: message\n",
        "data: world\n\n",
        "data: [DONE]\n\n",
    );
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(event_stream(body.to_string()))
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hi"]).await;

    assert_eq!(
        recorder.bot_lines(),
        vec!["Hello".to_string(), "Hello world".to_string()]
    );
    assert!(recorder.entries().contains(&Rendered::TurnEnded));
}

#[tokio::test]
async fn tokens_after_sentinel_are_not_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat"))
        .respond_with(event_stream(sse_body(&["done", "[DONE]", "extra"])))
        .mount(&server)
        .await;

    let recorder = chat(&format!("{}/chat", server.uri()), &["hi"]).await;

    assert_eq!(recorder.bot_lines(), vec!["done".to_string()]);
    assert!(recorder.errors().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_reports_transport_error() {
    // Bind then drop a listener to get a port with nothing behind it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let recorder = chat(&format!("http://127.0.0.1:{port}/chat"), &["hello"]).await;

    let errors = recorder.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("http:"), "got: {errors:?}");
    assert_eq!(recorder.entries().last(), Some(&Rendered::Prompt));
}
