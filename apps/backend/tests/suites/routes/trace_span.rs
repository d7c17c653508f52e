//! Handler and service logs inherit `trace_id` through the request span.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use actix_web::test;
use serde_json::Value;
use serial_test::serial;
use tracing::subscriber::set_global_default;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use worldle_backend::build_state;
use worldle_backend::test_support::{create_test_app, FakeDirectory, FixedSelector};

/// Appends JSON lines to a shared buffer.
#[derive(Clone)]
struct BufWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[actix_web::test]
#[serial]
async fn game_start_logs_are_in_request_span_with_trace_id() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufWriter(buf.clone())
    };

    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .json()
            .with_span_list(true)
            .with_current_span(true)
            .with_ansi(false)
            .with_writer(make_writer),
    );
    set_global_default(subscriber).expect("set global subscriber");

    let directory = Arc::new(
        FakeDirectory::with_territories(["japan"]).with_image("japan", vec![0xFF, 0xD8]),
    );
    let state = build_state()
        .with_directory(directory)
        .with_selector(Arc::new(FixedSelector::new("japan")))
        .build()
        .expect("state should build");
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/newgame?sessionId=traced")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let trace_id = resp
        .headers()
        .get("X-Trace-Id")
        .expect("X-Trace-Id header present")
        .to_str()
        .unwrap()
        .to_string();

    let data = {
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).expect("utf8")
    };

    let mut saw_start = false;
    let mut saw_trace_match = false;

    for line in data.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Ok(v) = serde_json::from_str::<Value>(line) else {
            continue;
        };

        let msg = v
            .get("fields")
            .and_then(|f| f.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("");

        if msg.contains("Started new game") {
            saw_start = true;

            if let Some(spans) = v.get("spans").and_then(Value::as_array) {
                saw_trace_match |= spans.iter().any(|s| {
                    s.get("name").and_then(Value::as_str) == Some("request")
                        && s.get("trace_id").and_then(Value::as_str) == Some(trace_id.as_str())
                });
            }
        }
    }

    assert!(saw_start, "expected the game start event to be logged");
    assert!(
        saw_trace_match,
        "expected the game start event inside span 'request' with trace_id == {trace_id}"
    );
}
