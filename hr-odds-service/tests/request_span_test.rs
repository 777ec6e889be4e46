mod common;

use axum::{body::Body, http::Request};
use common::{fixture_records, router_with};
use service_core::middleware::REQUEST_ID_HEADER;
use std::io;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn request_span_carries_generated_request_id() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let response = router_with(fixture_records())
        .oneshot(
            Request::builder()
                .uri("/get_hr_probs_for_day?date=2023-07-04")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string();
    let captured = logs.contents();

    assert!(
        captured.contains(&format!("http_request{{request_id={}", request_id)),
        "no span with request_id={} in:\n{}",
        request_id,
        captured
    );
    assert!(!captured.contains("request_id=-"));
}
