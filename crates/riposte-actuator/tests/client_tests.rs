use riposte_actuator::{ActuatorClient, CounterMoveDispatcher, PAPER, ROCK, SCISSORS};
use riposte_gesture::{ConfirmedGesture, Gesture};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::{timeout, Duration};

/// Minimal HTTP/1.1 actuator stub.
///
/// Accepts connections, records each POST as (path, json body), and answers
/// every request with the given JSON reply. Handles keep-alive: multiple
/// requests may arrive on one connection.
async fn spawn_stub(
    reply: &'static str,
) -> (String, mpsc::UnboundedReceiver<(String, serde_json::Value)>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("local_addr failed");
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let tx = tx.clone();

            tokio::spawn(async move {
                let mut buf: Vec<u8> = Vec::new();
                loop {
                    // Read until the header block is complete.
                    let header_end = loop {
                        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                            break pos + 4;
                        }
                        let mut chunk = [0u8; 1024];
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    };

                    let header = String::from_utf8_lossy(&buf[..header_end]).to_string();
                    let path = header
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("")
                        .to_string();
                    let content_length = header
                        .lines()
                        .find_map(|line| {
                            let line = line.to_ascii_lowercase();
                            line.strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);

                    while buf.len() < header_end + content_length {
                        let mut chunk = [0u8; 1024];
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let body: serde_json::Value =
                        serde_json::from_slice(&buf[header_end..header_end + content_length])
                            .unwrap_or(serde_json::Value::Null);
                    let _ = tx.send((path, body));
                    buf.drain(..header_end + content_length);

                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                        reply.len(),
                        reply
                    );
                    if stream.write_all(response.as_bytes()).await.is_err() {
                        return;
                    }
                }
            });
        }
    });

    (format!("http://{}", addr), rx)
}

async fn next_request(
    rx: &mut mpsc::UnboundedReceiver<(String, serde_json::Value)>,
) -> (String, serde_json::Value) {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("request timed out")
        .expect("stub closed")
}

#[tokio::test]
async fn test_perform_sends_palm_then_fingers() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let client = ActuatorClient::new(base_url);

    client.perform(&ROCK).await;

    let (path, body) = next_request(&mut requests).await;
    assert_eq!(path, "/api/palm");
    assert_eq!(body["pose"], serde_json::json!([255, 235, 128, 128]));

    let (path, body) = next_request(&mut requests).await;
    assert_eq!(path, "/api/fingers");
    assert_eq!(body["pose"], serde_json::json!([49, 32, 40, 36, 41, 46]));
}

#[tokio::test]
async fn test_perform_paper_payloads() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let client = ActuatorClient::new(base_url);

    client.perform(&PAPER).await;

    let (_, body) = next_request(&mut requests).await;
    assert_eq!(body["pose"], serde_json::json!([128, 128, 128, 128]));
    let (_, body) = next_request(&mut requests).await;
    assert_eq!(
        body["pose"],
        serde_json::json!([255, 255, 255, 255, 255, 255])
    );
}

#[tokio::test]
async fn test_non_success_reply_is_swallowed() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"error","error":"servo jam"}"#).await;
    let client = ActuatorClient::new(base_url);

    // Both phases are still attempted; the failure is logged, not raised.
    client.perform(&SCISSORS).await;

    let (path, _) = next_request(&mut requests).await;
    assert_eq!(path, "/api/palm");
    let (path, _) = next_request(&mut requests).await;
    assert_eq!(path, "/api/fingers");
}

#[tokio::test]
async fn test_unreachable_actuator_does_not_panic() {
    // Nothing listens on this port; perform must complete anyway.
    let client = ActuatorClient::new("http://127.0.0.1:9");
    client.perform(&ROCK).await;
}

#[tokio::test]
async fn test_perform_named_unknown_preset_sends_nothing() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let client = ActuatorClient::new(base_url);

    client.perform_named("lizard").await;

    // Give any stray request time to arrive.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn test_perform_named_known_preset() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let client = ActuatorClient::new(base_url);

    client.perform_named("paper").await;

    let (path, _) = next_request(&mut requests).await;
    assert_eq!(path, "/api/palm");
}

#[tokio::test]
async fn test_dispatch_plays_the_winning_counter() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let dispatcher = CounterMoveDispatcher::new(ActuatorClient::new(base_url));

    let played = dispatcher
        .dispatch(ConfirmedGesture {
            gesture: Gesture::Rock,
            confidence: 0.9,
        })
        .await;
    assert_eq!(played, Some(Gesture::Paper));

    // Rock is countered with paper: all-open finger vector.
    let (path, body) = next_request(&mut requests).await;
    assert_eq!(path, "/api/palm");
    assert_eq!(body["pose"], serde_json::json!([128, 128, 128, 128]));
    let (_, body) = next_request(&mut requests).await;
    assert_eq!(
        body["pose"],
        serde_json::json!([255, 255, 255, 255, 255, 255])
    );
}

#[tokio::test]
async fn test_dispatch_drops_low_confidence() {
    let (base_url, mut requests) = spawn_stub(r#"{"status":"success"}"#).await;
    let dispatcher = CounterMoveDispatcher::new(ActuatorClient::new(base_url));

    // The dispatcher requires strictly more than 0.70.
    let played = dispatcher
        .dispatch(ConfirmedGesture {
            gesture: Gesture::Paper,
            confidence: 0.70,
        })
        .await;
    assert_eq!(played, None);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(requests.try_recv().is_err());
}
