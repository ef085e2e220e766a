use std::net::SocketAddr;
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use reminder_status::config::Config;
use reminder_status::runtime_host::start_with_config;

async fn raw_get(addr: SocketAddr, path: &str) -> Option<(u16, String)> {
    let mut stream = TcpStream::connect(addr).await.ok()?;
    let request = format!(
        "GET {path} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        addr
    );
    stream.write_all(request.as_bytes()).await.ok()?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.ok()?;
    let response = String::from_utf8_lossy(&buf).into_owned();
    let status = response
        .lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())?;
    Some((status, response))
}

async fn wait_for_health(addr: SocketAddr, timeout_ms: u64) -> String {
    let deadline = std::time::Instant::now() + Duration::from_millis(timeout_ms);
    while std::time::Instant::now() < deadline {
        if let Some((200, response)) = raw_get(addr, "/health").await {
            return response;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("health endpoint did not become ready at {addr} within {timeout_ms}ms");
}

async fn wait_for_unreachable(addr: SocketAddr, timeout_ms: u64) {
    let deadline = std::time::Instant::now() + Duration::from_millis(timeout_ms);
    while std::time::Instant::now() < deadline {
        if TcpStream::connect(addr).await.is_err() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("server still reachable at {addr} after {timeout_ms}ms");
}

fn test_config(dir: &TempDir) -> Config {
    Config {
        port: 0,
        host: "127.0.0.1".into(),
        db_path: dir.path().join("reminders.db"),
    }
}

#[tokio::test]
async fn runtime_host_starts_serves_health_and_stops() {
    let dir = TempDir::new().unwrap();
    let host = start_with_config(test_config(&dir))
        .await
        .expect("runtime host should start");
    let addr = host.local_addr();

    let response = wait_for_health(addr, 2_000).await;
    assert!(response.contains("\"database\":\"initializing\""));

    host.stop().await.expect("runtime host should stop cleanly");
    wait_for_unreachable(addr, 2_000).await;
}

#[tokio::test]
async fn runtime_host_serves_all_routes() {
    let dir = TempDir::new().unwrap();
    let host = start_with_config(test_config(&dir)).await.unwrap();
    let addr = host.local_addr();
    wait_for_health(addr, 2_000).await;

    let (status, body) = raw_get(addr, "/").await.expect("dashboard response");
    assert_eq!(status, 200);
    assert!(body.contains("text/html"));

    let (status, body) = raw_get(addr, "/api/stats").await.expect("stats response");
    assert_eq!(status, 200);
    assert!(body.contains("\"success\":true"));

    host.stop().await.unwrap();
}

#[tokio::test]
async fn bind_conflict_is_reported() {
    let dir = TempDir::new().unwrap();
    let first = start_with_config(test_config(&dir)).await.unwrap();

    let mut config = test_config(&dir);
    config.port = first.local_addr().port();
    let err = match start_with_config(config).await {
        Ok(_) => panic!("second bind on the same port should fail"),
        Err(err) => err,
    };
    assert!(err.to_string().starts_with("listener bind failed"));

    first.stop().await.unwrap();
}
