//! Shared helpers for integration tests.

#![allow(clippy::unwrap_used, dead_code)]

use page_i18n::{
    HttpSource,
    Settings,
};
use reqwest::{
    Client,
    Url,
};
use tokio::io::{
    AsyncReadExt,
    AsyncWriteExt,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, and yields the
/// request line it received.
pub async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
    });

    (base_url, handle)
}

/// HTTP source that ignores proxy settings from the environment.
pub fn http_source(base_url: Url, settings: &Settings) -> HttpSource {
    let client = Client::builder().no_proxy().build().unwrap();
    HttpSource::with_client(client, base_url, settings)
}
