//! Error server over a real socket.

use std::net::SocketAddr;

use apiproxy_launcher::http::ErrorServer;
use tokio::net::TcpListener;

mod common;

async fn start(message: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = ErrorServer::new(message);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    addr
}

#[tokio::test]
async fn test_get_returns_503_with_message() {
    let addr = start("Serverless ApiProxy expects ENDPOINTS_SERVICE_NAME in environment variables.").await;

    let res = common::get_with_retry(addr, "/").await;
    assert_eq!(res.status(), 503);
    assert_eq!(
        res.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/plain"
    );
    assert_eq!(
        res.text().await.unwrap(),
        "Serverless ApiProxy expects ENDPOINTS_SERVICE_NAME in environment variables.\n"
    );
}

#[tokio::test]
async fn test_post_to_deep_path_returns_503() {
    let addr = start("Malformed ESPv2_ARGS environment variable.").await;
    let _ = common::get_with_retry(addr, "/").await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .post(format!("http://{}/v1/shelves/1/books", addr))
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 503);
    assert_eq!(res.text().await.unwrap(), "Malformed ESPv2_ARGS environment variable.\n");
}
