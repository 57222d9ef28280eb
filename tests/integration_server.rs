//! Integration tests for the storefront admin service.
//!
//! Each test binds the real application router to an ephemeral port and talks
//! to it over HTTP, so routing, middleware and JSON bodies are exercised end to end.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::net::SocketAddr;
use storefront_admin::{APP_USER_AGENT, admin::AdminConfig, api};
use tokio::{net::TcpListener, task::JoinHandle};

struct TestServer {
    addr: SocketAddr,
    client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    async fn start(secret: Option<&str>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind ephemeral port")?;
        let addr = listener.local_addr()?;
        let app = api::app(AdminConfig::new(secret.map(str::to_string)), None);

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app.into_make_service()).await;
        });

        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn login(&self, password: &str) -> Result<(StatusCode, Value)> {
        let response = self
            .client
            .post(self.url("/api/admin/auth"))
            .json(&json!({ "password": password }))
            .send()
            .await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok((status, body))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn admin_auth_scenarios() -> Result<()> {
    let server = TestServer::start(Some("abc123")).await?;

    let (status, body) = server.login("abc123").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = server.login("wrong").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid password" }));

    let (status, body) = server.login("").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid password" }));

    Ok(())
}

#[tokio::test]
async fn admin_auth_without_secret() -> Result<()> {
    let server = TestServer::start(None).await?;

    for password in ["abc123", "", "anything"] {
        let (status, body) = server.login(password).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server configuration error" }));
    }

    Ok(())
}

#[tokio::test]
async fn admin_auth_with_empty_secret() -> Result<()> {
    let server = TestServer::start(Some("")).await?;

    let (status, body) = server.login("").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server configuration error" }));

    Ok(())
}

#[tokio::test]
async fn admin_auth_rejects_get() -> Result<()> {
    let server = TestServer::start(Some("abc123")).await?;

    let response = server
        .client
        .get(server.url("/api/admin/auth"))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

#[tokio::test]
async fn health_and_root_respond() -> Result<()> {
    let server = TestServer::start(None).await?;

    let response = server.client.get(server.url("/health")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = response.json::<Value>().await?;
    assert_eq!(body["admin_secret"], "missing");

    let response = server.client.get(server.url("/")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    let text = response.text().await?;
    assert!(text.starts_with(env!("CARGO_PKG_NAME")));

    Ok(())
}
