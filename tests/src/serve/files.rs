#![cfg(test)]
use miette::{IntoDiagnostic, Result};

use crate::harness::{TestServer, assert_no_cache, site};

#[tokio::test]
async fn test_index_served_at_root() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server.get("/").await?;
    assert_eq!(response.status(), 200);
    assert_no_cache(&response);

    let content_type = response.headers()["content-type"]
        .to_str()
        .into_diagnostic()?;
    assert!(content_type.contains("text/html"));

    let body = response.text().await.into_diagnostic()?;
    assert_eq!(body, "<h1>Shared folder</h1>");

    Ok(())
}

#[tokio::test]
async fn test_nested_index_served() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server.get("/blog/").await?;
    assert_eq!(response.status(), 200);
    assert_no_cache(&response);
    assert_eq!(response.text().await.into_diagnostic()?, "<h1>Blog</h1>");

    Ok(())
}

#[tokio::test]
async fn test_plain_file_served() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server.get("/notes.txt").await?;
    assert_eq!(response.status(), 200);
    assert_no_cache(&response);
    assert_eq!(response.text().await.into_diagnostic()?, "0123456789");

    Ok(())
}

#[tokio::test]
async fn test_missing_path_is_404() -> Result<()> {
    let server = TestServer::start(site).await?;

    for path in ["/nope.txt", "/docs/nope/", "/missing/deeper/file"] {
        let response = server.get(path).await?;
        assert_eq!(response.status(), 404, "{path}");
        assert_no_cache(&response);
    }

    Ok(())
}

#[tokio::test]
async fn test_head_request() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server
        .client
        .head(server.url("/notes.txt"))
        .send()
        .await
        .into_diagnostic()?;

    assert_eq!(response.status(), 200);
    assert_no_cache(&response);
    assert_eq!(response.headers()["content-length"], "10");
    assert!(response.bytes().await.into_diagnostic()?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_range_request() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server
        .client
        .get(server.url("/notes.txt"))
        .header("range", "bytes=2-5")
        .send()
        .await
        .into_diagnostic()?;

    assert_eq!(response.status(), 206);
    assert_no_cache(&response);
    assert_eq!(response.text().await.into_diagnostic()?, "2345");

    Ok(())
}

#[tokio::test]
async fn test_unsupported_method_rejected() -> Result<()> {
    let server = TestServer::start(site).await?;

    let response = server
        .client
        .post(server.url("/notes.txt"))
        .body("upload")
        .send()
        .await
        .into_diagnostic()?;

    assert_eq!(response.status(), 405);
    assert_no_cache(&response);

    Ok(())
}
