#![cfg(test)]
use std::{net::SocketAddr, path::Path};

use miette::{IntoDiagnostic, Result};
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A qrserve instance on an ephemeral loopback port, serving a temp dir
pub struct TestServer {
    pub addr: SocketAddr,
    pub root: TempDir,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start serving a fresh temp dir populated by `setup`
    pub async fn start(setup: impl FnOnce(&Path) -> std::io::Result<()>) -> Result<Self> {
        let root = tempfile::tempdir().into_diagnostic()?;
        setup(root.path()).into_diagnostic()?;

        let listener = qrserve::web::bind("127.0.0.1", 0).await?;
        let addr = listener.local_addr().into_diagnostic()?;

        let served = root.path().to_path_buf();
        let handle = tokio::spawn(async move {
            let _ = qrserve::web::serve(listener, &served).await;
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .into_diagnostic()?;

        Ok(Self {
            addr,
            root,
            client,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        self.client
            .get(self.url(path))
            .send()
            .await
            .into_diagnostic()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Site with an index page, a text file and a subdirectory without index
pub fn site(root: &Path) -> std::io::Result<()> {
    std::fs::write(root.join("index.html"), "<h1>Shared folder</h1>")?;
    std::fs::write(root.join("notes.txt"), "0123456789")?;
    std::fs::create_dir(root.join("docs"))?;
    std::fs::write(root.join("docs").join("report.pdf"), b"%PDF-1.4")?;
    std::fs::create_dir(root.join("docs").join("drafts"))?;
    std::fs::create_dir(root.join("blog"))?;
    std::fs::write(root.join("blog").join("index.html"), "<h1>Blog</h1>")?;
    Ok(())
}

pub fn assert_no_cache(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["expires"], "Thu, 01 Jan 1970 00:00:00 GMT");
    assert_eq!(headers["cache-control"], "no-cache, private, max-age=0");
    assert_eq!(headers["pragma"], "no-cache");
    assert_eq!(headers["x-accel-expires"], "0");
}
