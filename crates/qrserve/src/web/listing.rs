use std::{
    fmt::Write,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use tracing::debug;

/// Characters escaped in a single relative path segment of an href
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// List a directory under the served root that has no `index.html`
///
/// Only reached once the file service has failed to find a file, so
/// anything that is not a directory path is a 404.
pub async fn list_directory(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let path = uri.path();
    if !path.ends_with('/') {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(dir) = resolve(&root, path) else {
        debug!("Rejected listing path {path}");
        return StatusCode::NOT_FOUND.into_response();
    };

    match read_entries(&dir).await {
        Ok(entries) => Html(render(&entries)).into_response(),
        Err(e) => {
            debug!("Cannot list {}: {e}", dir.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Map a request path onto `root`, refusing anything but plain names
#[must_use]
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut path = root.to_path_buf();

    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == segment => path.push(name),
            _ => return None,
        }
    }

    Some(path)
}

async fn read_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        // follow symlinks so linked directories get a trailing slash
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .is_ok_and(|meta| meta.is_dir());

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Render entries as a bare `<pre>` list of links
#[must_use]
pub fn render(entries: &[Entry]) -> String {
    let mut html = String::from(
        "<!doctype html>\n<meta name=\"viewport\" content=\"width=device-width\">\n<pre>\n",
    );

    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let _ = writeln!(
            html,
            "<a href=\"{}{suffix}\">{}{suffix}</a>",
            utf8_percent_encode(&entry.name, SEGMENT),
            escape(&entry.name),
        );
    }

    html.push_str("</pre>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
