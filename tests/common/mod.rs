//! Test utilities and helper functions for the site search test suite

use std::sync::Arc;

use mockito::{Mock, ServerGuard};
use site_search::config::ContentKind;
use site_search::{IndexedDocument, SearchConfig};

/// Padding that pushes a page over the minimum content length
#[allow(dead_code)]
pub const FILLER: &str = "这是一段用于测试的正文内容，长度足以超过索引所需的最少字符数量，确保页面能够被收录进搜索索引之中。页面正文还会包含一些额外的说明文字。";

/// Creates a site page in the same shape the real site uses
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <title>{} - 筑居思</title>
    <meta name="description" content="{} 的简介">
</head>
<body>
    <nav><a href="index.html">首页</a></nav>
    <main><div class="article-body"><p>{}</p></div></main>
    <footer>© 筑居思</footer>
</body>
</html>"#,
        html_escape::encode_text(title),
        html_escape::encode_double_quoted_attribute(title),
        body
    )
}

/// Site map listing `paths` under the mock server's origin
#[allow(dead_code)]
pub fn create_sitemap(base: &str, paths: &[&str]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for path in paths {
        xml.push_str(&format!("<url><loc>{base}/{path}</loc></url>"));
    }
    xml.push_str("</urlset>");
    xml
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut ServerGuard, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns XML content
#[allow(dead_code)]
pub async fn create_xml_mock(server: &mut ServerGuard, path: &str, xml: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(xml)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Creates test configuration pointing at the mock server
#[allow(dead_code)]
pub fn create_test_config(server: &ServerGuard) -> SearchConfig {
    SearchConfig::builder()
        .current_page("index.html")
        .index_delay_ms(0)
        .fetch_timeout_secs(2)
        .site_url(server.url())
        .build()
        .expect("valid test config")
}

/// Builds a document directly, bypassing the crawler
#[allow(dead_code)]
pub fn document(
    url: &str,
    title: &str,
    content: &str,
    kind: ContentKind,
    weight: f32,
) -> Arc<IndexedDocument> {
    Arc::new(IndexedDocument {
        url: url.to_string(),
        title: title.to_string(),
        description: String::new(),
        keywords: String::new(),
        content: content.to_string(),
        kind,
        weight,
    })
}

/// Serves `routes` over plain HTTP and never answers requests for `stalled`
///
/// Returns the server's base URL. The listener task lives as long as the
/// test runtime.
#[allow(dead_code)]
pub async fn spawn_stalling_server(
    routes: std::collections::HashMap<String, (String, String)>,
    stalled: &str,
) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let base = format!("http://{}", listener.local_addr().expect("listener address"));
    let routes = Arc::new(routes);
    let stalled = stalled.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            let stalled = stalled.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                if path == stalled {
                    tokio::time::sleep(std::time::Duration::from_secs(300)).await;
                    return;
                }
                let response = match routes.get(&path) {
                    Some((content_type, body)) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    ),
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string(),
                };
                socket.write_all(response.as_bytes()).await.ok();
                socket.shutdown().await.ok();
            });
        }
    });

    base
}
