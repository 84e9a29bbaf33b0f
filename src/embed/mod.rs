// SPDX-License-Identifier: MPL-2.0
//! Embedding surface.
//!
//! A desktop window cannot host the provider's page in an iframe, so the
//! surface checks that the embed URL answers and would allow being framed,
//! then reports the outcome. The probe never touches selection state; the
//! caller routes the result through the selection controller with the ticket
//! that started it.

use crate::config::{EmbedConfig, EmbedTimeout};
use crate::error::EmbedError;
use reqwest::header::{HeaderMap, CONTENT_SECURITY_POLICY, CONTENT_TYPE, X_FRAME_OPTIONS};
use std::time::Duration;

/// Upper bound on the bytes read while looking for the page title.
const MAX_SNIFF_BYTES: usize = 64 * 1024;

const USER_AGENT: &str = concat!("AnalyticsHub/", env!("CARGO_PKG_VERSION"));

/// How the surface reaches the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedSettings {
    /// When `false`, content is reported loaded without network access.
    pub probe: bool,
    pub timeout: Duration,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            probe: true,
            timeout: EmbedTimeout::default().as_duration(),
        }
    }
}

impl EmbedSettings {
    #[must_use]
    pub fn from_config(config: &EmbedConfig) -> Self {
        Self {
            probe: config.probe_enabled(),
            timeout: config.timeout().as_duration(),
        }
    }

    #[must_use]
    pub fn offline() -> Self {
        Self {
            probe: false,
            ..Self::default()
        }
    }
}

/// What the surface learned about a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPage {
    /// Address after redirects.
    pub url: String,
    pub content_type: Option<String>,
    /// Contents of the `<title>` element, if any.
    pub title: Option<String>,
    /// `false` when the page was not fetched (offline mode).
    pub probed: bool,
}

impl EmbedPage {
    fn unprobed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            content_type: None,
            title: None,
            probed: false,
        }
    }
}

/// Loads `url` the way a framing host would and classifies the answer.
pub async fn probe(url: String, settings: EmbedSettings) -> Result<EmbedPage, EmbedError> {
    if !settings.probe {
        return Ok(EmbedPage::unprobed(&url));
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(settings.timeout)
        .build()
        .map_err(|e| EmbedError::Network(e.to_string()))?;

    let mut response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| EmbedError::from_reqwest(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EmbedError::HttpStatus(status.as_u16()));
    }
    check_framing(response.headers())?;

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut body = Vec::new();
    while body.len() < MAX_SNIFF_BYTES {
        match response
            .chunk()
            .await
            .map_err(|e| EmbedError::from_reqwest(&e))?
        {
            Some(chunk) => body.extend_from_slice(&chunk),
            None => break,
        }
    }

    Ok(EmbedPage {
        url: final_url,
        content_type,
        title: extract_title(&String::from_utf8_lossy(&body)),
        probed: true,
    })
}

/// Fails with [`EmbedError::FramingBlocked`] when the response headers
/// forbid cross-origin framing.
pub fn check_framing(headers: &HeaderMap) -> Result<(), EmbedError> {
    let xfo_blocks = headers
        .get_all(X_FRAME_OPTIONS)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| {
            let value = value.trim();
            value.eq_ignore_ascii_case("deny") || value.eq_ignore_ascii_case("sameorigin")
        });

    let csp_blocks = headers
        .get_all(CONTENT_SECURITY_POLICY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(frame_ancestors_blocks);

    if xfo_blocks || csp_blocks {
        Err(EmbedError::FramingBlocked)
    } else {
        Ok(())
    }
}

/// Whether a CSP header value restricts `frame-ancestors` to `'none'` or `'self'`.
#[must_use]
pub fn frame_ancestors_blocks(policy: &str) -> bool {
    policy.split(';').any(|directive| {
        let mut tokens = directive.split_whitespace();
        let Some(name) = tokens.next() else {
            return false;
        };
        if !name.eq_ignore_ascii_case("frame-ancestors") {
            return false;
        }
        let sources: Vec<&str> = tokens.collect();
        sources.is_empty()
            || sources.iter().all(|source| {
                source.eq_ignore_ascii_case("'none'") || source.eq_ignore_ascii_case("'self'")
            })
    })
}

/// Returns the trimmed text of the first `<title>` element.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let start = open + lower[open..].find('>')? + 1;
    let end = start + lower[start..].find("</title")?;

    let text = decode_entities(&html[start..end]);
    let title = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn headers(pairs: &[(reqwest::header::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_static(value));
        }
        map
    }

    /// Serves one canned HTTP response on a local port and returns its URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/views/story")
    }

    #[test]
    fn x_frame_options_deny_blocks() {
        assert_eq!(
            check_framing(&headers(&[(X_FRAME_OPTIONS, "DENY")])),
            Err(EmbedError::FramingBlocked)
        );
        assert_eq!(
            check_framing(&headers(&[(X_FRAME_OPTIONS, " sameorigin ")])),
            Err(EmbedError::FramingBlocked)
        );
    }

    #[test]
    fn permissive_headers_pass() {
        assert_eq!(check_framing(&HeaderMap::new()), Ok(()));
        assert_eq!(
            check_framing(&headers(&[(
                CONTENT_SECURITY_POLICY,
                "default-src 'self'; frame-ancestors *"
            )])),
            Ok(())
        );
    }

    #[test]
    fn csp_frame_ancestors_is_classified() {
        assert!(frame_ancestors_blocks("frame-ancestors 'none'"));
        assert!(frame_ancestors_blocks("script-src 'self'; FRAME-ANCESTORS 'self'"));
        assert!(!frame_ancestors_blocks("frame-ancestors 'self' https://example.com"));
        assert!(!frame_ancestors_blocks("default-src 'self'"));
    }

    #[test]
    fn title_is_extracted_and_normalized() {
        let html = "<html><head><TITLE lang=\"en\">\n  Story 1 &amp; More\n</TITLE></head>";
        assert_eq!(extract_title(html), Some("Story 1 & More".to_string()));
    }

    #[test]
    fn missing_or_empty_title_is_none() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
        assert_eq!(extract_title("<title>unterminated"), None);
    }

    #[test]
    fn settings_follow_config() {
        let config = EmbedConfig {
            probe: Some(false),
            timeout_secs: Some(5),
        };
        let settings = EmbedSettings::from_config(&config);
        assert!(!settings.probe);
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn offline_probe_reports_loaded_without_network() {
        let page = probe("https://invalid.example/".to_string(), EmbedSettings::offline())
            .await
            .expect("offline probe succeeds");
        assert!(!page.probed);
        assert_eq!(page.url, "https://invalid.example/");
    }

    #[tokio::test]
    async fn probe_reads_title_of_framable_page() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 37\r\nConnection: close\r\n\r\n<html><title>Story 1</title></html>\n\n",
        )
        .await;

        let page = probe(url, EmbedSettings::default()).await.expect("loaded");
        assert!(page.probed);
        assert_eq!(page.title.as_deref(), Some("Story 1"));
        assert_eq!(page.content_type.as_deref(), Some("text/html"));
    }

    #[tokio::test]
    async fn probe_reports_framing_block() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nX-Frame-Options: DENY\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert_eq!(
            probe(url, EmbedSettings::default()).await,
            Err(EmbedError::FramingBlocked)
        );
    }

    #[tokio::test]
    async fn probe_reports_http_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert_eq!(
            probe(url, EmbedSettings::default()).await,
            Err(EmbedError::HttpStatus(404))
        );
    }
}
