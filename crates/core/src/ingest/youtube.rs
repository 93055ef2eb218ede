use crate::config::Settings;
use crate::domain::Comment;
use crate::error::PipelineError;
use crate::ingest::provider::{CommentPage, CommentSource};
use crate::ingest::types::{CommentThreadListResponse, ErrorEnvelope};
use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const COMMENT_THREADS_PATH: &str = "/youtube/v3/commentThreads";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TEXT_FORMAT: &str = "html";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    text_format: String,
}

impl YouTubeClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_youtube_api_key()?.to_string();
        let base_url = settings
            .youtube_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = settings
            .youtube_timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        anyhow::ensure!(timeout_secs >= 1, "YOUTUBE_TIMEOUT_SECS must be >= 1");
        let text_format = settings
            .youtube_text_format
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_FORMAT.to_string());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build YouTube http client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
            text_format,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            COMMENT_THREADS_PATH
        )
    }

    fn headers(&self) -> Result<HeaderMap, PipelineError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| PipelineError::validation("YOUTUBE_API_KEY is not a valid header value"))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl CommentSource for YouTubeClient {
    fn source_name(&self) -> &'static str {
        "youtube_data_api_v3"
    }

    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        page_size: u32,
    ) -> Result<CommentPage, PipelineError> {
        let page_size = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
            ("textFormat", self.text_format.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        // reqwest errors carry the request URL; keep it out of user-facing messages.
        let res = self
            .http
            .get(self.url())
            .headers(self.headers()?)
            .query(&params)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = res.status();
        let text = res.text().await.map_err(|e| e.without_url())?;

        if !status.is_success() {
            return Err(source_error(status.as_u16(), &text));
        }

        parse_page(&text)
    }
}

pub(crate) fn parse_page(text: &str) -> Result<CommentPage, PipelineError> {
    let body = serde_json::from_str::<CommentThreadListResponse>(text)
        .map_err(|e| PipelineError::parse(format!("commentThreads body: {e}")))?;

    let mut comments = Vec::with_capacity(body.items.len());
    for item in body.items {
        let snippet = item.snippet.top_level_comment.snippet;
        comments.push(Comment {
            text: snippet.text_display,
            published_at: parse_published_at(&snippet.published_at)?,
        });
    }

    Ok(CommentPage::new(comments, body.next_page_token))
}

/// ISO-8601 with offset, normalized to UTC.
pub(crate) fn parse_published_at(s: &str) -> Result<DateTime<Utc>, PipelineError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PipelineError::parse(format!("invalid publishedAt {s:?}: {e}")))
}

pub(crate) fn source_error(status: u16, text: &str) -> PipelineError {
    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => PipelineError::Source {
            status: envelope.error.code.unwrap_or(status),
            reason: envelope
                .error
                .errors
                .into_iter()
                .find_map(|e| e.reason),
            message: envelope.error.message,
        },
        Err(_) => PipelineError::Source {
            status,
            reason: None,
            message: text.trim().to_string(),
        },
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const KEY: &str = "SECRET_KEY_123";

    /// Answers every request with `status` and `body`, keeping each request head.
    async fn serve(status: &'static str, body: String) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let heads = Arc::new(Mutex::new(Vec::new()));
        let recorded = heads.clone();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                recorded
                    .lock()
                    .unwrap()
                    .push(String::from_utf8_lossy(&buf).into_owned());

                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{addr}"), heads)
    }

    fn settings(base_url: &str) -> Settings {
        Settings {
            youtube_api_key: Some(KEY.to_string()),
            youtube_base_url: Some(base_url.to_string()),
            youtube_timeout_secs: Some(5),
            youtube_text_format: None,
            max_comments: 200,
            sentiment_lexicon_path: None,
            sentry_dsn: None,
        }
    }

    fn request_target(head: &str) -> &str {
        head.lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
    }

    fn one_comment_page(next: Option<&str>) -> String {
        let mut body = json!({
            "items": [
                {"snippet": {"topLevelComment": {"snippet": {
                    "textDisplay": "nice",
                    "publishedAt": "2024-05-01T12:30:00Z"
                }}}}
            ]
        });
        if let Some(t) = next {
            body["nextPageToken"] = json!(t);
        }
        body.to_string()
    }

    #[tokio::test]
    async fn first_page_sends_query_without_cursor() {
        let (base_url, heads) = serve("200 OK", one_comment_page(Some("C1"))).await;
        let client = YouTubeClient::from_settings(&settings(&base_url)).unwrap();

        let page = client.fetch_page("ABC123", None, 100).await.unwrap();

        assert_eq!(page.comments.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("C1"));

        let heads = heads.lock().unwrap();
        assert_eq!(heads.len(), 1);
        assert_eq!(
            request_target(&heads[0]),
            "/youtube/v3/commentThreads?part=snippet&videoId=ABC123&maxResults=100&textFormat=html"
        );
        assert!(heads[0]
            .to_ascii_lowercase()
            .contains(&format!("x-goog-api-key: {}", KEY.to_ascii_lowercase())));
    }

    #[tokio::test]
    async fn later_pages_send_cursor() {
        let (base_url, heads) = serve("200 OK", one_comment_page(None)).await;
        let client = YouTubeClient::from_settings(&settings(&base_url)).unwrap();

        let page = client.fetch_page("ABC123", Some("C1"), 100).await.unwrap();

        assert!(page.next_page_token.is_none());
        let heads = heads.lock().unwrap();
        let target = request_target(&heads[0]);
        assert!(target.ends_with("&pageToken=C1"), "{target}");
        assert!(!target.contains(KEY));
    }

    #[tokio::test]
    async fn error_status_uses_platform_envelope() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]
            }
        })
        .to_string();
        let (base_url, _heads) = serve("403 Forbidden", body).await;
        let client = YouTubeClient::from_settings(&settings(&base_url)).unwrap();

        let err = client.fetch_page("ABC123", None, 100).await.unwrap_err();

        match err {
            PipelineError::Source { status, reason, .. } => {
                assert_eq!(status, 403);
                assert_eq!(reason.as_deref(), Some("quotaExceeded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_error_does_not_reveal_api_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = YouTubeClient::from_settings(&settings(&format!("http://{addr}"))).unwrap();

        let err = client.fetch_page("ABC123", None, 100).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Source);
        let msg = err.to_string();
        assert!(!msg.contains(KEY), "{msg}");
        assert!(!msg.contains("commentThreads"), "{msg}");
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut s = settings("http://127.0.0.1");
        s.youtube_timeout_secs = Some(0);
        assert!(YouTubeClient::from_settings(&s).is_err());
    }
}
