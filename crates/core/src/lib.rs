pub mod domain;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod video_id;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_MAX_COMMENTS: usize = 200;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub youtube_api_key: Option<String>,
        pub youtube_base_url: Option<String>,
        pub youtube_timeout_secs: Option<u64>,
        pub youtube_text_format: Option<String>,
        pub max_comments: usize,
        pub sentiment_lexicon_path: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let max_comments = positive_var("MAX_COMMENTS", std::env::var("MAX_COMMENTS").ok())?
                .map(|n| n as usize)
                .unwrap_or(DEFAULT_MAX_COMMENTS);

            Ok(Self {
                youtube_api_key: non_empty_var("YOUTUBE_API_KEY"),
                youtube_base_url: non_empty_var("YOUTUBE_BASE_URL"),
                youtube_timeout_secs: positive_var(
                    "YOUTUBE_TIMEOUT_SECS",
                    std::env::var("YOUTUBE_TIMEOUT_SECS").ok(),
                )?,
                youtube_text_format: non_empty_var("YOUTUBE_TEXT_FORMAT"),
                max_comments,
                sentiment_lexicon_path: non_empty_var("SENTIMENT_LEXICON_PATH"),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_youtube_api_key(&self) -> anyhow::Result<&str> {
            self.youtube_api_key
                .as_deref()
                .context("YOUTUBE_API_KEY is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Unset or blank is `None`; anything else must be an integer >= 1.
    fn positive_var(key: &str, raw: Option<String>) -> anyhow::Result<Option<u64>> {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };
        let n = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a positive integer (got {raw:?})"))?;
        anyhow::ensure!(n >= 1, "{key} must be >= 1");
        Ok(Some(n))
    }

}
