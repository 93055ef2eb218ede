use crate::domain::Comment;
use crate::error::PipelineError;
use crate::ingest::provider::CommentSource;

/// Largest page the comment endpoint will return.
pub const PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Start,
    Next(String),
    Exhausted,
}

/// Walks the comment pages of one video, one request per `next_page` call.
///
/// The count bound is only checked between pages, so the total can overshoot
/// `max_comments` by at most `PAGE_SIZE - 1`.
pub struct CommentPager<'a, S: CommentSource + ?Sized> {
    source: &'a S,
    video_id: String,
    max_comments: usize,
    cursor: Cursor,
    fetched: usize,
    pages_requested: usize,
}

impl<'a, S: CommentSource + ?Sized> CommentPager<'a, S> {
    pub fn new(source: &'a S, video_id: &str, max_comments: usize) -> Result<Self, PipelineError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(PipelineError::validation("video id must be non-empty"));
        }
        if max_comments == 0 {
            return Err(PipelineError::validation("max_comments must be >= 1"));
        }

        Ok(Self {
            source,
            video_id: video_id.to_string(),
            max_comments,
            cursor: Cursor::Start,
            fetched: 0,
            pages_requested: 0,
        })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn fetched(&self) -> usize {
        self.fetched
    }

    pub fn pages_requested(&self) -> usize {
        self.pages_requested
    }

    pub fn is_done(&self) -> bool {
        self.cursor == Cursor::Exhausted || self.fetched >= self.max_comments
    }

    /// Rewind to the first page. The next call re-requests from the source.
    pub fn restart(&mut self) {
        self.cursor = Cursor::Start;
        self.fetched = 0;
        self.pages_requested = 0;
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<Comment>>, PipelineError> {
        if self.is_done() {
            return Ok(None);
        }

        let token = match &self.cursor {
            Cursor::Next(t) => Some(t.as_str()),
            _ => None,
        };

        let page = self
            .source
            .fetch_page(&self.video_id, token, PAGE_SIZE)
            .await?;
        self.pages_requested += 1;
        self.fetched += page.comments.len();

        tracing::debug!(
            source = self.source.source_name(),
            video_id = %self.video_id,
            page = self.pages_requested,
            items = page.comments.len(),
            fetched = self.fetched,
            has_next = page.next_page_token.is_some(),
            "fetched comment page"
        );

        self.cursor = match page.next_page_token {
            Some(t) => Cursor::Next(t),
            None => Cursor::Exhausted,
        };

        Ok(Some(page.comments))
    }

    pub async fn collect_all(mut self) -> Result<Vec<Comment>, PipelineError> {
        let mut out = Vec::new();
        while let Some(page) = self.next_page().await? {
            out.extend(page);
        }
        Ok(out)
    }
}

pub async fn fetch_comments<S: CommentSource + ?Sized>(
    source: &S,
    video_id: &str,
    max_comments: usize,
) -> Result<Vec<Comment>, PipelineError> {
    CommentPager::new(source, video_id, max_comments)?
        .collect_all()
        .await
}
