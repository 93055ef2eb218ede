use crate::domain::Comment;
use crate::error::PipelineError;

/// One page of top-level comments plus the cursor for the next one.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub next_page_token: Option<String>,
}

impl CommentPage {
    pub fn new(comments: Vec<Comment>, next_page_token: Option<String>) -> Self {
        // The platform sometimes sends "" on the last page.
        let next_page_token = next_page_token.filter(|t| !t.is_empty());
        Self {
            comments,
            next_page_token,
        }
    }
}

#[async_trait::async_trait]
pub trait CommentSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        page_size: u32,
    ) -> Result<CommentPage, PipelineError>;
}
