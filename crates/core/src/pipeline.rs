use crate::domain::{CommentBatch, ScoredComment};
use crate::error::PipelineError;
use crate::ingest::{fetch_comments, CommentSource};
use crate::sentiment::{score, SentimentModel};
use crate::video_id::extract_video_id;

/// Fetch up to `max_comments` comments and score each one independently.
pub async fn process<S, M>(
    source: &S,
    model: &M,
    video_id: &str,
    max_comments: usize,
) -> Result<CommentBatch, PipelineError>
where
    S: CommentSource + ?Sized,
    M: SentimentModel + ?Sized,
{
    let video_id = video_id.trim();
    let comments = fetch_comments(source, video_id, max_comments).await?;

    let items: Vec<ScoredComment> = comments
        .iter()
        .map(|c| ScoredComment::new(c, score(model, &c.text)))
        .collect();

    tracing::info!(
        source = source.source_name(),
        %video_id,
        comments = items.len(),
        "scored comments"
    );

    Ok(CommentBatch {
        video_id: video_id.to_string(),
        fetched_at: chrono::Utc::now(),
        items,
    })
}

pub async fn analyze_url<S, M>(
    source: &S,
    model: &M,
    url: &str,
    max_comments: usize,
) -> Result<CommentBatch, PipelineError>
where
    S: CommentSource + ?Sized,
    M: SentimentModel + ?Sized,
{
    let video_id = extract_video_id(url)?;
    process(source, model, &video_id, max_comments).await
}
