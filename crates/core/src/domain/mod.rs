pub mod comment;

pub use comment::{Comment, CommentBatch, ScoredComment, Sentiment, SentimentScore};
