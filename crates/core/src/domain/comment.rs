use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Sign-based label; zero is Neutral with no tolerance band.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredComment {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: Sentiment,
}

impl ScoredComment {
    pub fn new(comment: &Comment, score: SentimentScore) -> Self {
        Self {
            text: comment.text.clone(),
            published_at: comment.published_at,
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            sentiment: score.sentiment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentBatch {
    pub video_id: String,
    pub fetched_at: DateTime<Utc>,
    pub items: Vec<ScoredComment>,
}

impl CommentBatch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
