//! Tables behind the dashboard charts. Rendering happens elsewhere.

use crate::domain::{CommentBatch, Sentiment};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendRow {
    pub day: NaiveDate,
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub video_id: String,
    pub total: usize,
    pub preview: Vec<PreviewRow>,
    pub distribution: Vec<SentimentCount>,
    pub scatter: Vec<ScatterPoint>,
    pub trend: Vec<TrendRow>,
}

impl DashboardReport {
    pub fn build(batch: &CommentBatch, preview_rows: usize) -> Self {
        Self {
            video_id: batch.video_id.clone(),
            total: batch.len(),
            preview: preview(batch, preview_rows),
            distribution: distribution(batch),
            scatter: scatter(batch),
            trend: daily_trend(batch),
        }
    }
}

pub fn preview(batch: &CommentBatch, n: usize) -> Vec<PreviewRow> {
    batch
        .items
        .iter()
        .take(n)
        .map(|c| PreviewRow {
            text: c.text.clone(),
            sentiment: c.sentiment,
        })
        .collect()
}

/// Labels that never occur are left out.
pub fn distribution(batch: &CommentBatch) -> Vec<SentimentCount> {
    let mut counts = BTreeMap::<Sentiment, usize>::new();
    for c in &batch.items {
        *counts.entry(c.sentiment).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect()
}

pub fn scatter(batch: &CommentBatch) -> Vec<ScatterPoint> {
    batch
        .items
        .iter()
        .map(|c| ScatterPoint {
            polarity: c.polarity,
            subjectivity: c.subjectivity,
            sentiment: c.sentiment,
        })
        .collect()
}

/// Comment counts per (UTC calendar day, sentiment), ordered by day then label.
pub fn daily_trend(batch: &CommentBatch) -> Vec<TrendRow> {
    let mut counts = BTreeMap::<(NaiveDate, Sentiment), usize>::new();
    for c in &batch.items {
        *counts
            .entry((c.published_at.date_naive(), c.sentiment))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((day, sentiment), count)| TrendRow {
            day,
            sentiment,
            count,
        })
        .collect()
}
