use serde::Serialize;
use thiserror::Error;

/// Coarse classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Source,
    Parse,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("comment source error (status={status}, reason={}): {message}", reason.as_deref().unwrap_or("unknown"))]
    Source {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    #[error("comment source request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected comment source response: {0}")]
    Parse(String),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Validation(_) => ErrorKind::Validation,
            PipelineError::Source { .. } | PipelineError::Transport(_) => ErrorKind::Source,
            PipelineError::Parse(_) => ErrorKind::Parse,
        }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        PipelineError::Validation(msg.into())
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        PipelineError::Parse(msg.into())
    }
}
