//! Wire shapes for the `commentThreads.list` endpoint.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
    pub published_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_comment_thread_page() {
        let v = json!({
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "pageInfo": {"totalResults": 1, "resultsPerPage": 100},
            "items": [
                {
                    "kind": "youtube#commentThread",
                    "id": "Ugz",
                    "snippet": {
                        "videoId": "zEysLR8X9Ko",
                        "topLevelComment": {
                            "kind": "youtube#comment",
                            "snippet": {
                                "textDisplay": "Great video &amp; thanks",
                                "textOriginal": "Great video & thanks",
                                "publishedAt": "2024-05-01T12:30:00Z"
                            }
                        },
                        "totalReplyCount": 0
                    }
                }
            ]
        });

        let parsed: CommentThreadListResponse = serde_json::from_value(v).unwrap();
        assert_eq!(parsed.next_page_token.as_deref(), Some("QURTSl9p"));
        assert_eq!(parsed.items.len(), 1);
        let snippet = &parsed.items[0].snippet.top_level_comment.snippet;
        assert_eq!(snippet.text_display, "Great video &amp; thanks");
        assert_eq!(snippet.published_at, "2024-05-01T12:30:00Z");
    }

    #[test]
    fn last_page_has_no_token() {
        let parsed: CommentThreadListResponse =
            serde_json::from_value(json!({"items": []})).unwrap();
        assert!(parsed.next_page_token.is_none());
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn rejects_item_without_top_level_comment() {
        let v = json!({"items": [{"snippet": {"videoId": "x"}}]});
        assert!(serde_json::from_value::<CommentThreadListResponse>(v).is_err());
    }

    #[test]
    fn parses_error_envelope() {
        let v = json!({
            "error": {
                "code": 403,
                "message": "The video identified by the videoId parameter has disabled comments.",
                "errors": [{"reason": "commentsDisabled", "domain": "youtube.commentThread"}]
            }
        });
        let parsed: ErrorEnvelope = serde_json::from_value(v).unwrap();
        assert_eq!(parsed.error.code, Some(403));
        assert_eq!(parsed.error.errors[0].reason.as_deref(), Some("commentsDisabled"));
    }
}
