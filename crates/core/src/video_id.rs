use crate::error::PipelineError;

/// Pulls the video id out of a watch URL: everything after the first `v=`, up to
/// the first `&`. Input without `v=` is taken as the id itself, so unsupported URL
/// forms fail later at the source rather than here.
pub fn extract_video_id(url: &str) -> Result<String, PipelineError> {
    let url = url.trim();
    let after = match url.find("v=") {
        Some(idx) => &url[idx + 2..],
        None => url,
    };
    let id = after.split('&').next().unwrap_or_default().trim();

    if id.is_empty() {
        return Err(PipelineError::validation(format!(
            "could not extract a video id from {url:?}"
        )));
    }
    Ok(id.to_string())
}
