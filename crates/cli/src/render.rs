use std::fmt::Write;
use tubesense_core::domain::Sentiment;
use tubesense_core::report::DashboardReport;

const PREVIEW_TEXT_WIDTH: usize = 60;

pub fn text_report(report: &DashboardReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Video {} ({} comments)", report.video_id, report.total);

    let _ = writeln!(out, "\nSample Comments");
    for row in &report.preview {
        let _ = writeln!(
            out,
            "  {:<8}  {}",
            row.sentiment.as_str(),
            truncate(&row.text, PREVIEW_TEXT_WIDTH)
        );
    }

    let _ = writeln!(out, "\nSentiment Distribution");
    for label in Sentiment::ALL {
        let count = report
            .distribution
            .iter()
            .find(|c| c.sentiment == label)
            .map(|c| c.count)
            .unwrap_or(0);
        let _ = writeln!(out, "  {:<8}  {count}", label.as_str());
    }

    let _ = writeln!(out, "\nSentiment Trend Over Time");
    for row in &report.trend {
        let _ = writeln!(
            out,
            "  {}  {:<8}  {}",
            row.day,
            row.sentiment.as_str(),
            row.count
        );
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    let one_line = text.replace(['\n', '\r'], " ");
    if one_line.chars().count() <= width {
        return one_line;
    }
    let mut s: String = one_line.chars().take(width.saturating_sub(3)).collect();
    s.push_str("...");
    s
}
