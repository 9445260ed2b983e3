//! Text posted back to Slack.

use crate::core::models::PaperSummary;

/// Reply when the mention contains no arXiv abstract link.
pub const FORMAT_ERROR_MESSAGE: &str =
    "フォーマットが正しくありません。\n`https://arxiv.org/abs/XXXX.XXXXX` という形式で送信してください。";

/// Reply when arXiv could not be reached or returned no title/abstract.
pub const FETCH_ERROR_MESSAGE: &str = "arXivから情報を取得できませんでした。";

/// Reply when the model call fails or returns an incomplete summary.
pub const SUMMARY_ERROR_MESSAGE: &str =
    "要約の生成に失敗しました。時間をおいて再度お試しください。";

/// Render a summary as one Slack `mrkdwn` message: title, then overview,
/// problem, contribution and conclusion, each behind a bold label.
#[must_use]
pub fn format_summary_message(title: &str, summary: &PaperSummary) -> String {
    format!(
        "*タイトル* :{title}\n*概要* :{}\n*課題* :{}\n*貢献* :{}\n*結論* :{}",
        summary.overview, summary.problem, summary.contribution, summary.conclusion
    )
}
