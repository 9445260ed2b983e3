use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an arXiv abstract-page URL and captures the bare identifier.
///
/// The version suffix (`v2`) is matched but left outside the capture group.
pub const ARXIV_ABS_PATTERN: &str = r"https?://(?:www\.)?arxiv\.org/abs/(\d{4}\.\d{4,5})(?:v\d+)?";

static ARXIV_ABS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ARXIV_ABS_PATTERN).expect("static regex compile"));

/// Return the identifier of the first arXiv abstract link in `text`.
///
/// Slack wraps links as `<https://arxiv.org/abs/2404.07979>` or
/// `<https://arxiv.org/abs/2404.07979|label>`; the search is unanchored so both
/// forms match. Any later links are ignored.
///
/// # Examples
///
/// ```
/// use arxiv_bot::utils::links::extract_arxiv_id;
///
/// assert_eq!(
///     extract_arxiv_id("<@U1> https://arxiv.org/abs/2404.07979v2"),
///     Some("2404.07979".to_string())
/// );
/// assert_eq!(extract_arxiv_id("no paper here"), None);
/// ```
#[must_use]
pub fn extract_arxiv_id(text: &str) -> Option<String> {
    ARXIV_ABS_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slack_link_markup() {
        assert_eq!(
            extract_arxiv_id("<@U123> <https://arxiv.org/abs/1706.03762|paper>"),
            Some("1706.03762".to_string())
        );
    }

    #[test]
    fn test_four_digit_suffix() {
        assert_eq!(
            extract_arxiv_id("http://arxiv.org/abs/1409.0473"),
            Some("1409.0473".to_string())
        );
    }

    #[test]
    fn test_pdf_link_is_not_an_abstract_link() {
        assert_eq!(extract_arxiv_id("https://arxiv.org/pdf/2404.07979"), None);
    }
}
