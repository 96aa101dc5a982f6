//! Result page text resolution.

use crate::split::split_message;

/// Shown when the result page is opened without a usable `text` parameter.
pub const RESULT_PLACEHOLDER: &str = "今日のきらくじ: ここに結果テキストが入ります。";

/// Line width used when laying the fortune out on the result card.
pub const RESULT_LINE_CHARS: usize = 16;

/// Pick the text to display from the `text` query value.
#[must_use]
pub fn resolve_result_text(query: Option<&str>) -> String {
    query
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(RESULT_PLACEHOLDER)
        .to_string()
}

#[must_use]
pub fn result_lines(text: &str) -> Vec<String> {
    split_message(text, RESULT_LINE_CHARS)
}
