/// Characters treated as natural line breaks.
const BREAK_CHARS: [char; 4] = ['、', '。', ' ', '　'];

/// Lay a display string out in at most two lines.
///
/// Text within `max_chars` characters comes back whole. Longer text breaks
/// right after the last break character at or before `max_chars`, or at
/// `max_chars` itself when none exists. An empty second line is dropped.
#[must_use]
pub fn split_message(message: &str, max_chars: usize) -> Vec<String> {
    let normalized = message.trim();
    let chars: Vec<char> = normalized.chars().collect();

    if chars.len() <= max_chars {
        return vec![normalized.to_string()];
    }

    // chars.len() > max_chars, so max_chars is a valid index.
    let break_index = chars[..=max_chars]
        .iter()
        .rposition(|c| BREAK_CHARS.contains(c))
        .map_or(max_chars, |index| index + 1);

    let first: String = chars[..break_index].iter().collect();
    let second: String = chars[break_index..].iter().collect();
    let first = first.trim_end().to_string();
    let second = second.trim_start();

    if second.is_empty() {
        vec![first]
    } else {
        vec![first, second.to_string()]
    }
}
