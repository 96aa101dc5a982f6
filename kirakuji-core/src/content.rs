use thiserror::Error;

/// Upper bound on confession length, counted in characters after trimming.
pub const MAX_CONTENT_CHARS: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("内容を入力してください")]
    Empty,
    #[error("140文字以内で入力してください（現在{len}文字）")]
    TooLong { len: usize },
}

/// Confession text that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Trim and validate raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Empty`] for blank input and
    /// [`ContentError::TooLong`] when the trimmed text exceeds [`MAX_CONTENT_CHARS`].
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let trimmed = raw.trim();
        let len = char_count(trimmed);
        if len == 0 {
            Err(ContentError::Empty)
        } else if len > MAX_CONTENT_CHARS {
            Err(ContentError::TooLong { len })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whether the submit action should be enabled for the given input.
#[must_use]
pub fn can_submit(raw: &str) -> bool {
    PostContent::parse(raw).is_ok()
}
