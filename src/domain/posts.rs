//! Post title rules shared by every write path.
//!
//! Titles are stripped of surrounding whitespace before they are checked, so
//! `"  Hello  "` is stored as `"Hello"` and a blank submission counts as
//! missing. The length bound is measured in characters rather than bytes to
//! match the `char_length` check enforced by the `posts` table. NUL is
//! refused outright since Postgres text columns cannot store it.

use std::fmt;

use super::error::DomainError;

/// Upper bound on the number of characters in a post title.
pub const TITLE_MAX_CHARS: usize = 255;

const TITLE_FIELD: &str = "title";

/// A validated, trimmed post title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                TITLE_FIELD,
                "This field is required.",
            ));
        }

        if trimmed.contains('\0') {
            return Err(DomainError::validation(
                TITLE_FIELD,
                "Null characters are not allowed.",
            ));
        }

        let length = trimmed.chars().count();
        if length > TITLE_MAX_CHARS {
            return Err(DomainError::validation(
                TITLE_FIELD,
                format!(
                    "Ensure this value has at most {TITLE_MAX_CHARS} characters (it has {length})."
                ),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(err: DomainError) -> String {
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "title");
                message
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let title = PostTitle::parse("  Hello World \n").expect("valid title");
        assert_eq!(title.as_str(), "Hello World");
    }

    #[test]
    fn rejects_blank_titles() {
        for raw in ["", "   ", "\t\n"] {
            let err = PostTitle::parse(raw).expect_err("blank title rejected");
            assert_eq!(validation_message(err), "This field is required.");
        }
    }

    #[test]
    fn accepts_titles_at_the_length_bound() {
        let raw = "a".repeat(TITLE_MAX_CHARS);
        let title = PostTitle::parse(&raw).expect("title at bound is valid");
        assert_eq!(title.into_inner().len(), TITLE_MAX_CHARS);
    }

    #[test]
    fn rejects_titles_over_the_length_bound() {
        let raw = "a".repeat(TITLE_MAX_CHARS + 1);
        let err = PostTitle::parse(&raw).expect_err("long title rejected");
        assert_eq!(
            validation_message(err),
            "Ensure this value has at most 255 characters (it has 256)."
        );
    }

    #[test]
    fn rejects_null_characters() {
        for raw in ["a\0b", "\0", "  title\0  "] {
            let err = PostTitle::parse(raw).expect_err("null character rejected");
            assert_eq!(validation_message(err), "Null characters are not allowed.");
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let raw = "é".repeat(TITLE_MAX_CHARS);
        assert!(raw.len() > TITLE_MAX_CHARS);
        assert!(PostTitle::parse(&raw).is_ok());
    }
}
