use validator::Validate;

use crate::error::Result;

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().filter(|w| !w.is_empty()).count()
}

/// Trim and lowercase; the only normalization applied to text answers.
pub fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}
