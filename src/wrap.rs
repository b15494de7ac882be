//! Display-only line breaking for report cells.

/// Width, in characters, after which [`word_wrap`] breaks a line.
pub const MAX_ROW_LENGTH: usize = 30;

/// Breaks `value` into lines of [`MAX_ROW_LENGTH`] characters.
pub fn word_wrap(value: &str) -> String {
    wrap_at(value, MAX_ROW_LENGTH)
}

/// Inserts a `\n` before every character whose index is a positive multiple
/// of `width`. Characters are counted, not bytes.
///
/// The input is treated as raw: existing line breaks count as ordinary
/// characters. A `width` of zero returns the value unchanged.
pub fn wrap_at(value: &str, width: usize) -> String {
    if width == 0 {
        return value.to_string();
    }

    let mut wrapped = String::with_capacity(value.len() + value.len() / width);
    for (i, ch) in value.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    wrapped
}
