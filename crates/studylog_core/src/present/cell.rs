//! Fixed-width cell fitting measured in terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` on the right so its display width is at most `width`.
///
/// Width is re-measured on the growing prefix because emoji variation
/// selectors can widen the character before them.
pub fn clip_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut clipped = String::with_capacity(text.len());
    for ch in text.chars() {
        let next_width = clipped.width() + ch.width().unwrap_or(0);
        if next_width > width {
            break;
        }
        clipped.push(ch);
        if clipped.width() > width {
            clipped.pop();
            break;
        }
    }
    clipped
}

/// Left-justifies `text` in `width` columns, padding with trailing spaces.
///
/// Text already at least `width` wide is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Right-justifies `text` in `width` columns, padding with leading spaces.
pub fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}

/// Clips then left-justifies, so the result is exactly `width` columns
/// unless a wide character could not be split.
pub fn fit_left(text: &str, width: usize) -> String {
    pad_right(&clip_to_width(text, width), width)
}

#[cfg(test)]
mod tests {
    use super::{clip_to_width, fit_left, pad_left};
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn fit_left_truncates_and_pads() {
        assert_eq!(fit_left("Integrals", 5), "Integ");
        assert_eq!(fit_left("Int", 5), "Int  ");
        assert_eq!(fit_left("", 3), "   ");
        assert_eq!(fit_left("anything", 0), "");
    }

    #[test]
    fn wide_characters_never_exceed_width() {
        let fitted = fit_left("数学の宿題", 5);
        assert_eq!(fitted.width(), 5);
        assert_eq!(fitted, "数学 ");
    }

    #[test]
    fn clip_never_exceeds_width_for_emoji_sequences() {
        let text = "\u{269B}\u{FE0F} Physics";
        for width in 0..12 {
            assert!(clip_to_width(text, width).width() <= width);
        }
    }

    #[test]
    fn pad_left_overflows_instead_of_clipping() {
        assert_eq!(pad_left("7 minutes", 12), "   7 minutes");
        assert_eq!(pad_left("12345 minutes", 5), "12345 minutes");
    }
}
