//! Display-width helpers for dropdown rows.
//!
//! Rows mix flag emoji, names with diacritics, and dial codes, so column
//! math has to count terminal cells rather than chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Fit `s` into `max_width` columns, marking any cut with `tail`.
///
/// Strings that already fit come back unchanged. A truncated result,
/// including the tail, never exceeds `max_width`; when `tail` alone would
/// not fit, the cut is left unmarked.
///
/// # Examples
///
/// ```
/// use dialpick_widgets::unicode::truncate;
///
/// assert_eq!(truncate("Liechtenstein", 8, "…"), "Liechte…");
/// assert_eq!(truncate("Fiji", 10, "…"), "Fiji");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_owned();
    }

    let tail = if display_width(tail) < max_width {
        tail
    } else {
        ""
    };
    let budget = max_width - display_width(tail);

    let mut out = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_columns_not_chars() {
        assert_eq!(display_width("Greece"), 6);
        assert_eq!(display_width(""), 0);
        // Fullwidth forms take two columns each.
        assert_eq!(display_width("\u{FF27}\u{FF32}"), 4); // "ＧＲ"
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate("Chad", 10, "…"), "Chad");
        assert_eq!(truncate("Palau", 5, "…"), "Palau");
    }

    #[test]
    fn long_strings_get_the_tail() {
        assert_eq!(truncate("Liechtenstein", 8, "…"), "Liechte…");
    }

    #[test]
    fn result_never_exceeds_the_budget() {
        for max in 0..20 {
            let out = truncate("Saint Vincent and the Grenadines", max, "…");
            assert!(display_width(&out) <= max, "width {max}: {out:?}");
        }
    }

    #[test]
    fn empty_tail_truncates_bare() {
        assert_eq!(truncate("United Kingdom", 6, ""), "United");
    }

    #[test]
    fn oversized_tail_is_dropped() {
        assert_eq!(truncate("Togo", 2, "..."), "To");
    }
}
