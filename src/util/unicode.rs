use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Pad with spaces on the right up to `cells` display cells
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let w = display_width(s);
    if w >= cells {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(cells - w))
}

/// Remove the last grapheme cluster. Returns false when `s` was empty.
pub fn pop_grapheme(s: &mut String) -> bool {
    match s.grapheme_indices(true).next_back() {
        Some((start, _)) => {
            s.truncate(start);
            true
        }
        None => false,
    }
}

/// Width of one grapheme cluster. Emoji sequences count as 2 even when
/// the per-codepoint sum says otherwise.
fn grapheme_display_width(g: &str) -> usize {
    let w = UnicodeWidthStr::width(g);
    if w > 2 && g.chars().count() > 1 {
        2
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn display_width_category_icons() {
        assert_eq!(display_width("📋"), 2);
        assert_eq!(display_width("💼 Work"), 7);
    }

    #[test]
    fn display_width_zwj_sequence() {
        assert_eq!(display_width("👩‍💻"), 2);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn truncate_cjk_boundary() {
        // budget 4 cells: two CJK chars fit, the third would overflow
        assert_eq!(truncate_to_width("日本語です", 5), "日本…");
        // budget 3 cells: only one CJK char fits
        assert_eq!(truncate_to_width("日本語です", 4), "日…");
    }

    #[test]
    fn truncate_tiny_budgets() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "…");
    }

    #[test]
    fn pad_counts_cells() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日", 4), "日  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn pop_removes_whole_clusters() {
        let mut s = String::from("ae\u{0301}");
        assert!(pop_grapheme(&mut s));
        assert_eq!(s, "a");
        let mut s = String::from("hi👩‍💻");
        assert!(pop_grapheme(&mut s));
        assert_eq!(s, "hi");
        let mut empty = String::new();
        assert!(!pop_grapheme(&mut empty));
    }
}
