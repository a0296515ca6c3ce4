use regex::Regex;
use std::sync::LazyLock;

// LRM/RLM 與 bidi 嵌入/覆寫控制碼 (U+200E, U+200F, U+202A-U+202E)
static BIDI_CONTROLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{200E}\x{200F}\x{202A}-\x{202E}]").expect("static pattern"));

static HTML_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static pattern"));

/// Normalizes a layer name exported from a web map: drops bidi control
/// marks and HTML tags, then trims surrounding whitespace.
pub fn clean_text(text: &str) -> String {
    let without_bidi = BIDI_CONTROLS.replace_all(text, "");
    let without_tags = HTML_TAGS.replace_all(&without_bidi, "");
    without_tags.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_bidi_and_tags() {
        assert_eq!(clean_text("\u{200E}Roads\u{200F}"), "Roads");
        assert_eq!(clean_text("\u{202B}水系\u{202C}"), "水系");
        assert_eq!(clean_text("  <b>Water</b><br> "), "Water");
        assert_eq!(clean_text("plain"), "plain");
    }

    #[test]
    fn test_clean_text_can_empty_a_name() {
        assert_eq!(clean_text("<br>"), "");
        assert_eq!(clean_text(" \u{200E} "), "");
    }
}
