use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// Safe for both text content and attribute values.
///
/// # Examples
///
/// ```
/// use pitchkit::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("**Ethiopia:**"), "**Ethiopia:**");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Escape text for a DrawingML `<a:t>` run.
///
/// Characters that XML 1.0 cannot carry are written in the `_xHHHH_` form
/// PowerPoint itself uses, so arbitrary input never yields a broken part.
pub fn escape_run_text(s: &str) -> String {
    if s.chars().all(is_xml_char) {
        return escape_xml(s);
    }

    let mut cleaned = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if is_xml_char(c) {
            cleaned.push(c);
        } else {
            cleaned.push_str(&format!("_x{:04X}_", c as u32));
        }
    }
    escape_xml(&cleaned)
}
