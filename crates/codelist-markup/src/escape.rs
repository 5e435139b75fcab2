//! HTML escaping for code text.
//!
//! Only `&`, `<` and `>` are replaced. Quotes are left alone because the
//! escaped text only ever lands in element content, never in attributes.

use std::borrow::Cow;
use std::fmt;

/// Position of the next special byte in `text`.
fn next_special(text: &str) -> Option<usize> {
    memchr::memchr3(b'&', b'<', b'>', text.as_bytes())
}

/// Lazily escaped text.
///
/// Writes the escaped form of the wrapped string through its [`Display`]
/// impl without allocating. The scan is a single pass, so an ampersand that
/// an entity introduces is never escaped a second time.
///
/// [`Display`]: fmt::Display
///
/// ```
/// use codelist_markup::Escaped;
///
/// assert_eq!(Escaped("a && b").to_string(), "a &amp;&amp; b");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(self.0, f)
    }
}

/// Write the escaped form of `text` to `out`.
pub(crate) fn write_escaped<W: fmt::Write + ?Sized>(text: &str, out: &mut W) -> fmt::Result {
    let mut rest = text;
    while let Some(pos) = next_special(rest) {
        out.write_str(&rest[..pos])?;
        let entity = match rest.as_bytes()[pos] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            other => unreachable!("memchr3 matched byte {other:#04x}"),
        };
        out.write_str(entity)?;
        // The three special characters are ASCII, so `pos + 1` stays on a
        // char boundary.
        rest = &rest[pos + 1..];
    }
    out.write_str(rest)
}

/// Escape `&`, `<` and `>` in `text`.
///
/// Returns the input unchanged (borrowed) when it contains none of the three.
///
/// # Examples
///
/// ```
/// use codelist_markup::escape;
///
/// assert_eq!(escape("a & b < c > d"), "a &amp; b &lt; c &gt; d");
/// assert_eq!(escape("<"), "&lt;");
/// assert_eq!(escape("&lt;"), "&amp;lt;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = next_special(text) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + text.len() / 4 + 4);
    out.push_str(&text[..first]);
    write_escaped(&text[first..], &mut out).expect("writing to a String cannot fail");
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(escape("a & b < c > d"), "a &amp; b &lt; c &gt; d");
    }

    #[test]
    fn test_escape_no_double_escaping() {
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
        assert!(!escape("<>").contains("&amp;"));
    }

    #[test]
    fn test_escape_existing_entity_is_escaped_once() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_borrows_safe_text() {
        assert!(matches!(escape("let x = 1;"), Cow::Borrowed("let x = 1;")));
        assert!(matches!(escape(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_escape_leaves_quotes() {
        assert_eq!(escape(r#"say("it's")"#), r#"say("it's")"#);
    }

    #[test]
    fn test_escape_multibyte_neighbours() {
        assert_eq!(escape("é<ü>ß&"), "é&lt;ü&gt;ß&amp;");
    }

    #[test]
    fn test_escape_generic_signature() {
        assert_eq!(
            escape("Vec<Option<&str>>"),
            "Vec&lt;Option&lt;&amp;str&gt;&gt;"
        );
    }

    #[test]
    fn test_escaped_display_matches_escape() {
        for text in ["", "plain", "a<b", "&&&", "x > y && y < z", "naïve <tag>"] {
            assert_eq!(Escaped(text).to_string(), escape(text));
        }
    }

    #[test]
    fn test_write_escaped_appends() {
        let mut out = "prefix:".to_owned();
        write_escaped("<a>", &mut out).unwrap();
        assert_eq!(out, "prefix:&lt;a&gt;");
    }

    #[test]
    fn test_escape_keeps_every_byte_around_adjacent_specials() {
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape("x<&>y"), "x&lt;&amp;&gt;y");
        assert_eq!(escape(">>&&<<"), "&gt;&gt;&amp;&amp;&lt;&lt;");
    }
}
