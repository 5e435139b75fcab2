//! Line-wrapping of escaped code into a list fragment.

use std::fmt::{self, Write};

use crate::escape::write_escaped;

/// Opens the fragment.
pub const CONTAINER_OPEN: &str = "<ul class='ccode'>\n";
/// Opens one line.
pub const ITEM_OPEN: &str = "<li><pre>";
/// Closes one line.
pub const ITEM_CLOSE: &str = "</pre></li>";
/// Emitted between two items, never after the last one.
pub const ITEM_SEPARATOR: &str = "\n";
/// Closes the fragment.
pub const CONTAINER_CLOSE: &str = "</ul>";

/// Fixed markup emitted around one item.
const ITEM_OVERHEAD: usize = ITEM_OPEN.len() + ITEM_CLOSE.len();

/// Source code viewed as the lines of a list fragment.
///
/// Line splitting rules:
/// - lines are separated by `\n`; a `\r` is ordinary content
/// - one trailing `\n` ends the last line instead of starting a new one
/// - empty input is a single empty line
///
/// The [`Display`](fmt::Display) impl renders the fragment.
///
/// ```
/// use codelist_markup::CodeList;
///
/// let list = CodeList::new("a\nb\n");
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.lines().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(
///     list.to_string(),
///     "<ul class='ccode'>\n<li><pre>a</pre></li>\n<li><pre>b</pre></li></ul>"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodeList<'a> {
    body: &'a str,
}

impl<'a> CodeList<'a> {
    /// Create a list view over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            body: source.strip_suffix('\n').unwrap_or(source),
        }
    }

    /// Lines that become list items, without their newlines.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.body.split('\n')
    }

    /// Number of items in the fragment. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        memchr::memchr_iter(b'\n', self.body.as_bytes()).count() + 1
    }

    /// Never true: even empty input renders one (empty) item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output length if no character needed escaping.
    #[must_use]
    pub fn capacity_hint(&self) -> usize {
        let items = self.len();
        let separators = items - 1;
        // Each separator replaces one newline of the body.
        CONTAINER_OPEN.len()
            + CONTAINER_CLOSE.len()
            + (self.body.len() - separators)
            + separators * ITEM_SEPARATOR.len()
            + items * ITEM_OVERHEAD
    }

    /// Write the fragment to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if `out` does.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str(CONTAINER_OPEN)?;
        out.write_str(ITEM_OPEN)?;
        for (index, line) in self.lines().enumerate() {
            if index > 0 {
                out.write_str(ITEM_CLOSE)?;
                out.write_str(ITEM_SEPARATOR)?;
                out.write_str(ITEM_OPEN)?;
            }
            write_escaped(line, out)?;
        }
        out.write_str(ITEM_CLOSE)?;
        out.write_str(CONTAINER_CLOSE)
    }
}

impl fmt::Display for CodeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Format source code as an HTML list fragment.
///
/// Escapes `&`, `<` and `>`, then wraps each line in `<li><pre>...</pre></li>`
/// inside `<ul class='ccode'>...</ul>`. Total over all inputs.
///
/// # Examples
///
/// ```
/// use codelist_markup::format;
///
/// assert_eq!(format(""), "<ul class='ccode'>\n<li><pre></pre></li></ul>");
/// assert_eq!(format("<"), "<ul class='ccode'>\n<li><pre>&lt;</pre></li></ul>");
/// ```
#[must_use]
pub fn format(source: &str) -> String {
    let mut out = String::with_capacity(CodeList::new(source).capacity_hint());
    format_into(source, &mut out).expect("writing to a String cannot fail");
    out
}

/// Write the fragment for `source` into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Returns an error only if the sink does.
pub fn format_into<W: Write + ?Sized>(source: &str, out: &mut W) -> fmt::Result {
    CodeList::new(source).write_to(out)
}
