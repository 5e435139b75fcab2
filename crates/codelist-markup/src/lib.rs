//! Code-to-markup formatting.
//!
//! Turns a block of source code into an HTML fragment that can be pasted into
//! a page: the characters `&`, `<` and `>` are escaped and every line is
//! wrapped in a `<li><pre>` item inside a `<ul class='ccode'>` list.
//!
//! The crate does no syntax highlighting and no I/O. Everything here is a
//! pure string transformation.
//!
//! # Example
//!
//! ```
//! use codelist_markup::format;
//!
//! assert_eq!(
//!     format("if a < b {\n    swap();\n}"),
//!     "<ul class='ccode'>\n\
//!      <li><pre>if a &lt; b {</pre></li>\n\
//!      <li><pre>    swap();</pre></li>\n\
//!      <li><pre>}</pre></li></ul>"
//! );
//! ```

mod escape;
mod list;
mod sample;

pub use escape::{Escaped, escape};
pub use list::{
    CONTAINER_CLOSE, CONTAINER_OPEN, CodeList, ITEM_CLOSE, ITEM_OPEN, ITEM_SEPARATOR, format,
    format_into,
};
pub use sample::SAMPLE;
