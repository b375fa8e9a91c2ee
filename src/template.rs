//! The greeting template format.
//!
//! A template is UTF-8 text containing at most one *name slot*: the marker
//! `%.*s`, kept verbatim from the C formatting tradition these examples
//! come from, where `printf("Hello %.*s!", len, name)` prints exactly `len`
//! bytes of `name`. Rendering a template performs that same splice.

use std::io::{self, Write};

use tracing::trace;

/// The name slot: the substring of a template replaced by the first name.
pub const NAME_SLOT: &str = "%.*s";

/// Writes `template` to `out` with the first [`NAME_SLOT`] replaced by
/// `first_name`.
///
/// A template without a slot is written verbatim, and only the first slot
/// is replaced; any later occurrence is ordinary text.
///
/// # Example
///
/// ```
/// # use string_repr::template::write_greeting;
/// # use assert2::assert;
/// let mut out = Vec::new();
/// write_greeting(&mut out, "Hello %.*s!\n", "Eleanor").unwrap();
/// assert!(out == b"Hello Eleanor!\n");
/// ```
pub fn write_greeting(
    out: &mut impl Write,
    template: &str,
    first_name: &str,
) -> io::Result<()> {
    match template.split_once(NAME_SLOT) {
        Some((before, after)) => {
            trace!(before, after, first_name, "template has a name slot");
            out.write_all(before.as_bytes())?;
            out.write_all(first_name.as_bytes())?;
            out.write_all(after.as_bytes())
        }
        None => out.write_all(template.as_bytes()),
    }
}
