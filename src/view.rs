//! Greeting over string views (`&str`).
//!
//! A `&str` is two words: a pointer and a length. The constants below point
//! straight into the program image: they exist before `main` without any
//! code running, and passing them around copies sixteen bytes, never the
//! text. This module allocates nothing, ever.

use std::io::Write;

use tracing::{instrument, trace};

use crate::{template, GreetError};

pub const LOCALE_EN_HELLO: &str = "Hello %.*s! How are you?\n";
pub const LOCALE_FR_HELLO: &str = "Bonjour %.*s! Comment allez-vous?\n";

pub const NAME_ELEANOR: &str = "Eleanor Rigby";
pub const NAME_TOM: &str = "Tom";

/// Returns the part of `full` before the first space, or all of `full` if
/// it contains none.
///
/// The result borrows from `full`: same buffer, shorter length.
///
/// # Example
///
/// ```
/// # use string_repr::view::first_name;
/// # use assert2::assert;
/// assert!(first_name("Eleanor Rigby") == "Eleanor");
/// assert!(first_name("Tom") == "Tom");
/// ```
pub fn first_name(full: &str) -> &str {
    match full.split_once(' ') {
        Some((first, _)) => first,
        None => full,
    }
}

/// Writes the greeting for `name` to `out`.
///
/// An empty `template` or `name` writes nothing and returns `Ok(())`.
#[instrument(skip(out))]
pub fn say_hello(
    out: &mut impl Write,
    template: &str,
    name: &str,
) -> Result<(), GreetError> {
    if template.is_empty() || name.is_empty() {
        return Ok(());
    }

    let first = first_name(name);
    trace!(first, "sliced name without copying");
    template::write_greeting(out, template, first)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    #[test]
    fn first_name_stops_at_first_space() {
        assert!(first_name("Ludwig van Beethoven") == "Ludwig");
    }

    #[test]
    fn leading_space_means_empty_first_name() {
        assert!(first_name(" Rigby") == "");
    }

    #[test]
    fn first_name_is_a_subslice() {
        let full = "Eleanor Rigby";
        let first = first_name(full);
        assert!(first.as_ptr() == full.as_ptr());
        assert!(first.len() == "Eleanor".len());
    }

    #[test]
    fn empty_inputs_write_nothing() {
        let mut out = Vec::new();
        say_hello(&mut out, "", NAME_TOM).unwrap();
        say_hello(&mut out, LOCALE_EN_HELLO, "").unwrap();
        assert!(out.is_empty());
    }
}
