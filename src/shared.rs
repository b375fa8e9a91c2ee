//! Greeting over shared strings ([`ArcStr`]).
//!
//! An [`ArcStr`] is one word: a pointer to a reference-counted allocation
//! that stores the length and the text together. Cloning bumps a counter;
//! nothing is copied. The constants below never even do that much:
//! [`arcstr::literal!`] lays the whole allocation out in the program image
//! with a saturated count, so they are true `static`s with free clones and
//! no construction at run time.
//!
//! Slicing keeps the sharing: a [`Substr`] is the parent [`ArcStr`] plus a
//! byte range, so [`first_name`] is an *owned* value that still points into
//! the original buffer.

use std::io::Write;

use arcstr::{ArcStr, Substr};
use tracing::{instrument, trace};

use crate::{template, GreetError};

pub static LOCALE_EN_HELLO: ArcStr = arcstr::literal!("Hello %.*s! How are you?\n");
pub static LOCALE_FR_HELLO: ArcStr = arcstr::literal!("Bonjour %.*s! Comment allez-vous?\n");

pub static NAME_ELEANOR: ArcStr = arcstr::literal!("Eleanor Rigby");
pub static NAME_TOM: ArcStr = arcstr::literal!("Tom");

/// Returns the part of `full` before the first space, or all of `full` if
/// it contains none, as a [`Substr`] sharing `full`'s allocation.
///
/// # Example
///
/// ```
/// # use string_repr::shared;
/// # use assert2::assert;
/// let first = shared::first_name(&shared::NAME_ELEANOR);
/// assert!(first == "Eleanor");
/// // Same buffer as the parent; no bytes were copied.
/// assert!(first.as_str().as_ptr() == shared::NAME_ELEANOR.as_ptr());
/// ```
pub fn first_name(full: &ArcStr) -> Substr {
    match full.find(' ') {
        Some(space) => full.substr(..space),
        None => full.substr(..),
    }
}

/// Writes the greeting for `name` to `out`.
///
/// An empty `template` or `name` writes nothing and returns `Ok(())`.
#[instrument(skip(out))]
pub fn say_hello(
    out: &mut impl Write,
    template: &ArcStr,
    name: &ArcStr,
) -> Result<(), GreetError> {
    if template.is_empty() || name.is_empty() {
        return Ok(());
    }

    let first = first_name(name);
    trace!(first = %first, "sliced name, sharing its allocation");
    template::write_greeting(out, template, &first)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    #[test]
    fn first_name_shares_the_parent_buffer() {
        let first = first_name(&NAME_ELEANOR);
        assert!(first == "Eleanor");
        assert!(first.as_str().as_ptr() == NAME_ELEANOR.as_ptr());
    }

    #[test]
    fn no_space_shares_everything() {
        let first = first_name(&NAME_TOM);
        assert!(first == "Tom");
        assert!(first.as_str().as_ptr() == NAME_TOM.as_ptr());
        assert!(first.len() == NAME_TOM.len());
    }

    #[test]
    fn literals_clone_without_copying() {
        let clone = LOCALE_EN_HELLO.clone();
        assert!(clone.as_ptr() == LOCALE_EN_HELLO.as_ptr());
    }

    #[test]
    fn runtime_names_slice_like_literals() {
        let full = ArcStr::from("Ludwig van Beethoven");
        let first = first_name(&full);
        assert!(first == "Ludwig");
        assert!(first.as_str().as_ptr() == full.as_ptr());
    }

    #[test]
    fn empty_inputs_write_nothing() {
        let mut out = Vec::new();
        say_hello(&mut out, &ArcStr::new(), &NAME_TOM).unwrap();
        say_hello(&mut out, &LOCALE_EN_HELLO, &ArcStr::new()).unwrap();
        assert!(out.is_empty());
    }
}
