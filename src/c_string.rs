//! Greeting over C strings (`&CStr`, and `*const c_char` at the edge).
//!
//! A C string is a pointer to bytes that end at the first nul. No cached
//! length (counting is a walk), no encoding promise (UTF-8 is checked at
//! this boundary, not assumed), and, alone among the representations
//! here, a nullable spelling: [`say_hello_ptr`] accepts the `*const
//! c_char` a C caller would hand us and treats null like empty.
//!
//! There is also no slicing a C string in place: a shorter C string needs
//! its own nul terminator, hence its own buffer. [`first_name_bytes`]
//! therefore hands back a plain byte slice and lets the renderer do the
//! splice, which is what `printf("%.*s", len, name)` does with a
//! length-limited write instead of a copy.

use std::{
    ffi::{c_char, CStr},
    io::Write,
    str,
};

use tracing::{error, instrument, trace};

use crate::{template, GreetError};

pub const LOCALE_EN_HELLO: &CStr = c"Hello %.*s! How are you?\n";
pub const LOCALE_FR_HELLO: &CStr = c"Bonjour %.*s! Comment allez-vous?\n";

pub const NAME_ELEANOR: &CStr = c"Eleanor Rigby";
pub const NAME_TOM: &CStr = c"Tom";

/// Returns the bytes of `full` before the first space, or all of its bytes
/// if it contains none. The terminating nul is never included.
///
/// # Example
///
/// ```
/// # use string_repr::c_string::first_name_bytes;
/// # use assert2::assert;
/// assert!(first_name_bytes(c"Eleanor Rigby") == b"Eleanor");
/// assert!(first_name_bytes(c"Tom") == b"Tom");
/// ```
pub fn first_name_bytes(full: &CStr) -> &[u8] {
    let bytes = full.to_bytes();
    match bytes.iter().position(|&b| b == b' ') {
        Some(space) => &bytes[..space],
        None => bytes,
    }
}

/// Writes the greeting for `name` to `out`.
///
/// An empty `template` or `name` writes nothing and returns `Ok(())`. A
/// template or first name holding non-UTF-8 bytes fails with
/// [`GreetError::NotUtf8`] before anything is written.
#[instrument(skip(out))]
pub fn say_hello(
    out: &mut impl Write,
    template: &CStr,
    name: &CStr,
) -> Result<(), GreetError> {
    if template.is_empty() || name.is_empty() {
        return Ok(());
    }

    let template = match template.to_str() {
        Ok(template) => template,
        Err(err) => {
            error!("template is not UTF-8: {err}");
            return Err(err.into());
        }
    };

    let first = match str::from_utf8(first_name_bytes(name)) {
        Ok(first) => first,
        Err(err) => {
            error!("name is not UTF-8: {err}");
            return Err(err.into());
        }
    };

    trace!(first, "sliced name up to the first space");
    template::write_greeting(out, template, first)?;
    Ok(())
}

/// C-shaped entry point: both strings arrive as possibly-null pointers.
///
/// A null `template` or `name` writes nothing and returns `Ok(())`;
/// everything else defers to [`say_hello`].
///
/// # Safety
/// Each non-null pointer must satisfy the requirements of
/// [`CStr::from_ptr`]: it points at a nul-terminated sequence that stays
/// live and unmodified for the duration of the call.
pub unsafe fn say_hello_ptr(
    out: &mut impl Write,
    template: *const c_char,
    name: *const c_char,
) -> Result<(), GreetError> {
    if template.is_null() || name.is_null() {
        return Ok(());
    }

    // SAFETY: both pointers were just checked to be non-null, and the
    // caller guarantees they meet `CStr::from_ptr`'s requirements.
    let (template, name) = unsafe { (CStr::from_ptr(template), CStr::from_ptr(name)) };

    say_hello(out, template, name)
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use assert2::{assert, let_assert};

    use super::*;

    #[test]
    fn first_name_stops_at_first_space() {
        assert!(first_name_bytes(c"Ludwig van Beethoven") == b"Ludwig");
    }

    #[test]
    fn empty_inputs_write_nothing() {
        let mut out = Vec::new();
        say_hello(&mut out, c"", NAME_TOM).unwrap();
        say_hello(&mut out, LOCALE_EN_HELLO, c"").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn null_inputs_write_nothing() {
        let mut out = Vec::new();
        // SAFETY: non-null arguments are nul-terminated literals.
        unsafe {
            say_hello_ptr(&mut out, ptr::null(), NAME_ELEANOR.as_ptr()).unwrap();
            say_hello_ptr(&mut out, LOCALE_EN_HELLO.as_ptr(), ptr::null()).unwrap();
        }
        assert!(out.is_empty());
    }

    #[test]
    fn non_utf8_name_is_rejected_before_writing() {
        let name = CStr::from_bytes_with_nul(b"\xFF Rigby\0").unwrap();
        let mut out = Vec::new();
        let_assert!(Err(GreetError::NotUtf8(_)) = say_hello(&mut out, LOCALE_EN_HELLO, name));
        assert!(out.is_empty());
    }

    #[test]
    fn non_utf8_after_the_space_is_fine() {
        // Only the first name crosses the UTF-8 boundary.
        let name = CStr::from_bytes_with_nul(b"Tom \xFF\0").unwrap();
        let mut out = Vec::new();
        say_hello(&mut out, LOCALE_EN_HELLO, name).unwrap();
        assert!(out == b"Hello Tom! How are you?\n");
    }

    #[test]
    fn non_utf8_template_is_rejected_before_writing() {
        let template = CStr::from_bytes_with_nul(b"Hej %.*s\xFF\0").unwrap();
        let mut out = Vec::new();
        let_assert!(Err(GreetError::NotUtf8(_)) = say_hello(&mut out, template, NAME_TOM));
        assert!(out.is_empty());
    }
}
