//! Greeting over owned strings (`String`).
//!
//! A `String` is a three-word header (pointer, length, capacity) plus a
//! heap allocation holding the text. Building one from a literal copies the
//! bytes out of the program image, which is why the templates below cannot
//! be plain `static`s: a Rust static must be computable at compile time,
//! and a heap pointer is not. [`lazy_static`] defers each construction to
//! first access instead, so there is no before-`main` constructor and no
//! initialisation-order hazard between them.
//!
//! `NAME_ELEANOR` stays a borrowed literal on purpose: Rust has no
//! converting constructors, so a call site that wants to pass it to
//! [`say_hello`] must spell the allocation (`&String::from(NAME_ELEANOR)`)
//! that an owning parameter type demands.

use std::io::Write;

use lazy_static::lazy_static;
use tracing::{instrument, trace};

use crate::{template, GreetError};

lazy_static! {
    /// English template, heap-allocated on first access.
    pub static ref LOCALE_EN_HELLO: String = String::from("Hello %.*s! How are you?\n");

    /// French template, heap-allocated on first access.
    pub static ref LOCALE_FR_HELLO: String = String::from("Bonjour %.*s! Comment allez-vous?\n");

    /// An owned name, for call sites that already hold a `String`.
    pub static ref NAME_TOM: String = String::from("Tom");
}

/// A borrowed name; converting it to `String` is the caller's, visible,
/// allocation.
pub const NAME_ELEANOR: &str = "Eleanor Rigby";

/// Returns a freshly allocated `String` holding the part of `full` before
/// the first space, or a copy of all of `full` if it contains none.
///
/// The copy is the point: an owning return type cannot hand out a window
/// into `full`'s buffer.
#[allow(clippy::ptr_arg)] // the owning parameter type is this module's subject
pub fn first_name(full: &String) -> String {
    match full.split_once(' ') {
        Some((first, _)) => first.to_owned(),
        None => full.clone(),
    }
}

/// Writes the greeting for `name` to `out`.
///
/// An empty `template` or `name` writes nothing and returns `Ok(())`.
#[allow(clippy::ptr_arg)] // the owning parameter type is this module's subject
#[instrument(skip(out))]
pub fn say_hello(
    out: &mut impl Write,
    template: &String,
    name: &String,
) -> Result<(), GreetError> {
    if template.is_empty() || name.is_empty() {
        return Ok(());
    }

    let first = first_name(name);
    trace!(%first, "copied first name into its own allocation");
    template::write_greeting(out, template, &first)?;
    Ok(())
}
