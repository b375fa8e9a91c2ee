//! The C-string rendition of the hello program, plus a round through the
//! pointer-shaped entry to show the null guard doing its job.

use std::{io, ptr};

use string_repr::c_string::{
    say_hello, say_hello_ptr, LOCALE_EN_HELLO, LOCALE_FR_HELLO, NAME_ELEANOR, NAME_TOM,
};
use string_repr::GreetError;

fn main() -> Result<(), GreetError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout().lock();
    say_hello(&mut stdout, LOCALE_EN_HELLO, NAME_ELEANOR)?;
    say_hello(&mut stdout, LOCALE_FR_HELLO, NAME_TOM)?;

    // A null name greets no one: nothing is printed below.
    // SAFETY: the non-null argument is a nul-terminated literal.
    unsafe { say_hello_ptr(&mut stdout, LOCALE_EN_HELLO.as_ptr(), ptr::null())? };

    Ok(())
}
