//! The string-view rendition of the hello program. Every string below is
//! resolved at link time; the only work at run time is the two writes.

use std::io;

use string_repr::view::{say_hello, LOCALE_EN_HELLO, LOCALE_FR_HELLO, NAME_ELEANOR, NAME_TOM};
use string_repr::GreetError;

fn main() -> Result<(), GreetError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout().lock();
    say_hello(&mut stdout, LOCALE_EN_HELLO, NAME_ELEANOR)?;
    say_hello(&mut stdout, LOCALE_FR_HELLO, NAME_TOM)?;

    Ok(())
}
