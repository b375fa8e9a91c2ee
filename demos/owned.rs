//! The owned-string rendition of the hello program. The templates are
//! lazily constructed statics; `NAME_ELEANOR` is a borrowed literal, so the
//! call site has to spell the allocation an owning parameter demands.

use std::io;

use string_repr::owned::{say_hello, LOCALE_EN_HELLO, LOCALE_FR_HELLO, NAME_ELEANOR, NAME_TOM};
use string_repr::GreetError;

fn main() -> Result<(), GreetError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout().lock();
    say_hello(&mut stdout, &LOCALE_EN_HELLO, &String::from(NAME_ELEANOR))?;
    say_hello(&mut stdout, &LOCALE_FR_HELLO, &NAME_TOM)?;

    Ok(())
}
