//! The shared-string rendition of the hello program. All four strings are
//! compile-time `ArcStr` statics; nothing is allocated or copied.

use std::io;

use string_repr::shared::{say_hello, LOCALE_EN_HELLO, LOCALE_FR_HELLO, NAME_ELEANOR, NAME_TOM};
use string_repr::GreetError;

fn main() -> Result<(), GreetError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout().lock();
    say_hello(&mut stdout, &LOCALE_EN_HELLO, &NAME_ELEANOR)?;
    say_hello(&mut stdout, &LOCALE_FR_HELLO, &NAME_TOM)?;

    Ok(())
}
