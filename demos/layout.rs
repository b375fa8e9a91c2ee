//! Prints what each representation actually costs: header sizes, where the
//! bytes live, what allocates, and what a growing `String` does to its
//! buffer. Run with `--release` and the addresses tell the story the
//! crate-level docs narrate.

use std::ffi::CStr;
use std::mem::size_of;

use arcstr::{ArcStr, Substr};
use string_repr::{c_string, owned, shared, view};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("== header sizes (bytes) ==");
    println!("&str     {:2}", size_of::<&str>());
    println!("&CStr    {:2}", size_of::<&CStr>());
    println!("String   {:2}", size_of::<String>());
    println!("ArcStr   {:2}", size_of::<ArcStr>());
    println!("Substr   {:2}", size_of::<Substr>());

    println!();
    println!("== where the bytes live ==");
    let literal = view::NAME_ELEANOR;
    println!("view literal      {:p}  (program image)", literal.as_ptr());

    let copied = String::from(literal);
    println!("String::from      {:p}  (fresh heap allocation)", copied.as_ptr());

    println!(
        "shared literal    {:p}  (program image; clone bumps no counter)",
        shared::NAME_ELEANOR.as_ptr()
    );
    println!(
        "c string literal  {:p}  ({} text bytes + nul)",
        c_string::NAME_ELEANOR.as_ptr(),
        c_string::NAME_ELEANOR.to_bytes().len()
    );
    println!(
        "lazy template     {:p}  (heap; built the first time this line ran)",
        owned::LOCALE_EN_HELLO.as_ptr()
    );

    println!();
    println!("== slicing ==");
    let first = view::first_name(literal);
    println!(
        "view first_name   {:p} len {:2}  (same buffer as the literal)",
        first.as_ptr(),
        first.len()
    );
    let first = shared::first_name(&shared::NAME_ELEANOR);
    println!(
        "shared first_name {:p} len {:2}  (same buffer, owned handle)",
        first.as_str().as_ptr(),
        first.len()
    );
    let full = String::from(literal);
    let first = owned::first_name(&full);
    println!(
        "owned first_name  {:p} len {:2}  (its own allocation)",
        first.as_ptr(),
        first.len()
    );

    println!();
    println!("== String growth (no small-string storage: one byte already allocates) ==");
    let mut name = String::from("T");
    println!(
        "\"T\"            len {:2} cap {:2} data {:p}",
        name.len(),
        name.capacity(),
        name.as_ptr()
    );
    name.push_str("om");
    println!(
        "push \"om\"      len {:2} cap {:2} data {:p}",
        name.len(),
        name.capacity(),
        name.as_ptr()
    );
    name.push_str(" Thumb, of Nottinghamshire");
    println!(
        "push the rest  len {:2} cap {:2} data {:p}  (reallocated)",
        name.len(),
        name.capacity(),
        name.as_ptr()
    );
}
