#![deny(unsafe_op_in_unsafe_fn)]

//! # string-repr
//! One greeting, four string representations.
//!
//! Every module in this crate implements the same dozen-line program: take a
//! full name, keep the part before the first space, and splice it into a
//! localised template.
//!
//! ```
//! # use assert2::assert;
//! use string_repr::view;
//!
//! let mut out = Vec::new();
//! view::say_hello(&mut out, view::LOCALE_EN_HELLO, view::NAME_ELEANOR).unwrap();
//! assert!(out == b"Hello Eleanor! How are you?\n");
//! ```
//!
//! The program is deliberately boring. What differs between the modules is
//! *how the strings are passed around*, and therefore what the compiler and
//! allocator end up doing:
//!
//! | module | parameter type | header size (64-bit) | the bytes live... |
//! |---|---|---|---|
//! | [`c_string`] | `&CStr` / `*const c_char` | pointer (+ len for `&CStr`) | wherever the nul-terminated buffer is |
//! | [`owned`] | `&String` | 24 B (ptr, len, cap) | on the heap, one allocation per value |
//! | [`shared`] | `&ArcStr` | 8 B (one pointer) | in a refcounted allocation, or in the program image for literals |
//! | [`view`] | `&str` | 16 B (ptr, len) | wherever they already were |
//!
//! ## Where the bytes live
//!
//! A string literal is baked into the program image. A `&str` pointing at it
//! is fully determined at link time: no code runs before `main` to set it
//! up, and "copying" it copies two words.
//!
//! `String` is the other extreme. Building one from a literal copies the
//! bytes to the heap, and the value can never be a plain `static` because a
//! Rust static must be computable at compile time. The [`owned`] module's
//! templates are therefore [`lazy_static`] values, constructed on first
//! access. (C++ answers the same constraint by running constructors before
//! `main`, in an unspecified order across translation units; Rust refuses
//! to have the problem.)
//!
//! [`ArcStr`](arcstr::ArcStr) sits in between: a single pointer to a
//! refcounted buffer, except that [`arcstr::literal!`] lays the whole thing
//! out at compile time, so the [`shared`] module's templates are true
//! statics with free clones.
//!
//! And a `&CStr` carries no cached length at all: the text ends wherever
//! the nul byte is. Finding the length is a walk, and the type promises
//! nothing about encoding, so [`c_string`] is the one module that can hand
//! back an error for bytes that are not UTF-8.
//!
//! ```
//! # use assert2::assert;
//! use std::mem::size_of;
//!
//! assert!(size_of::<&str>() == 2 * size_of::<usize>());
//! assert!(size_of::<String>() == 3 * size_of::<usize>());
//! assert!(size_of::<arcstr::ArcStr>() == size_of::<usize>());
//! ```
//!
//! ## Small strings
//!
//! `String` never stores text inline: even `String::from("T")` makes a heap
//! allocation one byte long. Types with a small-string optimisation keep
//! short values inside the header instead, spilling only long ones to the
//! heap. Nothing in std does this for strings; `smol_str`, `compact_str`
//! and `hipstr` are the usual ecosystem answers. The `layout` demo makes
//! the difference observable with nothing but `as_ptr` and `capacity`.
//!
//! ## Slicing
//!
//! "First word of the name" is the crate's only algorithm, and each module
//! answers it in its representation's native way:
//!
//! * [`view::first_name`] returns a subslice: same buffer, shorter length.
//! * [`shared::first_name`] returns an [`arcstr::Substr`]: owned, clonable,
//!   still the same buffer.
//! * [`owned::first_name`] allocates a fresh `String`; an owning signature
//!   is precisely a refusal to hand out references into someone else's
//!   buffer.
//! * [`c_string::first_name_bytes`] can only return raw bytes: a shortened
//!   C string would need its own nul terminator, hence its own buffer.
//!
//! The four `say_hello`s are interchangeable in the only way that matters:
//! byte-identical output for the same logical input (see `tests/test.rs`).

pub mod c_string;
mod error;
pub mod owned;
pub mod shared;
pub mod template;
pub mod view;

pub use error::GreetError;
