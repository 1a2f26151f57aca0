//! Low-level scanning substrate for RPM spec sources.
//!
//! This crate is standalone: it knows nothing about token kinds, keyword
//! tables, or macro syntax. It provides the two building blocks the
//! tokenizer scans with:
//!
//! - [`SourceBuffer`]: a sentinel-terminated, cache-line-padded copy of the
//!   source, so the hot loop never bounds-checks.
//! - [`Cursor`]: a `Copy` forward-only cursor with byte-level primitives and
//!   `memchr`-accelerated jumps to the next interesting byte.
//!
//! Higher layers (the external tokenizer, grammar bindings, highlighters)
//! build on these without pulling in each other.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
