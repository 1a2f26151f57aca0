//! Context-aware external tokenizer for RPM spec sources.
//!
//! The lexical grammar of spec files is context-sensitive: the same
//! keyword text yields different token identities depending on what
//! structurally follows it, and several constructs need balanced-delimiter
//! scanning that declarative rules cannot express. This crate implements
//! the external tokenizer the declarative grammar delegates those cases
//! to:
//!
//! - context resolution of if-like conditionals via bounded forward
//!   lookahead with a single-slot cache (`conditional`, `lookahead`);
//! - `%`-directive recognition: section names, parametric macros
//!   (`directive`);
//! - simple macro classification: escapes, negation, special variables,
//!   keyword exclusion (`macros`);
//! - balanced brace/paren content extraction (`content`);
//! - persistent, serializable scanner state for incremental re-parsing
//!   (`state`).
//!
//! The host parse engine calls [`Scanner::scan`] once per candidate
//! position with a [`ValidKinds`] set; the tokenizer either returns a
//! matched [`Token`] or `None` ("no token" -- the single failure signal,
//! never an error).

mod conditional;
mod content;
mod directive;
mod ident;
mod keywords;
mod lookahead;
mod macros;
mod scanner;
mod state;
mod token;

pub use lookahead::MAX_LOOKAHEAD_LINES;
pub use scanner::Scanner;
pub use state::{ScannerState, SERIALIZED_LEN};
pub use token::{Token, TokenKind, ValidKinds, KIND_COUNT};
