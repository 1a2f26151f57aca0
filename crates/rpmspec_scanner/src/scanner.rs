//! The priority-ordered token dispatcher.
//!
//! One call per candidate position: the host parse engine supplies the
//! cursor and the set of token kinds it would currently accept, and the
//! dispatcher composes the independent recognizers in a fixed priority
//! order:
//!
//! 1. **Newline policy** -- explicit line terminators when requested;
//!    otherwise whitespace is skipped, unless a balanced-content scan is
//!    pending (whitespace is significant content there).
//! 2. **Percent directives** -- conditionals, section names, parametric
//!    macros. Checked before simple macros: these are the rarer, more
//!    specific `%` forms and a generic match must not pre-empt them.
//! 3. **Simple macros** -- escapes, negation, special variables, plain
//!    names (the `%` itself was consumed by the caller's rules).
//! 4. **Balanced content** -- last, because these scanners are maximally
//!    greedy and would otherwise swallow tokens error recovery needs.
//!
//! Every recognizer works on a copy of the cursor; only the winning end
//! offset is committed. On decline the cursor is left untouched.

use rpmspec_lexer_core::Cursor;

use crate::content;
use crate::directive;
use crate::macros;
use crate::state::ScannerState;
use crate::token::{Token, TokenKind, ValidKinds};

/// The external tokenizer: scanner state plus the dispatch entry point.
///
/// Owned by exactly one parse session. The serializable part of the state
/// is reachable through [`serialize`](Self::serialize) /
/// [`deserialize`](Self::deserialize), which the hosting incremental-parse
/// engine calls around edits.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    /// Create a scanner with zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan for one token at the cursor's position.
    ///
    /// `valid` is the set of kinds the caller would accept; no other kind
    /// is ever emitted. On a match the cursor is advanced to the token's
    /// end and the token returned; otherwise the cursor is unchanged and
    /// `None` signals "no token" (the caller tries other grammar paths).
    ///
    /// Deterministic: for a fixed input and fixed starting state, repeated
    /// calls at the same position return the same result.
    pub fn scan(&mut self, cursor: &mut Cursor<'_>, valid: ValidKinds) -> Option<Token> {
        if valid.is_empty() {
            return None;
        }

        // Stage 4 must see the original position: while a balanced-content
        // scan is pending, whitespace is significant content.
        let base = *cursor;
        let mut c = base;

        // Stage 1: newline policy.
        if valid.accepts(TokenKind::Newline) {
            c.eat_whitespace();
            if let Some(token) = try_newline(c) {
                cursor.advance_to(token.end);
                return Some(token);
            }
        } else if !valid.intersects(ValidKinds::CONTENT) {
            c.eat_any_whitespace();
        }

        // Stage 2: percent directives.
        if valid.intersects(ValidKinds::DIRECTIVE) {
            if let Some(token) = directive::try_directive(&mut self.state.lookahead, c, valid) {
                cursor.advance_to(token.end);
                return Some(token);
            }
        }

        // Stage 3: simple macros.
        if valid.intersects(ValidKinds::MACRO) {
            if let Some(token) = macros::try_simple_macro(c, valid) {
                cursor.advance_to(token.end);
                return Some(token);
            }
        }

        // Stage 4: balanced content, greediest last.
        if valid.accepts(TokenKind::ExpandCode) {
            if let Some(token) = content::try_expand_content(base) {
                cursor.advance_to(token.end);
                return Some(token);
            }
        }
        if valid.accepts(TokenKind::ShellCode) {
            if let Some(token) = content::try_shell_content(base) {
                cursor.advance_to(token.end);
                return Some(token);
            }
        }

        None
    }

    /// Snapshot the persistent state into `buf`.
    ///
    /// See [`ScannerState::serialize`].
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        self.state.serialize(buf)
    }

    /// Restore the persistent state from a snapshot.
    ///
    /// See [`ScannerState::deserialize`].
    pub fn deserialize(&mut self, buf: &[u8]) {
        self.state.deserialize(buf);
    }

    /// The persistent state (for hosts that manage it directly).
    pub fn state(&self) -> &ScannerState {
        &self.state
    }
}

/// Emit an explicit line terminator on `\n` or `\r\n`.
fn try_newline(cursor: Cursor<'_>) -> Option<Token> {
    let mut c = cursor;
    match c.current() {
        b'\n' => c.advance(),
        b'\r' if c.peek() == b'\n' => c.advance_n(2),
        _ => return None,
    }
    Some(Token {
        kind: TokenKind::Newline,
        end: c.pos(),
    })
}
