//! Simple macro recognition after a consumed `%`.
//!
//! The caller's declarative rules consume the leading `%`; this recognizer
//! classifies what follows:
//!
//! - `%` -- escaped percent (`%%`)
//! - `!name` -- negated macro (`!?` belongs to conditional syntax and is
//!   declined)
//! - `*`, `**`, `#`, digits -- special variables
//! - identifier -- simple macro, unless it is a keyword, the legacy
//!   `patchN` form, or `nil` (reclassified as a special variable)

use rpmspec_lexer_core::Cursor;

use crate::ident::{is_ident_char, is_ident_start, IdentBuf};
use crate::keywords;
use crate::token::{Token, TokenKind, ValidKinds};

/// Try to recognize a macro token at `cursor` (positioned after the `%`).
///
/// Works on a cursor copy; the committed position is the returned token's
/// end. Returns `None` when nothing acceptable matches.
pub(crate) fn try_simple_macro(cursor: Cursor<'_>, valid: ValidKinds) -> Option<Token> {
    let mut c = cursor;
    match c.current() {
        // Second % for escaped percent (%%).
        b'%' => {
            if !valid.accepts(TokenKind::EscapedPercent) {
                return None;
            }
            c.advance();
            Some(Token {
                kind: TokenKind::EscapedPercent,
                end: c.pos(),
            })
        }

        // !name for negated macro.
        b'!' => {
            if !valid.accepts(TokenKind::NegatedMacro) {
                return None;
            }
            c.advance();
            // !? is conditional syntax, not a negated macro.
            if c.current() == b'?' {
                return None;
            }
            if !is_ident_start(c.current()) {
                return None;
            }
            c.eat_while(is_ident_char);
            Some(Token {
                kind: TokenKind::NegatedMacro,
                end: c.pos(),
            })
        }

        // * or ** for all-arguments variables.
        b'*' => {
            if !valid.accepts(TokenKind::SpecialMacro) {
                return None;
            }
            c.advance();
            if c.current() == b'*' {
                c.advance();
            }
            Some(Token {
                kind: TokenKind::SpecialMacro,
                end: c.pos(),
            })
        }

        // # for the argument count.
        b'#' => {
            if !valid.accepts(TokenKind::SpecialMacro) {
                return None;
            }
            c.advance();
            Some(Token {
                kind: TokenKind::SpecialMacro,
                end: c.pos(),
            })
        }

        // Digits for positional arguments.
        b'0'..=b'9' => {
            if !valid.accepts(TokenKind::SpecialMacro) {
                return None;
            }
            c.eat_while(|b| b.is_ascii_digit());
            Some(Token {
                kind: TokenKind::SpecialMacro,
                end: c.pos(),
            })
        }

        // Identifier for a simple macro.
        b if is_ident_start(b) => {
            if !valid.accepts(TokenKind::SimpleMacro) {
                return None;
            }
            let ident = IdentBuf::read(&mut c);

            // Keywords are never macro names.
            if ident.full_bytes().is_some_and(keywords::is_keyword) {
                return None;
            }
            // Legacy patchN syntax has a dedicated grammar rule.
            if ident.is_legacy_patch() {
                return None;
            }
            // %nil is a special variable, not a simple macro.
            if ident.is_nil() {
                if valid.accepts(TokenKind::SpecialMacro) {
                    return Some(Token {
                        kind: TokenKind::SpecialMacro,
                        end: c.pos(),
                    });
                }
                return None;
            }

            Some(Token {
                kind: TokenKind::SimpleMacro,
                end: c.pos(),
            })
        }

        _ => None,
    }
}
