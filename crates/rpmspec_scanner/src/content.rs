//! Balanced-delimiter content scanners.
//!
//! Two greedy scanners extract raw text runs bounded by nested delimiter
//! depth, with an escape hatch for `%`: sequences that cannot be a genuine
//! nested macro are absorbed as literal content, while a real macro start
//! hands control back to structured parsing. Neither scanner ever consumes
//! the outer closing delimiter -- the grammar owns it.
//!
//! Plain content between interesting bytes is absorbed with a single
//! `memchr` jump per run (see `Cursor::skip_to_brace_delim` /
//! `skip_to_paren_delim`).

use rpmspec_lexer_core::Cursor;

use crate::ident::is_ident_start;
use crate::token::{Token, TokenKind};

/// Try to scan raw content inside `%{expand:...}` with balanced braces.
///
/// Stops, without consuming them:
/// - before the outer `}` at depth 0;
/// - before any `%` that could start a genuine nested macro.
///
/// `%%`, `%#`, `%*`, and `%<digits>` are literal content -- they are
/// re-evaluated after the enclosing expansion completes. A trailing `%` at
/// EOF is included. Returns `None` when zero bytes were consumed.
pub(crate) fn try_expand_content(cursor: Cursor<'_>) -> Option<Token> {
    let mut c = cursor;
    let start = c.pos();
    let mut depth: u32 = 0;
    let end;

    loop {
        let b = c.skip_to_brace_delim();
        match b {
            // EOF: unterminated content degrades to everything gathered.
            0 => {
                end = c.pos();
                break;
            }
            b'{' => {
                depth += 1;
                c.advance();
            }
            b'}' => {
                if depth == 0 {
                    // The closing brace of %{expand:...} stays unconsumed.
                    end = c.pos();
                    break;
                }
                depth -= 1;
                c.advance();
            }
            _ => {
                // '%': decide between literal sequence and macro start.
                let percent_pos = c.pos();
                c.advance();
                match c.current() {
                    b'%' | b'#' | b'*' => c.advance(),
                    b'0'..=b'9' => c.eat_while(|d| d.is_ascii_digit()),
                    0 if c.is_eof() => {
                        // Trailing % at EOF is content.
                        end = c.pos();
                        break;
                    }
                    _ => {
                        // Could start a nested macro: stop before the %.
                        end = percent_pos;
                        break;
                    }
                }
            }
        }
    }

    (end > start).then_some(Token {
        kind: TokenKind::ExpandCode,
        end,
    })
}

/// Whether `b` could legally start a macro after `%`.
///
/// Covers simple names, positional arguments, braced/shell/expression
/// forms, negation, conditional expansion, and the special variables.
fn could_start_macro(b: u8) -> bool {
    is_ident_start(b)
        || b.is_ascii_digit()
        || matches!(b, b'{' | b'(' | b'[' | b'!' | b'?' | b'*' | b'#')
}

/// Try to scan raw content inside `%(...)` with balanced parentheses.
///
/// Stops, without consuming them:
/// - before the outer `)` at depth 0;
/// - before a `%` whose next byte could start a macro.
///
/// A `%` followed by anything else is ordinary shell text -- this keeps
/// idioms like `${var%.*}` intact. Returns `None` when zero bytes were
/// consumed.
pub(crate) fn try_shell_content(cursor: Cursor<'_>) -> Option<Token> {
    let mut c = cursor;
    let start = c.pos();
    let mut depth: u32 = 0;
    let end;

    loop {
        let b = c.skip_to_paren_delim();
        match b {
            // EOF: unterminated content degrades to everything gathered.
            0 => {
                end = c.pos();
                break;
            }
            b'(' => {
                depth += 1;
                c.advance();
            }
            b')' => {
                if depth == 0 {
                    // The closing paren of %(...) stays unconsumed.
                    end = c.pos();
                    break;
                }
                depth -= 1;
                c.advance();
            }
            _ => {
                // '%': literal unless the next byte could start a macro.
                if could_start_macro(c.peek()) {
                    end = c.pos();
                    break;
                }
                c.advance();
            }
        }
    }

    (end > start).then_some(Token {
        kind: TokenKind::ShellCode,
        end,
    })
}
