//! Percent-directive recognition: `%` followed by an identifier.
//!
//! Routes the identifier, in priority order, to:
//!
//! 1. conditional resolution (if-like keywords),
//! 2. word-bounded section names,
//! 3. parametric macros (arguments run to end of line).
//!
//! Declining here is normal -- the caller falls back to other grammar
//! paths (e.g. treating the `%` as introducing a plain simple macro).

use rpmspec_lexer_core::Cursor;

use crate::conditional::{self, CondKeyword};
use crate::ident::{is_ident_char, is_ident_start, IdentBuf};
use crate::keywords;
use crate::lookahead::LookaheadCache;
use crate::token::{Token, TokenKind, ValidKinds};

/// Try to recognize a percent directive at `cursor` (positioned at the
/// candidate `%`).
///
/// Works on a cursor copy; the committed position is the returned token's
/// end.
pub(crate) fn try_directive(
    cache: &mut LookaheadCache,
    cursor: Cursor<'_>,
    valid: ValidKinds,
) -> Option<Token> {
    let mut c = cursor;
    if c.current() != b'%' || !is_ident_start(c.peek()) {
        return None;
    }
    c.advance(); // consume '%'
    let ident = IdentBuf::read(&mut c);
    let end = c.pos();

    // 1. Conditional keywords resolve through the context classifier. The
    //    cursor copy now sits at the start of the conditional's body.
    if valid.intersects(ValidKinds::CONDITIONAL) {
        if let Some(keyword) = CondKeyword::from_ident(&ident) {
            if let Some(kind) = conditional::resolve(cache, keyword, c, valid) {
                return Some(Token { kind, end });
            }
        }
    }

    // 2. Section names. Word boundary: the byte after the identifier must
    //    not extend it, so a section keyword matches only as a whole word,
    //    never as a prefix of a longer identifier.
    if valid.accepts(TokenKind::SectionName)
        && !is_ident_char(c.current())
        && ident.full_bytes().is_some_and(keywords::is_section_keyword)
    {
        return Some(Token {
            kind: TokenKind::SectionName,
            end,
        });
    }

    // 3. Parametric macros. Only where rest-of-line semantics apply (inside
    //    scriptlet-like contexts a macro expands inline and the rest of the
    //    line is literal content), only for non-keyword names, and only
    //    when real same-line arguments follow.
    if valid.accepts(TokenKind::ParametricMacro)
        && rest_of_line_permitted(valid)
        && matches!(c.current(), b' ' | b'\t')
        && !ident.full_bytes().is_some_and(keywords::is_keyword)
        && !ident.is_legacy_patch()
        && !ident.is_nil()
    {
        return Some(Token {
            kind: TokenKind::ParametricMacro,
            end,
        });
    }

    None
}

/// Whether the current context permits "macro consumes rest of line"
/// semantics.
///
/// The grammar signals a scriptlet-like context by accepting the
/// scriptlet conditional variants; in that context parametric recognition
/// is disabled.
fn rest_of_line_permitted(valid: ValidKinds) -> bool {
    !valid.intersects(ValidKinds::SCRIPTLET_CONDITIONAL)
}
