//! Bounded forward lookahead over conditional bodies.
//!
//! An if-like keyword is lexically identical whether its block holds only
//! inline content (shell lines, file entries) or opens new structural
//! sections. The classifier resolves this by scanning forward from just
//! after the keyword, watching line-leading `%` directives:
//!
//! - a nested if-like keyword deepens the nesting count;
//! - the block's own `%endif` (nesting reaches 0) means no section was
//!   found;
//! - a section keyword at *any* nesting depth means the block is
//!   structural.
//!
//! The scan runs on a copy of the cursor -- the committed position never
//! moves -- and is bounded by [`MAX_LOOKAHEAD_LINES`] so unterminated
//! blocks terminate conservatively instead of scanning to the end of a
//! multi-megabyte document.

use rpmspec_lexer_core::Cursor;

use crate::ident::IdentBuf;
use crate::keywords;

/// Maximum lines to scan ahead for section keywords.
///
/// Bounds the lookahead to avoid pathological cost on very large
/// conditional blocks. 2000 lines covers real-world spec files.
pub const MAX_LOOKAHEAD_LINES: u32 = 2000;

/// Single-slot cache for the most recent body classification.
///
/// The slot is only meaningful for the conditional block currently being
/// classified. All transitions are explicit: [`store`](Self::store) on a
/// fresh scan, [`get`](Self::get) on reuse, [`invalidate`](Self::invalidate)
/// once the result has been consumed or the context changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LookaheadCache {
    /// Whether the cached result is meaningful.
    valid: bool,
    /// Cached classification: did the body contain a section keyword?
    has_section: bool,
}

impl LookaheadCache {
    /// The cached result, if one is stored.
    pub(crate) fn get(&self) -> Option<bool> {
        if self.valid {
            Some(self.has_section)
        } else {
            None
        }
    }

    /// Store a fresh classification result.
    pub(crate) fn store(&mut self, has_section: bool) {
        self.valid = true;
        self.has_section = has_section;
    }

    /// Drop the cached result.
    ///
    /// Called when the result has been consumed by an emitted token and
    /// when an exclusive context resolution shows the slot belongs to an
    /// unrelated block.
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
        self.has_section = false;
    }

    /// Raw `(valid, has_section)` pair for state serialization.
    pub(crate) fn as_parts(&self) -> (bool, bool) {
        (self.valid, self.has_section)
    }

    /// Rebuild from a serialized `(valid, has_section)` pair.
    pub(crate) fn from_parts(valid: bool, has_section: bool) -> Self {
        Self { valid, has_section }
    }
}

/// Scan forward for a section keyword inside the conditional body.
///
/// `cursor` is a copy positioned just after the opening keyword; the
/// caller's committed position is unaffected. Returns `true` as soon as a
/// section keyword appears on a line-leading `%` directive at any nesting
/// depth, `false` when the block's own `%endif` is reached, and
/// conservatively `false` when EOF or [`MAX_LOOKAHEAD_LINES`] is hit
/// (guaranteed termination on malformed input).
pub(crate) fn finds_section_keyword(mut cursor: Cursor<'_>) -> bool {
    // The block we are classifying is already open.
    let mut nesting: u32 = 1;
    let mut lines_scanned: u32 = 0;
    let mut at_line_start = true;

    while !cursor.is_eof() && lines_scanned < MAX_LOOKAHEAD_LINES {
        match cursor.current() {
            b'\r' | b'\n' => {
                let cr = cursor.current() == b'\r';
                cursor.advance();
                if cr && cursor.current() == b'\n' {
                    cursor.advance();
                }
                at_line_start = true;
                lines_scanned += 1;
            }
            // Horizontal whitespace may precede a line-leading directive.
            b' ' | b'\t' => cursor.advance(),
            b'%' if at_line_start => {
                cursor.advance();
                let ident = IdentBuf::read(&mut cursor);
                if !ident.is_empty() {
                    if ident.matches(b"endif") {
                        nesting -= 1;
                        if nesting == 0 {
                            // Matching %endif reached without a section.
                            tracing::trace!(lines_scanned, "lookahead: no section found");
                            return false;
                        }
                    } else if ident.matches(b"if")
                        || ident.matches(b"ifarch")
                        || ident.matches(b"ifnarch")
                        || ident.matches(b"ifos")
                        || ident.matches(b"ifnos")
                    {
                        nesting += 1;
                    } else if ident
                        .full_bytes()
                        .is_some_and(keywords::is_section_keyword)
                    {
                        // Section keyword at any depth: structural block.
                        tracing::trace!(lines_scanned, nesting, "lookahead: section found");
                        return true;
                    }
                }
                at_line_start = false;
            }
            _ => {
                // Nothing else on this line can matter; jump to its end.
                at_line_start = false;
                cursor.eat_until_newline_or_eof();
            }
        }
    }

    // EOF or line bound reached without finding a section keyword.
    tracing::trace!(lines_scanned, "lookahead: bound reached, no section");
    false
}

/// Classify a conditional body, reusing the cached result when one is
/// stored.
///
/// On a miss the body is scanned once and the result stored; nested
/// conditionals re-entering classification before the slot is invalidated
/// reuse it instead of re-scanning the same content.
pub(crate) fn cached_finds_section(cache: &mut LookaheadCache, cursor: Cursor<'_>) -> bool {
    if let Some(has_section) = cache.get() {
        tracing::trace!(has_section, "lookahead cache hit");
        return has_section;
    }
    let has_section = finds_section_keyword(cursor);
    cache.store(has_section);
    has_section
}
