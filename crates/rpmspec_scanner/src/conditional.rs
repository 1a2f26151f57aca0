//! Context resolution for if-like conditional keywords.
//!
//! The grammar signals context through the valid-kind set: which of the
//! four variants (top-level / subsection / scriptlet / files) of a keyword
//! it would accept. Resolution policy:
//!
//! 1. The files variant always wins -- files blocks can nest everything
//!    else, so it is the most specific context.
//! 2. An unambiguous context (exactly one other variant requested) is used
//!    directly; the cache slot belongs to an unrelated block and is
//!    invalidated.
//! 3. Top-level requested alongside subsection or scriptlet needs the body
//!    classifier: a section keyword in the body forces the top-level
//!    variant, otherwise the inline variant is used. The cached result is
//!    invalidated right after the token is emitted -- a nested conditional
//!    of a different shape must never reuse it. Hosts that re-scan the
//!    same position recover the cached value through the state snapshot
//!    they took before the call.

use rpmspec_lexer_core::Cursor;

use crate::ident::IdentBuf;
use crate::lookahead::{self, LookaheadCache};
use crate::token::{TokenKind, ValidKinds};

/// The five if-like keywords that open a conditional block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CondKeyword {
    If,
    Ifarch,
    Ifnarch,
    Ifos,
    Ifnos,
}

impl CondKeyword {
    /// Map a scanned identifier to a conditional keyword.
    pub(crate) fn from_ident(ident: &IdentBuf) -> Option<Self> {
        if ident.matches(b"if") {
            Some(Self::If)
        } else if ident.matches(b"ifarch") {
            Some(Self::Ifarch)
        } else if ident.matches(b"ifnarch") {
            Some(Self::Ifnarch)
        } else if ident.matches(b"ifos") {
            Some(Self::Ifos)
        } else if ident.matches(b"ifnos") {
            Some(Self::Ifnos)
        } else {
            None
        }
    }

    /// The top-level variant of this keyword.
    pub(crate) fn top_level(self) -> TokenKind {
        match self {
            Self::If => TokenKind::TopLevelIf,
            Self::Ifarch => TokenKind::TopLevelIfarch,
            Self::Ifnarch => TokenKind::TopLevelIfnarch,
            Self::Ifos => TokenKind::TopLevelIfos,
            Self::Ifnos => TokenKind::TopLevelIfnos,
        }
    }

    /// The subsection variant of this keyword.
    pub(crate) fn subsection(self) -> TokenKind {
        match self {
            Self::If => TokenKind::SubsectionIf,
            Self::Ifarch => TokenKind::SubsectionIfarch,
            Self::Ifnarch => TokenKind::SubsectionIfnarch,
            Self::Ifos => TokenKind::SubsectionIfos,
            Self::Ifnos => TokenKind::SubsectionIfnos,
        }
    }

    /// The scriptlet variant of this keyword.
    pub(crate) fn scriptlet(self) -> TokenKind {
        match self {
            Self::If => TokenKind::ScriptletIf,
            Self::Ifarch => TokenKind::ScriptletIfarch,
            Self::Ifnarch => TokenKind::ScriptletIfnarch,
            Self::Ifos => TokenKind::ScriptletIfos,
            Self::Ifnos => TokenKind::ScriptletIfnos,
        }
    }

    /// The files variant of this keyword.
    pub(crate) fn files(self) -> TokenKind {
        match self {
            Self::If => TokenKind::FilesIf,
            Self::Ifarch => TokenKind::FilesIfarch,
            Self::Ifnarch => TokenKind::FilesIfnarch,
            Self::Ifos => TokenKind::FilesIfos,
            Self::Ifnos => TokenKind::FilesIfnos,
        }
    }
}

/// Resolve which context variant of `keyword` to emit.
///
/// `body` is a cursor copy positioned just after the keyword (the start of
/// the conditional's body); it is only consulted when the requested
/// variants are ambiguous. Returns `None` when no variant of this keyword
/// is requested.
pub(crate) fn resolve(
    cache: &mut LookaheadCache,
    keyword: CondKeyword,
    body: Cursor<'_>,
    valid: ValidKinds,
) -> Option<TokenKind> {
    let top = valid.accepts(keyword.top_level());
    let sub = valid.accepts(keyword.subsection());
    let script = valid.accepts(keyword.scriptlet());
    let files = valid.accepts(keyword.files());

    if files {
        // Most permissive context: file entries and nested sections both
        // parse under the files variant, so no lookahead is needed.
        return Some(keyword.files());
    }

    match (top, sub, script) {
        (false, false, false) => None,
        // Exclusive context: any cached result belongs to an unrelated
        // block.
        (true, false, false) => {
            cache.invalidate();
            Some(keyword.top_level())
        }
        (false, true, false) => {
            cache.invalidate();
            Some(keyword.subsection())
        }
        (false, false, true) => {
            cache.invalidate();
            Some(keyword.scriptlet())
        }
        // Without the top-level variant no section can open here, so the
        // classifier cannot change the outcome; subsection is the more
        // specific of the two inline contexts.
        (false, true, true) => {
            cache.invalidate();
            Some(keyword.subsection())
        }
        // Ambiguous: classify the body, then retire the cached result --
        // it has been consumed by this token.
        (true, _, _) => {
            let has_section = lookahead::cached_finds_section(cache, body);
            let kind = if has_section {
                keyword.top_level()
            } else if sub {
                keyword.subsection()
            } else {
                keyword.scriptlet()
            };
            cache.invalidate();
            tracing::trace!(kind = kind.name(), has_section, "conditional resolved");
            Some(kind)
        }
    }
}
