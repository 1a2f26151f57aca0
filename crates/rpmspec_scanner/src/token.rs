//! Token kinds, the scanned token value, and the valid-kind set.
//!
//! `TokenKind` is ordered by expected frequency of occurrence. During error
//! recovery the host parse engine may try kinds in order, so placing the
//! most common kinds first improves recovery behavior. The ordering affects
//! recovery only, never correctness.

use bitflags::bitflags;

/// Token kinds recognized by the external tokenizer.
///
/// The five if-like keywords each come in four context variants. Which
/// variant is emitted depends on the caller's valid-kind set and, when the
/// set is ambiguous, on bounded lookahead over the conditional body (see
/// the `conditional` module).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Simple macro expansion: `%name` (by far the most common form).
    SimpleMacro = 0,
    /// Negated macro expansion: `%!name`.
    NegatedMacro = 1,
    /// Special macro variables: `%*`, `%**`, `%#`, `%0`-`%9`, `%nil`.
    SpecialMacro = 2,
    /// Escaped percent sign: `%%` (the second `%`).
    EscapedPercent = 3,
    /// Explicit line terminator: `\n` or `\r\n`, only when requested.
    Newline = 4,
    /// Word-bounded section keyword after `%` (e.g. `%build`).
    SectionName = 5,
    /// Parametric macro name whose arguments run to end of line.
    ParametricMacro = 6,

    /// `%if` at top level or containing section keywords.
    TopLevelIf = 7,
    /// `%ifarch` at top level.
    TopLevelIfarch = 8,
    /// `%ifnarch` at top level.
    TopLevelIfnarch = 9,
    /// `%ifos` at top level.
    TopLevelIfos = 10,
    /// `%ifnos` at top level.
    TopLevelIfnos = 11,

    /// `%if` inside a subsection (e.g. `%package`) without section keywords.
    SubsectionIf = 12,
    /// `%ifarch` inside a subsection.
    SubsectionIfarch = 13,
    /// `%ifnarch` inside a subsection.
    SubsectionIfnarch = 14,
    /// `%ifos` inside a subsection.
    SubsectionIfos = 15,
    /// `%ifnos` inside a subsection.
    SubsectionIfnos = 16,

    /// `%if` inside a scriptlet section without section keywords.
    ScriptletIf = 17,
    /// `%ifarch` inside a scriptlet section.
    ScriptletIfarch = 18,
    /// `%ifnarch` inside a scriptlet section.
    ScriptletIfnarch = 19,
    /// `%ifos` inside a scriptlet section.
    ScriptletIfos = 20,
    /// `%ifnos` inside a scriptlet section.
    ScriptletIfnos = 21,

    /// `%if` inside a `%files` section.
    FilesIf = 22,
    /// `%ifarch` inside a `%files` section.
    FilesIfarch = 23,
    /// `%ifnarch` inside a `%files` section.
    FilesIfnarch = 24,
    /// `%ifos` inside a `%files` section.
    FilesIfos = 25,
    /// `%ifnos` inside a `%files` section.
    FilesIfnos = 26,

    /// Raw text inside `%{expand:...}` with balanced braces.
    ExpandCode = 27,
    /// Raw text inside `%(...)` with balanced parentheses.
    ShellCode = 28,
}

/// Number of token kinds (one past the highest discriminant).
pub const KIND_COUNT: usize = 29;

impl TokenKind {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::SimpleMacro => "simple macro",
            Self::NegatedMacro => "negated macro",
            Self::SpecialMacro => "special macro variable",
            Self::EscapedPercent => "escaped percent",
            Self::Newline => "line terminator",
            Self::SectionName => "section name",
            Self::ParametricMacro => "parametric macro",
            Self::TopLevelIf => "top-level `%if`",
            Self::TopLevelIfarch => "top-level `%ifarch`",
            Self::TopLevelIfnarch => "top-level `%ifnarch`",
            Self::TopLevelIfos => "top-level `%ifos`",
            Self::TopLevelIfnos => "top-level `%ifnos`",
            Self::SubsectionIf => "subsection `%if`",
            Self::SubsectionIfarch => "subsection `%ifarch`",
            Self::SubsectionIfnarch => "subsection `%ifnarch`",
            Self::SubsectionIfos => "subsection `%ifos`",
            Self::SubsectionIfnos => "subsection `%ifnos`",
            Self::ScriptletIf => "scriptlet `%if`",
            Self::ScriptletIfarch => "scriptlet `%ifarch`",
            Self::ScriptletIfnarch => "scriptlet `%ifnarch`",
            Self::ScriptletIfos => "scriptlet `%ifos`",
            Self::ScriptletIfnos => "scriptlet `%ifnos`",
            Self::FilesIf => "files `%if`",
            Self::FilesIfarch => "files `%ifarch`",
            Self::FilesIfnarch => "files `%ifnarch`",
            Self::FilesIfos => "files `%ifos`",
            Self::FilesIfnos => "files `%ifnos`",
            Self::ExpandCode => "expand body",
            Self::ShellCode => "shell body",
        }
    }
}

/// A recognized token: its kind and the byte offset one past its end.
///
/// The start offset is implicit -- it is wherever the dispatcher left the
/// cursor after the whitespace policy of the current call (the host drives
/// positioning; the tokenizer only ever moves forward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Which lexical category matched.
    pub kind: TokenKind,
    /// Byte offset one past the last byte of the token.
    pub end: u32,
}

bitflags! {
    /// Set of token kinds the caller would accept at the current position.
    ///
    /// One bit per [`TokenKind`], at the kind's discriminant. The tokenizer
    /// never emits a kind whose bit is clear.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ValidKinds: u32 {
        const SIMPLE_MACRO = 1 << 0;
        const NEGATED_MACRO = 1 << 1;
        const SPECIAL_MACRO = 1 << 2;
        const ESCAPED_PERCENT = 1 << 3;
        const NEWLINE = 1 << 4;
        const SECTION_NAME = 1 << 5;
        const PARAMETRIC_MACRO = 1 << 6;

        const TOP_LEVEL_IF = 1 << 7;
        const TOP_LEVEL_IFARCH = 1 << 8;
        const TOP_LEVEL_IFNARCH = 1 << 9;
        const TOP_LEVEL_IFOS = 1 << 10;
        const TOP_LEVEL_IFNOS = 1 << 11;

        const SUBSECTION_IF = 1 << 12;
        const SUBSECTION_IFARCH = 1 << 13;
        const SUBSECTION_IFNARCH = 1 << 14;
        const SUBSECTION_IFOS = 1 << 15;
        const SUBSECTION_IFNOS = 1 << 16;

        const SCRIPTLET_IF = 1 << 17;
        const SCRIPTLET_IFARCH = 1 << 18;
        const SCRIPTLET_IFNARCH = 1 << 19;
        const SCRIPTLET_IFOS = 1 << 20;
        const SCRIPTLET_IFNOS = 1 << 21;

        const FILES_IF = 1 << 22;
        const FILES_IFARCH = 1 << 23;
        const FILES_IFNARCH = 1 << 24;
        const FILES_IFOS = 1 << 25;
        const FILES_IFNOS = 1 << 26;

        const EXPAND_CODE = 1 << 27;
        const SHELL_CODE = 1 << 28;

        /// Kinds handled by the simple-macro recognizer.
        const MACRO = Self::SIMPLE_MACRO.bits()
            | Self::NEGATED_MACRO.bits()
            | Self::SPECIAL_MACRO.bits()
            | Self::ESCAPED_PERCENT.bits();

        /// All top-level conditional variants.
        const TOP_LEVEL_CONDITIONAL = Self::TOP_LEVEL_IF.bits()
            | Self::TOP_LEVEL_IFARCH.bits()
            | Self::TOP_LEVEL_IFNARCH.bits()
            | Self::TOP_LEVEL_IFOS.bits()
            | Self::TOP_LEVEL_IFNOS.bits();

        /// All subsection conditional variants.
        const SUBSECTION_CONDITIONAL = Self::SUBSECTION_IF.bits()
            | Self::SUBSECTION_IFARCH.bits()
            | Self::SUBSECTION_IFNARCH.bits()
            | Self::SUBSECTION_IFOS.bits()
            | Self::SUBSECTION_IFNOS.bits();

        /// All scriptlet conditional variants.
        const SCRIPTLET_CONDITIONAL = Self::SCRIPTLET_IF.bits()
            | Self::SCRIPTLET_IFARCH.bits()
            | Self::SCRIPTLET_IFNARCH.bits()
            | Self::SCRIPTLET_IFOS.bits()
            | Self::SCRIPTLET_IFNOS.bits();

        /// All files conditional variants.
        const FILES_CONDITIONAL = Self::FILES_IF.bits()
            | Self::FILES_IFARCH.bits()
            | Self::FILES_IFNARCH.bits()
            | Self::FILES_IFOS.bits()
            | Self::FILES_IFNOS.bits();

        /// Every conditional variant.
        const CONDITIONAL = Self::TOP_LEVEL_CONDITIONAL.bits()
            | Self::SUBSECTION_CONDITIONAL.bits()
            | Self::SCRIPTLET_CONDITIONAL.bits()
            | Self::FILES_CONDITIONAL.bits();

        /// Kinds handled by the percent-directive recognizer.
        const DIRECTIVE = Self::CONDITIONAL.bits()
            | Self::SECTION_NAME.bits()
            | Self::PARAMETRIC_MACRO.bits();

        /// Balanced-content kinds (whitespace is significant while pending).
        const CONTENT = Self::EXPAND_CODE.bits() | Self::SHELL_CODE.bits();
    }
}

impl ValidKinds {
    /// The bit for a single token kind.
    #[inline]
    pub fn of(kind: TokenKind) -> Self {
        Self::from_bits_truncate(1 << (kind as u32))
    }

    /// Returns `true` if `kind`'s bit is set.
    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Build a set from the host's boolean array, one entry per kind in
    /// discriminant order. Entries beyond [`KIND_COUNT`] are ignored;
    /// missing entries are treated as `false`.
    pub fn from_bools(valid: &[bool]) -> Self {
        let mut bits = 0u32;
        for (i, &v) in valid.iter().take(KIND_COUNT).enumerate() {
            if v {
                bits |= 1 << i;
            }
        }
        Self::from_bits_truncate(bits)
    }
}

#[cfg(test)]
mod tests;
