//! Immutable keyword tables with length-bucketed lookup.
//!
//! Three tables:
//! 1. **Reserved keywords** -- conditionals, definitions, and builtin macro
//!    names that must never match as simple macros.
//! 2. **Section keywords** -- identifiers that introduce new document
//!    structure; finding one inside a conditional body marks the block as
//!    top-level.
//! 3. **Files directives** -- keywords only meaningful inside `%files`
//!    sections; excluded from simple-macro and parametric-macro matching.
//!
//! The tables are static data built into the binary, never mutated, so
//! multi-session use is trivially thread-safe. Lookup uses the identifier's
//! length as a first-pass filter, then matches against the keywords of that
//! length -- the same two-phase shape as keyword resolution in the cooking
//! layer of a hand-written lexer.
//!
//! All lookups take raw bytes: identifiers are ASCII by construction (the
//! identifier scanner only accepts `[A-Za-z0-9_]`).

/// Check if an identifier is a reserved keyword.
///
/// Reserved keywords are 2-10 bytes long; anything outside that range is
/// rejected without a comparison.
pub(crate) fn is_reserved(ident: &[u8]) -> bool {
    match ident.len() {
        2 => ident == b"if",
        3 => matches!(ident, b"dnl" | b"len" | b"lua" | b"rep" | b"sub" | b"u2p"),
        4 => matches!(
            ident,
            b"dump" | b"echo" | b"elif" | b"else" | b"expr" | b"gsub" | b"ifos" | b"load"
                | b"warn"
        ),
        5 => matches!(
            ident,
            b"endif" | b"error" | b"ifnos" | b"lower" | b"patch" | b"quote" | b"setup"
                | b"trace" | b"upper"
        ),
        6 => matches!(
            ident,
            b"define" | b"elifos" | b"exists" | b"expand" | b"getenv" | b"global" | b"ifarch"
                | b"shrink" | b"suffix"
        ),
        7 => matches!(ident, b"dirname" | b"ifnarch" | b"reverse" | b"verbose"),
        8 => matches!(
            ident,
            b"basename" | b"elifarch" | b"getncpus" | b"shescape" | b"undefine" | b"url2path"
        ),
        9 => ident == b"macrobody",
        10 => matches!(ident, b"rpmversion" | b"uncompress"),
        _ => false,
    }
}

/// Check if an identifier is a section keyword.
///
/// When a conditional body contains one of these on a line-leading `%`
/// directive, the conditional introduces new document structure and must be
/// classified as top-level.
pub(crate) fn is_section_keyword(ident: &[u8]) -> bool {
    match ident.len() {
        3 => ident == b"pre",
        4 => matches!(ident, b"post" | b"prep"),
        5 => matches!(ident, b"build" | b"check" | b"clean" | b"files" | b"preun"),
        6 => ident == b"postun",
        7 => matches!(ident, b"install" | b"package"),
        8 => ident == b"pretrans",
        9 => matches!(
            ident,
            b"changelog" | b"posttrans" | b"triggerin" | b"triggerun"
        ),
        10 => ident == b"preuntrans",
        11 => matches!(ident, b"description" | b"postuntrans"),
        12 => ident == b"triggerprein",
        13 => matches!(ident, b"filetriggerin" | b"filetriggerun" | b"triggerpostun"),
        17 => ident == b"filetriggerpostun",
        18 => matches!(ident, b"transfiletriggerin" | b"transfiletriggerun"),
        22 => ident == b"transfiletriggerpostun",
        _ => false,
    }
}

/// Check if an identifier is a `%files`-only directive.
pub(crate) fn is_files_directive(ident: &[u8]) -> bool {
    match ident.len() {
        3 => matches!(ident, b"dir" | b"doc"),
        4 => ident == b"attr",
        5 => ident == b"ghost",
        6 => matches!(ident, b"config" | b"docdir" | b"verify"),
        7 => matches!(ident, b"defattr" | b"exclude" | b"license"),
        _ => false,
    }
}

/// Check if an identifier belongs to any keyword table.
///
/// Used by the simple-macro and parametric-macro recognizers: a keyword is
/// never a macro name.
pub(crate) fn is_keyword(ident: &[u8]) -> bool {
    is_reserved(ident) || is_section_keyword(ident) || is_files_directive(ident)
}

/// Every reserved keyword, for exhaustive table tests.
#[cfg(test)]
pub(crate) const RESERVED_KEYWORDS: &[&[u8]] = &[
    // Conditionals
    b"if", b"elif", b"else", b"endif", b"ifarch", b"ifnarch", b"elifarch", b"ifos", b"ifnos",
    b"elifos",
    // Definitions
    b"define", b"global", b"undefine",
    // Special macros handled by the grammar
    b"setup", b"patch",
    // Builtin string macros
    b"echo", b"error", b"expand", b"getenv", b"getncpus", b"len", b"lower", b"macrobody",
    b"quote", b"reverse", b"shescape", b"shrink", b"upper", b"verbose", b"warn",
    // Builtin path macros
    b"basename", b"dirname", b"exists", b"load", b"suffix", b"uncompress",
    // Builtin URL macros
    b"url2path", b"u2p",
    // Builtin multi-arg macros
    b"gsub", b"sub", b"rep",
    // Builtin standalone macros
    b"dnl", b"dump", b"rpmversion", b"trace",
    // Other builtins
    b"expr", b"lua",
];

/// Every section keyword, for exhaustive table tests.
#[cfg(test)]
pub(crate) const SECTION_KEYWORDS: &[&[u8]] = &[
    // Main sections
    b"prep", b"build", b"install", b"check", b"clean", b"files", b"changelog", b"description",
    b"package",
    // Runtime scriptlets
    b"pre", b"post", b"preun", b"postun", b"pretrans", b"posttrans", b"preuntrans",
    b"postuntrans",
    // Triggers
    b"triggerin", b"triggerun", b"triggerpostun", b"triggerprein",
    // File triggers
    b"filetriggerin", b"filetriggerun", b"filetriggerpostun", b"transfiletriggerin",
    b"transfiletriggerun", b"transfiletriggerpostun",
];

/// Every files-only directive, for exhaustive table tests.
#[cfg(test)]
pub(crate) const FILES_DIRECTIVES: &[&[u8]] = &[
    b"defattr", b"attr", b"config", b"doc", b"docdir", b"dir", b"license", b"verify", b"ghost",
    b"exclude",
];
