use super::*;
use pretty_assertions::assert_eq;

/// All kinds in discriminant order, for exhaustive bit checks.
const ALL_KINDS: [TokenKind; KIND_COUNT] = [
    TokenKind::SimpleMacro,
    TokenKind::NegatedMacro,
    TokenKind::SpecialMacro,
    TokenKind::EscapedPercent,
    TokenKind::Newline,
    TokenKind::SectionName,
    TokenKind::ParametricMacro,
    TokenKind::TopLevelIf,
    TokenKind::TopLevelIfarch,
    TokenKind::TopLevelIfnarch,
    TokenKind::TopLevelIfos,
    TokenKind::TopLevelIfnos,
    TokenKind::SubsectionIf,
    TokenKind::SubsectionIfarch,
    TokenKind::SubsectionIfnarch,
    TokenKind::SubsectionIfos,
    TokenKind::SubsectionIfnos,
    TokenKind::ScriptletIf,
    TokenKind::ScriptletIfarch,
    TokenKind::ScriptletIfnarch,
    TokenKind::ScriptletIfos,
    TokenKind::ScriptletIfnos,
    TokenKind::FilesIf,
    TokenKind::FilesIfarch,
    TokenKind::FilesIfnarch,
    TokenKind::FilesIfos,
    TokenKind::FilesIfnos,
    TokenKind::ExpandCode,
    TokenKind::ShellCode,
];

// === Discriminants ===

#[test]
fn frequency_ordered_discriminants() {
    // Macro forms first (most common), content kinds last (contextual).
    assert_eq!(TokenKind::SimpleMacro as u8, 0);
    assert_eq!(TokenKind::NegatedMacro as u8, 1);
    assert_eq!(TokenKind::SpecialMacro as u8, 2);
    assert_eq!(TokenKind::EscapedPercent as u8, 3);
    assert_eq!(TokenKind::Newline as u8, 4);
    assert_eq!(TokenKind::SectionName as u8, 5);
    assert_eq!(TokenKind::ParametricMacro as u8, 6);
    assert_eq!(TokenKind::TopLevelIf as u8, 7);
    assert_eq!(TokenKind::SubsectionIf as u8, 12);
    assert_eq!(TokenKind::ScriptletIf as u8, 17);
    assert_eq!(TokenKind::FilesIf as u8, 22);
    assert_eq!(TokenKind::ExpandCode as u8, 27);
    assert_eq!(TokenKind::ShellCode as u8, 28);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn discriminants_are_dense() {
    for (i, kind) in ALL_KINDS.iter().enumerate() {
        assert_eq!(*kind as usize, i);
    }
}

// === ValidKinds bits ===

#[test]
fn each_flag_matches_its_kind_bit() {
    assert_eq!(ValidKinds::SIMPLE_MACRO, ValidKinds::of(TokenKind::SimpleMacro));
    assert_eq!(ValidKinds::NEGATED_MACRO, ValidKinds::of(TokenKind::NegatedMacro));
    assert_eq!(ValidKinds::SPECIAL_MACRO, ValidKinds::of(TokenKind::SpecialMacro));
    assert_eq!(
        ValidKinds::ESCAPED_PERCENT,
        ValidKinds::of(TokenKind::EscapedPercent)
    );
    assert_eq!(ValidKinds::NEWLINE, ValidKinds::of(TokenKind::Newline));
    assert_eq!(ValidKinds::SECTION_NAME, ValidKinds::of(TokenKind::SectionName));
    assert_eq!(
        ValidKinds::PARAMETRIC_MACRO,
        ValidKinds::of(TokenKind::ParametricMacro)
    );
    assert_eq!(ValidKinds::TOP_LEVEL_IF, ValidKinds::of(TokenKind::TopLevelIf));
    assert_eq!(ValidKinds::SUBSECTION_IF, ValidKinds::of(TokenKind::SubsectionIf));
    assert_eq!(ValidKinds::SCRIPTLET_IF, ValidKinds::of(TokenKind::ScriptletIf));
    assert_eq!(ValidKinds::FILES_IF, ValidKinds::of(TokenKind::FilesIf));
    assert_eq!(ValidKinds::EXPAND_CODE, ValidKinds::of(TokenKind::ExpandCode));
    assert_eq!(ValidKinds::SHELL_CODE, ValidKinds::of(TokenKind::ShellCode));
}

#[test]
fn all_kind_bits_are_distinct() {
    let mut seen = ValidKinds::empty();
    for kind in ALL_KINDS {
        let bit = ValidKinds::of(kind);
        assert!(!seen.intersects(bit), "duplicate bit for {kind:?}");
        seen |= bit;
    }
    assert_eq!(seen.bits().count_ones() as usize, KIND_COUNT);
}

#[test]
fn conditional_group_covers_all_variants() {
    assert_eq!(ValidKinds::CONDITIONAL.bits().count_ones(), 20);
    assert_eq!(
        ValidKinds::CONDITIONAL,
        ValidKinds::TOP_LEVEL_CONDITIONAL
            | ValidKinds::SUBSECTION_CONDITIONAL
            | ValidKinds::SCRIPTLET_CONDITIONAL
            | ValidKinds::FILES_CONDITIONAL
    );
}

#[test]
fn directive_group_is_conditionals_plus_directive_kinds() {
    assert_eq!(
        ValidKinds::DIRECTIVE,
        ValidKinds::CONDITIONAL | ValidKinds::SECTION_NAME | ValidKinds::PARAMETRIC_MACRO
    );
}

#[test]
fn macro_group_has_four_kinds() {
    assert_eq!(ValidKinds::MACRO.bits().count_ones(), 4);
    assert!(ValidKinds::MACRO.accepts(TokenKind::SimpleMacro));
    assert!(ValidKinds::MACRO.accepts(TokenKind::EscapedPercent));
    assert!(!ValidKinds::MACRO.accepts(TokenKind::SectionName));
}

// === accepts / from_bools ===

#[test]
fn accepts_checks_single_kind() {
    let valid = ValidKinds::SIMPLE_MACRO | ValidKinds::NEWLINE;
    assert!(valid.accepts(TokenKind::SimpleMacro));
    assert!(valid.accepts(TokenKind::Newline));
    assert!(!valid.accepts(TokenKind::ShellCode));
}

#[test]
fn from_bools_maps_by_discriminant() {
    let mut bools = [false; KIND_COUNT];
    bools[TokenKind::SimpleMacro as usize] = true;
    bools[TokenKind::FilesIfnos as usize] = true;
    bools[TokenKind::ShellCode as usize] = true;

    let valid = ValidKinds::from_bools(&bools);
    assert_eq!(
        valid,
        ValidKinds::SIMPLE_MACRO | ValidKinds::FILES_IFNOS | ValidKinds::SHELL_CODE
    );
}

#[test]
fn from_bools_tolerates_short_and_long_arrays() {
    // Short: missing entries are false.
    let valid = ValidKinds::from_bools(&[true, false, true]);
    assert_eq!(valid, ValidKinds::SIMPLE_MACRO | ValidKinds::SPECIAL_MACRO);

    // Long: extra entries are ignored.
    let mut bools = [true; 40];
    bools[0] = false;
    let valid = ValidKinds::from_bools(&bools);
    assert!(!valid.accepts(TokenKind::SimpleMacro));
    assert!(valid.accepts(TokenKind::ShellCode));
    assert_eq!(valid.bits().count_ones() as usize, KIND_COUNT - 1);
}

#[test]
fn from_bools_all_true_is_every_kind() {
    let valid = ValidKinds::from_bools(&[true; KIND_COUNT]);
    for kind in ALL_KINDS {
        assert!(valid.accepts(kind), "missing {kind:?}");
    }
}

// === Names ===

#[test]
fn names_are_distinct_and_nonempty() {
    let mut names: Vec<&str> = ALL_KINDS.iter().map(|k| k.name()).collect();
    assert!(names.iter().all(|n| !n.is_empty()));
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), KIND_COUNT);
}

#[test]
fn name_describes_context_variants() {
    assert_eq!(TokenKind::TopLevelIf.name(), "top-level `%if`");
    assert_eq!(TokenKind::ScriptletIfarch.name(), "scriptlet `%ifarch`");
    assert_eq!(TokenKind::FilesIfnos.name(), "files `%ifnos`");
}
