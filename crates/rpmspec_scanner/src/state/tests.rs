use super::*;
use pretty_assertions::assert_eq;

fn state_with_cache(valid: bool, has_section: bool) -> ScannerState {
    ScannerState {
        lookahead: LookaheadCache::from_parts(valid, has_section),
    }
}

// === Lifecycle ===

#[test]
fn new_state_is_zeroed() {
    let state = ScannerState::new();
    assert_eq!(state.lookahead.get(), None);
}

// === Serialization ===

#[test]
fn serialize_writes_two_bytes() {
    let mut buf = [0xFFu8; 8];
    let written = ScannerState::new().serialize(&mut buf);
    assert_eq!(written, SERIALIZED_LEN);
    assert_eq!(&buf[..2], &[0, 0]);
    // Bytes beyond the written length are untouched.
    assert_eq!(buf[2], 0xFF);
}

#[test]
fn serialize_encodes_cache_fields() {
    let mut buf = [0u8; SERIALIZED_LEN];

    state_with_cache(true, true).serialize(&mut buf);
    assert_eq!(buf, [1, 1]);

    state_with_cache(true, false).serialize(&mut buf);
    assert_eq!(buf, [1, 0]);
}

#[test]
fn serialize_refuses_short_buffer() {
    let mut buf = [0u8; 1];
    assert_eq!(state_with_cache(true, true).serialize(&mut buf), 0);
    let mut empty: [u8; 0] = [];
    assert_eq!(ScannerState::new().serialize(&mut empty), 0);
}

// === Deserialization ===

#[test]
fn roundtrip_all_reachable_states() {
    // Reachable states: cache empty, or cache holding either result.
    // (valid=false, has_section=true is unreachable: invalidate clears
    // both fields.)
    for source in [
        ScannerState::new(),
        state_with_cache(true, false),
        state_with_cache(true, true),
    ] {
        let mut buf = [0u8; SERIALIZED_LEN];
        assert_eq!(source.serialize(&mut buf), SERIALIZED_LEN);

        let mut restored = ScannerState::new();
        restored.deserialize(&buf);
        assert_eq!(restored, source);
    }
}

#[test]
fn deserialize_truncated_buffer_clears_cache() {
    let mut state = state_with_cache(true, true);
    state.deserialize(&[1]);
    assert_eq!(state.lookahead.get(), None);

    let mut state = state_with_cache(true, true);
    state.deserialize(&[]);
    assert_eq!(state.lookahead.get(), None);
}

#[test]
fn deserialize_malformed_bytes_clears_cache() {
    for snapshot in [[2u8, 0], [0, 7], [0xFF, 0xFF]] {
        let mut state = state_with_cache(true, true);
        state.deserialize(&snapshot);
        assert_eq!(state.lookahead.get(), None, "snapshot {snapshot:?}");
    }
}

#[test]
fn deserialize_normalizes_result_under_invalid_slot() {
    // serialize never writes [0, 1]; restoring it must not fabricate a
    // half-valid cache.
    let mut state = state_with_cache(true, true);
    state.deserialize(&[0, 1]);
    assert_eq!(state.lookahead.as_parts(), (false, false));
}

#[test]
fn deserialize_ignores_trailing_bytes() {
    let mut state = ScannerState::new();
    state.deserialize(&[1, 1, 0xAB, 0xCD]);
    assert_eq!(state.lookahead.get(), Some(true));
}

#[test]
fn deserialize_overwrites_previous_state() {
    let mut state = state_with_cache(true, true);
    state.deserialize(&[0, 0]);
    assert_eq!(state.lookahead.get(), None);

    state.deserialize(&[1, 0]);
    assert_eq!(state.lookahead.get(), Some(false));
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// deserialize(serialize(s)) == s for every reachable state.
        #[test]
        fn roundtrip_is_identity(valid in any::<bool>(), has_section in any::<bool>()) {
            // Normalize to a reachable state: an empty cache stores no result.
            let source = if valid {
                state_with_cache(true, has_section)
            } else {
                ScannerState::new()
            };

            let mut buf = [0u8; SERIALIZED_LEN];
            prop_assert_eq!(source.serialize(&mut buf), SERIALIZED_LEN);

            let mut restored = state_with_cache(true, true);
            restored.deserialize(&buf);
            prop_assert_eq!(restored, source);
        }

        /// Deserializing arbitrary bytes never panics and yields either a
        /// faithful cache or a cleared one.
        #[test]
        fn deserialize_arbitrary_bytes_is_total(
            bytes in proptest::collection::vec(any::<u8>(), 0..8),
        ) {
            let mut state = state_with_cache(true, true);
            state.deserialize(&bytes);
            let (valid, has_section) = state.lookahead.as_parts();
            // has_section is only meaningful under a valid slot.
            prop_assert!(valid || !has_section);
        }
    }
}
