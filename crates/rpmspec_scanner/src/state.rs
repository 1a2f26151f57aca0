//! Persistent scanner state and its serialization.
//!
//! The only state surviving across scan calls is the single-slot lookahead
//! cache. The hosting incremental-parse engine snapshots the state before
//! every scan and restores it around edits, so unrelated parts of the
//! document never observe a cache computed for a different block.
//!
//! # Wire Format
//!
//! Two bytes: `[cache_valid, cached_has_section]`, each `0` or `1`.
//! Deserialization of a truncated or malformed buffer clears the cache
//! rather than failing -- a cleared cache is always safe, it only costs a
//! re-scan.

use crate::lookahead::LookaheadCache;

/// Exact size of the serialized state in bytes.
pub const SERIALIZED_LEN: usize = 2;

/// State surviving across scan calls within one parse session.
///
/// Created once per session, serialized/restored on every incremental
/// edit, dropped at session end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScannerState {
    /// Single-slot cache for the conditional body classifier.
    pub(crate) lookahead: LookaheadCache,
}

impl ScannerState {
    /// Allocate zeroed state: no cached classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the state into `buf`, returning the number of bytes written.
    ///
    /// Returns 0 when `buf` is smaller than [`SERIALIZED_LEN`]; the host
    /// treats a zero-length snapshot as empty state.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < SERIALIZED_LEN {
            return 0;
        }
        let (valid, has_section) = self.lookahead.as_parts();
        buf[0] = u8::from(valid);
        buf[1] = u8::from(has_section);
        SERIALIZED_LEN
    }

    /// Restore the state from a snapshot previously written by
    /// [`serialize`](Self::serialize).
    ///
    /// A truncated buffer or out-of-range bytes clear the cache instead of
    /// failing: the snapshot may come from a different build or a corrupted
    /// host, and an empty cache is always a safe starting point.
    pub fn deserialize(&mut self, buf: &[u8]) {
        self.lookahead.invalidate();

        if buf.len() < SERIALIZED_LEN {
            return;
        }
        let (valid, has_section) = (buf[0], buf[1]);
        if valid > 1 || has_section > 1 {
            // Malformed snapshot: keep the cache cleared.
            return;
        }
        if valid == 1 {
            self.lookahead = LookaheadCache::from_parts(true, has_section == 1);
        }
        // An invalid slot stays fully cleared: a result byte under
        // valid == 0 is never written by serialize.
    }
}

#[cfg(test)]
mod tests;
