//! Bounded identifier scratch buffer.
//!
//! Collects the identifier following a `%` while scanning. The buffer has a
//! fixed capacity, but the input cursor is always advanced past the *entire*
//! identifier -- cursor correctness is never sacrificed to buffer size.
//!
//! # Truncation Contract
//!
//! Identifiers longer than [`IDENT_CAP`] bytes are fully consumed from the
//! input but only their first [`IDENT_CAP`] bytes are stored. Comparisons go
//! through the true consumed length first, so a truncated identifier can
//! never equal a keyword: every keyword in the tables is shorter than
//! [`IDENT_CAP`]. Pattern checks that would need the missing tail (the
//! legacy `patchN` test) decline on truncated buffers.

use rpmspec_lexer_core::Cursor;

/// Capacity of the identifier scratch buffer in bytes.
///
/// Must exceed the longest keyword in any table
/// (`transfiletriggerpostun`, 22 bytes).
pub(crate) const IDENT_CAP: usize = 32;

/// Check if a byte can start an identifier (letter or underscore).
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Check if a byte can continue an identifier.
#[inline]
pub(crate) fn is_ident_char(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// Fixed-capacity identifier buffer that tracks its true consumed length.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IdentBuf {
    /// Stored prefix of the identifier (first `stored` bytes are valid).
    bytes: [u8; IDENT_CAP],
    /// Number of bytes actually stored (`<= IDENT_CAP`).
    stored: u8,
    /// Number of bytes consumed from the input (may exceed `IDENT_CAP`).
    true_len: u32,
}

impl IdentBuf {
    /// Read an identifier from the cursor, consuming every identifier byte.
    ///
    /// The cursor ends up on the first non-identifier byte regardless of how
    /// much of the identifier fit in the buffer. An empty buffer
    /// (`true_len == 0`) means the cursor was not on an identifier byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "stored is bounded by IDENT_CAP = 32"
    )]
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Self {
        let mut bytes = [0u8; IDENT_CAP];
        let mut stored = 0usize;
        let start = cursor.pos();
        while is_ident_char(cursor.current()) {
            if stored < IDENT_CAP {
                bytes[stored] = cursor.current();
                stored += 1;
            }
            cursor.advance();
        }
        Self {
            bytes,
            stored: stored as u8,
            true_len: cursor.pos() - start,
        }
    }

    /// Returns `true` if no identifier bytes were consumed.
    pub(crate) fn is_empty(&self) -> bool {
        self.true_len == 0
    }

    /// Number of bytes consumed from the input.
    #[cfg(test)]
    pub(crate) fn true_len(&self) -> u32 {
        self.true_len
    }

    /// Returns `true` if the identifier did not fit in the buffer.
    pub(crate) fn is_truncated(&self) -> bool {
        self.true_len as usize > IDENT_CAP
    }

    /// The complete identifier bytes, or `None` if truncated.
    ///
    /// Keyword lookups go through this accessor: a truncated identifier
    /// matches no keyword, per the truncation contract.
    pub(crate) fn full_bytes(&self) -> Option<&[u8]> {
        if self.is_truncated() {
            None
        } else {
            Some(&self.bytes[..self.stored as usize])
        }
    }

    /// Compare against a literal, by true length first.
    pub(crate) fn matches(&self, literal: &[u8]) -> bool {
        self.true_len as usize == literal.len() && &self.bytes[..self.stored as usize] == literal
    }

    /// Check for the special `nil` form (`%nil` is a special variable, not a
    /// simple macro).
    pub(crate) fn is_nil(&self) -> bool {
        self.matches(b"nil")
    }

    /// Check for the legacy patch form: literal `patch` followed by one or
    /// more digits (`patch0`, `patch12`). Handled by a dedicated grammar
    /// rule, so the macro recognizers decline it.
    ///
    /// Declines on truncated buffers: the digits past the stored prefix
    /// cannot be verified.
    pub(crate) fn is_legacy_patch(&self) -> bool {
        let Some(bytes) = self.full_bytes() else {
            return false;
        };
        // "patch" + at least one digit
        if bytes.len() < 6 || &bytes[..5] != b"patch" {
            return false;
        }
        bytes[5..].iter().all(u8::is_ascii_digit)
    }
}
