//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length. No explicit bounds checking
//! is performed in the common case -- the sentinel guarantees safe
//! termination.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes, the cursor distinguishes
//! them from EOF by comparing `pos` against `source_len`. A null at
//! `pos < source_len` is an interior null (ordinary content byte); a null
//! at `pos >= source_len` is the sentinel (EOF).
//!
//! # Snapshots
//!
//! The cursor is [`Copy`]. Speculative scans (the conditional lookahead
//! classifier, the balanced-content scanners) operate on a copy and commit
//! only the winning position via [`advance_to`](Cursor::advance_to) -- the
//! tokenizer itself only ever moves forward.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for speculative
/// lookahead.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel). All bytes after the
    /// sentinel must also be `0x00` (padding). This is guaranteed by
    /// `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at EOF (the sentinel byte). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: the sentinel and cache-line padding
    /// guarantee valid reads beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    ///
    /// Safe to call at any position: cache-line alignment provides at least
    /// one full cache line of zero padding after the sentinel.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance the cursor to an absolute position.
    ///
    /// # Contract
    ///
    /// `target` must not be behind the current position: the tokenizer only
    /// ever moves forward. Used to commit the end offset computed by a
    /// speculative scan on a cursor copy.
    #[inline]
    pub fn advance_to(&mut self, target: u32) {
        debug_assert!(
            target >= self.pos,
            "cursor may only move forward ({} -> {target})",
            self.pos
        );
        self.pos = target;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// EOF is when the current byte is the sentinel (`0x00`) and the
    /// position is at or past the source length. This distinguishes
    /// EOF from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as raw bytes.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content (`end <= source_len`).
    /// Guaranteed when both offsets come from token boundary tracking.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// The sentinel byte (`0x00`) naturally terminates the loop for all
    /// reasonable predicates, as `pred(0)` should return `false`.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`. This is true for all standard byte
    /// classification predicates (`is_ascii_alphanumeric`,
    /// `is_ascii_whitespace`, etc.). If `pred(0)` returns `true`, the cursor
    /// advances into the zero-filled padding region but will eventually stop
    /// (all padding is `0x00`, and bounds checking prevents out-of-bounds
    /// access).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// The sentinel byte (`0x00`) naturally terminates scanning since it is
    /// neither space nor tab.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            let b = self.buf[self.pos as usize];
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance past all whitespace: spaces, tabs, carriage returns, newlines.
    ///
    /// Used when line terminators are not significant at the current call
    /// site. The sentinel terminates the loop.
    #[inline]
    pub fn eat_any_whitespace(&mut self) {
        loop {
            let b = self.buf[self.pos as usize];
            if b == b' ' || b == b'\t' || b == b'\r' || b == b'\n' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by the lookahead classifier to skip the remainder of lines that
    /// cannot contain a line-leading directive. Scans only within source
    /// content (not into sentinel/padding). If no newline is found,
    /// positions the cursor at the EOF sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past plain brace content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes for balanced brace scanning: `%`, `{`, `}`.
    /// Everything in between is raw content the scanner absorbs wholesale,
    /// so a single `memchr3` jump replaces the byte-at-a-time loop.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_brace_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(off) = memchr::memchr3(b'%', b'{', b'}', remaining) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0 // EOF sentinel
        }
    }

    /// Advance past plain parenthesis content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes for balanced paren scanning: `%`, `(`, `)`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_paren_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(off) = memchr::memchr3(b'%', b'(', b')', remaining) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is positioned at the
    /// found byte, or at EOF if the byte was not found. Combines `memchr`
    /// over the source content with the interior-null distinction.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(off) = memchr::memchr(byte, remaining) {
            self.pos += off as u32;
        } else {
            self.pos = self.source_len;
        }
        self.pos - start
    }
}
