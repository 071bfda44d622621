//! Bit-level reader and writer over the base64 character alphabet.
//!
//! Board codes are not byte-aligned base64. Every field is packed at its own
//! bit width, most significant bit first, straight into the 6-bit indices of
//! the characters `A-Z a-z 0-9 + /`. A 1-bit flag therefore costs one bit on
//! the wire rather than one character, and the final character is
//! right-padded with zero bits when the stream length is not a multiple of
//! six.

use crate::error::DecodeError;

/// The 64 characters a board code may contain, in 6-bit index order.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Widest bit group a single `read`/`write` call accepts.
pub const MAX_FIELD_WIDTH: u32 = 32;

const BITS_PER_CHAR: usize = 6;

const INVALID_SEXTET: u8 = u8::MAX;

const fn build_decode_table() -> [u8; 256] {
    let mut tbl = [INVALID_SEXTET; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        tbl[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    tbl
}
static DECODE_TABLE: [u8; 256] = build_decode_table();

#[inline(always)]
fn decode_sextet(byte: u8) -> Option<u8> {
    let value = DECODE_TABLE[byte as usize];
    if value == INVALID_SEXTET {
        None
    } else {
        Some(value)
    }
}

#[inline(always)]
fn low_mask(width: u32) -> u64 {
    (1u64 << width) - 1
}

/// Accumulates bit groups and renders them as a board-code string.
///
/// Writes are most-significant-bit first and may straddle character
/// boundaries. The writer is write-once: [`BitWriter::into_string`] consumes
/// it, emitting a final zero-padded character when the bit count is not a
/// multiple of six.
#[derive(Debug, Default)]
pub struct BitWriter {
    encoded: String,
    pending: u8,
    bits_written: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// Bits of `value` above `width` are ignored, so an overwide value is
    /// silently truncated to the field. A `width` of zero appends nothing.
    ///
    /// # Panics
    ///
    /// Panics when `width` exceeds [`MAX_FIELD_WIDTH`].
    pub fn write(&mut self, width: u32, value: u32) {
        assert!(
            width <= MAX_FIELD_WIDTH,
            "field width {width} exceeds {MAX_FIELD_WIDTH} bits"
        );
        let mut remaining = width;
        let mut value = u64::from(value) & low_mask(width);
        while remaining > 0 {
            let free = (BITS_PER_CHAR - self.bits_written % BITS_PER_CHAR) as u32;
            let take = free.min(remaining);
            let chunk = (value >> (remaining - take)) as u8;
            self.pending |= chunk << (free - take);
            self.bits_written += take as usize;
            remaining -= take;
            value &= low_mask(remaining);
            if self.bits_written % BITS_PER_CHAR == 0 {
                self.encoded.push(ALPHABET[self.pending as usize] as char);
                self.pending = 0;
            }
        }
    }

    /// Append a single flag bit.
    #[inline(always)]
    pub fn write_bool(&mut self, value: bool) {
        self.write(1, value as u32);
    }

    /// Total bits appended so far.
    #[inline(always)]
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Render the stream, right-padding a final partial character with
    /// zero bits.
    pub fn into_string(mut self) -> String {
        if self.bits_written % BITS_PER_CHAR != 0 {
            self.encoded.push(ALPHABET[self.pending as usize] as char);
        }
        self.encoded
    }
}

/// Sequential bit reader over a board-code string.
///
/// Reads mirror [`BitWriter`] exactly: most-significant-bit first, straddling
/// character boundaries as needed. The reader borrows the string and tracks
/// only the current bit position.
#[derive(Debug)]
pub struct BitReader<'a> {
    encoded: &'a [u8],
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading `encoded` at bit zero.
    pub fn new(encoded: &'a str) -> Self {
        Self {
            encoded: encoded.as_bytes(),
            bit_position: 0,
        }
    }

    /// Consume the next `width` bits and assemble them MSB-first.
    ///
    /// A `width` of zero consumes nothing and returns zero, even on an empty
    /// string. Fails with [`DecodeError::UnexpectedEnd`] when the group would
    /// extend past the final character, and with
    /// [`DecodeError::InvalidCharacter`] on a character outside the alphabet.
    ///
    /// # Panics
    ///
    /// Panics when `width` exceeds [`MAX_FIELD_WIDTH`].
    pub fn read(&mut self, width: u32) -> Result<u32, DecodeError> {
        assert!(
            width <= MAX_FIELD_WIDTH,
            "field width {width} exceeds {MAX_FIELD_WIDTH} bits"
        );
        let mut remaining = width;
        let mut value: u64 = 0;
        while remaining > 0 {
            let index = self.bit_position / BITS_PER_CHAR;
            if index >= self.encoded.len() {
                return Err(DecodeError::UnexpectedEnd);
            }
            let byte = self.encoded[index];
            let sextet =
                decode_sextet(byte).ok_or(DecodeError::InvalidCharacter(byte as char))?;
            let available = (BITS_PER_CHAR - self.bit_position % BITS_PER_CHAR) as u32;
            let take = available.min(remaining);
            let chunk = u64::from(sextet >> (available - take)) & low_mask(take);
            value = (value << take) | chunk;
            self.bit_position += take as usize;
            remaining -= take;
        }
        Ok(value as u32)
    }

    /// Consume one flag bit.
    #[inline(always)]
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read(1)? != 0)
    }

    /// Bits consumed so far.
    #[inline(always)]
    pub fn bit_position(&self) -> usize {
        self.bit_position
    }
}
