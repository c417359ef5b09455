use super::core::FixedBitmap;
use crate::error::{ConstructionError, Result};
use num_bigint::BigUint;
use std::iter::FusedIterator;

/// Row-major iterator over a bitmap's pixels, `x` fastest.
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    bm: &'a FixedBitmap,
    i: usize,
}

impl Iterator for Pixels<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.i >= self.bm.len() {
            return None;
        }
        let v = self.bm.bit(self.i);
        self.i += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bm.len() - self.i;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Pixels<'_> {}
impl FusedIterator for Pixels<'_> {}

impl<'a> IntoIterator for &'a FixedBitmap {
    type Item = bool;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Pixels<'a> {
        self.pixels()
    }
}

// Integer codec
// -----------------------------------------------------------------------------
// The grid packs into one unsigned integer: pixel index 0 is bit 0. Because the
// buffer is already little-endian bit order with clear padding, the bytes *are*
// the integer.

impl FixedBitmap {
    /// Every pixel in row-major order. Each call starts over.
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels { bm: self, i: 0 }
    }

    pub fn to_int(&self) -> BigUint {
        BigUint::from_bytes_le(&self.arr)
    }

    /// `0x`-prefixed lowercase hex of [`FixedBitmap::to_int`].
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.to_int())
    }

    /// `0b`-prefixed binary of [`FixedBitmap::to_int`].
    pub fn to_binary(&self) -> String {
        format!("{:#b}", self.to_int())
    }

    /// Inverse of [`FixedBitmap::to_hex`]. The `0x` prefix is optional and
    /// `_` separators are ignored.
    pub fn from_hex(w: usize, h: usize, hex: &str) -> Result<Self> {
        let value = parse_radix(hex, "0x", 16)?;
        Self::from_int(w, h, value)
    }

    /// Inverse of [`FixedBitmap::to_binary`]. The `0b` prefix is optional.
    pub fn from_binary(w: usize, h: usize, bin: &str) -> Result<Self> {
        let value = parse_radix(bin, "0b", 2)?;
        Self::from_int(w, h, value)
    }

    /// Overwrite every pixel from `value`. Missing high bits are clear.
    pub(crate) fn load_int(&mut self, value: &BigUint) -> Result<()> {
        let bits = value.bits();
        if bits > self.len() as u64 {
            return Err(ConstructionError::IntegerTooWide {
                bits,
                width: self.w,
                height: self.h,
                capacity: self.len(),
            }
            .into());
        }
        let bytes = value.to_bytes_le();
        self.clear();
        // `bits <= len` so the value never needs more bytes than the buffer.
        self.arr[..bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }
}

fn parse_radix(input: &str, prefix: &str, radix: u32) -> Result<BigUint> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix(prefix).unwrap_or(trimmed);
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        ConstructionError::InvalidDigits {
            input: input.to_string(),
            radix,
        }
        .into()
    })
}

// Tests
// -----------------------------------------------------------------------------
