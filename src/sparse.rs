use crate::bitmap::FixedBitmap;
use crate::error::{BitmapError, ConstructionError, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashSet;
use std::fmt;

/// Inclusive edges of the set pixels of a [`SparseBitmap`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

/// Pixel count of the inclusive range `lo..=hi`, if it fits in `usize`.
fn span(lo: i64, hi: i64) -> Option<usize> {
    hi.checked_sub(lo)
        .and_then(|d| usize::try_from(d).ok())
        .and_then(|d| d.checked_add(1))
}

fn wide_span(lo: i64, hi: i64) -> u128 {
    (i128::from(hi) - i128::from(lo) + 1) as u128
}

impl Bounds {
    /// `None` when the box is wider than `usize` can count.
    pub fn width(&self) -> Option<usize> {
        span(self.left, self.right)
    }

    /// `None` when the box is taller than `usize` can count.
    pub fn height(&self) -> Option<usize> {
        span(self.top, self.bottom)
    }
}

/// An unbounded bitmap that only stores its set pixels. Coordinates may be
/// negative.
///
/// The bounding box is cached and only rescanned after a mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparseBitmap {
    pixels: HashSet<(i64, i64)>,
    #[serde(skip)]
    bounds: Cell<Option<Bounds>>,
}

impl SparseBitmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.pixels.contains(&(x, y))
    }

    pub fn set(&mut self, x: i64, y: i64, v: bool) {
        let changed = if v {
            self.pixels.insert((x, y))
        } else {
            self.pixels.remove(&(x, y))
        };
        if changed {
            self.bounds.set(None);
        }
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        let v = self.get(x, y);
        self.set(x, y, !v);
    }

    /// Number of set pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The set pixel coordinates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.pixels.iter().copied()
    }

    fn scan_bounds(&self) -> Bounds {
        let mut it = self.pixels.iter();
        let Some(&(x, y)) = it.next() else {
            return Bounds::default();
        };
        let mut b = Bounds {
            left: x,
            top: y,
            right: x,
            bottom: y,
        };
        for &(x, y) in it {
            b.left = b.left.min(x);
            b.right = b.right.max(x);
            b.top = b.top.min(y);
            b.bottom = b.bottom.max(y);
        }
        log::trace!("rescanned bounds of {} pixel(s): {b:?}", self.pixels.len());
        b
    }

    /// The tightest box around the set pixels. An empty bitmap reports a 1x1
    /// box at the origin.
    pub fn bounds(&self) -> Bounds {
        if let Some(b) = self.bounds.get() {
            return b;
        }
        let b = self.scan_bounds();
        self.bounds.set(Some(b));
        b
    }

    pub fn left(&self) -> i64 {
        self.bounds().left
    }

    pub fn top(&self) -> i64 {
        self.bounds().top
    }

    pub fn right(&self) -> i64 {
        self.bounds().right
    }

    pub fn bottom(&self) -> i64 {
        self.bounds().bottom
    }

    pub fn width(&self) -> Option<usize> {
        self.bounds().width()
    }

    pub fn height(&self) -> Option<usize> {
        self.bounds().height()
    }

    /// `(width, height)` of the bounding box, `None` if either overflows.
    pub fn size(&self) -> Option<(usize, usize)> {
        let b = self.bounds();
        Some((b.width()?, b.height()?))
    }

    /// Translate every pixel by `(dx, dy)`. Nothing falls off a frame, but a
    /// pixel pushed past the `i64` range is a
    /// [`BitmapError::CoordinateOverflow`] and leaves the bitmap untouched.
    pub fn shift(&mut self, dx: i64, dy: i64) -> Result<()> {
        let moved = self
            .pixels
            .iter()
            .map(|&(x, y)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(nx), Some(ny)) => Ok((nx, ny)),
                _ => Err(BitmapError::CoordinateOverflow { x, y, dx, dy }),
            })
            .collect::<Result<HashSet<_>>>()?;
        self.pixels = moved;
        self.bounds.set(None);
        self.bounds();
        Ok(())
    }

    /// Crop to the bounding box. The bitmap's `(0, 0)` is `(left, top)`.
    pub fn to_fixed(&self) -> Result<FixedBitmap> {
        let b = self.bounds();
        let (Some(w), Some(h)) = (b.width(), b.height()) else {
            return Err(ConstructionError::TooLarge {
                width: wide_span(b.left, b.right),
                height: wide_span(b.top, b.bottom),
            }
            .into());
        };
        let mut out = FixedBitmap::blank(w, h, false, false)?;
        // Both spans fit, so these differences can't overflow.
        for &(x, y) in &self.pixels {
            out.put_px((x - b.left) as usize, (y - b.top) as usize, true);
        }
        Ok(out)
    }

    pub fn to_int(&self) -> Result<BigUint> {
        Ok(self.to_fixed()?.to_int())
    }

    pub fn to_hex(&self) -> Result<String> {
        Ok(self.to_fixed()?.to_hex())
    }

    pub fn to_binary(&self) -> Result<String> {
        Ok(self.to_fixed()?.to_binary())
    }

    #[cfg(feature = "image-io")]
    pub fn to_rgba_image(&self, fg: image::Rgba<u8>, bg: image::Rgba<u8>) -> Result<image::RgbaImage> {
        Ok(self.to_fixed()?.to_rgba_image(fg, bg))
    }
}

impl From<&FixedBitmap> for SparseBitmap {
    /// Every set pixel keeps its coordinates.
    fn from(bm: &FixedBitmap) -> Self {
        let out: SparseBitmap = bm
            .set_pixels()
            .map(|(x, y)| (x as i64, y as i64))
            .collect();
        log::debug!(
            "converted {}x{} bitmap to {} sparse pixel(s)",
            bm.width(),
            bm.height(),
            out.len()
        );
        out
    }
}

impl FixedBitmap {
    pub fn to_sparse(&self) -> SparseBitmap {
        SparseBitmap::from(self)
    }
}

impl FromIterator<(i64, i64)> for SparseBitmap {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let out = SparseBitmap {
            pixels: iter.into_iter().collect(),
            bounds: Cell::new(None),
        };
        out.bounds();
        out
    }
}

impl Extend<(i64, i64)> for SparseBitmap {
    fn extend<I: IntoIterator<Item = (i64, i64)>>(&mut self, iter: I) {
        self.pixels.extend(iter);
        self.bounds.set(None);
    }
}

impl PartialEq for SparseBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl Eq for SparseBitmap {}

impl fmt::Display for SparseBitmap {
    /// Renders through [`SparseBitmap::to_fixed`]. A bitmap too large for that
    /// shows the error in angle brackets instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fixed() {
            Ok(bm) => fmt::Display::fmt(&bm, f),
            Err(e) => write!(f, "<{e}>"),
        }
    }
}

// Tests
// -----------------------------------------------------------------------------
