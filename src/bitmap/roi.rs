use super::core::FixedBitmap;
use crate::error::{BitmapError, ConstructionError, Result};

/// A rectangle in pixel coordinates. Left/top may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ROI {
    pub l: i64,
    pub t: i64,
    /// Exclusive right bound.
    pub r: i64,
    /// Exclusive bottom bound.
    pub b: i64,
}

impl ROI {
    /// `None` when the right or bottom edge doesn't fit in an `i64`.
    pub fn from_ltwh(l: i64, t: i64, w: usize, h: usize) -> Option<ROI> {
        let r = i64::try_from(w).ok().and_then(|w| l.checked_add(w))?;
        let b = i64::try_from(h).ok().and_then(|h| t.checked_add(h))?;
        Some(ROI { l, t, r, b })
    }

    /// Width of the ROI.
    pub fn w(&self) -> usize {
        usize::try_from(self.r.saturating_sub(self.l)).unwrap_or(0)
    }

    /// Height of the ROI.
    pub fn h(&self) -> usize {
        usize::try_from(self.b.saturating_sub(self.t)).unwrap_or(0)
    }

    /// True when the ROI starts inside a `w` x `h` frame and doesn't run past
    /// its right or bottom edge.
    pub fn fits_in(&self, w: usize, h: usize) -> bool {
        let (w, h) = (w as i64, h as i64);
        self.l >= 0 && self.t >= 0 && self.l < w && self.t < h && self.r <= w && self.b <= h
    }

    /// The part of this ROI inside a `w` x `h` frame. May be empty.
    pub fn clipped(&self, w: usize, h: usize) -> ROI {
        let l = self.l.clamp(0, w as i64);
        let t = self.t.clamp(0, h as i64);
        let r = self.r.clamp(l, w as i64);
        let b = self.b.clamp(t, h as i64);
        ROI { l, t, r, b }
    }

    pub fn union(&mut self, other: ROI) {
        self.l = self.l.min(other.l);
        self.t = self.t.min(other.t);
        self.r = self.r.max(other.r);
        self.b = self.b.max(other.b);
    }

    fn range_err(&self, w: usize, h: usize) -> BitmapError {
        range_err(self.l, self.t, self.w(), self.h(), w, h)
    }
}

fn range_err(l: i64, t: i64, rw: usize, rh: usize, w: usize, h: usize) -> BitmapError {
    BitmapError::Range {
        left: l,
        top: t,
        region_width: rw,
        region_height: rh,
        width: w,
        height: h,
    }
}

// Copy / paste
// -----------------------------------------------------------------------------
impl FixedBitmap {
    /// Copy the region starting at `(l, t)` into a new bitmap. A `None`
    /// width or height means this bitmap's full width or height.
    ///
    /// Unless silence is on, a region that starts outside the bitmap or runs
    /// past its right/bottom edge is a [`BitmapError::Range`]. With silence on,
    /// the cells of the new bitmap that fall outside this one stay clear.
    pub fn copy(&self, l: i64, t: i64, w: Option<usize>, h: Option<usize>) -> Result<FixedBitmap> {
        let (w, h) = (w.unwrap_or(self.w), h.unwrap_or(self.h));
        let roi = ROI::from_ltwh(l, t, w, h)
            .ok_or_else(|| range_err(l, t, w, h, self.w, self.h))?;
        self.copy_roi(roi)
    }

    pub fn copy_roi(&self, roi: ROI) -> Result<FixedBitmap> {
        if roi.r.checked_sub(roi.l).is_none() || roi.b.checked_sub(roi.t).is_none() {
            return Err(roi.range_err(self.w, self.h));
        }
        if roi.w() == 0 || roi.h() == 0 {
            return Err(ConstructionError::ZeroDimension {
                width: roi.w(),
                height: roi.h(),
            }
            .into());
        }
        if !self.silence && !roi.fits_in(self.w, self.h) {
            return Err(roi.range_err(self.w, self.h));
        }

        let mut out = FixedBitmap::blank(roi.w(), roi.h(), false, self.silence)?;
        let src = roi.clipped(self.w, self.h);
        log::debug!("copying {src:?} of a {}x{} bitmap", self.w, self.h);
        for y in src.t..src.b {
            for x in src.l..src.r {
                let v = self.px(x as usize, y as usize);
                out.put_px((x - roi.l) as usize, (y - roi.t) as usize, v);
            }
        }
        Ok(out)
    }

    /// Write this bitmap's pixels onto `dst` with its top-left corner at
    /// `(l, t)`.
    ///
    /// Bounds are checked against `dst` and its silence setting, the same way
    /// [`FixedBitmap::copy`] checks its own. With silence on, pixels that land
    /// outside `dst` are skipped.
    pub fn paste(&self, dst: &mut FixedBitmap, l: i64, t: i64) -> Result<()> {
        let roi = ROI::from_ltwh(l, t, self.w, self.h)
            .ok_or_else(|| range_err(l, t, self.w, self.h, dst.w, dst.h))?;
        if !dst.silence && !roi.fits_in(dst.w, dst.h) {
            return Err(roi.range_err(dst.w, dst.h));
        }

        let tar = roi.clipped(dst.w, dst.h);
        log::debug!("pasting a {}x{} bitmap into {tar:?}", self.w, self.h);
        for y in tar.t..tar.b {
            for x in tar.l..tar.r {
                let v = self.px((x - l) as usize, (y - t) as usize);
                dst.put_px(x as usize, y as usize, v);
            }
        }
        Ok(())
    }

    /// The tightest ROI around the set pixels, or `None` when all are clear.
    pub fn content_roi(&self) -> Option<ROI> {
        let mut pixels = self.set_pixels();
        let unit = |(x, y): (usize, usize)| {
            let (x, y) = (x as i64, y as i64);
            ROI { l: x, t: y, r: x + 1, b: y + 1 }
        };
        let mut roi = unit(pixels.next()?);
        for p in pixels {
            roi.union(unit(p));
        }
        Some(roi)
    }
}

// Tests
// -----------------------------------------------------------------------------
