use crate::error::{BitmapError, ConstructionError, Result};
use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed-size 1-bit-per-pixel bitmap.
///
/// Pixel `(x, y)` lives at linear index `i = y * w + x`, stored in
/// `arr[i / 8]` at bit `i % 8` (bit 0 is the least significant).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FixedBitmapRaw")]
pub struct FixedBitmap {
    pub(crate) w: usize,
    pub(crate) h: usize,
    pub(crate) silence: bool,
    pub(crate) arr: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize)]
struct FixedBitmapRaw {
    w: usize,
    h: usize,
    #[serde(default)]
    silence: bool,
    arr: Vec<u8>,
}

impl TryFrom<FixedBitmapRaw> for FixedBitmap {
    type Error = ConstructionError;

    fn try_from(raw: FixedBitmapRaw) -> std::result::Result<Self, Self::Error> {
        check_dims(raw.w, raw.h)?;
        let expected = n_bytes(raw.w, raw.h);
        if raw.arr.len() != expected {
            return Err(ConstructionError::BufferLength {
                width: raw.w,
                height: raw.h,
                expected,
                actual: raw.arr.len(),
            });
        }
        let mut out = Self {
            w: raw.w,
            h: raw.h,
            silence: raw.silence,
            arr: raw.arr,
        };
        out.mask_padding();
        Ok(out)
    }
}

#[inline]
pub(crate) fn n_bytes(w: usize, h: usize) -> usize {
    (w * h).div_ceil(8)
}

/// Every bitmap has at least one pixel and its pixel count fits in `i64`, so
/// `w * h` never overflows and any coordinate converts to `i64` losslessly.
fn check_dims(w: usize, h: usize) -> std::result::Result<(), ConstructionError> {
    if w == 0 || h == 0 {
        return Err(ConstructionError::ZeroDimension {
            width: w,
            height: h,
        });
    }
    let n = w.checked_mul(h).and_then(|n| i64::try_from(n).ok());
    if n.is_none() {
        return Err(ConstructionError::TooLarge {
            width: w as u128,
            height: h as u128,
        });
    }
    Ok(())
}

// Constructors
// -----------------------------------------------------------------------------
impl FixedBitmap {
    pub(crate) fn blank(w: usize, h: usize, fill: bool, silence: bool) -> Result<Self> {
        check_dims(w, h)?;
        let byte = if fill { 0xFF } else { 0x00 };
        let mut out = Self {
            w,
            h,
            silence,
            arr: vec![byte; n_bytes(w, h)],
        };
        out.mask_padding();
        Ok(out)
    }

    /// An all-clear `w` x `h` bitmap.
    pub fn new(w: usize, h: usize) -> Result<Self> {
        Self::blank(w, h, false, false)
    }

    /// An all-set `w` x `h` bitmap.
    pub fn filled(w: usize, h: usize) -> Result<Self> {
        Self::blank(w, h, true, false)
    }

    pub fn builder<'a>() -> FixedBitmapBuilder<'a> {
        FixedBitmapBuilder::default()
    }

    /// A clear `w` x `h` bitmap with every listed coordinate set.
    pub fn from_pixels<I>(w: usize, h: usize, pixels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::builder().size(w, h).pixels(pixels).build()
    }

    pub fn from_int(w: usize, h: usize, value: impl Into<BigUint>) -> Result<Self> {
        Self::builder().size(w, h).int(value).build()
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::builder().text(text).build()
    }
}

// Builder
// -----------------------------------------------------------------------------
#[derive(Debug, Clone)]
enum Source<'a> {
    Copy(&'a FixedBitmap),
    Text(&'a str),
    Pixels(Vec<(i64, i64)>),
    Int(BigUint),
}

impl Source<'_> {
    fn name(&self) -> &'static str {
        match self {
            Source::Copy(_) => "a bitmap copy",
            Source::Text(_) => "text",
            Source::Pixels(_) => "pixel coordinates",
            Source::Int(_) => "an integer",
        }
    }
}

/// Collects the size, fill and data source for a new [`FixedBitmap`].
///
/// At most one data source can be given. Copies and text carry their own
/// size, so combining them with `size`/`width`/`height` is an error; pixel
/// lists and integers need an explicit size.
#[derive(Debug, Clone, Default)]
pub struct FixedBitmapBuilder<'a> {
    width: Option<usize>,
    height: Option<usize>,
    default_value: bool,
    silence: Option<bool>,
    source: Option<Source<'a>>,
    conflict: Option<(&'static str, &'static str)>,
}

impl<'a> FixedBitmapBuilder<'a> {
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }

    pub fn size(self, w: usize, h: usize) -> Self {
        self.width(w).height(h)
    }

    /// The value every pixel starts as. Listed pixels get the opposite value.
    pub fn default_value(mut self, v: bool) -> Self {
        self.default_value = v;
        self
    }

    pub fn silence(mut self, silence: bool) -> Self {
        self.silence = Some(silence);
        self
    }

    pub fn copy_of(self, src: &'a FixedBitmap) -> Self {
        self.with_source(Source::Copy(src))
    }

    pub fn text(self, text: &'a str) -> Self {
        self.with_source(Source::Text(text))
    }

    pub fn pixels<I>(self, pixels: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        self.with_source(Source::Pixels(pixels.into_iter().collect()))
    }

    pub fn int(self, value: impl Into<BigUint>) -> Self {
        self.with_source(Source::Int(value.into()))
    }

    fn with_source(mut self, source: Source<'a>) -> Self {
        match &self.source {
            None => self.source = Some(source),
            Some(prev) => {
                if self.conflict.is_none() {
                    self.conflict = Some((prev.name(), source.name()));
                }
            }
        }
        self
    }

    fn dims(&self, what: &'static str) -> std::result::Result<(usize, usize), ConstructionError> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(ConstructionError::MissingDimensions(what)),
        }
    }

    pub fn build(self) -> Result<FixedBitmap> {
        if let Some((first, second)) = self.conflict {
            return Err(ConstructionError::ConflictingSources { first, second }.into());
        }

        let silence = self.silence.unwrap_or(false);
        let Some(source) = self.source.as_ref() else {
            let (w, h) = self.dims("a blank fill")?;
            log::debug!("building blank {w}x{h} bitmap (fill={})", self.default_value);
            return FixedBitmap::blank(w, h, self.default_value, silence);
        };

        match source {
            Source::Copy(src) => {
                if self.width.is_some() || self.height.is_some() {
                    return Err(ConstructionError::DimensionsWithCopy.into());
                }
                let mut out = FixedBitmap::clone(src);
                if let Some(silence) = self.silence {
                    out.silence = silence;
                }
                Ok(out)
            }
            Source::Text(text) => {
                if self.width.is_some() || self.height.is_some() {
                    return Err(ConstructionError::ConflictingSources {
                        first: "explicit dimensions",
                        second: "text",
                    }
                    .into());
                }
                super::text::parse_text(text, self.default_value, silence)
            }
            Source::Pixels(pixels) => {
                let (w, h) = self.dims(source.name())?;
                log::debug!("building {w}x{h} bitmap from {} pixel(s)", pixels.len());
                let mut out = FixedBitmap::blank(w, h, self.default_value, silence)?;
                for &(x, y) in pixels {
                    out.set(x, y, !self.default_value)?;
                }
                Ok(out)
            }
            Source::Int(value) => {
                let (w, h) = self.dims(source.name())?;
                let mut out = FixedBitmap::blank(w, h, false, silence)?;
                out.load_int(value)?;
                Ok(out)
            }
        }
    }
}

// Pixel access
// -----------------------------------------------------------------------------
impl FixedBitmap {
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Number of pixels, `width * height`.
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    /// Always false: a bitmap has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The packed bit buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.arr
    }

    pub fn is_silent(&self) -> bool {
        self.silence
    }

    /// When silent, out-of-bounds writes are dropped instead of failing.
    /// Reads are always checked.
    pub fn set_silence(&mut self, silence: bool) {
        self.silence = silence;
    }

    pub fn with_silence(mut self, silence: bool) -> Self {
        self.silence = silence;
        self
    }

    #[inline]
    fn linear_i(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.w || y >= self.h {
            return None;
        }
        Some(y * self.w + x)
    }

    fn oob(&self, x: i64, y: i64) -> BitmapError {
        BitmapError::OutOfBounds {
            x,
            y,
            width: self.w,
            height: self.h,
        }
    }

    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> bool {
        (self.arr[i >> 3] >> (i & 7)) & 1 == 1
    }

    #[inline(always)]
    pub(crate) fn put_bit(&mut self, i: usize, v: bool) {
        let mask = 1u8 << (i & 7);
        if v {
            self.arr[i >> 3] |= mask;
        } else {
            self.arr[i >> 3] &= !mask;
        }
    }

    /// Unchecked-by-contract read; callers guarantee `x < w && y < h`.
    #[inline(always)]
    pub(crate) fn px(&self, x: usize, y: usize) -> bool {
        self.bit(y * self.w + x)
    }

    #[inline(always)]
    pub(crate) fn put_px(&mut self, x: usize, y: usize, v: bool) {
        self.put_bit(y * self.w + x, v)
    }

    pub fn get(&self, x: i64, y: i64) -> Result<bool> {
        match self.linear_i(x, y) {
            Some(i) => Ok(self.bit(i)),
            None => Err(self.oob(x, y)),
        }
    }

    /// Outcome of a write that missed the frame: dropped when silent.
    fn missed_write(&self, x: i64, y: i64) -> Result<()> {
        if self.silence {
            log::trace!("silenced out-of-bounds write at ({x}, {y})");
            Ok(())
        } else {
            Err(self.oob(x, y))
        }
    }

    pub fn set(&mut self, x: i64, y: i64, v: bool) -> Result<()> {
        match self.linear_i(x, y) {
            Some(i) => {
                self.put_bit(i, v);
                Ok(())
            }
            None => self.missed_write(x, y),
        }
    }

    /// Flip a single pixel. Bounds follow the rules of [`FixedBitmap::set`].
    pub fn toggle(&mut self, x: i64, y: i64) -> Result<()> {
        match self.linear_i(x, y) {
            Some(i) => {
                let v = self.bit(i);
                self.put_bit(i, !v);
                Ok(())
            }
            None => self.missed_write(x, y),
        }
    }

    pub fn count_ones(&self) -> usize {
        self.arr.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Coordinates of every set pixel in row-major order.
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.w;
        (0..self.len())
            .filter(move |&i| self.bit(i))
            .map(move |i| (i % w, i / w))
    }
}

// Bulk operations
// -----------------------------------------------------------------------------
impl FixedBitmap {
    /// Zero the unused high bits of the last byte.
    pub(crate) fn mask_padding(&mut self) {
        let rem = self.len() % 8;
        if rem != 0 {
            if let Some(last) = self.arr.last_mut() {
                *last &= (1u8 << rem) - 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.arr.fill(0x00);
    }

    pub fn fill(&mut self) {
        self.arr.fill(0xFF);
        self.mask_padding();
    }

    pub fn invert(&mut self) {
        for b in &mut self.arr {
            *b = !*b;
        }
        self.mask_padding();
    }

    /// Set each pixel independently with probability `weight`.
    pub fn randomize(&mut self, weight: f64) -> Result<()> {
        self.randomize_with(&mut rand::thread_rng(), weight)
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, weight: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(BitmapError::InvalidWeight(weight));
        }
        if weight == 0.5 {
            // Each bit of a uniform byte is an independent fair coin.
            rng.fill_bytes(&mut self.arr);
        } else {
            for i in 0..self.len() {
                let v = rng.gen_bool(weight);
                self.put_bit(i, v);
            }
        }
        self.mask_padding();
        Ok(())
    }

    /// Set every pixel to `f(x, y)`.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for y in 0..self.h {
            for x in 0..self.w {
                let v = f(x, y);
                self.put_px(x, y, v);
            }
        }
    }
}

impl PartialEq for FixedBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.w == other.w && self.h == other.h && self.arr == other.arr
    }
}

impl Eq for FixedBitmap {}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn can_new_fixed_bitmap() {
        let bm = FixedBitmap::new(3, 2).unwrap();
        assert_eq!(bm.width(), 3);
        assert_eq!(bm.height(), 2);
        assert_eq!(bm.as_bytes().len(), 1);
        assert_eq!(bm.count_ones(), 0);
        assert!(!bm.is_silent());
    }

    #[test]
    fn byte_count_rounds_up() {
        assert_eq!(FixedBitmap::new(8, 1).unwrap().as_bytes().len(), 1);
        assert_eq!(FixedBitmap::new(9, 1).unwrap().as_bytes().len(), 2);
        assert_eq!(FixedBitmap::new(5, 5).unwrap().as_bytes().len(), 4);
    }

    #[test]
    fn zero_dimension_is_construction_error() {
        let err = FixedBitmap::new(0, 4).unwrap_err();
        assert!(err.is_construction());
        let err = FixedBitmap::filled(4, 0).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Construction(ConstructionError::ZeroDimension { width: 4, height: 0 })
        ));
    }

    #[test]
    fn oversized_dimensions_are_construction_errors() {
        let err = FixedBitmap::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Construction(ConstructionError::TooLarge { height: 2, .. })
        ));
        assert!(FixedBitmap::filled(usize::MAX / 2 + 1, 2).unwrap_err().is_construction());
        assert!(FixedBitmap::builder().size(usize::MAX, usize::MAX).build().is_err());

        let huge = format!(r#"{{"w": {}, "h": 2, "arr": []}}"#, usize::MAX);
        assert!(serde_json::from_str::<FixedBitmap>(&huge).is_err());
    }

    #[test]
    fn filled_keeps_padding_clear() {
        let bm = FixedBitmap::filled(3, 3).unwrap();
        assert_eq!(bm.count_ones(), 9);
        assert_eq!(bm.as_bytes(), &[0xFF, 0x01]);
    }

    #[test]
    fn bit_layout_is_lsb_first() {
        let mut bm = FixedBitmap::new(4, 3).unwrap();
        bm.set(1, 0, true).unwrap(); // i = 1
        bm.set(0, 2, true).unwrap(); // i = 8
        bm.set(3, 2, true).unwrap(); // i = 11
        assert_eq!(bm.as_bytes(), &[0b0000_0010, 0b0000_1001]);
    }

    #[test]
    fn read_after_write() {
        let mut bm = FixedBitmap::new(7, 5).unwrap();
        for y in 0..5 {
            for x in 0..7 {
                let v = (x * 3 + y) % 2 == 0;
                bm.set(x, y, v).unwrap();
                assert_eq!(bm.get(x, y).unwrap(), v);
            }
        }
        bm.set(2, 2, false).unwrap();
        assert!(!bm.get(2, 2).unwrap());
    }

    #[test]
    fn out_of_bounds_get_fails_even_when_silent() {
        let mut bm = FixedBitmap::new(4, 4).unwrap();
        assert!(bm.get(4, 0).unwrap_err().is_out_of_bounds());
        assert!(bm.get(0, -1).unwrap_err().is_out_of_bounds());
        bm.set_silence(true);
        assert!(bm.get(-1, 0).unwrap_err().is_out_of_bounds());
        assert!(bm.get(0, 4).unwrap_err().is_out_of_bounds());
    }

    #[test_log::test]
    fn out_of_bounds_set_fails_unless_silent() {
        let mut bm = FixedBitmap::new(4, 4).unwrap();
        assert!(bm.set(4, 0, true).unwrap_err().is_out_of_bounds());
        assert!(bm.set(-1, 2, true).unwrap_err().is_out_of_bounds());
        assert!(bm.toggle(0, 9).unwrap_err().is_out_of_bounds());

        bm.set_silence(true);
        bm.set(4, 0, true).unwrap();
        bm.set(-1, 2, true).unwrap();
        bm.toggle(0, 9).unwrap();
        assert_eq!(bm.count_ones(), 0);
    }

    #[test]
    fn silent_toggle_off_frame_is_noop() {
        let mut bm = FixedBitmap::filled(2, 2).unwrap().with_silence(true);
        bm.toggle(2, 0).unwrap();
        bm.toggle(-1, -1).unwrap();
        assert_eq!(bm, FixedBitmap::filled(2, 2).unwrap());

        bm.set_silence(false);
        let err = bm.toggle(0, 2).unwrap_err();
        assert!(matches!(err, BitmapError::OutOfBounds { x: 0, y: 2, .. }));
    }

    #[test]
    fn toggle_flips_one_pixel() {
        let mut bm = FixedBitmap::new(3, 3).unwrap();
        bm.toggle(1, 1).unwrap();
        assert!(bm.get(1, 1).unwrap());
        assert_eq!(bm.count_ones(), 1);
        bm.toggle(1, 1).unwrap();
        assert_eq!(bm.count_ones(), 0);
    }

    #[test]
    fn clear_fill_invert() {
        let mut bm = FixedBitmap::new(5, 3).unwrap();
        bm.fill();
        assert_eq!(bm.count_ones(), 15);
        bm.clear();
        assert_eq!(bm.count_ones(), 0);

        bm.set(2, 1, true).unwrap();
        let orig = bm.clone();
        bm.invert();
        assert_eq!(bm.count_ones(), 14);
        assert!(!bm.get(2, 1).unwrap());
        bm.invert();
        assert_eq!(bm, orig);
    }

    #[test]
    fn randomize_extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bm = FixedBitmap::new(13, 7).unwrap();
        bm.randomize_with(&mut rng, 1.0).unwrap();
        assert_eq!(bm.count_ones(), 13 * 7);
        bm.randomize_with(&mut rng, 0.0).unwrap();
        assert_eq!(bm.count_ones(), 0);
    }

    #[test]
    fn randomize_roughly_tracks_weight() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut bm = FixedBitmap::new(100, 100).unwrap();

        bm.randomize_with(&mut rng, 0.5).unwrap();
        let n = bm.count_ones();
        assert!((4000..6000).contains(&n), "got {n}");

        bm.randomize_with(&mut rng, 0.1).unwrap();
        let n = bm.count_ones();
        assert!((500..1500).contains(&n), "got {n}");
    }

    #[test]
    fn randomize_keeps_padding_clear() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bm = FixedBitmap::new(3, 1).unwrap();
        for _ in 0..16 {
            bm.randomize_with(&mut rng, 0.5).unwrap();
            assert_eq!(bm.as_bytes()[0] & !0b111, 0);
        }
    }

    #[test]
    fn randomize_rejects_bad_weight() {
        let mut bm = FixedBitmap::new(2, 2).unwrap();
        assert!(matches!(bm.randomize(1.5), Err(BitmapError::InvalidWeight(_))));
        assert!(matches!(bm.randomize(-0.1), Err(BitmapError::InvalidWeight(_))));
        assert!(matches!(bm.randomize(f64::NAN), Err(BitmapError::InvalidWeight(_))));
    }

    #[test]
    fn apply_sets_every_pixel_from_callback() {
        let mut bm = FixedBitmap::filled(4, 4).unwrap();
        bm.apply(|x, y| x == y);
        assert_eq!(bm.count_ones(), 4);
        for i in 0..4 {
            assert!(bm.get(i, i).unwrap());
        }
        assert!(!bm.get(1, 0).unwrap());
    }

    #[test]
    fn set_pixels_lists_row_major() {
        let bm = FixedBitmap::from_pixels(3, 3, [(2, 0), (0, 1), (1, 2)]).unwrap();
        let got: Vec<_> = bm.set_pixels().collect();
        assert_eq!(got, vec![(2, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn builder_default_value_inverts_listed_pixels() {
        let bm = FixedBitmap::builder()
            .size(3, 2)
            .default_value(true)
            .pixels([(0, 0), (2, 1)])
            .build()
            .unwrap();
        assert_eq!(bm.count_ones(), 4);
        assert!(!bm.get(0, 0).unwrap());
        assert!(!bm.get(2, 1).unwrap());
        assert!(bm.get(1, 0).unwrap());
    }

    #[test]
    fn builder_pixels_respect_silence() {
        let err = FixedBitmap::from_pixels(2, 2, [(5, 5)]).unwrap_err();
        assert!(err.is_out_of_bounds());

        let bm = FixedBitmap::builder()
            .size(2, 2)
            .silence(true)
            .pixels([(5, 5), (1, 1)])
            .build()
            .unwrap();
        assert!(bm.is_silent());
        assert_eq!(bm.count_ones(), 1);
    }

    #[test]
    fn builder_copy_is_deep() {
        let mut src = FixedBitmap::new(4, 4).unwrap();
        src.set(1, 2, true).unwrap();
        let mut copy = FixedBitmap::builder().copy_of(&src).build().unwrap();
        assert_eq!(copy, src);

        copy.set(0, 0, true).unwrap();
        assert!(!src.get(0, 0).unwrap());
        assert_ne!(copy, src);
    }

    #[test]
    fn builder_copy_with_dimensions_is_error() {
        let src = FixedBitmap::new(4, 4).unwrap();
        let err = FixedBitmap::builder().copy_of(&src).width(4).build().unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Construction(ConstructionError::DimensionsWithCopy)
        ));
    }

    #[test]
    fn builder_rejects_two_sources() {
        let src = FixedBitmap::new(2, 2).unwrap();
        let err = FixedBitmap::builder()
            .copy_of(&src)
            .text("█")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Construction(ConstructionError::ConflictingSources { .. })
        ));
    }

    #[test]
    fn builder_needs_dimensions_for_int_and_pixels() {
        let err = FixedBitmap::builder().int(5u32).build().unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Construction(ConstructionError::MissingDimensions(_))
        ));
        let err = FixedBitmap::builder().width(3).pixels([(0, 0)]).build().unwrap_err();
        assert!(err.is_construction());
        assert!(FixedBitmap::builder().build().unwrap_err().is_construction());
    }

    #[test]
    fn serde_round_trip_and_validation() {
        let mut bm = FixedBitmap::new(5, 3).unwrap();
        bm.set(4, 2, true).unwrap();
        let json = serde_json::to_string(&bm).unwrap();
        let back: FixedBitmap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bm);

        let short = r#"{"w": 5, "h": 3, "arr": [0]}"#;
        assert!(serde_json::from_str::<FixedBitmap>(short).is_err());
        let zero = r#"{"w": 0, "h": 3, "arr": []}"#;
        assert!(serde_json::from_str::<FixedBitmap>(zero).is_err());

        // Stray padding bits are dropped on load.
        let padded = r#"{"w": 3, "h": 1, "arr": [255]}"#;
        let bm: FixedBitmap = serde_json::from_str(padded).unwrap();
        assert_eq!(bm.as_bytes(), &[0b111]);
    }
}
