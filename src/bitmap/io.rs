use super::core::FixedBitmap;
use crate::error::{ConstructionError, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Image import
// -----------------------------------------------------------------------------
impl FixedBitmap {
    /// Build a bitmap from a decoded black/white image. Black pixels take
    /// `default_value`, white pixels the opposite; alpha is ignored.
    pub fn from_rgba_image(img: &RgbaImage, default_value: bool) -> Result<Self> {
        let w = img.width() as usize;
        let h = img.height() as usize;
        let mut out = FixedBitmap::blank(w, h, default_value, false)?;

        for (x, y, px) in img.enumerate_pixels() {
            let v = match [px.0[0], px.0[1], px.0[2]] {
                [0, 0, 0] => default_value,
                [255, 255, 255] => !default_value,
                _ => return Err(ConstructionError::NonMonochromePixel { x, y }.into()),
            };
            out.put_px(x as usize, y as usize, v);
        }
        Ok(out)
    }

    pub fn load_image<P: AsRef<Path>>(path: P, default_value: bool) -> Result<Self> {
        let img = image::open(path.as_ref())?.into_rgba8();
        log::debug!(
            "loaded {}x{} image from {}",
            img.width(),
            img.height(),
            path.as_ref().display()
        );
        Self::from_rgba_image(&img, default_value)
    }
}

// Image export
// -----------------------------------------------------------------------------
impl FixedBitmap {
    /// Set pixels become `fg`, clear pixels `bg`.
    pub fn to_rgba_image(&self, fg: Rgba<u8>, bg: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            if self.px(x as usize, y as usize) { fg } else { bg }
        })
    }

    /// White-on-black PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgba_image(WHITE, BLACK)
            .save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

// Tests
// -----------------------------------------------------------------------------
