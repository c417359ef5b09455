use super::core::FixedBitmap;

// In-place geometric transforms. All of them keep the w x h frame: pixels
// pushed out of it are lost and vacated cells are cleared.

impl FixedBitmap {
    /// Reverse the column order. The middle column of an odd width stays put.
    pub fn flip_horizontal(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h {
            for x in 0..w / 2 {
                let a = self.px(x, y);
                let b = self.px(w - 1 - x, y);
                self.put_px(x, y, b);
                self.put_px(w - 1 - x, y, a);
            }
        }
    }

    /// Reverse the row order. The middle row of an odd height stays put.
    pub fn flip_vertical(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h / 2 {
            for x in 0..w {
                let a = self.px(x, y);
                let b = self.px(x, h - 1 - y);
                self.put_px(x, y, b);
                self.put_px(x, h - 1 - y, a);
            }
        }
    }

    /// Overwrite the right half with a reflection of the left half.
    pub fn mirror_left_to_right(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h {
            for x in 0..w / 2 {
                let v = self.px(x, y);
                self.put_px(w - 1 - x, y, v);
            }
        }
    }

    /// Overwrite the left half with a reflection of the right half.
    pub fn mirror_right_to_left(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h {
            for x in 0..w / 2 {
                let v = self.px(w - 1 - x, y);
                self.put_px(x, y, v);
            }
        }
    }

    /// Overwrite the bottom half with a reflection of the top half.
    pub fn mirror_top_to_bottom(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h / 2 {
            for x in 0..w {
                let v = self.px(x, y);
                self.put_px(x, h - 1 - y, v);
            }
        }
    }

    /// Overwrite the top half with a reflection of the bottom half.
    pub fn mirror_bottom_to_top(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h / 2 {
            for x in 0..w {
                let v = self.px(x, h - 1 - y);
                self.put_px(x, y, v);
            }
        }
    }

    /// Move every pixel by `(dx, dy)`. Positive values shift right/down.
    ///
    /// Each pass walks from the leading edge inward so a cell is always read
    /// before it gets overwritten.
    pub fn shift(&mut self, dx: i64, dy: i64) {
        let (w, h) = (self.w as i64, self.h as i64);

        if dx != 0 {
            let xs: Vec<i64> = if dx > 0 {
                (0..w).rev().collect()
            } else {
                (0..w).collect()
            };
            for y in 0..h {
                for &x in &xs {
                    let sx = x - dx;
                    let v = (0..w).contains(&sx) && self.px(sx as usize, y as usize);
                    self.put_px(x as usize, y as usize, v);
                }
            }
        }

        if dy != 0 {
            let ys: Vec<i64> = if dy > 0 {
                (0..h).rev().collect()
            } else {
                (0..h).collect()
            };
            for &y in &ys {
                let sy = y - dy;
                for x in 0..w {
                    let v = (0..h).contains(&sy) && self.px(x as usize, sy as usize);
                    self.put_px(x as usize, y as usize, v);
                }
            }
        }
    }
}

// Tests
// -----------------------------------------------------------------------------
