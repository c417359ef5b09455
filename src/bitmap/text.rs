use super::core::FixedBitmap;
use crate::error::{BitmapError, ConstructionError, Result};
use std::fmt;
use std::str::FromStr;

// Each text cell shows two vertically stacked pixels.
pub const TOP_BLOCK: char = '\u{2580}';
pub const BOTTOM_BLOCK: char = '\u{2584}';
pub const FULL_BLOCK: char = '\u{2588}';
pub const EMPTY: char = ' ';

// Border characters for `framed()`.
pub const UP_DOWN: char = '\u{2502}';
pub const LEFT_RIGHT: char = '\u{2500}';
pub const DOWN_RIGHT: char = '\u{250C}';
pub const DOWN_LEFT: char = '\u{2510}';
pub const UP_RIGHT: char = '\u{2514}';
pub const UP_LEFT: char = '\u{2518}';

#[inline]
pub fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => FULL_BLOCK,
        (true, false) => TOP_BLOCK,
        (false, true) => BOTTOM_BLOCK,
        (false, false) => EMPTY,
    }
}

/// The `(top, bottom)` pixels a glyph stands for.
#[inline]
pub fn pixels_of(ch: char) -> Option<(bool, bool)> {
    match ch {
        FULL_BLOCK => Some((true, true)),
        TOP_BLOCK => Some((true, false)),
        BOTTOM_BLOCK => Some((false, true)),
        EMPTY => Some((false, false)),
        _ => None,
    }
}

impl FixedBitmap {
    fn write_row_pair(&self, out: &mut String, y: usize) {
        for x in 0..self.w {
            let top = self.px(x, y);
            let bottom = y + 1 < self.h && self.px(x, y + 1);
            out.push(glyph(top, bottom));
        }
    }

    /// The text rendering without the surrounding frame. Same as `to_string()`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.w * self.h.div_ceil(2) * 4);
        for y in (0..self.h).step_by(2) {
            if y > 0 {
                out.push('\n');
            }
            self.write_row_pair(&mut out, y);
        }
        out
    }

    /// The text rendering with a one cell line-drawing border.
    pub fn framed(&self) -> String {
        let edge: String = std::iter::repeat_n(LEFT_RIGHT, self.w).collect();
        let mut out = String::new();

        out.push(DOWN_RIGHT);
        out.push_str(&edge);
        out.push(DOWN_LEFT);
        out.push('\n');

        for y in (0..self.h).step_by(2) {
            out.push(UP_DOWN);
            self.write_row_pair(&mut out, y);
            out.push(UP_DOWN);
            out.push('\n');
        }

        out.push(UP_RIGHT);
        out.push_str(&edge);
        out.push(UP_LEFT);
        out
    }
}

impl fmt::Display for FixedBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parse block-glyph text. Every line is two pixel rows; the width is the
/// longest line. Cells past the end of a short line keep `default_value`.
pub(crate) fn parse_text(text: &str, default_value: bool, silence: bool) -> Result<FixedBitmap> {
    if text.is_empty() {
        return Err(ConstructionError::EmptyText.into());
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let h = lines.len() * 2;
    log::debug!("parsing {w}x{h} bitmap from {} line(s) of text", lines.len());

    let mut out = FixedBitmap::blank(w, h, default_value, silence)?;
    for (line_i, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let (top, bottom) = pixels_of(ch).ok_or(ConstructionError::UnrecognizedGlyph {
                ch,
                line: line_i + 1,
                column: x + 1,
            })?;
            out.put_px(x, line_i * 2, top);
            out.put_px(x, line_i * 2 + 1, bottom);
        }
    }
    Ok(out)
}

impl FromStr for FixedBitmap {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self> {
        parse_text(s, false, false)
    }
}

// Tests
// -----------------------------------------------------------------------------
