use crate::bitmap::FixedBitmap;

/// Build a bitmap from a grid of `#` (set) and `.` (clear). Leading
/// whitespace and blank lines are ignored so grids can be indented in tests.
pub fn bitmap_from_ascii(grid: &str) -> FixedBitmap {
    let rows: Vec<&str> = grid
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let h = rows.len();
    assert!(h > 0, "grid must have at least one non-empty row");
    let w = rows[0].len();
    for r in &rows {
        assert_eq!(r.len(), w, "all rows must have equal length");
    }

    let mut bm = FixedBitmap::new(w, h).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let v = match ch {
                '#' => true,
                '.' => false,
                _ => panic!("invalid grid char '{ch}', expected '#' or '.'"),
            };
            bm.put_px(x, y, v);
        }
    }
    bm
}

/// Inverse of [`bitmap_from_ascii`]; every row ends with a newline.
pub fn bitmap_to_ascii(bm: &FixedBitmap) -> String {
    let mut out = String::with_capacity((bm.width() + 1) * bm.height());
    for y in 0..bm.height() {
        for x in 0..bm.width() {
            out.push(if bm.px(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
