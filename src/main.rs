use env_logger::Env;
use tbitmap::error::Result;
use tbitmap::{FixedBitmap, samples};

const LIFE_GENERATIONS: usize = 4;

/// One Conway generation. The board wraps at its edges; the wrap is done here
/// so the bitmap only ever sees in-range coordinates.
fn life_step(board: &FixedBitmap) -> Result<FixedBitmap> {
    let (w, h) = (board.width() as i64, board.height() as i64);
    let mut next = board.clone();
    for y in 0..h {
        for x in 0..w {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) == (0, 0) {
                        continue;
                    }
                    if board.get((x + dx).rem_euclid(w), (y + dy).rem_euclid(h))? {
                        neighbors += 1;
                    }
                }
            }
            let alive = board.get(x, y)?;
            next.set(x, y, matches!((alive, neighbors), (true, 2) | (_, 3)))?;
        }
    }
    Ok(next)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cube = samples::cube()?;
    log::info!("cube {}x{}, {}", cube.width(), cube.height(), cube.to_hex());
    println!("{}", cube.framed());

    let mona_lisa = samples::mona_lisa()?;
    log::info!("mona lisa {}x{}", mona_lisa.width(), mona_lisa.height());
    println!("{}", mona_lisa.framed());

    // Glider in the corner of a small torus.
    let mut board = FixedBitmap::from_pixels(12, 12, [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])?;
    for generation in 0..=LIFE_GENERATIONS {
        log::info!("life generation {generation}, {} alive", board.count_ones());
        println!("{}", board.framed());
        board = life_step(&board)?;
    }
    Ok(())
}

// Tests
// -----------------------------------------------------------------------------
