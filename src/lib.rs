// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library.
// Keeping modules here prevents "dead_code" warnings for public APIs that are
// intentionally exported for downstream crates.

pub mod bitmap;
pub mod error;
pub mod samples;
pub mod sparse;

pub use bitmap::{FixedBitmap, ROI};
pub use error::{BitmapError, ConstructionError};
pub use sparse::SparseBitmap;

#[cfg(test)]
pub mod test_helpers;
