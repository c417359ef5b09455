pub mod core;
#[allow(unused_imports)]
pub use self::core::{FixedBitmap, FixedBitmapBuilder};

pub mod roi;
#[allow(unused_imports)]
pub use roi::ROI;

pub mod codec;
pub use codec::Pixels;

pub mod text;
pub mod transform;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "image-io")]
pub mod io;
