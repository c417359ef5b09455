use thiserror::Error;

/// Bad input to one of the bitmap constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("width and height must be greater than 0, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("a {width}x{height} bitmap is too large to address")]
    TooLarge { width: u128, height: u128 },

    #[error("width and height can't be given when copying another bitmap")]
    DimensionsWithCopy,

    #[error("width and height are required when building from {0}")]
    MissingDimensions(&'static str),

    #[error("only one data source can be given, got {first} and {second}")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },

    #[error("text source can't be a blank string")]
    EmptyText,

    #[error("unrecognized glyph {ch:?} at line {line}, column {column}")]
    UnrecognizedGlyph {
        ch: char,
        line: usize,
        column: usize,
    },

    #[error("integer needs {bits} bits but a {width}x{height} bitmap only holds {capacity}")]
    IntegerTooWide {
        bits: u64,
        width: usize,
        height: usize,
        capacity: usize,
    },

    #[error("{input:?} isn't a valid base-{radix} number")]
    InvalidDigits { input: String, radix: u32 },

    #[error("bit buffer holds {actual} bytes, a {width}x{height} bitmap needs {expected}")]
    BufferLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("pixel ({x}, {y}) is neither black nor white")]
    NonMonochromePixel { x: u32, y: u32 },
}

#[derive(Debug, Error)]
pub enum BitmapError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("x, y coordinates {x}, {y} are out of bounds for this {width}x{height} bitmap")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error(
        "region {region_width}x{region_height} at ({left}, {top}) goes beyond the {width}x{height} bitmap (or enable silence mode)"
    )]
    Range {
        left: i64,
        top: i64,
        region_width: usize,
        region_height: usize,
        width: usize,
        height: usize,
    },

    #[error("shifting pixel ({x}, {y}) by ({dx}, {dy}) leaves the i64 coordinate range")]
    CoordinateOverflow { x: i64, y: i64, dx: i64, dy: i64 },

    #[error("randomize weight must be within 0.0..=1.0, got {0}")]
    InvalidWeight(f64),

    #[cfg(feature = "image-io")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl BitmapError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BitmapError::OutOfBounds { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, BitmapError::Range { .. })
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, BitmapError::Construction(_))
    }
}

pub type Result<T> = std::result::Result<T, BitmapError>;
