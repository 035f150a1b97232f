#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "Invalid raster dimensions: {width}x{height}x{channels} does not fit {len} samples"
    )]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
        len: usize,
    },
    #[error("Raster shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },
    #[error("Colour has {actual} channels but the raster has {expected}")]
    ColourDepthMismatch { expected: usize, actual: usize },
    #[error("Colour must have at least one channel")]
    EmptyColour,
    #[error("Extent must be finite and non-negative, got {0}")]
    InvalidExtent(f64),
    #[error("Primitive geometry must be finite")]
    NonFiniteGeometry,
    #[error("Resolution factor must be finite and non-negative, got {0}")]
    InvalidResolutionFactor(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
