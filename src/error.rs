//! Errors

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by path building, pixmap creation and image I/O
#[derive(Error, Debug)]
pub enum Error {
    /// A segment or close was requested while no subpath was open
    ///
    /// Every subpath must start with a `move_to`; a closed subpath
    ///   needs a new `move_to` before further segments.
    #[error("{verb} requires an open subpath; call move_to first")]
    NoOpenSubpath { verb: &'static str },

    /// Pixmap dimensions are zero or too large to allocate
    #[error("invalid pixmap dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Rectangle bounds are inverted, empty or not finite
    #[error("invalid rectangle ({left}, {top}) - ({right}, {bottom})")]
    InvalidRect { left: f64, top: f64, right: f64, bottom: f64 },

    /// File could not be created, written or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or decoding failed
    #[error("image error: {0}")]
    Image(image::ImageError),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Image(other),
        }
    }
}
