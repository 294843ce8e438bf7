//! Errors raised while rendering or writing output.

use thiserror::Error;

/// Errors that can occur during a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Sink received more than the {expected} pixels declared in its header")]
    PixelOverflow { expected: u64 },
}

pub type RenderResult<T> = Result<T, RenderError>;
