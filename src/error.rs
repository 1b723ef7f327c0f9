//! Custom error types for the try-on pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the try-on library.
#[derive(Error, Debug)]
pub enum Error {
    /// Configured model artifact does not exist on disk.
    #[error("model file not found at {path}")]
    ModelNotFound { path: PathBuf },

    /// Failed to load the model artifact.
    #[error("failed to load model from {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    /// One of the supplied paths does not resolve to a decodable image.
    #[error("failed to decode image at {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Model inference failed.
    #[error("model inference failed: {source}")]
    Inference {
        #[source]
        source: ort::Error,
    },

    /// Shape mismatch in tensor operations.
    #[error("tensor shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for try-on operations.
pub type Result<T> = std::result::Result<T, Error>;
