//! The garment-transfer model capability.

mod onnx;

pub use onnx::OnnxTryOnModel;

use crate::error::Result;
use crate::image::ImageTensor;

/// The transformation capability the engine runs on.
///
/// One inference pass: person and garment tensors in, composite tensor out.
/// The production implementation wraps an ONNX session; tests substitute
/// stubs.
pub trait TryOnModel {
    /// Run one inference pass over a person/garment pair.
    ///
    /// Inputs are NCHW tensors with batch size 1; the output follows the
    /// same convention.
    ///
    /// # Errors
    ///
    /// Returns an error if the model invocation fails or produces an output
    /// the runtime cannot hand back as a 4-D tensor.
    fn infer(&mut self, person: &ImageTensor, garment: &ImageTensor) -> Result<ImageTensor>;
}
