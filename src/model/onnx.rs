//! ONNX-backed implementation of the try-on model.

use std::path::Path;

use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;

use crate::error::{Error, Result};
use crate::image::ImageTensor;

use super::TryOnModel;

/// A loaded try-on model backed by an ONNX Runtime session.
///
/// Loaded once at process startup and never mutated afterwards. The session
/// is built for inference only; no gradient state exists in this runtime.
#[derive(Debug)]
pub struct OnnxTryOnModel {
    session: Session,
}

impl OnnxTryOnModel {
    /// Load the model artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelNotFound`] if nothing exists at `path`, or
    /// [`Error::ModelLoad`] if the runtime cannot parse the artifact. Either
    /// way no model exists afterwards; the caller is expected to refuse
    /// service rather than retry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::ModelNotFound {
                path: path.to_path_buf(),
            });
        }

        let load_err = |source| Error::ModelLoad {
            path: path.to_path_buf(),
            source,
        };

        let session = Session::builder()
            .map_err(load_err)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(load_err)?
            .commit_from_file(path)
            .map_err(load_err)?;

        tracing::info!("Loaded try-on model from {}", path.display());

        Ok(Self { session })
    }
}

impl TryOnModel for OnnxTryOnModel {
    fn infer(&mut self, person: &ImageTensor, garment: &ImageTensor) -> Result<ImageTensor> {
        let person_value =
            Tensor::from_array(person.clone()).map_err(|source| Error::Inference { source })?;
        let garment_value =
            Tensor::from_array(garment.clone()).map_err(|source| Error::Inference { source })?;

        // Inputs are positional: person first, garment second
        let outputs = self
            .session
            .run(ort::inputs![person_value, garment_value])
            .map_err(|source| Error::Inference { source })?;

        let output = outputs
            .values()
            .next()
            .ok_or_else(|| Error::ShapeMismatch {
                expected: "composite output".to_string(),
                actual: "no output".to_string(),
            })?;

        extract_array4(&output)
    }
}

/// Extract a 4D array from an ONNX value.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn extract_array4(value: &ort::value::ValueRef<'_>) -> Result<Array4<f32>> {
    let (shape_info, data) = value
        .try_extract_tensor::<f32>()
        .map_err(|source| Error::Inference { source })?;

    // Safe: tensor dimensions are always non-negative and within bounds
    let dims: Vec<usize> = shape_info.iter().map(|&x| x as usize).collect();

    if dims.len() != 4 {
        return Err(Error::ShapeMismatch {
            expected: "4D tensor".to_string(),
            actual: format!("{}D tensor", dims.len()),
        });
    }

    Array4::from_shape_vec((dims[0], dims[1], dims[2], dims[3]), data.to_vec()).map_err(|_| {
        Error::ShapeMismatch {
            expected: format!("{dims:?}"),
            actual: "reshape failed".to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_reports_the_configured_path() {
        let err = OnnxTryOnModel::load("no/such/model.onnx").unwrap_err();

        assert!(matches!(err, Error::ModelNotFound { .. }));
        assert!(err.to_string().contains("no/such/model.onnx"));
    }
}
