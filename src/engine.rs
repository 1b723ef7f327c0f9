//! The inference engine: model lifecycle plus the try-on operation.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{Error, Result};
use crate::image::{load_rgb, to_image, to_tensor, RGB_CHANNELS};
use crate::model::{OnnxTryOnModel, TryOnModel};

/// Startup configuration for the try-on engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the pretrained try-on model artifact.
    pub model_path: PathBuf,

    /// Output JPEG quality (1-100).
    pub output_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/tryon.onnx"),
            output_quality: 95,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidParameter {
                name: "output_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

/// The inference engine.
///
/// Holds exactly one field, the loaded model, set once at construction and
/// read-only for the rest of the process lifetime. Chains the codec and the
/// model into the single try-on operation.
pub struct TryOnEngine<M> {
    model: M,
}

impl TryOnEngine<OnnxTryOnModel> {
    /// Construct the production engine from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the model artifact cannot be
    /// loaded. On failure no engine exists and the surrounding process must
    /// not offer the try-on capability.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        tracing::info!("Initializing engine with config: {config:?}");

        let model = OnnxTryOnModel::load(&config.model_path)?;

        Ok(Self::new(model))
    }
}

impl<M: TryOnModel> TryOnEngine<M> {
    /// Wrap an already-loaded model capability.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Produce a composite image of the person wearing the garment.
    ///
    /// Decodes both images, encodes them to the model's fixed input shape,
    /// runs one inference pass, and decodes the result. Any failure ends the
    /// call; there are no retries and no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageDecode`] naming whichever path could not be
    /// decoded, [`Error::Inference`] if the model invocation fails, or
    /// [`Error::ShapeMismatch`] if the model output is not a single-batch
    /// RGB tensor.
    pub fn try_on<P, Q>(&mut self, person_path: P, garment_path: Q) -> Result<RgbImage>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let person_path = person_path.as_ref();
        let garment_path = garment_path.as_ref();

        tracing::info!(
            "Running try-on: person={} garment={}",
            person_path.display(),
            garment_path.display()
        );

        let person = load_rgb(person_path)?;
        let garment = load_rgb(garment_path)?;

        let person_tensor = to_tensor(&person);
        let garment_tensor = to_tensor(&garment);

        let result_tensor = self.model.infer(&person_tensor, &garment_tensor)?;

        let shape = result_tensor.shape();
        if shape[0] != 1 || shape[1] != RGB_CHANNELS {
            return Err(Error::ShapeMismatch {
                expected: "(1, 3, H, W) composite tensor".to_string(),
                actual: format!("{shape:?}"),
            });
        }

        tracing::debug!("Composite tensor shape: {shape:?}");

        Ok(to_image(&result_tensor))
    }
}
