//! # tryon
//!
//! Virtual try-on inference pipeline: given a photo of a person and a photo
//! of a garment, produce a composite image of the person wearing the garment.
//!
//! The model is an opaque pretrained ONNX artifact loaded once at startup.
//! The codec owns the fixed 256x192 working resolution, and the request
//! adapter converts every processing failure into a plain-text report for
//! whatever shell drives the pipeline.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tryon::{process_images, Config, TryOnEngine, TryOnOutcome};
//!
//! # fn main() -> tryon::Result<()> {
//! let config = Config::default();
//! let mut engine = TryOnEngine::from_config(&config)?;
//!
//! let outcome = process_images(
//!     &mut engine,
//!     Some(Path::new("person.jpg")),
//!     Some(Path::new("garment.jpg")),
//! );
//!
//! match outcome {
//!     TryOnOutcome::Image(img) => tryon::image::save_image(&img, "result.png", 95)?,
//!     TryOnOutcome::Message(msg) => println!("{msg}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod engine;
pub mod error;
pub mod image;
pub mod model;

pub use adapter::{process_images, TryOnOutcome, MISSING_INPUT_MESSAGE};
pub use engine::{Config, TryOnEngine};
pub use error::{Error, Result};
