//! Image decoding, the image/tensor codec, and image saving.

mod load;
mod save;

pub use load::{load_rgb, to_tensor};
pub use save::{save_image, to_image};

use ndarray::Array4;

/// Image tensor in NCHW format (batch, channels, height, width).
/// Values are scaled to the [0, 1] range the model expects.
pub type ImageTensor = Array4<f32>;

/// Height of the model's fixed working resolution.
pub const MODEL_HEIGHT: u32 = 256;

/// Width of the model's fixed working resolution.
pub const MODEL_WIDTH: u32 = 192;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;
