//! Boundary between the inference engine and the UI shell.

use std::path::Path;

use image::RgbImage;

use crate::engine::TryOnEngine;
use crate::model::TryOnModel;

/// Message shown when the user has not supplied both images.
pub const MISSING_INPUT_MESSAGE: &str = "Please upload both images.";

/// What the shell renders: a composite image or a plain-text message.
///
/// Exactly one of the two per invocation. User-routine conditions (missing
/// input) and processing failures both surface as `Message`; no failure
/// escapes this boundary.
#[derive(Debug)]
pub enum TryOnOutcome {
    /// A successfully composited image.
    Image(RgbImage),
    /// Text for the shell to display verbatim.
    Message(String),
}

/// Run one try-on request on behalf of the shell.
///
/// With either path absent the engine is not invoked at all and the fixed
/// instructional message comes back. Every engine failure is converted into
/// a one-line report; this function never returns an error.
#[must_use]
pub fn process_images<M: TryOnModel>(
    engine: &mut TryOnEngine<M>,
    person_path: Option<&Path>,
    garment_path: Option<&Path>,
) -> TryOnOutcome {
    let (person, garment) = match (person_path, garment_path) {
        (Some(person), Some(garment)) => (person, garment),
        _ => return TryOnOutcome::Message(MISSING_INPUT_MESSAGE.to_string()),
    };

    match engine.try_on(person, garment) {
        Ok(image) => TryOnOutcome::Image(image),
        Err(err) => {
            tracing::warn!("Try-on request failed: {err}");
            TryOnOutcome::Message(format!("Error during processing: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;

    use ndarray::Array4;

    use super::*;
    use crate::error::Result;
    use crate::image::{ImageTensor, MODEL_HEIGHT, MODEL_WIDTH};

    struct CountingModel {
        calls: Rc<Cell<usize>>,
    }

    impl TryOnModel for CountingModel {
        fn infer(&mut self, _person: &ImageTensor, _garment: &ImageTensor) -> Result<ImageTensor> {
            self.calls.set(self.calls.get() + 1);
            Ok(Array4::from_elem(
                (1, 3, MODEL_HEIGHT as usize, MODEL_WIDTH as usize),
                0.5,
            ))
        }
    }

    #[test]
    fn missing_input_returns_fixed_message_without_invoking_the_model() {
        let calls = Rc::new(Cell::new(0));
        let mut engine = TryOnEngine::new(CountingModel {
            calls: Rc::clone(&calls),
        });

        let person = Some(Path::new("person.png"));
        let garment = Some(Path::new("garment.png"));

        for (p, g) in [(None, garment), (person, None), (None, None)] {
            match process_images(&mut engine, p, g) {
                TryOnOutcome::Message(msg) => assert_eq!(msg, MISSING_INPUT_MESSAGE),
                TryOnOutcome::Image(_) => panic!("expected a message"),
            }
        }

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn undecodable_person_with_valid_garment_reports_processing_error() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let garment = dir.path().join("garment.png");
        image::RgbImage::from_pixel(16, 16, image::Rgb([0, 0, 0]))
            .save(&garment)
            .expect("write fixture image");

        let calls = Rc::new(Cell::new(0));
        let mut engine = TryOnEngine::new(CountingModel {
            calls: Rc::clone(&calls),
        });

        let outcome = process_images(
            &mut engine,
            Some(Path::new("nonexistent/person.png")),
            Some(garment.as_path()),
        );

        match outcome {
            TryOnOutcome::Message(msg) => {
                assert!(msg.starts_with("Error during processing:"));
                assert!(msg.contains("nonexistent/person.png"));
            }
            TryOnOutcome::Image(_) => panic!("expected a message"),
        }

        assert_eq!(calls.get(), 0);
    }
}
