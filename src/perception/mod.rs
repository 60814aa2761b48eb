//! Perception adapter: turns a raw frame into structured game state.
//!
//! The expensive parts (the detection model, the text recognizer) live
//! behind traits; this module owns only the assembly and the degradation
//! rules around them.

pub mod ocr;
pub mod types;

pub use types::{BoundingBox, Detection, ObjectClass, PerceptionResult, ResourceSnapshot};

use tracing::debug;

use crate::capture::Frame;
use ocr::{Region, UiRegions};

/// Full perception cycle: frame in, structured result out.
pub trait Perceptor {
    fn extract(&mut self, frame: &Frame) -> PerceptionResult;
}

/// Object-detection model boundary (e.g. a YOLO inference call).
pub trait ObjectDetector {
    fn detect(&mut self, frame: &Frame) -> Vec<Detection>;
}

/// Text-recognition boundary. `None` means the region could not be read;
/// callers treat that exactly like unparseable text.
pub trait TextRecognizer {
    fn read(&mut self, frame: &Frame, region: Region) -> Option<String>;
}

/// Assembles a [`PerceptionResult`] from a detector, a recognizer and the
/// HUD region table. Every read that fails or fails to parse becomes 0.
pub struct ScreenPerceptor {
    detector: Box<dyn ObjectDetector>,
    reader: Box<dyn TextRecognizer>,
    regions: UiRegions,
}

impl ScreenPerceptor {
    pub fn new(detector: Box<dyn ObjectDetector>, reader: Box<dyn TextRecognizer>) -> Self {
        Self::with_regions(detector, reader, UiRegions::default())
    }

    pub fn with_regions(
        detector: Box<dyn ObjectDetector>,
        reader: Box<dyn TextRecognizer>,
        regions: UiRegions,
    ) -> Self {
        Self { detector, reader, regions }
    }

    fn count(&mut self, frame: &Frame, region: Region) -> u32 {
        match self.reader.read(frame, region) {
            Some(text) => ocr::parse_count(&text),
            None => {
                debug!("unreadable HUD region at ({}, {}), using 0", region.x, region.y);
                0
            }
        }
    }

    fn fraction(&mut self, frame: &Frame, region: Region) -> (u32, u32) {
        match self.reader.read(frame, region) {
            Some(text) => ocr::parse_fraction(&text),
            None => (0, 0),
        }
    }
}

impl Perceptor for ScreenPerceptor {
    fn extract(&mut self, frame: &Frame) -> PerceptionResult {
        let detections = self.detector.detect(frame);

        let regions = self.regions.clone();
        let (current_population, max_population) = self.fraction(frame, regions.population);
        let resources = ResourceSnapshot {
            current_population,
            max_population,
            idle_workers: self.count(frame, regions.idle_workers),
            food: self.count(frame, regions.food_count),
            food_workers: self.count(frame, regions.food_workers),
            wood: self.count(frame, regions.wood_count),
            wood_workers: self.count(frame, regions.wood_workers),
            gold: self.count(frame, regions.gold_count),
            gold_workers: self.count(frame, regions.gold_workers),
            stone: self.count(frame, regions.stone_count),
            stone_workers: self.count(frame, regions.stone_workers),
        };

        PerceptionResult { detections, resources }
    }
}

/// Stand-in detector for runs without a model backend: sees nothing.
pub struct StubDetector;

impl ObjectDetector for StubDetector {
    fn detect(&mut self, _frame: &Frame) -> Vec<Detection> {
        Vec::new()
    }
}

/// Stand-in recognizer for runs without an OCR backend: reads nothing.
pub struct StubRecognizer;

impl TextRecognizer for StubRecognizer {
    fn read(&mut self, _frame: &Frame, _region: Region) -> Option<String> {
        None
    }
}
