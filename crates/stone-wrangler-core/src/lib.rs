//! Core types and utilities for the stone-wrangler field vision pipeline.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any camera SDK, image codec, or robot-control runtime.

mod calibration;
mod homography;
mod image;
mod logger;
mod median;

pub use calibration::{CalibrationError, FieldCalibration, WorldScale};
pub use homography::{homography_from_4pt, warp_perspective_rgb, Homography};
pub use image::{sample_bilinear, sample_bilinear_u8, FrameError, Mask, RgbFrame, RgbFrameView};
pub use logger::init_with_level;
pub use median::median;
