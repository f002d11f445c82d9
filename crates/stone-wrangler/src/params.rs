use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inclusive HSV range in the OpenCV 8-bit convention: hue in [0, 180),
/// saturation and value in [0, 255].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Configuration for the denoise + threshold stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SegmentationParams {
    /// Stone color band.
    pub hsv: HsvRange,
    /// Gaussian blur kernel side length; must be odd.
    pub blur_kernel: usize,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            hsv: HsvRange {
                lower: [16, 177, 25],
                upper: [26, 255, 255],
            },
            blur_kernel: 3,
        }
    }
}

/// Configuration for the polar Hough line detector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoughParams {
    /// Distance resolution of the accumulator, in pixels.
    pub rho_step: f64,
    /// Angle resolution of the accumulator, in radians.
    pub theta_step: f64,
    /// A line is kept iff its votes strictly exceed this count.
    pub vote_threshold: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho_step: 2.0,
            theta_step: PI / 180.0,
            vote_threshold: 10,
        }
    }
}

/// Tolerances for merging near-duplicate line detections.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BinningParams {
    /// Two lines may share a bin only if their angles differ by strictly
    /// less than this, in radians.
    pub close_enough_theta: f64,
    /// ... and their distances by strictly less than this, in pixels.
    pub close_enough_rho: f64,
}

impl Default for BinningParams {
    fn default() -> Self {
        Self {
            close_enough_theta: PI * 15.0 / 180.0,
            close_enough_rho: 40.0,
        }
    }
}

/// Full tunable set for the pipeline.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct StoneWranglerParams {
    #[serde(default)]
    pub segmentation: SegmentationParams,
    #[serde(default)]
    pub hough: HoughParams,
    #[serde(default)]
    pub binning: BinningParams,
}
