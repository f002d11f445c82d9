use log::debug;
use nalgebra::Point2;
use serde::Serialize;

use stone_wrangler_core::{FieldCalibration, FrameError, Mask, RgbFrameView};

use crate::binning::{bin_lines, consensus_lines};
use crate::hough::detect_lines;
use crate::localize::line_center;
use crate::params::StoneWranglerParams;
use crate::segment::segment_stones;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Estimated center of one detected stone edge, in bird's-eye pixels and in
/// world coordinates. Produced fresh per frame.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StonePosition {
    pub pixel: Point2<f32>,
    pub world: Point2<f32>,
}

/// The full pipeline: rectify, segment, detect lines, bin, localize.
pub struct StoneWrangler {
    calibration: FieldCalibration,
    params: StoneWranglerParams,
}

impl StoneWrangler {
    pub fn new(calibration: FieldCalibration, params: StoneWranglerParams) -> Self {
        Self {
            calibration,
            params,
        }
    }

    #[inline]
    pub fn calibration(&self) -> &FieldCalibration {
        &self.calibration
    }

    #[inline]
    pub fn params(&self) -> &StoneWranglerParams {
        &self.params
    }

    /// Process one camera frame into world-space stone positions.
    ///
    /// Empty outcomes at any stage (no lines, no bins, no lit pixels) yield
    /// an empty result set; only a malformed frame is an error.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn analyze(&self, frame: &RgbFrameView<'_>) -> Result<Vec<StonePosition>, FrameError> {
        let bev = self.calibration.rectify(frame)?;
        let mask = segment_stones(&bev.view(), &self.params.segmentation);
        Ok(self.analyze_mask(&mask))
    }

    /// Detection, binning and localization over an already-segmented mask.
    ///
    /// Exposed for parameter tuning and synthetic-mask tests.
    pub fn analyze_mask(&self, mask: &Mask) -> Vec<StonePosition> {
        let raw = detect_lines(mask, &self.params.hough);
        let bins = bin_lines(&raw, &self.params.binning);
        let consensus = consensus_lines(&bins);
        debug!(
            "{} raw lines -> {} bins -> {} consensus",
            raw.len(),
            bins.len(),
            consensus.len()
        );

        let scale = self.calibration.scale();
        let mut positions = Vec::with_capacity(consensus.len());
        for line in consensus {
            let Some((cx, cy)) = line_center(mask, line) else {
                continue;
            };
            let pixel = Point2::new(cx as f32, cy as f32);
            positions.push(StonePosition {
                pixel,
                world: scale.bev_to_world(pixel),
            });
        }
        positions
    }
}
