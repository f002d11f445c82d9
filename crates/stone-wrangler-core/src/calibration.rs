//! Perspective calibration from field landmarks.
//!
//! Four frame-space pixels and their four world-space counterparts define a
//! homography from the camera frame into a fixed-scale bird's-eye view of
//! the surveyed area. World coordinates put the origin at the center of the
//! area's bottom edge with Y growing away from the camera; bird's-eye pixel
//! row 0 is the far edge, so Y flips between the two.

use crate::{
    homography_from_4pt, warp_perspective_rgb, FrameError, Homography, RgbFrame, RgbFrameView,
};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("expected exactly 4 calibration point pairs, got {got}")]
    InvalidCalibration { got: usize },
    #[error("calibration points are degenerate, no homography exists")]
    Degenerate,
}

/// Scale of the bird's-eye view: world size of one pixel plus the surveyed
/// area's extent in world units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WorldScale {
    /// World size of one bird's-eye pixel (e.g. 0.1 inch).
    pub pixel_size: f32,
    /// Surveyed area dimensions in world units.
    pub area_x: f32,
    pub area_y: f32,
}

impl Default for WorldScale {
    fn default() -> Self {
        Self {
            pixel_size: 0.1,
            area_x: 24.0,
            area_y: 24.0,
        }
    }
}

impl WorldScale {
    pub fn bev_width(&self) -> usize {
        (self.area_x / self.pixel_size).round() as usize
    }

    pub fn bev_height(&self) -> usize {
        (self.area_y / self.pixel_size).round() as usize
    }

    /// World coordinates (origin at bottom-center) to bird's-eye pixels.
    pub fn world_to_bev(&self, p: Point2<f32>) -> Point2<f32> {
        let half_x = 0.5 * self.area_x / self.pixel_size;
        Point2::new(
            p.x / self.pixel_size + half_x,
            self.area_y / self.pixel_size - p.y / self.pixel_size,
        )
    }

    /// Bird's-eye pixels back to world coordinates.
    pub fn bev_to_world(&self, p: Point2<f32>) -> Point2<f32> {
        let half_x = 0.5 * self.area_x / self.pixel_size;
        Point2::new(
            (p.x - half_x) * self.pixel_size,
            (self.area_y / self.pixel_size - p.y) * self.pixel_size,
        )
    }
}

/// Calibrated mapping between camera frame and field, set up once at init.
#[derive(Clone, Debug)]
pub struct FieldCalibration {
    scale: WorldScale,
    bev_from_frame: Homography,
    frame_from_bev: Homography,
}

impl FieldCalibration {
    /// Build from 4 frame-space points and their 4 world-space counterparts.
    ///
    /// Point order must correspond positionally between the two slices.
    pub fn new(
        frame_pts: &[Point2<f32>],
        world_pts: &[Point2<f32>],
        scale: WorldScale,
    ) -> Result<Self, CalibrationError> {
        let frame: &[Point2<f32>; 4] = frame_pts
            .try_into()
            .map_err(|_| CalibrationError::InvalidCalibration {
                got: frame_pts.len(),
            })?;
        let world: &[Point2<f32>; 4] = world_pts
            .try_into()
            .map_err(|_| CalibrationError::InvalidCalibration {
                got: world_pts.len(),
            })?;

        let bev = world.map(|p| scale.world_to_bev(p));
        let bev_from_frame =
            homography_from_4pt(frame, &bev).ok_or(CalibrationError::Degenerate)?;
        let frame_from_bev = bev_from_frame
            .inverse()
            .ok_or(CalibrationError::Degenerate)?;

        Ok(Self {
            scale,
            bev_from_frame,
            frame_from_bev,
        })
    }

    #[inline]
    pub fn scale(&self) -> WorldScale {
        self.scale
    }

    #[inline]
    pub fn bev_from_frame(&self) -> &Homography {
        &self.bev_from_frame
    }

    #[inline]
    pub fn frame_from_bev(&self) -> &Homography {
        &self.frame_from_bev
    }

    /// Map a frame pixel to its world-space position.
    pub fn frame_to_world(&self, p: Point2<f32>) -> Point2<f32> {
        self.scale.bev_to_world(self.bev_from_frame.apply(p))
    }

    /// Rectify a camera frame into the fixed-scale bird's-eye view.
    pub fn rectify(&self, frame: &RgbFrameView<'_>) -> Result<RgbFrame, FrameError> {
        warp_perspective_rgb(
            frame,
            self.frame_from_bev,
            self.scale.bev_width(),
            self.scale.bev_height(),
        )
    }
}
