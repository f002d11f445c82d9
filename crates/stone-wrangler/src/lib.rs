//! Locates game stones on a playing field from a top-down camera view.
//!
//! One frame flows through the pipeline per polling-loop iteration:
//! perspective rectification into a fixed-scale bird's-eye view, HSV
//! segmentation into a binary stone mask, a polar Hough line search,
//! tolerance-based binning of near-duplicate detections, and localization
//! of each consensus line's lit extent back into world coordinates.
//!
//! Every stage is a pure, bounded-time transform over frame-local data;
//! nothing carries over between frames. All tunables live in
//! [`StoneWranglerParams`] and are passed in at construction, never read
//! from process-wide state.
//!
//! ## Quickstart
//!
//! ```no_run
//! use nalgebra::Point2;
//! use stone_wrangler::{StoneWrangler, StoneWranglerParams};
//! use stone_wrangler_core::{FieldCalibration, RgbFrame, WorldScale};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame_pts = [
//!     Point2::new(629.0, 413.0),
//!     Point2::new(935.0, 412.0),
//!     Point2::new(1067.0, 228.0),
//!     Point2::new(635.0, 228.0),
//! ];
//! let world_pts = [
//!     Point2::new(0.0, 33.0),
//!     Point2::new(8.5, 33.0),
//!     Point2::new(8.5, 22.0),
//!     Point2::new(0.0, 22.0),
//! ];
//! let calibration = FieldCalibration::new(&frame_pts, &world_pts, WorldScale::default())?;
//! let wrangler = StoneWrangler::new(calibration, StoneWranglerParams::default());
//!
//! let frame = RgbFrame::from_raw(1280, 720, vec![0u8; 1280 * 720 * 3])?;
//! for stone in wrangler.analyze(&frame.view())? {
//!     println!("stone at ({:.1}, {:.1})", stone.world.x, stone.world.y);
//! }
//! # Ok(())
//! # }
//! ```

pub mod binning;
pub mod hough;
pub mod localize;
pub mod params;
pub mod segment;
mod source;
mod wrangler;

pub use hough::PolarLine;
pub use params::{BinningParams, HoughParams, HsvRange, SegmentationParams, StoneWranglerParams};
pub use source::{process_next, FrameSource, PositionSink};
pub use wrangler::{StonePosition, StoneWrangler};

pub use stone_wrangler_core::{CalibrationError, FieldCalibration, FrameError, WorldScale};
