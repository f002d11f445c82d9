//! Capability interfaces toward the hosting robot runtime.
//!
//! The pipeline never touches a camera SDK or telemetry API directly; the
//! runtime supplies frames and consumes positions through these traits.

use log::warn;

use crate::wrangler::{StonePosition, StoneWrangler};
use stone_wrangler_core::RgbFrame;

/// Supplies camera frames, one per polling-loop iteration.
pub trait FrameSource {
    /// The next frame, or `None` when the stream has ended.
    fn capture_frame(&mut self) -> Option<RgbFrame>;
}

/// Consumes the per-frame detection results.
pub trait PositionSink {
    fn report_positions(&mut self, positions: &[StonePosition]);
}

/// One iteration of the camera polling loop: capture, analyze, report.
///
/// A malformed frame is logged and skipped, keeping the loop alive; only a
/// drained source ends it. Returns whether a frame was consumed.
pub fn process_next<S, R>(wrangler: &StoneWrangler, source: &mut S, sink: &mut R) -> bool
where
    S: FrameSource,
    R: PositionSink,
{
    let Some(frame) = source.capture_frame() else {
        return false;
    };

    match wrangler.analyze(&frame.view()) {
        Ok(positions) => sink.report_positions(&positions),
        Err(err) => warn!("skipping frame: {err}"),
    }
    true
}
