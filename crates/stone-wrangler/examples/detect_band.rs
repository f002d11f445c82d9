//! Synthesizes a field frame with one stone-colored band and runs the full
//! pipeline over it.
//!
//!     cargo run --example detect_band

use log::{info, LevelFilter};
use nalgebra::Point2;
use stone_wrangler::{StoneWrangler, StoneWranglerParams};
use stone_wrangler_core::{init_with_level, FieldCalibration, RgbFrame, WorldScale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Debug)?;

    // landmarks placed so that the camera frame IS the bird's-eye view
    let scale = WorldScale {
        pixel_size: 0.1,
        area_x: 20.0,
        area_y: 20.0,
    };
    let world_pts = [
        Point2::new(-10.0, 20.0),
        Point2::new(10.0, 20.0),
        Point2::new(10.0, 0.0),
        Point2::new(-10.0, 0.0),
    ];
    let frame_pts = [
        Point2::new(0.0, 0.0),
        Point2::new(200.0, 0.0),
        Point2::new(200.0, 200.0),
        Point2::new(0.0, 200.0),
    ];
    let calibration = FieldCalibration::new(&frame_pts, &world_pts, scale)?;

    let mut params = StoneWranglerParams::default();
    params.hough.vote_threshold = 150;
    let wrangler = StoneWrangler::new(calibration, params);

    // stone-colored band across the middle of the frame
    let mut data = vec![0u8; 200 * 200 * 3];
    for y in 98..=102 {
        for x in 0..200 {
            let base = (y * 200 + x) * 3;
            data[base..base + 3].copy_from_slice(&[255, 190, 39]);
        }
    }
    let frame = RgbFrame::from_raw(200, 200, data)?;

    let positions = wrangler.analyze(&frame.view())?;
    info!("{} stone(s) detected", positions.len());
    for p in &positions {
        println!(
            "stone at pixel ({:.1}, {:.1}) -> world ({:+.2}, {:+.2})",
            p.pixel.x, p.pixel.y, p.world.x, p.world.y
        );
    }

    Ok(())
}
