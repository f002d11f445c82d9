use approx::assert_relative_eq;
use nalgebra::Point2;
use stone_wrangler::{HoughParams, StoneWrangler, StoneWranglerParams};
use stone_wrangler_core::{FieldCalibration, FrameError, Mask, RgbFrame, WorldScale};

// stone-colored orange: H ~ 21, S ~ 216, V = 255 in the OpenCV convention
const STONE_RGB: [u8; 3] = [255, 190, 39];

/// Calibration whose frame-to-bird's-eye homography is the identity: the
/// frame landmarks are placed exactly where the world landmarks fall in the
/// 200x200 bird's-eye view (pixel size 0.1, 20x20 area).
fn identity_calibration() -> FieldCalibration {
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
    FieldCalibration::new(&frame_pts, &world_pts, scale).expect("calibration")
}

fn band_params() -> StoneWranglerParams {
    // a 5-px band votes ~200 per accumulator cell near its own angle; a
    // high threshold rejects the steep spurious lines that graze the band
    StoneWranglerParams {
        hough: HoughParams {
            vote_threshold: 150,
            ..HoughParams::default()
        },
        ..StoneWranglerParams::default()
    }
}

#[test]
fn synthetic_band_mask_yields_single_centered_stone() {
    // 5-px-wide lit band at theta = pi/2, rho = 100 on a 200x200 mask
    let mut mask = Mask::zeros(200, 200);
    for y in 98..=102 {
        for x in 0..200 {
            mask.set(x, y, 255);
        }
    }

    let wrangler = StoneWrangler::new(identity_calibration(), band_params());
    let positions = wrangler.analyze_mask(&mask);

    assert_eq!(positions.len(), 1, "expected exactly one stone");
    let p = positions[0];
    assert!((p.pixel.y - 100.0).abs() <= 1.0, "pixel.y = {}", p.pixel.y);
    assert!((p.pixel.x - 100.0).abs() <= 1.0, "pixel.x = {}", p.pixel.x);
}

#[test]
fn full_pipeline_locates_stone_band_in_world_space() {
    // identity calibration: the rectified view is the frame itself, so a
    // stone-colored band across rows 98..=102 sits at world y = 10
    let mut data = vec![0u8; 200 * 200 * 3];
    for y in 98..=102 {
        for x in 0..200 {
            let base = (y * 200 + x) * 3;
            data[base..base + 3].copy_from_slice(&STONE_RGB);
        }
    }
    let frame = RgbFrame::from_raw(200, 200, data).unwrap();

    let wrangler = StoneWrangler::new(identity_calibration(), band_params());
    let positions = wrangler.analyze(&frame.view()).expect("analyze");

    assert_eq!(positions.len(), 1, "expected exactly one stone");
    let p = positions[0];
    assert!((p.pixel.x - 100.0).abs() <= 2.0, "pixel.x = {}", p.pixel.x);
    assert!((p.pixel.y - 100.0).abs() <= 2.0, "pixel.y = {}", p.pixel.y);
    assert_relative_eq!(p.world.x, 0.0, epsilon = 0.25);
    assert_relative_eq!(p.world.y, 10.0, epsilon = 0.25);
}

#[test]
fn all_background_frame_finds_nothing() {
    let frame = RgbFrame::from_raw(200, 200, vec![0u8; 200 * 200 * 3]).unwrap();
    let wrangler = StoneWrangler::new(identity_calibration(), StoneWranglerParams::default());
    let positions = wrangler.analyze(&frame.view()).expect("analyze");
    assert!(positions.is_empty());
}

#[test]
fn zero_sized_frame_is_rejected_per_frame() {
    let wrangler = StoneWrangler::new(identity_calibration(), StoneWranglerParams::default());
    let view = stone_wrangler_core::RgbFrameView {
        width: 0,
        height: 0,
        data: &[],
    };
    let err = wrangler.analyze(&view).unwrap_err();
    assert_eq!(
        err,
        FrameError::InvalidFrame {
            width: 0,
            height: 0
        }
    );
}

#[test]
fn vertical_band_localizes_left_of_center() {
    // vertical bands live at the theta = 0 edge of the accumulator; a
    // tighter threshold keeps the mirrored theta ~ pi detections out
    let mut mask = Mask::zeros(200, 200);
    for y in 0..200 {
        for x in 58..=62 {
            mask.set(x, y, 255);
        }
    }

    let params = StoneWranglerParams {
        hough: HoughParams {
            vote_threshold: 250,
            ..HoughParams::default()
        },
        ..StoneWranglerParams::default()
    };
    let wrangler = StoneWrangler::new(identity_calibration(), params);
    let positions = wrangler.analyze_mask(&mask);

    assert_eq!(positions.len(), 1);
    let p = positions[0];
    assert!((p.pixel.x - 60.0).abs() <= 1.5, "pixel.x = {}", p.pixel.x);
    assert!((p.pixel.y - 100.0).abs() <= 1.0, "pixel.y = {}", p.pixel.y);

    // pixel x = 60 is left of center, so world x is negative
    assert!(p.world.x < 0.0);
}
