//! Finds the lit extent of a consensus line in the stone mask.

use crate::hough::PolarLine;
use std::f64::consts::FRAC_PI_2;
use stone_wrangler_core::{median, Mask};

/// Integer pixels a polar line passes through inside a w x h raster.
///
/// Steps along whichever axis the line is less steep against (the slope of
/// the line direction, theta + pi/2, decides), so consecutive samples never
/// skip a row or column.
pub fn points_along_line(
    theta: f64,
    rho: f64,
    width: usize,
    height: usize,
) -> Vec<(usize, usize)> {
    let mut points = Vec::new();
    let slope_angle = theta + FRAC_PI_2;

    if slope_angle.tan().abs() < 1.0 {
        // shallow: one sample per column
        let foot_x = theta.cos() * rho;
        let foot_y = theta.sin() * rho;
        let slope = slope_angle.tan();
        let mut y = foot_y - slope * foot_x; // start at the y intercept
        for x in 0..width {
            let yr = y.round();
            if yr >= 0.0 && (yr as usize) < height {
                points.push((x, yr as usize));
            }
            y += slope;
        }
    } else {
        // steep: one sample per row
        let foot_x = theta.cos() * rho;
        let foot_y = theta.sin() * rho;
        let slope = 1.0 / slope_angle.tan();
        let mut x = foot_x - slope * foot_y; // start at the x intercept
        for y in 0..height {
            let xr = x.round();
            if xr >= 0.0 && (xr as usize) < width {
                points.push((xr as usize, y));
            }
            x += slope;
        }
    }

    points
}

/// Median lit position along a consensus line, sampling the five parallel
/// offsets rho-2 ..= rho+2.
///
/// Returns `None` when no sampled pixel is lit; a consensus line with no
/// support in the mask produces no stone.
pub fn line_center(mask: &Mask, line: PolarLine) -> Option<(f64, f64)> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for offset in -2..=2i32 {
        let rho = line.rho + offset as f64;
        for (x, y) in points_along_line(line.theta, rho, mask.width, mask.height) {
            if mask.is_lit(x, y) {
                xs.push(x as f64);
                ys.push(y as f64);
            }
        }
    }

    match (median(&xs), median(&ys)) {
        (Some(cx), Some(cy)) => Some((cx, cy)),
        _ => None,
    }
}
