//! Polar Hough line transform over the stone mask.

use crate::params::HoughParams;
use std::f64::consts::PI;
use stone_wrangler_core::Mask;

/// A line in polar form: the set of points with `x cos(theta) + y sin(theta) = rho`.
///
/// `theta` is in [0, pi) radians; `rho` is a signed distance in pixels from
/// the mask origin. Lines are plain values; equality downstream is
/// tolerance-based, never exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarLine {
    pub theta: f64,
    pub rho: f64,
}

/// Vote every lit mask pixel into a (theta, rho) accumulator and return the
/// lines whose votes strictly exceed `vote_threshold`.
///
/// The threshold is the only filter; no ordering is guaranteed among the
/// returned lines.
pub fn detect_lines(mask: &Mask, params: &HoughParams) -> Vec<PolarLine> {
    if mask.width == 0 || mask.height == 0 {
        return Vec::new();
    }

    let num_theta = (PI / params.theta_step).round().max(1.0) as usize;
    let w = mask.width as f64;
    let h = mask.height as f64;
    let max_rho = (w * w + h * h).sqrt();
    let num_rho = (2.0 * max_rho / params.rho_step).ceil() as usize + 1;

    let trig: Vec<(f64, f64)> = (0..num_theta)
        .map(|t| {
            let theta = t as f64 * params.theta_step;
            (theta.cos(), theta.sin())
        })
        .collect();

    let mut accum = vec![0u32; num_theta * num_rho];

    for y in 0..mask.height {
        for x in 0..mask.width {
            if !mask.is_lit(x, y) {
                continue;
            }
            for (t, &(cos_t, sin_t)) in trig.iter().enumerate() {
                let rho = x as f64 * cos_t + y as f64 * sin_t;
                let r = ((rho + max_rho) / params.rho_step).round() as usize;
                let r = r.min(num_rho - 1);
                accum[t * num_rho + r] += 1;
            }
        }
    }

    let mut lines = Vec::new();
    for t in 0..num_theta {
        for r in 0..num_rho {
            if accum[t * num_rho + r] > params.vote_threshold {
                lines.push(PolarLine {
                    theta: t as f64 * params.theta_step,
                    rho: r as f64 * params.rho_step - max_rho,
                });
            }
        }
    }
    lines
}
