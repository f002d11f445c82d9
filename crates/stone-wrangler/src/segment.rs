//! Denoise + color-threshold stage over the rectified view.

use crate::params::{HsvRange, SegmentationParams};
use stone_wrangler_core::{Mask, RgbFrame, RgbFrameView};

/// Blur the rectified view and threshold it by stone color.
///
/// An all-background view produces an all-zero mask; that is a valid
/// "nothing found" outcome, not an error.
pub fn segment_stones(bev: &RgbFrameView<'_>, params: &SegmentationParams) -> Mask {
    let blurred = gaussian_blur(bev, params.blur_kernel);
    threshold_hsv(&blurred.view(), &params.hsv)
}

/// Separable Gaussian blur with replicate borders.
///
/// Sigma follows the OpenCV rule for a kernel derived from its size:
/// `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_blur(src: &RgbFrameView<'_>, kernel_size: usize) -> RgbFrame {
    let k = kernel_size.max(1) | 1; // force odd
    if k == 1 || src.width == 0 || src.height == 0 {
        return RgbFrame {
            width: src.width,
            height: src.height,
            data: src.data.to_vec(),
        };
    }

    let kernel = gaussian_kernel(k);
    let half = (k / 2) as i32;
    let w = src.width;
    let h = src.height;

    // horizontal pass
    let mut tmp = vec![0.0f32; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (i, &weight) in kernel.iter().enumerate() {
                let sx = (x as i32 + i as i32 - half).clamp(0, w as i32 - 1) as usize;
                let base = (y * w + sx) * 3;
                for c in 0..3 {
                    acc[c] += weight * src.data[base + c] as f32;
                }
            }
            let base = (y * w + x) * 3;
            tmp[base..base + 3].copy_from_slice(&acc);
        }
    }

    // vertical pass
    let mut out = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (i, &weight) in kernel.iter().enumerate() {
                let sy = (y as i32 + i as i32 - half).clamp(0, h as i32 - 1) as usize;
                let base = (sy * w + x) * 3;
                for c in 0..3 {
                    acc[c] += weight * tmp[base + c];
                }
            }
            let base = (y * w + x) * 3;
            for c in 0..3 {
                out[base + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    RgbFrame {
        width: w,
        height: h,
        data: out,
    }
}

fn gaussian_kernel(k: usize) -> Vec<f32> {
    let sigma = 0.3 * ((k as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (k / 2) as i32;
    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-(i * i) as f32 / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// RGB to HSV in the OpenCV 8-bit convention: hue in [0, 180), saturation
/// and value in [0, 255].
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as f32;
    let g = rgb[1] as f32;
    let b = rgb[2] as f32;

    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let c = v - min;

    let s = if v > 0.0 { 255.0 * c / v } else { 0.0 };

    let h = if c > 0.0 {
        let h_deg = if v == r {
            60.0 * (g - b) / c
        } else if v == g {
            120.0 + 60.0 * (b - r) / c
        } else {
            240.0 + 60.0 * (r - g) / c
        };
        let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };
        h_deg / 2.0
    } else {
        0.0
    };

    [
        h.round().clamp(0.0, 179.0) as u8,
        s.round().clamp(0.0, 255.0) as u8,
        v.round().clamp(0.0, 255.0) as u8,
    ]
}

fn threshold_hsv(src: &RgbFrameView<'_>, range: &HsvRange) -> Mask {
    let mut mask = Mask::zeros(src.width, src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            let base = (y * src.width + x) * 3;
            let rgb = [src.data[base], src.data[base + 1], src.data[base + 2]];
            if range.contains(rgb_to_hsv(rgb)) {
                mask.data[y * src.width + x] = 255;
            }
        }
    }
    mask
}
