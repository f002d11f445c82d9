//! Greedy clustering of near-duplicate line detections.
//!
//! Raw Hough output contains several slightly different (theta, rho) pairs
//! per physical stone edge. Binning groups them with a two-parameter
//! tolerance test and collapses each group to its per-parameter median.
//!
//! The tolerance test is not transitive (A close to B and B close to C does
//! not imply A close to C), so the grouping depends on scan order. The
//! algorithm is a deterministic linear scan over an ordered arena of bins:
//!
//! 1. Each incoming line scans existing bins in order. The first bin with a
//!    member close to the line receives the line and becomes its assigned
//!    bin.
//! 2. Any *later* bin that also contains a member close to the line is
//!    drained into the assigned bin and left empty in the arena; one
//!    incoming line can chain several such merges in a single pass.
//! 3. A line matching no bin opens a new one at the end of the arena.
//!
//! Empty bins stay in the arena (preserving indices mid-pass) and simply
//! produce no consensus line.

use crate::hough::PolarLine;
use crate::params::BinningParams;
use stone_wrangler_core::median;

/// Strict two-parameter closeness test. Lines exactly at a tolerance
/// boundary are NOT considered close.
#[inline]
fn close_enough(a: PolarLine, b: PolarLine, params: &BinningParams) -> bool {
    (a.theta - b.theta).abs() < params.close_enough_theta
        && (a.rho - b.rho).abs() < params.close_enough_rho
}

/// Group raw lines into bins of detections of the same physical edge.
///
/// The returned arena may contain bins emptied by merging; callers must
/// skip them (as [`consensus_lines`] does).
pub fn bin_lines(lines: &[PolarLine], params: &BinningParams) -> Vec<Vec<PolarLine>> {
    let mut bins: Vec<Vec<PolarLine>> = Vec::new();

    for &line in lines {
        let mut assigned: Option<usize> = None;

        for idx in 0..bins.len() {
            if !bins[idx].iter().any(|&m| close_enough(line, m, params)) {
                continue;
            }
            match assigned {
                None => {
                    bins[idx].push(line);
                    assigned = Some(idx);
                }
                Some(dst) => {
                    // the line already lives in an earlier bin; pull this
                    // whole bin over and leave it empty in place
                    let drained = std::mem::take(&mut bins[idx]);
                    bins[dst].extend(drained);
                }
            }
        }

        if assigned.is_none() {
            bins.push(vec![line]);
        }
    }

    bins
}

/// One consensus line per non-empty bin: median theta and median rho,
/// computed independently.
pub fn consensus_lines(bins: &[Vec<PolarLine>]) -> Vec<PolarLine> {
    bins.iter()
        .filter_map(|bin| {
            let thetas: Vec<f64> = bin.iter().map(|l| l.theta).collect();
            let rhos: Vec<f64> = bin.iter().map(|l| l.rho).collect();
            match (median(&thetas), median(&rhos)) {
                (Some(theta), Some(rho)) => Some(PolarLine { theta, rho }),
                _ => None,
            }
        })
        .collect()
}
