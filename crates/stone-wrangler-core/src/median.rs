use std::cmp::Ordering;

/// Median of an unordered sample, or `None` when the sample is empty.
///
/// Even-sized samples yield the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        Some(0.5 * (sorted[n / 2 - 1] + sorted[n / 2]))
    } else {
        Some(sorted[n / 2])
    }
}
