//! De-overlap reconstruction and time axis.

use crate::types::ClippedWindows;

/// Stitch K (possibly overlapping) windows into one flat signal.
///
/// With `stride >= window_length` the windows are treated as non-overlapping
/// and concatenated in order. Otherwise the first window is emitted in full
/// and every subsequent window contributes only its samples from offset
/// `window_length - stride` onward. The inferred stride is trusted as-is; no
/// overlap re-validation happens here.
pub fn flatten_windows(windows: &ClippedWindows, stride: usize) -> Vec<f64> {
    let k = windows.num_windows;
    let l = windows.window_length;

    if stride >= l {
        return windows.data.clone();
    }

    let overlap = l - stride;
    let mut flat = Vec::with_capacity(l + (k - 1) * stride);
    flat.extend_from_slice(windows.row(0));
    for i in 1..k {
        flat.extend_from_slice(&windows.row(i)[overlap..]);
    }
    flat
}

/// Sample-index time axis [0, 1, ..., n - 1] as f32.
pub fn time_vector(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32).collect()
}
