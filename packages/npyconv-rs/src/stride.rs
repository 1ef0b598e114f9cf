//! Stride inference between consecutive windows.

use crate::types::ClippedWindows;

/// Infer the hop between consecutive windows by exhaustive overlap search.
///
/// Returns the smallest stride `s` in `[1, window_length)` such that for
/// every adjacent pair of windows the tail of window `i` starting at offset
/// `s` matches the head of window `i + 1` truncated to `window_length - s`,
/// element-wise, within `tolerance` (absolute difference only). If no such
/// stride exists, or fewer than two windows are present, the windows are
/// taken as non-overlapping and `window_length` is returned.
pub fn infer_stride(windows: &ClippedWindows, tolerance: f64) -> usize {
    let k = windows.num_windows;
    let l = windows.window_length;
    if k < 2 {
        return l;
    }

    'stride: for s in 1..l {
        for i in 0..k - 1 {
            let tail = &windows.row(i)[s..];
            let head = &windows.row(i + 1)[..l - s];
            for (a, b) in tail.iter().zip(head.iter()) {
                if (a - b).abs() > tolerance {
                    continue 'stride;
                }
            }
        }
        return s;
    }

    l
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_TOLERANCE;

    /// Windows of length `l` cut from the ramp signal 0, 1, 2, ... with the
    /// given true stride.
    fn ramp_windows(k: usize, l: usize, stride: usize) -> ClippedWindows {
        let mut data = Vec::with_capacity(k * l);
        for w in 0..k {
            for s in 0..l {
                data.push((w * stride + s) as f64);
            }
        }
        ClippedWindows {
            data,
            num_windows: k,
            window_length: l,
        }
    }

    #[test]
    fn test_recovers_true_stride() {
        for true_stride in 1..10 {
            let windows = ramp_windows(5, 10, true_stride);
            assert_eq!(
                infer_stride(&windows, DEFAULT_TOLERANCE),
                true_stride,
                "failed for stride {}",
                true_stride
            );
        }
    }

    #[test]
    fn test_half_overlap() {
        // window_length 10, stride 5: [0..10), [5..15), [10..20)
        let windows = ramp_windows(3, 10, 5);
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 5);
    }

    #[test]
    fn test_disjoint_windows_report_window_length() {
        // [0,1,2,3] and [10,11,12,13] share no prefix/suffix.
        let windows = ClippedWindows {
            data: vec![0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0],
            num_windows: 2,
            window_length: 4,
        };
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 4);
    }

    #[test]
    fn test_unrelated_windows_report_window_length() {
        let windows = ClippedWindows {
            data: vec![0.17, 0.93, 0.41, 0.66, 0.08, 0.52, 0.31, 0.79],
            num_windows: 2,
            window_length: 4,
        };
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 4);
    }

    #[test]
    fn test_single_window_reports_window_length() {
        let windows = ramp_windows(1, 8, 3);
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 8);
    }

    #[test]
    fn test_all_pairs_must_match() {
        // First pair overlaps with stride 2, second pair does not: the
        // candidate must be rejected and the scan falls through to L.
        let mut windows = ramp_windows(3, 6, 2);
        let third_start = 2 * 6;
        windows.data[third_start] += 100.0;
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 6);
    }

    #[test]
    fn test_tolerance_is_absolute() {
        let mut windows = ramp_windows(2, 6, 3);
        // Perturb one overlapping sample just beyond the default tolerance.
        windows.data[6] += 2e-6;
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 6);
        // A looser tolerance accepts the same perturbation.
        assert_eq!(infer_stride(&windows, 1e-5), 3);
    }

    #[test]
    fn test_smallest_matching_stride_wins() {
        // A constant signal matches at every candidate stride; the scan must
        // return the smallest one.
        let windows = ClippedWindows {
            data: vec![7.0; 12],
            num_windows: 2,
            window_length: 6,
        };
        assert_eq!(infer_stride(&windows, DEFAULT_TOLERANCE), 1);
    }
}
