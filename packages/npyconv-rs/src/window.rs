//! First-K window extraction from a windowed tensor.

use crate::error::{NpyConvError, Result};
use crate::types::{ClippedWindows, OverflowPolicy, Tensor, GX_AXIS};

/// Slice the first `requested` windows of the gx axis out of a 3-D tensor of
/// shape (num_windows, window_length, num_axes).
///
/// When `requested` exceeds the available window count the behavior is
/// selected by `policy`: `Strict` fails, `Clamp` degrades to the available
/// count with a warning.
pub fn extract_gx_windows(
    tensor: &Tensor,
    requested: usize,
    policy: OverflowPolicy,
) -> Result<ClippedWindows> {
    let (num_windows, window_length, num_axes) = match tensor.shape.as_slice() {
        &[w, l, a] => (w, l, a),
        dims => {
            return Err(NpyConvError::ShapeMismatch(format!(
                "expected a 3-D windowed tensor, got {} dimension(s)",
                dims.len()
            )))
        }
    };

    if num_axes == 0 {
        return Err(NpyConvError::ShapeMismatch(
            "feature axis is empty".to_string(),
        ));
    }
    if window_length == 0 {
        return Err(NpyConvError::ShapeMismatch(
            "window length is zero".to_string(),
        ));
    }
    if num_windows == 0 {
        return Err(NpyConvError::ShapeMismatch(
            "tensor holds no windows".to_string(),
        ));
    }
    if requested == 0 {
        return Err(NpyConvError::InvalidParameter(
            "window count must be at least 1".to_string(),
        ));
    }

    let kept = if requested > num_windows {
        match policy {
            OverflowPolicy::Strict => {
                return Err(NpyConvError::WindowCountExceeded {
                    requested,
                    available: num_windows,
                })
            }
            OverflowPolicy::Clamp => {
                log::warn!(
                    "Requested {} windows but only {} are available; clamping",
                    requested,
                    num_windows
                );
                num_windows
            }
        }
    } else {
        requested
    };

    let mut data = Vec::with_capacity(kept * window_length);
    for w in 0..kept {
        let base = w * window_length * num_axes;
        for s in 0..window_length {
            data.push(tensor.data[base + s * num_axes + GX_AXIS]);
        }
    }

    Ok(ClippedWindows {
        data,
        num_windows: kept,
        window_length,
    })
}
