//! De-overlap pipeline: load, clip, infer, reconstruct.

use crate::error::{NpyConvError, Result};
use crate::npy::read_npy;
use crate::reconstruct::{flatten_windows, time_vector};
use crate::stride::infer_stride;
use crate::types::{
    variable_name_for_path, FileType, OverflowPolicy, DEFAULT_NUM_WINDOWS, DEFAULT_TOLERANCE,
};
use crate::window::extract_gx_windows;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// De-overlap configuration for one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeoverlapRequest {
    pub file_path: String,
    /// Number of windows to keep from the front of the tensor (K).
    pub num_windows: usize,
    /// Absolute tolerance for tail/head overlap matching.
    pub tolerance: f64,
    pub on_overflow: OverflowPolicy,
    /// Exported variable name; defaults to the path-derived name.
    pub variable_name: Option<String>,
}

impl DeoverlapRequest {
    pub fn new<S: Into<String>>(file_path: S) -> Self {
        Self {
            file_path: file_path.into(),
            num_windows: DEFAULT_NUM_WINDOWS,
            tolerance: DEFAULT_TOLERANCE,
            on_overflow: OverflowPolicy::Clamp,
            variable_name: None,
        }
    }
}

/// Outcome of a de-overlap run, ready for export.
#[derive(Debug, Clone, Serialize)]
pub struct DeoverlapResult {
    pub variable_name: String,
    /// Windows actually used (after any clamping).
    pub num_windows: usize,
    pub window_length: usize,
    /// Inferred hop; equals `window_length` when no overlap was detected.
    pub stride: usize,
    pub signal: Vec<f32>,
    pub time: Vec<f32>,
}

/// Run the full pipeline on one tensor file.
pub fn deoverlap_file(request: &DeoverlapRequest) -> Result<DeoverlapResult> {
    if !Path::new(&request.file_path).exists() {
        return Err(NpyConvError::FileNotFound(request.file_path.clone()));
    }
    let ext = Path::new(&request.file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if FileType::from_extension(ext).is_none() {
        return Err(NpyConvError::UnsupportedFileType(
            request.file_path.clone(),
        ));
    }

    let tensor = read_npy(&request.file_path)?;
    log::info!(
        "Loaded tensor with shape {:?} from {}",
        tensor.shape,
        request.file_path
    );

    let clipped = extract_gx_windows(&tensor, request.num_windows, request.on_overflow)?;
    log::info!(
        "Clipped windows: {} x {}",
        clipped.num_windows,
        clipped.window_length
    );

    let stride = infer_stride(&clipped, request.tolerance);
    log::info!(
        "Inferred stride: {} (window length {})",
        stride,
        clipped.window_length
    );

    let flat = flatten_windows(&clipped, stride);
    let signal: Vec<f32> = flat.iter().map(|&v| v as f32).collect();
    let time = time_vector(signal.len());
    log::info!("Flattened signal: {} samples", signal.len());

    let variable_name = request
        .variable_name
        .clone()
        .unwrap_or_else(|| variable_name_for_path(&request.file_path));

    Ok(DeoverlapResult {
        variable_name,
        num_windows: clipped.num_windows,
        window_length: clipped.window_length,
        stride,
        signal,
        time,
    })
}
