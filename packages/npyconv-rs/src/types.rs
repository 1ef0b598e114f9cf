use serde::{Deserialize, Serialize};

/// Default number of windows kept from the front of a windowed tensor.
pub const DEFAULT_NUM_WINDOWS: usize = 25;

/// Default absolute tolerance for tail/head overlap matching.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Feature axis holding the gx channel.
pub const GX_AXIS: usize = 0;

/// Supported input container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Npy,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "npy" => Some(FileType::Npy),
            _ => None,
        }
    }
}

/// Owned row-major numeric tensor, 1 to 3 dimensions.
///
/// float32 payloads are widened to f64 on load so the core only carries one
/// numeric type.
#[derive(Debug, Clone)]
pub struct Tensor {
    pub data: Vec<f64>,
    pub shape: Vec<usize>,
}

impl Tensor {
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The first K windows of one feature axis, shape (num_windows, window_length).
#[derive(Debug, Clone)]
pub struct ClippedWindows {
    pub data: Vec<f64>,
    pub num_windows: usize,
    pub window_length: usize,
}

impl ClippedWindows {
    /// Borrow window `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.window_length;
        &self.data[start..start + self.window_length]
    }
}

/// What to do when the requested window count exceeds what the tensor holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with an error naming the requested and available counts.
    Strict,
    /// Clamp to the available count and log the degradation.
    Clamp,
}

/// Exported variable name derived from the input path: paths mentioning
/// "noisy" (case-insensitive) export as `gx_noisy`, everything else as
/// `gx_GT`.
pub fn variable_name_for_path(path: &str) -> String {
    if path.to_lowercase().contains("noisy") {
        "gx_noisy".to_string()
    } else {
        "gx_GT".to_string()
    }
}
