use npyconv_rs::{DeoverlapRequest, FileType, OverflowPolicy};
use std::path::{Path, PathBuf};

/// Validate a single input path: existence and supported extension.
pub fn validate_file(file_path: &str) -> Result<(), String> {
    if !Path::new(file_path).exists() {
        return Err(format!("Input file not found: {}", file_path));
    }

    let ext = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if FileType::from_extension(ext).is_none() {
        return Err(format!(
            "Unsupported file extension '{}'. Supported: npy",
            ext
        ));
    }

    Ok(())
}

/// Build a DeoverlapRequest from individual CLI parameters.
pub fn build_request(
    file: &str,
    windows: usize,
    tolerance: f64,
    strict: bool,
    varname: Option<String>,
) -> Result<DeoverlapRequest, String> {
    if windows == 0 {
        return Err("Window count (--windows) must be greater than 0".to_string());
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(format!(
            "Tolerance must be a non-negative finite number, got {}",
            tolerance
        ));
    }

    Ok(DeoverlapRequest {
        file_path: file.to_string(),
        num_windows: windows,
        tolerance,
        on_overflow: if strict {
            OverflowPolicy::Strict
        } else {
            OverflowPolicy::Clamp
        },
        variable_name: varname,
    })
}

/// Default CSV output path: the input path with a .csv extension.
pub fn default_csv_path(input: &str) -> PathBuf {
    Path::new(input).with_extension("csv")
}

/// Default MAT output path: <input stem>_clip<K>.mat next to the input.
pub fn default_mat_path(input: &str, windows: usize) -> PathBuf {
    let path = Path::new(input);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    path.with_file_name(format!("{}_clip{}.mat", stem, windows))
}
