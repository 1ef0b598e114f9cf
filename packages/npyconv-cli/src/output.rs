use npyconv_rs::Tensor;
use std::io::Write;
use std::path::Path;

/// Write a tensor as CSV. Column layout depends on dimensionality: a 1-D
/// tensor becomes a single `value` column, a 2-D tensor becomes
/// `channel_0..channel_{C-1}`, and anything higher is flattened per
/// first-axis slice under positional headers. No index column is written.
pub fn write_csv(tensor: &Tensor, path: &str) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create CSV file '{}': {}", path, e))?;

    let io_err = |e: csv::Error| format!("Failed to write CSV file '{}': {}", path, e);

    match tensor.shape.as_slice() {
        [] => return Err("Tensor has no dimensions to write".to_string()),
        [_] => {
            writer.write_record(["value"]).map_err(io_err)?;
            for &v in &tensor.data {
                writer.write_record([format_value(v)]).map_err(io_err)?;
            }
        }
        shape => {
            let cols: usize = shape[1..].iter().product();
            if cols == 0 {
                return Err(format!(
                    "Tensor shape {:?} has no columns to write",
                    tensor.shape
                ));
            }
            let header: Vec<String> = if shape.len() == 2 {
                (0..cols).map(|i| format!("channel_{}", i)).collect()
            } else {
                (0..cols).map(|i| i.to_string()).collect()
            };
            writer.write_record(&header).map_err(io_err)?;
            for row in tensor.data.chunks(cols) {
                writer
                    .write_record(row.iter().map(|&v| format_value(v)))
                    .map_err(io_err)?;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush CSV file '{}': {}", path, e))
}

fn format_value(v: f64) -> String {
    format!("{}", v)
}

/// Write JSON string to stdout or a file.
pub fn write_output(json: &str, output_path: Option<&str>) -> Result<(), String> {
    match output_path {
        Some(path) => std::fs::write(Path::new(path), json)
            .map_err(|e| format!("Failed to write output file '{}': {}", path, e)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(json.as_bytes())
                .and_then(|_| handle.write_all(b"\n"))
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }
    }
}

/// Serialize a value to pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {}", e))
}
