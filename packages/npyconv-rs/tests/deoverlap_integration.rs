use byteorder::{LittleEndian, WriteBytesExt};
use npyconv_rs::{
    deoverlap_file, DeoverlapRequest, NpyConvError, OverflowPolicy, DEFAULT_TOLERANCE,
};
use std::path::Path;

/// Write a little-endian f8 NPY file.
fn write_npy(path: &Path, shape: &[usize], data: &[f64]) {
    let shape_str = match shape.len() {
        1 => format!("({},)", shape[0]),
        _ => format!(
            "({})",
            shape
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    let mut dict = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': {}, }}",
        shape_str
    );
    let unpadded = 6 + 2 + 2 + dict.len() + 1;
    for _ in 0..(64 - unpadded % 64) % 64 {
        dict.push(' ');
    }
    dict.push('\n');

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\x93NUMPY");
    bytes.push(1);
    bytes.push(0);
    bytes.write_u16::<LittleEndian>(dict.len() as u16).unwrap();
    bytes.extend_from_slice(dict.as_bytes());
    for &v in data {
        bytes.write_f64::<LittleEndian>(v).unwrap();
    }
    std::fs::write(path, &bytes).unwrap();
}

/// Windowed tensor cut from `signal` with the given stride; gx carries the
/// signal, the remaining axes carry filler.
fn windowed_tensor(signal: &[f64], k: usize, l: usize, stride: usize, num_axes: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(k * l * num_axes);
    for w in 0..k {
        for s in 0..l {
            data.push(signal[w * stride + s]);
            for axis in 1..num_axes {
                data.push(-(axis as f64));
            }
        }
    }
    data
}

#[test]
fn test_round_trip_overlapping_windows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("windows_GT.npy");

    let signal: Vec<f64> = (0..50).map(|v| (v as f64) * 0.25).collect();
    let (k, l, stride) = (9, 10, 5);
    let data = windowed_tensor(&signal, k, l, stride, 3);
    write_npy(&path, &[k, l, 3], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = k;
    let result = deoverlap_file(&request).unwrap();

    assert_eq!(result.variable_name, "gx_GT");
    assert_eq!(result.num_windows, 9);
    assert_eq!(result.window_length, 10);
    assert_eq!(result.stride, 5);
    assert_eq!(result.signal.len(), 10 + 8 * 5);
    let expected: Vec<f32> = signal.iter().map(|&v| v as f32).collect();
    assert_eq!(result.signal, expected);
    assert_eq!(result.time.len(), result.signal.len());
    assert_eq!(result.time[49], 49.0);
}

#[test]
fn test_noisy_path_names_variable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("X_train_noisy.npy");

    let signal: Vec<f64> = (0..20).map(|v| v as f64).collect();
    let data = windowed_tensor(&signal, 3, 10, 5, 1);
    write_npy(&path, &[3, 10, 1], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = 3;
    let result = deoverlap_file(&request).unwrap();
    assert_eq!(result.variable_name, "gx_noisy");
}

#[test]
fn test_variable_name_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anything.npy");

    let signal: Vec<f64> = (0..12).map(|v| v as f64).collect();
    let data = windowed_tensor(&signal, 2, 6, 6, 1);
    write_npy(&path, &[2, 6, 1], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = 2;
    request.variable_name = Some("gx_custom".to_string());
    let result = deoverlap_file(&request).unwrap();
    assert_eq!(result.variable_name, "gx_custom");
    // No overlap between [0..6) and [6..12): plain concatenation.
    assert_eq!(result.stride, 6);
    assert_eq!(result.signal.len(), 12);
}

#[test]
fn test_clamp_uses_available_windows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.npy");

    let signal: Vec<f64> = (0..40).map(|v| v as f64).collect();
    let data = windowed_tensor(&signal, 25, 10, 1, 2);
    write_npy(&path, &[25, 10, 2], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = 30;
    let result = deoverlap_file(&request).unwrap();
    assert_eq!(result.num_windows, 25);
    assert_eq!(result.stride, 1);
    assert_eq!(result.signal.len(), 10 + 24);
}

#[test]
fn test_strict_rejects_excessive_windows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.npy");

    let signal: Vec<f64> = (0..40).map(|v| v as f64).collect();
    let data = windowed_tensor(&signal, 25, 10, 1, 2);
    write_npy(&path, &[25, 10, 2], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = 30;
    request.on_overflow = OverflowPolicy::Strict;
    let err = deoverlap_file(&request).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("30"));
    assert!(msg.contains("25"));
}

#[test]
fn test_2d_input_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.npy");
    write_npy(&path, &[4, 5], &vec![0.0; 20]);

    let request = DeoverlapRequest::new(path.to_str().unwrap());
    let err = deoverlap_file(&request).unwrap_err();
    assert!(matches!(err, NpyConvError::ShapeMismatch(_)));
}

#[test]
fn test_tolerance_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jitter.npy");

    // Overlap samples perturbed by 1e-4: invisible to a loose tolerance,
    // fatal to the default one.
    let signal: Vec<f64> = (0..30).map(|v| v as f64).collect();
    let mut data = windowed_tensor(&signal, 3, 10, 5, 1);
    data[10] += 1e-4;
    write_npy(&path, &[3, 10, 1], &data);

    let mut request = DeoverlapRequest::new(path.to_str().unwrap());
    request.num_windows = 3;
    request.tolerance = DEFAULT_TOLERANCE;
    let strict_tol = deoverlap_file(&request).unwrap();
    assert_eq!(strict_tol.stride, 10);

    request.tolerance = 1e-3;
    let loose_tol = deoverlap_file(&request).unwrap();
    assert_eq!(loose_tol.stride, 5);
}
