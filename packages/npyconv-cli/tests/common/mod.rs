use byteorder::{LittleEndian, WriteBytesExt};
use std::path::Path;

/// Write a little-endian f8 NPY file.
pub fn write_npy(path: &Path, shape: &[usize], data: &[f64]) {
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

/// Windowed tensor cut from `signal` with the given stride; the gx axis
/// carries the signal, remaining axes carry filler.
pub fn windowed_tensor(
    signal: &[f64],
    k: usize,
    l: usize,
    stride: usize,
    num_axes: usize,
) -> Vec<f64> {
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
