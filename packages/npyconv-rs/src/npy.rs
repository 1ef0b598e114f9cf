//! NPY container reader (versions 1.0 and 2.0).
//!
//! Supports little-endian `<f4`/`<f8` payloads in C order with 1 to 3
//! dimensions. Everything else is rejected before any data is read.

use crate::error::{NpyConvError, Result};
use crate::types::Tensor;
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

const NPY_MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Parsed NPY header fields.
#[derive(Debug, Clone)]
pub struct NpyHeader {
    pub descr: String,
    pub fortran_order: bool,
    pub shape: Vec<usize>,
}

/// Read only the header of an NPY file, leaving the payload untouched.
pub fn read_npy_header<P: AsRef<Path>>(path: P) -> Result<NpyHeader> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    read_header(&mut reader)
}

/// Load a full NPY file into an owned row-major tensor.
pub fn read_npy<P: AsRef<Path>>(path: P) -> Result<Tensor> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let header = read_header(&mut reader)?;

    if header.fortran_order {
        return Err(NpyConvError::ShapeMismatch(
            "Fortran-order payloads are not supported".to_string(),
        ));
    }
    if header.shape.is_empty() || header.shape.len() > 3 {
        return Err(NpyConvError::ShapeMismatch(format!(
            "expected 1 to 3 dimensions, got {}",
            header.shape.len()
        )));
    }

    let count: usize = header.shape.iter().product();
    let data = match header.descr.as_str() {
        "<f4" => {
            let mut buf = vec![0f32; count];
            reader
                .read_f32_into::<LittleEndian>(&mut buf)
                .map_err(|e| payload_error(e, &header.shape))?;
            buf.into_iter().map(f64::from).collect()
        }
        "<f8" => {
            let mut buf = vec![0f64; count];
            reader
                .read_f64_into::<LittleEndian>(&mut buf)
                .map_err(|e| payload_error(e, &header.shape))?;
            buf
        }
        other => {
            return Err(NpyConvError::TypeMismatch(format!(
                "unsupported dtype '{}', expected '<f4' or '<f8'",
                other
            )))
        }
    };

    log::debug!(
        "Loaded NPY tensor: shape {:?}, dtype {}",
        header.shape,
        header.descr
    );

    Ok(Tensor {
        data,
        shape: header.shape,
    })
}

fn payload_error(e: std::io::Error, shape: &[usize]) -> NpyConvError {
    if e.kind() == ErrorKind::UnexpectedEof {
        NpyConvError::ShapeMismatch(format!(
            "payload is shorter than the header shape {:?} requires",
            shape
        ))
    } else {
        NpyConvError::Io(e)
    }
}

fn read_header<R: Read>(reader: &mut R) -> Result<NpyHeader> {
    let mut magic = [0u8; 6];
    reader.read_exact(&mut magic)?;
    if &magic != NPY_MAGIC {
        return Err(NpyConvError::TypeMismatch(
            "missing NPY magic, not a serialized tensor".to_string(),
        ));
    }

    let major = reader.read_u8()?;
    let minor = reader.read_u8()?;
    let header_len = match major {
        1 => reader.read_u16::<LittleEndian>()? as usize,
        2 => reader.read_u32::<LittleEndian>()? as usize,
        _ => {
            return Err(NpyConvError::TypeMismatch(format!(
                "unsupported NPY version {}.{}",
                major, minor
            )))
        }
    };

    let mut header_bytes = vec![0u8; header_len];
    reader.read_exact(&mut header_bytes)?;
    let header_str = std::str::from_utf8(&header_bytes)
        .map_err(|_| NpyConvError::TypeMismatch("NPY header is not valid UTF-8".to_string()))?;

    parse_header_dict(header_str)
}

fn parse_header_dict(header: &str) -> Result<NpyHeader> {
    let descr = parse_str_field(header, "descr")?;
    let fortran_order = parse_bool_field(header, "fortran_order")?;
    let shape = parse_shape_field(header, "shape")?;
    Ok(NpyHeader {
        descr,
        fortran_order,
        shape,
    })
}

fn field_start<'a>(header: &'a str, key: &str) -> Result<&'a str> {
    let needle = format!("'{}':", key);
    let start = header.find(&needle).ok_or_else(|| {
        NpyConvError::TypeMismatch(format!("NPY header is missing the '{}' field", key))
    })? + needle.len();
    Ok(header[start..].trim_start())
}

fn parse_str_field(header: &str, key: &str) -> Result<String> {
    let rest = field_start(header, key)?;
    let rest = rest.strip_prefix('\'').ok_or_else(|| {
        NpyConvError::TypeMismatch(format!("NPY header field '{}' is not a string", key))
    })?;
    let end = rest.find('\'').ok_or_else(|| {
        NpyConvError::TypeMismatch(format!("NPY header field '{}' is unterminated", key))
    })?;
    Ok(rest[..end].to_string())
}

fn parse_bool_field(header: &str, key: &str) -> Result<bool> {
    let rest = field_start(header, key)?;
    if rest.starts_with("True") {
        Ok(true)
    } else if rest.starts_with("False") {
        Ok(false)
    } else {
        Err(NpyConvError::TypeMismatch(format!(
            "NPY header field '{}' is not a boolean",
            key
        )))
    }
}

fn parse_shape_field(header: &str, key: &str) -> Result<Vec<usize>> {
    let rest = field_start(header, key)?;
    let rest = rest.strip_prefix('(').ok_or_else(|| {
        NpyConvError::TypeMismatch(format!("NPY header field '{}' is not a tuple", key))
    })?;
    let end = rest.find(')').ok_or_else(|| {
        NpyConvError::TypeMismatch(format!("NPY header field '{}' is unterminated", key))
    })?;

    let mut shape = Vec::new();
    for part in rest[..end].split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let dim = part.parse::<usize>().map_err(|_| {
            NpyConvError::TypeMismatch(format!("invalid dimension '{}' in NPY shape", part))
        })?;
        shape.push(dim);
    }
    Ok(shape)
}
