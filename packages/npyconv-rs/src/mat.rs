//! MAT-file level 5 writer.
//!
//! Each variable is written as an `miMATRIX` element (single-precision row
//! vector) deflated with zlib and wrapped in an `miCOMPRESSED` element, which
//! is what MATLAB produces with compression enabled. Little-endian
//! throughout.

use crate::error::{NpyConvError, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::Path;

const MI_INT8: u32 = 1;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_SINGLE: u32 = 7;
const MI_MATRIX: u32 = 14;
const MI_COMPRESSED: u32 = 15;

const MX_SINGLE_CLASS: u32 = 7;

const HEADER_TEXT_LEN: usize = 116;
const MAT_VERSION: u16 = 0x0100;
// Reads back as the characters "MI" on a little-endian machine.
const ENDIAN_INDICATOR: u16 = 0x4D49;

/// Persist `{varname: signal, "time": time}` as a compressed MAT-5 file.
///
/// Both arrays must have the same length; the caller pairs them before the
/// export boundary.
pub fn save_mat<P: AsRef<Path>>(
    path: P,
    varname: &str,
    signal: &[f32],
    time: &[f32],
) -> Result<()> {
    if signal.len() != time.len() {
        return Err(NpyConvError::InvalidParameter(format!(
            "signal length {} does not match time length {}",
            signal.len(),
            time.len()
        )));
    }

    let mut out = Vec::new();
    write_file_header(&mut out)?;
    write_compressed_variable(&mut out, varname, signal)?;
    write_compressed_variable(&mut out, "time", time)?;
    std::fs::write(path.as_ref(), &out)?;

    log::debug!(
        "Wrote MAT file {}: '{}' and 'time', {} samples each",
        path.as_ref().display(),
        varname,
        signal.len()
    );
    Ok(())
}

fn write_file_header(out: &mut Vec<u8>) -> Result<()> {
    let description = format!(
        "MATLAB 5.0 MAT-file, Platform: {}, Created by: npyconv {}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    let mut text = description.into_bytes();
    text.resize(HEADER_TEXT_LEN, b' ');
    out.extend_from_slice(&text);
    // Subsystem data offset: unused.
    out.extend_from_slice(&[0u8; 8]);
    out.write_u16::<LittleEndian>(MAT_VERSION)?;
    out.write_u16::<LittleEndian>(ENDIAN_INDICATOR)?;
    Ok(())
}

fn write_compressed_variable(out: &mut Vec<u8>, name: &str, values: &[f32]) -> Result<()> {
    if name.is_empty() || name.len() > 63 {
        return Err(NpyConvError::InvalidParameter(format!(
            "'{}' is not a usable MATLAB variable name",
            name
        )));
    }

    let element = matrix_element(name, values)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&element)?;
    let compressed = encoder.finish()?;

    out.write_u32::<LittleEndian>(MI_COMPRESSED)?;
    out.write_u32::<LittleEndian>(compressed.len() as u32)?;
    out.extend_from_slice(&compressed);
    Ok(())
}

/// Build an `miMATRIX` element holding a `[1, n]` single-precision vector.
fn matrix_element(name: &str, values: &[f32]) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    // Array flags.
    body.write_u32::<LittleEndian>(MI_UINT32)?;
    body.write_u32::<LittleEndian>(8)?;
    body.write_u32::<LittleEndian>(MX_SINGLE_CLASS)?;
    body.write_u32::<LittleEndian>(0)?;

    // Dimensions: a 1 x n row vector.
    body.write_u32::<LittleEndian>(MI_INT32)?;
    body.write_u32::<LittleEndian>(8)?;
    body.write_i32::<LittleEndian>(1)?;
    body.write_i32::<LittleEndian>(values.len() as i32)?;

    // Array name.
    body.write_u32::<LittleEndian>(MI_INT8)?;
    body.write_u32::<LittleEndian>(name.len() as u32)?;
    body.extend_from_slice(name.as_bytes());
    pad_to_8(&mut body);

    // Real part.
    body.write_u32::<LittleEndian>(MI_SINGLE)?;
    body.write_u32::<LittleEndian>((values.len() * 4) as u32)?;
    for &v in values {
        body.write_f32::<LittleEndian>(v)?;
    }
    pad_to_8(&mut body);

    let mut element = Vec::with_capacity(body.len() + 8);
    element.write_u32::<LittleEndian>(MI_MATRIX)?;
    element.write_u32::<LittleEndian>(body.len() as u32)?;
    element.extend_from_slice(&body);
    Ok(element)
}

fn pad_to_8(buf: &mut Vec<u8>) {
    while buf.len() % 8 != 0 {
        buf.push(0);
    }
}
