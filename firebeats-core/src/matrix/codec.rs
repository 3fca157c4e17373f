//! binary layouts for 2-D matrices.
//!
//! integer matrix: `[i32 width][i32 height][i32; width * height]`, row-major.
//! string matrix: `[i32 width][i32 height]` followed by `width * height` cells
//! of `[i32 byte length][utf-8 bytes]`, row-major. the string layout is only
//! used for inspecting run orders by hand.
//!
//! all integers are little-endian. an empty matrix is a `0, 0` header with no
//! payload.
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use super::MatrixError;

const MAX_PREALLOCATION: usize = 4096;
const MAX_EMPTY_ROWS: usize = 1 << 16;

/// writes a rectangular integer matrix.
pub fn write_i32_matrix<W: Write>(writer: &mut W, rows: &[Vec<i32>]) -> Result<(), MatrixError> {
    let (width, height) = dimensions(rows)?;
    write_header(writer, width, height)?;
    for row in rows.iter() {
        for cell in row.iter() {
            writer.write_all(&cell.to_le_bytes())?;
        }
    }
    Ok(())
}

/// reads an integer matrix, requiring exactly `width * height` cells after the header.
pub fn read_i32_matrix<R: Read>(reader: &mut R) -> Result<Vec<Vec<i32>>, MatrixError> {
    let (width, height) = read_header(reader)?;
    let mut rows = Vec::with_capacity(capacity_hint(height));
    for row_idx in 0..height {
        let mut row = Vec::with_capacity(capacity_hint(width));
        for col in 0..width {
            let cell = read_i32(reader).map_err(|e| {
                MatrixError::Decode(format!("payload ended at row {row_idx} column {col}: {e}"))
            })?;
            row.push(cell);
        }
        rows.push(row);
    }
    expect_end(reader)?;
    Ok(rows)
}

/// writes a rectangular matrix of strings, each cell length-prefixed.
pub fn write_string_matrix<W: Write, S: AsRef<str>>(
    writer: &mut W,
    rows: &[Vec<S>],
) -> Result<(), MatrixError> {
    let (width, height) = dimensions(rows)?;
    write_header(writer, width, height)?;
    for row in rows.iter() {
        for cell in row.iter() {
            let bytes = cell.as_ref().as_bytes();
            writer.write_all(&header_value(bytes.len())?.to_le_bytes())?;
            writer.write_all(bytes)?;
        }
    }
    Ok(())
}

pub fn read_string_matrix<R: Read>(reader: &mut R) -> Result<Vec<Vec<String>>, MatrixError> {
    let (width, height) = read_header(reader)?;
    let mut rows = Vec::with_capacity(capacity_hint(height));
    for row_idx in 0..height {
        let mut row = Vec::with_capacity(capacity_hint(width));
        for col in 0..width {
            let cell_err = |msg: String| {
                MatrixError::Decode(format!("cell at row {row_idx} column {col}: {msg}"))
            };
            let len = read_i32(reader).map_err(|e| cell_err(e.to_string()))?;
            let len = u64::try_from(len).map_err(|_| cell_err(format!("negative length {len}")))?;
            let mut buf = vec![];
            let read = reader
                .by_ref()
                .take(len)
                .read_to_end(&mut buf)
                .map_err(|e| cell_err(e.to_string()))?;
            if read as u64 != len {
                return Err(cell_err(format!("expected {len} bytes, found {read}")));
            }
            let cell = String::from_utf8(buf).map_err(|e| cell_err(e.to_string()))?;
            row.push(cell);
        }
        rows.push(row);
    }
    expect_end(reader)?;
    Ok(rows)
}

pub fn write_i32_matrix_file(path: &Path, rows: &[Vec<i32>]) -> Result<(), MatrixError> {
    let mut writer = BufWriter::new(create_file(path)?);
    write_i32_matrix(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

pub fn read_i32_matrix_file(path: &Path) -> Result<Vec<Vec<i32>>, MatrixError> {
    let mut reader = BufReader::new(open_file(path)?);
    read_i32_matrix(&mut reader)
}

pub fn write_string_matrix_file<S: AsRef<str>>(
    path: &Path,
    rows: &[Vec<S>],
) -> Result<(), MatrixError> {
    let mut writer = BufWriter::new(create_file(path)?);
    write_string_matrix(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

pub fn read_string_matrix_file(path: &Path) -> Result<Vec<Vec<String>>, MatrixError> {
    let mut reader = BufReader::new(open_file(path)?);
    read_string_matrix(&mut reader)
}

/// (width, height) of a non-jagged matrix
fn dimensions<T>(rows: &[Vec<T>]) -> Result<(i32, i32), MatrixError> {
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(MatrixError::Jagged {
            row: idx.to_string(),
            found: row.len(),
            expected: width,
        });
    }
    Ok((header_value(width)?, header_value(rows.len())?))
}

fn header_value(value: usize) -> Result<i32, MatrixError> {
    i32::try_from(value).map_err(|_| MatrixError::DimensionOverflow(value))
}

fn write_header<W: Write>(writer: &mut W, width: i32, height: i32) -> Result<(), MatrixError> {
    writer.write_all(&width.to_le_bytes())?;
    writer.write_all(&height.to_le_bytes())?;
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<(usize, usize), MatrixError> {
    let width = read_i32(reader).map_err(|e| MatrixError::Decode(format!("missing width: {e}")))?;
    let height =
        read_i32(reader).map_err(|e| MatrixError::Decode(format!("missing height: {e}")))?;
    let (w, h) = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(MatrixError::Decode(format!(
                "invalid dimensions {width}x{height}"
            )))
        }
    };
    // zero-width rows carry no payload, so their count is bounded here instead
    if w == 0 && h > MAX_EMPTY_ROWS {
        return Err(MatrixError::Decode(format!(
            "header declares {h} rows of width 0, more than {MAX_EMPTY_ROWS}"
        )));
    }
    Ok((w, h))
}

/// preallocation bound for dimensions taken from an unverified header
fn capacity_hint(declared: usize) -> usize {
    declared.min(MAX_PREALLOCATION)
}

fn read_i32<R: Read>(reader: &mut R) -> std::io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn expect_end<R: Read>(reader: &mut R) -> Result<(), MatrixError> {
    let mut extra = [0u8; 1];
    match reader.read(&mut extra)? {
        0 => Ok(()),
        _ => Err(MatrixError::Decode(String::from(
            "unexpected bytes after matrix payload",
        ))),
    }
}

fn create_file(path: &Path) -> Result<File, MatrixError> {
    File::create(path).map_err(|e| MatrixError::File {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn open_file(path: &Path) -> Result<File, MatrixError> {
    File::open(path).map_err(|e| MatrixError::File {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
