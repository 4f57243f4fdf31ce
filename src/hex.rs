//! Hex-text serialization of pixel grids.
//!
//! This is the interchange format handed to the external filtering stage.
//! The layout is fixed and must stay byte-for-byte stable:
//!
//! ```text
//! M = <rows> N = <cols>
//! ff 00 7f
//! 01 02 03
//! ```
//!
//! One header line, then one line per image row. Every sample is printed as
//! exactly two lowercase hex digits followed by a single space (the trailing
//! space at end of line is part of the format).
//!
//! Decoding is strict: the header must supply both dimensions, every data row
//! must carry exactly `cols` samples, and the number of data rows must equal
//! `rows`. Malformed input fails with [`Error::HexParse`] instead of silently
//! producing a corrupt grid.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Extension appended to hex file stems.
pub const HEX_EXTENSION: &str = "hex";

/// Serialize a grid to hex text.
#[must_use]
pub fn encode(grid: &PixelGrid) -> String {
    // 3 bytes per sample plus the header.
    let mut out = String::with_capacity(grid.sample_count() * 3 + 32);
    let _ = writeln!(out, "M = {} N = {}", grid.rows(), grid.cols());
    for row in grid.samples().chunks_exact(grid.cols()) {
        for sample in row {
            let _ = write!(out, "{sample:02x} ");
        }
        out.push('\n');
    }
    out
}

/// Parse hex text back into a grid.
///
/// # Errors
///
/// Returns [`Error::HexParse`] when the `= <rows> ... = <cols>` header is
/// absent or non-numeric, a dimension is zero, a sample token is not a hex
/// byte, or the data rows don't match the declared shape.
pub fn decode(text: &str) -> Result<PixelGrid> {
    let (rows, after_rows) = dimension_after_equals(text)?;
    let (cols, after_cols) = dimension_after_equals(after_rows)?;
    if rows == 0 || cols == 0 {
        return Err(header_error(format!("zero dimension {rows}x{cols}")));
    }
    let expected = rows
        .checked_mul(cols)
        .ok_or_else(|| header_error(format!("dimensions {rows}x{cols} overflow")))?;

    // Everything before the first newline after the header is header noise;
    // data starts on the following line.
    let data = match after_cols.find('\n') {
        Some(pos) => &after_cols[pos + 1..],
        None => "",
    };
    let base_line = text[..text.len() - data.len()].lines().count();

    // Cap the pre-allocation so a hostile header can't reserve gigabytes.
    let mut samples = Vec::with_capacity(expected.min(1 << 24));
    let mut row_count = 0usize;
    let mut last_line = base_line;
    for (i, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = base_line + 1 + i;
        last_line = line_no;
        if row_count == rows {
            return Err(Error::HexParse {
                line: line_no,
                reason: format!("more data rows than the {rows} declared"),
            });
        }
        let mut count = 0usize;
        for token in line.split_whitespace() {
            count += 1;
            if count > cols {
                return Err(Error::HexParse {
                    line: line_no,
                    reason: format!("row has more than {cols} samples"),
                });
            }
            let byte = u8::from_str_radix(token, 16).map_err(|_| Error::HexParse {
                line: line_no,
                reason: format!("invalid hex byte {token:?}"),
            })?;
            samples.push(byte);
        }
        if count < cols {
            return Err(Error::HexParse {
                line: line_no,
                reason: format!("expected {cols} samples per row, found {count}"),
            });
        }
        row_count += 1;
    }
    if row_count != rows {
        return Err(Error::HexParse {
            line: last_line,
            reason: format!("expected {rows} data rows, found {row_count}"),
        });
    }
    PixelGrid::from_samples(samples, rows, cols)
}

/// Scan forward to the next `'='` and parse the following whitespace-delimited
/// token as a dimension. Returns the value and the remaining input.
fn dimension_after_equals(input: &str) -> Result<(usize, &str)> {
    let eq = input
        .find('=')
        .ok_or_else(|| header_error("missing '=' dimension marker".to_string()))?;
    let rest = input[eq + 1..].trim_start();
    let end = rest
        .find(char::is_whitespace)
        .unwrap_or(rest.len());
    let token = &rest[..end];
    let value = token
        .parse::<usize>()
        .map_err(|_| header_error(format!("invalid dimension token {token:?}")))?;
    Ok((value, &rest[end..]))
}

fn header_error(reason: String) -> Error {
    Error::HexParse { line: 1, reason }
}

/// Path of the hex file for `stem`, with the `.hex` extension appended.
///
/// The extension is appended rather than substituted, so `img.out` maps to
/// `img.out.hex`.
#[must_use]
pub fn hex_path(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_os_string();
    path.push(".");
    path.push(HEX_EXTENSION);
    PathBuf::from(path)
}

/// Serialize `grid` and write it to `<stem>.hex`.
pub fn encode_to_file(grid: &PixelGrid, stem: impl AsRef<Path>) -> Result<()> {
    fs::write(hex_path(stem.as_ref()), encode(grid))?;
    Ok(())
}

/// Read `<stem>.hex` and parse it into a grid.
///
/// # Errors
///
/// Returns [`Error::HexFileNotFound`] when the file does not exist,
/// [`Error::HexParse`] when its content is malformed.
pub fn decode_from_file(stem: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = hex_path(stem.as_ref());
    let text = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::HexFileNotFound { path: path.clone() }
        } else {
            Error::Io(e)
        }
    })?;
    decode(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let grid = PixelGrid::from_samples(vec![255, 0, 127, 1, 2, 3], 2, 3).unwrap();
        assert_eq!(encode(&grid), "M = 2 N = 3\nff 00 7f \n01 02 03 \n");
    }

    #[test]
    fn test_decode_known_layout() {
        let text = "M = 2 N = 3\nff 00 7f \n01 02 03 \n";
        let grid = decode(text).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.samples(), &[255, 0, 127, 1, 2, 3]);
        // Re-encoding must reproduce byte-identical text.
        assert_eq!(encode(&grid), text);
    }

    #[test]
    fn test_roundtrip() {
        let samples: Vec<u8> = (0..19 * 7).map(|i| (i * 13 % 256) as u8).collect();
        let grid = PixelGrid::from_samples(samples, 19, 7).unwrap();
        assert_eq!(decode(&encode(&grid)).unwrap(), grid);
    }

    #[test]
    fn test_decode_without_equals_fails_fast() {
        let err = decode("no header here\n00 01\n").unwrap_err();
        assert!(matches!(err, Error::HexParse { line: 1, .. }));
    }

    #[test]
    fn test_decode_single_equals_fails() {
        assert!(matches!(
            decode("M = 2\n00 00\n"),
            Err(Error::HexParse { .. })
        ));
    }

    #[test]
    fn test_decode_non_numeric_dimension() {
        assert!(matches!(
            decode("M = two N = 3\n"),
            Err(Error::HexParse { .. })
        ));
    }

    #[test]
    fn test_decode_zero_dimension() {
        assert!(matches!(
            decode("M = 0 N = 3\n"),
            Err(Error::HexParse { .. })
        ));
    }

    #[test]
    fn test_decode_short_row() {
        let err = decode("M = 2 N = 3\nff 00 \n01 02 03 \n").unwrap_err();
        match err {
            Error::HexParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_long_row() {
        let err = decode("M = 1 N = 2\nff 00 7f \n").unwrap_err();
        assert!(matches!(err, Error::HexParse { line: 2, .. }));
    }

    #[test]
    fn test_decode_missing_rows() {
        assert!(matches!(
            decode("M = 3 N = 2\nff 00 \n01 02 \n"),
            Err(Error::HexParse { .. })
        ));
    }

    #[test]
    fn test_decode_extra_rows() {
        assert!(matches!(
            decode("M = 1 N = 2\nff 00 \n01 02 \n"),
            Err(Error::HexParse { line: 3, .. })
        ));
    }

    #[test]
    fn test_decode_invalid_token() {
        let err = decode("M = 1 N = 2\nff zz \n").unwrap_err();
        assert!(matches!(err, Error::HexParse { line: 2, .. }));
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let grid = decode("M = 2 N = 2\n\nff 00 \n\n01 02 \n\n").unwrap();
        assert_eq!(grid.samples(), &[255, 0, 1, 2]);
    }

    #[test]
    fn test_hex_path_appends_extension() {
        assert_eq!(hex_path(Path::new("inputImage")), PathBuf::from("inputImage.hex"));
        assert_eq!(hex_path(Path::new("img.out")), PathBuf::from("img.out.hex"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("frame");
        let grid = PixelGrid::from_samples(vec![9, 8, 7, 6], 2, 2).unwrap();
        encode_to_file(&grid, &stem).unwrap();
        assert!(stem.with_extension("hex").exists());
        assert_eq!(decode_from_file(&stem).unwrap(), grid);
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_from_file(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::HexFileNotFound { .. }));
    }
}
