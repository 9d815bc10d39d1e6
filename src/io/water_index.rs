// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of a reader for files listing water residues retained in each frame of a reduced trajectory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ParseIndexError;

/// Read a file containing indices of water residues of the full trajectory
/// that are kept in the reduced trajectory.
///
/// ## Returns
/// - Vector of residue indices for each frame if parsing was successful.
/// - `ParseIndexError` if the file does not exist or could not be parsed.
///
/// ## Example
/// Each line of the file corresponds to one frame:
/// ```text
/// # water residue indices
/// 3 5
/// 4.000000000000000000e+00 5.000000000000000000e+00
/// ```
/// ```no_run
/// use hbfreq_rs::io::water_index::read_water_indices;
///
/// let rows = read_water_indices("water_indices.dat").unwrap();
/// assert_eq!(rows, vec![vec![3, 5], vec![4, 5]]);
/// ```
///
/// ## Notes
/// - Empty lines and lines starting with `#` are skipped.
/// - Values written as floating point numbers are truncated to integers.
/// - Rows do not need to have the same length.
pub fn read_water_indices(filename: impl AsRef<Path>) -> Result<Vec<Vec<usize>>, ParseIndexError> {
    let file = File::open(filename.as_ref())
        .map_err(|_| ParseIndexError::FileNotFound(Box::from(filename.as_ref())))?;

    let mut rows = Vec::new();
    for raw_line in BufReader::new(file).lines() {
        let line =
            raw_line.map_err(|_| ParseIndexError::LineNotFound(Box::from(filename.as_ref())))?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        rows.push(parse_index_line(trimmed)?);
    }

    log::debug!(
        "Read water residue indices for {} frames from '{}'.",
        rows.len(),
        filename.as_ref().display()
    );

    Ok(rows)
}

/// Parse a single line of the file as a list of residue indices.
fn parse_index_line(line: &str) -> Result<Vec<usize>, ParseIndexError> {
    line.split_whitespace()
        .map(|raw| parse_index(raw).ok_or_else(|| ParseIndexError::ParseLineErr(line.to_owned())))
        .collect()
}

/// Parse a residue index written either as an integer or as a floating point number.
fn parse_index(raw: &str) -> Option<usize> {
    if let Ok(value) = raw.parse::<usize>() {
        return Some(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value < usize::MAX as f64 => {
            Some(value.trunc() as usize)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_integers() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3 5\n4 5\n\n3 4 5").unwrap();

        let rows = read_water_indices(file.path()).unwrap();
        assert_eq!(rows, vec![vec![3, 5], vec![4, 5], vec![3, 4, 5]]);
    }

    #[test]
    fn read_floats() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "# saved by numpy\n3.000000000000000000e+00 5.000000000000000000e+00\n1.2e+01 7.0"
        )
        .unwrap();

        let rows = read_water_indices(file.path()).unwrap();
        assert_eq!(rows, vec![vec![3, 5], vec![12, 7]]);
    }

    #[test]
    fn read_nonexistent() {
        match read_water_indices("this_file_does_not_exist.dat") {
            Err(ParseIndexError::FileNotFound(_)) => (),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn read_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3 5\n4 five").unwrap();

        match read_water_indices(file.path()) {
            Err(ParseIndexError::ParseLineErr(line)) => assert_eq!(line, "4 five"),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn read_negative() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3 -5").unwrap();

        assert!(read_water_indices(file.path()).is_err());
    }

    #[test]
    fn parse_special_values() {
        assert_eq!(parse_index("17"), Some(17));
        assert_eq!(parse_index("17.9"), Some(17));
        assert_eq!(parse_index("nan"), None);
        assert_eq!(parse_index("inf"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1e300"), None);
        assert_eq!(parse_index("1.8446744073709552e19"), None);
    }

    #[test]
    fn read_too_large() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3.0 5.0
4.0 1.0e+300").unwrap();

        match read_water_indices(file.path()) {
            Err(ParseIndexError::ParseLineErr(line)) => assert_eq!(line, "4.0 1.0e+300"),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }
}
