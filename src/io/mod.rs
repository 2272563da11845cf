//! Point-list text files.
//!
//! One point per line, formatted `(x, y, z)`. The parser strips
//! parentheses and whitespace and requires exactly three numeric fields
//! per line; anything else fails with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PointFileError;
use crate::math::Point3;

/// Reads a point list from a text file.
///
/// # Errors
///
/// Returns [`PointFileError::Io`] if the file cannot be read, or
/// [`PointFileError::InvalidPoint`] for a line that does not parse as
/// three comma-separated coordinates.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point3>, PointFileError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let cleaned = line.trim().replace(['(', ')'], "");

        let mut coords = [0.0f64; 3];
        let fields: Vec<&str> = cleaned.split(',').collect();
        if fields.len() != 3 {
            return Err(PointFileError::InvalidPoint {
                line: index + 1,
                content: line,
            });
        }
        for (slot, field) in fields.iter().enumerate() {
            coords[slot] = field.trim().parse().map_err(|_| PointFileError::InvalidPoint {
                line: index + 1,
                content: line.clone(),
            })?;
        }

        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(points)
}

/// Writes a point list to a text file, one `(x, y, z)` per line.
///
/// # Errors
///
/// Returns [`PointFileError::Io`] if the file cannot be written.
pub fn write_points(path: impl AsRef<Path>, points: &[Point3]) -> Result<(), PointFileError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for point in points {
        writeln!(writer, "({}, {}, {})", point.x, point.y, point.z)?;
    }
    writer.flush()?;

    Ok(())
}
