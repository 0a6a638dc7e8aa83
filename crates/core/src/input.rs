//! Reading point sets from text.
//!
//! One point per line, `x` and `y` separated by a comma, whitespace, or
//! both. Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use crate::error::{PairError, Result};
use crate::geometry::Point;

/// Parse a point list. Errors report the 1-based line number.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        points.push(parse_line(line, idx + 1)?);
    }
    Ok(points)
}

/// Read and parse a point file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    parse_points(&text)
}

fn parse_line(line: &str, line_no: usize) -> Result<Point> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let x = parse_coord(fields.next(), "x", line_no)?;
    let y = parse_coord(fields.next(), "y", line_no)?;
    if let Some(extra) = fields.next() {
        return Err(PairError::Parse {
            line: line_no,
            msg: format!("unexpected trailing field {:?}", extra),
        });
    }
    Ok(Point::new(x, y))
}

fn parse_coord(field: Option<&str>, axis: &str, line_no: usize) -> Result<f64> {
    let field = field.ok_or_else(|| PairError::Parse {
        line: line_no,
        msg: format!("missing {} coordinate", axis),
    })?;
    field.parse::<f64>().map_err(|_| PairError::Parse {
        line: line_no,
        msg: format!("invalid {} coordinate {:?}", axis, field),
    })
}
