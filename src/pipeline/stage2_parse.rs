use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::input::TableText;
use crate::stats::quadrature;

pub const COLUMN_SEPARATOR: char = '&';
pub const COMMENT_MARKER: char = '%';
pub const NON_PHYSICAL_MARKER: &str = "(MC)";

pub const TOTAL_EXPECTATION_LABEL: &str = "Total background expectation";
pub const TOTAL_SYSTEMATIC_LABEL: &str = "Total background systematic";
pub const MC_STAT_MARKER: &str = "mcstat";

// Magnitude after a `\pm` (or literal `±`) up to the first non-numeric character.
static MAGNITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\\pm|±)\s*([0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)")
        .expect("magnitude pattern is valid")
});

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("row '{label}' not found in {}", .path.display())]
    RowNotFound { label: String, path: PathBuf },
    #[error("cell has no \\pm marker: '{cell}'")]
    MissingMarker { cell: String },
    #[error("cell is not numeric: '{cell}'")]
    InvalidNumber { cell: String },
}

pub fn row_is_data(line: &str) -> bool {
    line.contains(COLUMN_SEPARATOR)
        && !line.trim_start().starts_with(COMMENT_MARKER)
        && !line.contains(NON_PHYSICAL_MARKER)
}

pub fn data_rows<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter(|line| row_is_data(line))
}

/// Splits a data row into its leading label and the per-process cells.
pub fn split_row(line: &str) -> (&str, Vec<&str>) {
    let mut fields = line.trim().split(COLUMN_SEPARATOR);
    let label = fields.next().unwrap_or("").trim();
    (label, fields.collect())
}

/// Unescapes `\_` and drops the `alpha_` nuisance-parameter prefix.
pub fn normalize_label(label: &str) -> String {
    let unescaped = label.trim().replace(r"\_", "_");
    match unescaped.strip_prefix("alpha_") {
        Some(rest) => rest.to_string(),
        None => unescaped,
    }
}

/// `name` matches when it is the whole label or a prefix followed by
/// whitespace ("Top normalization uncertainty"), so "MS" never matches "MSX".
pub fn label_matches(label: &str, name: &str) -> bool {
    let label = normalize_label(label);
    match label.strip_prefix(name) {
        Some("") => true,
        Some(rest) => rest.starts_with(char::is_whitespace),
        None => false,
    }
}

pub fn extract_magnitude(cell: &str) -> Result<f64, ParseError> {
    let Some(caps) = MAGNITUDE.captures(cell) else {
        let cell = cell.trim().to_string();
        return if cell.contains(r"\pm") || cell.contains('±') {
            Err(ParseError::InvalidNumber { cell })
        } else {
            Err(ParseError::MissingMarker { cell })
        };
    };
    caps[1]
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            cell: cell.trim().to_string(),
        })
}

/// Bare number cell such as `$ 75.53 $ \\`.
pub fn parse_plain_value(cell: &str) -> Result<f64, ParseError> {
    let cleaned = cell.replace('$', "").replace(r"\\", "");
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            cell: cell.trim().to_string(),
        })
}

fn row_not_found(table: &TableText, label: &str) -> ParseError {
    ParseError::RowNotFound {
        label: label.to_string(),
        path: table.path.clone(),
    }
}

/// Variation of one systematic: the magnitudes of every background-process
/// column of the first matching row, summed (processes treated as
/// correlated).
pub fn find_named_row(table: &TableText, name: &str) -> Result<f64, ParseError> {
    let line = data_rows(table.lines())
        .find(|line| label_matches(split_row(line).0, name))
        .ok_or_else(|| row_not_found(table, name))?;
    let (_, cells) = split_row(line);
    let mut total = 0.0;
    for cell in cells {
        total += extract_magnitude(cell)?;
    }
    Ok(total)
}

pub fn total_background_yield(table: &TableText) -> Result<f64, ParseError> {
    let line = data_rows(table.lines())
        .find(|line| label_matches(split_row(line).0, TOTAL_EXPECTATION_LABEL))
        .ok_or_else(|| row_not_found(table, TOTAL_EXPECTATION_LABEL))?;
    let (_, cells) = split_row(line);
    let mut total = 0.0;
    for cell in cells {
        total += parse_plain_value(cell)?;
    }
    Ok(total)
}

pub fn total_stat_error(table: &TableText) -> Result<f64, ParseError> {
    quadrature_over_rows(table, MC_STAT_MARKER, |label| {
        label.contains(MC_STAT_MARKER)
    })
}

pub fn total_sys_error(table: &TableText) -> Result<f64, ParseError> {
    quadrature_over_rows(table, TOTAL_SYSTEMATIC_LABEL, |label| {
        label_matches(label, TOTAL_SYSTEMATIC_LABEL)
    })
}

fn quadrature_over_rows<F>(table: &TableText, what: &str, accept: F) -> Result<f64, ParseError>
where
    F: Fn(&str) -> bool,
{
    let mut magnitudes = Vec::new();
    let mut matched = false;
    for line in data_rows(table.lines()) {
        let (label, cells) = split_row(line);
        if !accept(label) {
            continue;
        }
        matched = true;
        for cell in cells {
            magnitudes.push(extract_magnitude(cell)?);
        }
    }
    if !matched {
        return Err(row_not_found(table, what));
    }
    Ok(quadrature(magnitudes))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_parse.rs"]
mod tests;
