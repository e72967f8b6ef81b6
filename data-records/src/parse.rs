use data_error::{DataError, Result};

use crate::chunk::{Record, RECORD_WIDTH};

/// Parse one line of dumped text.
///
/// Returns `Ok(None)` for lines that are not records, such as blank lines
/// or the wrapper of a const declaration. Line numbers in errors are left
/// at 0; [`parse_records`] fills them in.
pub fn parse_line(line: &str) -> Result<Option<Record>> {
    let line = line.trim();
    let Some(body) = line.strip_prefix('(') else {
        return Ok(None);
    };

    let (inner, tail) = body
        .split_once(')')
        .ok_or_else(|| parse_error("missing closing parenthesis"))?;
    if !matches!(tail.trim(), "" | ",") {
        return Err(parse_error(format!(
            "unexpected '{}' after record",
            tail.trim()
        )));
    }
    if inner.trim().is_empty() {
        return Err(parse_error("record has no values"));
    }

    let values = inner
        .split(',')
        .map(parse_value)
        .collect::<Result<Vec<u8>>>()?;

    Record::new(&values).map(Some).ok_or_else(|| {
        parse_error(format!(
            "record has {} values, at most {} allowed",
            values.len(),
            RECORD_WIDTH
        ))
    })
}

/// Parse every record in `text`, in order
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let record = parse_line(line).map_err(|e| e.at_line(i + 1))?;
        records.extend(record);
    }
    Ok(records)
}

/// Decimal digits only; `u8::from_str` would also take a leading `+`
fn parse_value(field: &str) -> Result<u8> {
    let field = field.trim();
    if !field.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(parse_error(format!("'{}' is not a byte value", field)));
    }
    Ok(field.parse::<u8>()?)
}

fn parse_error(reason: impl Into<String>) -> DataError {
    DataError::Parse {
        line: 0,
        reason: reason.into(),
    }
}
