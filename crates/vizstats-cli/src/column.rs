//! Numeric column extraction from JSON rows.
//!
//! Input documents are either an array of numbers or an array of objects (the
//! records a chart layer fetches). Missing, `null` and non-finite cells are
//! dropped here so the statistics only ever see finite values.

use serde_json::Value;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum ExtractError {
    #[display("expected a JSON array of rows")]
    NotAnArray,
    #[display("row {index} is an object; pass --field to select a column")]
    FieldRequired { index: usize },
    #[display("row {index} is not an object, cannot select field '{field}'")]
    NotAnObject { index: usize, field: String },
    #[display("value at row {index} is not a number: {value}")]
    NotNumeric { index: usize, value: String },
    #[display("field '{field}' not found in any row")]
    MissingField { field: String },
}

/// Finite values of one column plus the number of rows that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Column {
    pub values: Vec<f64>,
    pub dropped: usize,
}

/// Extracts a numeric column from `rows`.
///
/// Without `field` every row must be a number (or `null`). With `field` every
/// row must be an object, and at least one of them must carry the field.
pub(crate) fn extract_column(rows: &Value, field: Option<&str>) -> Result<Column, ExtractError> {
    let rows = rows.as_array().ok_or(ExtractError::NotAnArray)?;

    let mut column = Column::default();
    let mut field_seen = false;
    for (index, row) in rows.iter().enumerate() {
        let cell = match field {
            None if row.is_object() => return Err(ExtractError::FieldRequired { index }),
            None => Some(row),
            Some(field) => {
                let cell = object_field(index, row, field)?;
                field_seen |= cell.is_some();
                cell
            }
        };
        match cell.map(|cell| parse_cell(index, cell)).transpose()?.flatten() {
            Some(value) => column.values.push(value),
            None => column.dropped += 1,
        }
    }

    if let Some(field) = field
        && !rows.is_empty()
        && !field_seen
    {
        return Err(ExtractError::MissingField {
            field: field.to_owned(),
        });
    }
    Ok(column)
}

/// Extracts paired `(x, y)` columns, keeping only rows where both are finite.
pub(crate) fn extract_pairs(
    rows: &Value,
    x_field: &str,
    y_field: &str,
) -> Result<(Vec<f64>, Vec<f64>, usize), ExtractError> {
    let rows = rows.as_array().ok_or(ExtractError::NotAnArray)?;

    let mut xs = vec![];
    let mut ys = vec![];
    let mut dropped = 0;
    let (mut x_seen, mut y_seen) = (false, false);
    for (index, row) in rows.iter().enumerate() {
        let x = object_field(index, row, x_field)?;
        let y = object_field(index, row, y_field)?;
        x_seen |= x.is_some();
        y_seen |= y.is_some();

        let x = x.map(|cell| parse_cell(index, cell)).transpose()?.flatten();
        let y = y.map(|cell| parse_cell(index, cell)).transpose()?.flatten();
        if let (Some(x), Some(y)) = (x, y) {
            xs.push(x);
            ys.push(y);
        } else {
            dropped += 1;
        }
    }

    if !rows.is_empty() {
        for (field, seen) in [(x_field, x_seen), (y_field, y_seen)] {
            if !seen {
                return Err(ExtractError::MissingField {
                    field: field.to_owned(),
                });
            }
        }
    }
    Ok((xs, ys, dropped))
}

fn object_field<'a>(
    index: usize,
    row: &'a Value,
    field: &str,
) -> Result<Option<&'a Value>, ExtractError> {
    let object = row.as_object().ok_or_else(|| ExtractError::NotAnObject {
        index,
        field: field.to_owned(),
    })?;
    Ok(object.get(field))
}

/// Parses one cell. `Ok(None)` means the cell is empty or not finite.
fn parse_cell(index: usize, cell: &Value) -> Result<Option<f64>, ExtractError> {
    let value = match cell {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_f64(),
        // CSV-derived records carry numbers as strings
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => Some(text.trim().parse::<f64>().map_err(|_| {
            ExtractError::NotNumeric {
                index,
                value: cell.to_string(),
            }
        })?),
        _ => {
            return Err(ExtractError::NotNumeric {
                index,
                value: cell.to_string(),
            });
        }
    };
    Ok(value.filter(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_plain_number_array() {
        let column = extract_column(&json!([1, 2.5, null, -3]), None).unwrap();
        assert_eq!(column.values, vec![1.0, 2.5, -3.0]);
        assert_eq!(column.dropped, 1);
    }

    #[test]
    fn test_object_rows_with_field() {
        let rows = json!([
            {"state": "AK", "prevalence": 12.5},
            {"state": "AL", "prevalence": "14.1"},
            {"state": "AR"},
            {"state": "AZ", "prevalence": ""},
            {"state": "CA", "prevalence": "NaN"},
            {"state": "CO", "prevalence": 9}
        ]);
        let column = extract_column(&rows, Some("prevalence")).unwrap();
        assert_eq!(column.values, vec![12.5, 14.1, 9.0]);
        assert_eq!(column.dropped, 3);
    }

    #[test]
    fn test_object_rows_without_field_is_an_error() {
        let err = extract_column(&json!([{"a": 1}]), None).unwrap_err();
        assert!(matches!(err, ExtractError::FieldRequired { index: 0 }));
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let err = extract_column(&json!([{"a": 1}, {"a": "high"}]), Some("a")).unwrap_err();
        assert!(matches!(err, ExtractError::NotNumeric { index: 1, .. }));
        assert_eq!(err.to_string(), "value at row 1 is not a number: \"high\"");

        let err = extract_column(&json!([1, true]), None).unwrap_err();
        assert!(matches!(err, ExtractError::NotNumeric { index: 1, .. }));
    }

    #[test]
    fn test_missing_field_everywhere_is_an_error() {
        let err = extract_column(&json!([{"a": 1}, {"a": 2}]), Some("b")).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField { .. }));
        assert_eq!(err.to_string(), "field 'b' not found in any row");
    }

    #[test]
    fn test_non_array_document() {
        let err = extract_column(&json!({"values": [1, 2]}), None).unwrap_err();
        assert!(matches!(err, ExtractError::NotAnArray));
    }

    #[test]
    fn test_empty_array_is_an_empty_column() {
        assert_eq!(
            extract_column(&json!([]), Some("a")).unwrap(),
            Column::default()
        );
    }

    #[test]
    fn test_pairs_drop_incomplete_rows() {
        let rows = json!([
            {"income": 40, "obesity": 30.1},
            {"income": 55, "obesity": null},
            {"income": "61", "obesity": 25.4},
            {"obesity": 28.0}
        ]);
        let (xs, ys, dropped) = extract_pairs(&rows, "income", "obesity").unwrap();
        assert_eq!(xs, vec![40.0, 61.0]);
        assert_eq!(ys, vec![30.1, 25.4]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_pairs_require_objects() {
        let err = extract_pairs(&json!([1, 2]), "x", "y").unwrap_err();
        assert!(matches!(err, ExtractError::NotAnObject { index: 0, .. }));
    }

    #[test]
    fn test_pairs_missing_field() {
        let err = extract_pairs(&json!([{"x": 1}]), "x", "y").unwrap_err();
        assert!(matches!(err, ExtractError::MissingField { ref field } if field == "y"));
    }
}
