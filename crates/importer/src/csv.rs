//! Minimal CSV reader for the registry export.
//!
//! Covers the RFC 4180 subset the spreadsheet export produces: a header
//! row, comma separators, CRLF or LF line endings, and double-quoted
//! fields with `""` escapes (quoted fields may contain commas and
//! newlines). Nothing in this crate needs a streaming reader; the whole
//! file is parsed in one pass.

use armurerie_core::error::CoreError;

/// A parsed CSV file: header row plus data rows.
#[derive(Debug)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`column`](Self::column) but absence is an error naming the column.
    pub fn require_column(&self, name: &str) -> Result<usize, CoreError> {
        self.column(name)
            .ok_or_else(|| CoreError::Validation(format!("missing CSV column '{name}'")))
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Parse CSV text into a table. The first record is the header row;
/// every data row must have exactly as many fields as the header.
pub fn parse(input: &str) -> Result<CsvTable, CoreError> {
    let mut records = parse_records(input)?;
    if records.is_empty() {
        return Err(CoreError::Validation("CSV file has no header row".into()));
    }
    let headers = records.remove(0);

    for (i, row) in records.iter().enumerate() {
        if row.len() != headers.len() {
            return Err(CoreError::Validation(format!(
                "CSV row {} has {} fields, expected {}",
                i + 2,
                row.len(),
                headers.len()
            )));
        }
    }

    Ok(CsvTable {
        headers,
        rows: records,
    })
}

fn parse_records(input: &str) -> Result<Vec<Vec<String>>, CoreError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !field_started => {
                in_quotes = true;
                field_started = true;
            }
            '"' => {
                return Err(CoreError::Validation(
                    "unexpected quote inside unquoted CSV field".into(),
                ));
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' => {
                // Swallow the \r of a \r\n pair; a lone \r is treated
                // the same as a newline below.
                if chars.peek() == Some(&'\n') {
                    continue;
                }
                end_record(&mut records, &mut record, &mut field, &mut field_started);
            }
            '\n' => {
                end_record(&mut records, &mut record, &mut field, &mut field_started);
            }
            _ => {
                field.push(c);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(CoreError::Validation("unterminated quoted CSV field".into()));
    }
    // Final record without trailing newline.
    if field_started || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

fn end_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    field_started: &mut bool,
) {
    // A bare newline between records (blank line) produces nothing.
    if record.is_empty() && field.is_empty() && !*field_started {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
    *field_started = false;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_rows() {
        let table = parse("a,b,c\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table.column("b"), Some(1));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn quoted_fields_with_commas_and_quotes() {
        let table = parse("name,notes\n\"Dupont, Jean\",\"dit \"\"le patron\"\"\"\n").unwrap();
        assert_eq!(table.rows()[0][0], "Dupont, Jean");
        assert_eq!(table.rows()[0][1], "dit \"le patron\"");
    }

    #[test]
    fn quoted_field_with_newline() {
        let table = parse("a,b\n\"line1\nline2\",x\n").unwrap();
        assert_eq!(table.rows()[0][0], "line1\nline2");
    }

    #[test]
    fn crlf_line_endings() {
        let table = parse("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.rows(), &[vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn missing_trailing_newline() {
        let table = parse("a,b\n1,2").unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn empty_fields_preserved() {
        let table = parse("a,b,c\n1,,3\n").unwrap();
        assert_eq!(table.rows()[0][1], "");
    }

    #[test]
    fn ragged_row_rejected() {
        let err = parse("a,b\n1,2,3\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 2"), "unexpected message: {msg}");
    }

    #[test]
    fn unterminated_quote_rejected() {
        assert!(parse("a,b\n\"oops,2\n").is_err());
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = parse("a,b\n1,2\n").unwrap();
        assert!(table.require_column("a").is_ok());
        assert!(table.require_column("Prix").is_err());
    }
}
