use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, Xlsx};
use chrono::NaiveTime;

use crate::errors::ReaderError;
use crate::formats::common::{build_sheet, clean_cell};
use crate::model::RawSheet;
use crate::registry::SheetReader;

pub struct XlsxReader;

impl XlsxReader {
    const NAME: &'static str = "XLSX";

    fn stringify(cell: &Data) -> Option<String> {
        match cell {
            Data::Empty => None,
            Data::String(s) => clean_cell(s),
            Data::Int(i) => Some(i.to_string()),
            Data::Float(f) => Some(format_float(*f)),
            Data::Bool(b) => Some(b.to_string()),
            Data::DateTime(dt) => stringify_datetime(dt),
            Data::DateTimeIso(s) => clean_cell(s),
            Data::DurationIso(s) => clean_cell(s),
            Data::Error(_) => None,
        }
    }
}

impl SheetReader for XlsxReader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn read(&self, content: &[u8]) -> Result<RawSheet, ReaderError> {
        let cursor = Cursor::new(content);
        let mut workbook = Xlsx::new(cursor).map_err(|err| ReaderError::FormatMismatch {
            reader: Self::NAME,
            reason: format!("not an xlsx workbook: {err}"),
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ReaderError::FormatMismatch {
                reader: Self::NAME,
                reason: "workbook contains no sheets".to_string(),
            })?
            .map_err(|err| ReaderError::Workbook {
                reader: Self::NAME,
                source: err,
            })?;

        let mut rows = range.rows();
        let header_row = rows.next().ok_or(ReaderError::EmptyData {
            reader: Self::NAME,
        })?;
        let headers: Vec<Option<String>> = header_row.iter().map(Self::stringify).collect();

        let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for row in rows {
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(row.get(idx).and_then(Self::stringify));
            }
        }

        build_sheet(Self::NAME, headers, columns)
    }
}

/// Excel stores dates, times and datetimes as one serial number type. A value
/// below 1.0 carries no date part; a midnight time on a real date is rendered
/// date-only so a "date" column concatenates cleanly with a "time" column.
fn stringify_datetime(value: &ExcelDateTime) -> Option<String> {
    let parsed = value.as_datetime()?;
    if value.as_f64() < 1.0 {
        return Some(parsed.time().format("%H:%M:%S").to_string());
    }
    if parsed.time() == NaiveTime::MIN {
        return Some(parsed.date().format("%Y-%m-%d").to_string());
    }
    Some(parsed.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
