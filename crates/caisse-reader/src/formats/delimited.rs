use crate::errors::ReaderError;
use crate::formats::common::{build_sheet, clean_cell};
use crate::model::RawSheet;
use crate::registry::SheetReader;

pub struct DelimitedReader;

impl DelimitedReader {
    const NAME: &'static str = "DELIMITED_TEXT";
}

impl SheetReader for DelimitedReader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn read(&self, content: &[u8]) -> Result<RawSheet, ReaderError> {
        let text = std::str::from_utf8(content).map_err(|_| ReaderError::FormatMismatch {
            reader: Self::NAME,
            reason: "content is not valid UTF-8 text".to_string(),
        })?;

        let delimiter = detect_delimiter(text);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let header = records
            .next()
            .ok_or(ReaderError::FormatMismatch {
                reader: Self::NAME,
                reason: "file is empty".to_string(),
            })?
            .map_err(|err| ReaderError::Csv {
                reader: Self::NAME,
                source: err,
            })?;

        if header.len() < 2 {
            return Err(ReaderError::FormatMismatch {
                reader: Self::NAME,
                reason: format!(
                    "expected a delimited header row, found {} field(s)",
                    header.len()
                ),
            });
        }

        let headers: Vec<Option<String>> = header.iter().map(clean_cell).collect();

        let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for record in records {
            let record = record.map_err(|err| ReaderError::Csv {
                reader: Self::NAME,
                source: err,
            })?;
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(record.get(idx).and_then(clean_cell));
            }
        }

        build_sheet(Self::NAME, headers, columns)
    }
}

// French spreadsheet exports commonly use ';' as the field separator.
fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or("");
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}
