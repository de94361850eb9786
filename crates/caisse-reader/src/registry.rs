use crate::errors::{ReaderAttempt, ReaderError};
use crate::formats::{DelimitedReader, XlsxReader};
use crate::model::RawSheet;

pub trait SheetReader {
    fn name(&self) -> &'static str;
    fn read(&self, content: &[u8]) -> Result<RawSheet, ReaderError>;
}

pub fn read_sheet(content: &[u8]) -> Result<RawSheet, ReaderError> {
    let xlsx = XlsxReader;
    let delimited = DelimitedReader;
    let readers: [&dyn SheetReader; 2] = [&xlsx, &delimited];
    read_with_readers(content, &readers)
}

pub fn read_with_readers(
    content: &[u8],
    readers: &[&dyn SheetReader],
) -> Result<RawSheet, ReaderError> {
    let mut attempts = Vec::new();

    for reader in readers {
        match reader.read(content) {
            Ok(sheet) => return Ok(sheet),
            Err(ReaderError::FormatMismatch { reason, .. }) => {
                attempts.push(ReaderAttempt::new(reader.name(), reason));
            }
            Err(err) => return Err(err),
        }
    }

    Err(ReaderError::NoMatchingReader { attempts })
}
