use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ReaderAttempt {
    pub reader: &'static str,
    pub message: String,
}

impl ReaderAttempt {
    pub fn new(reader: &'static str, message: impl Into<String>) -> Self {
        Self {
            reader,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReaderAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reader, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("{reader} format mismatch: {reason}")]
    FormatMismatch {
        reader: &'static str,
        reason: String,
    },

    #[error("{reader} workbook error: {source}")]
    Workbook {
        reader: &'static str,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("{reader} CSV error: {source}")]
    Csv {
        reader: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{reader} sheet construction failed: {message}")]
    Sheet {
        reader: &'static str,
        message: String,
    },

    #[error("{reader} sheet did not contain any data rows")]
    EmptyData { reader: &'static str },

    #[error("no reader recognized this file; attempts: {attempts:?}")]
    NoMatchingReader { attempts: Vec<ReaderAttempt> },
}
