mod common;
mod delimited;
mod xlsx;

pub use delimited::DelimitedReader;
pub use xlsx::XlsxReader;
