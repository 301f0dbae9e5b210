use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure (DNS, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input sheet lacks a required column
    #[error("input file must have a '{0}' column")]
    MissingColumn(String),

    /// Text-classification service failed or answered with something unusable
    #[error("LLM error: {0}")]
    Llm(String),

    /// Sheet path with an extension other than csv, tsv or xlsx
    #[error("unsupported sheet format: {0} (expected .csv, .tsv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("failed to read workbook: {0}")]
    XlsxRead(#[from] calamine::Error),

    #[error("failed to write workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
