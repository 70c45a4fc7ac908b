use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolbarError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
}
