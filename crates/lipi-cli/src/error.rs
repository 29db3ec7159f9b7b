use lipi_core::TableConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid symbol table: {0}")]
    Table(#[from] TableConfigError),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp error: {0}")]
    Time(#[from] time::error::Format),
    #[error("no cases match the given filters")]
    NoCases,
}
