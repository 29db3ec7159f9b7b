pub mod commands;
pub mod error;
pub mod trace_init;

pub use error::CliError;
