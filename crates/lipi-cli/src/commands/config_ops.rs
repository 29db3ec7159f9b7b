use std::fs;
use std::path::Path;
use std::process;

use lipi_core::SymbolTable;

use crate::error::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Read and validate a custom table file.
pub fn read_table(path: &Path) -> Result<SymbolTable, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(SymbolTable::from_toml(&content)?)
}

/// The table selected by `--table`, or the built-in one.
pub fn load_table(file: Option<&str>) -> SymbolTable {
    match file {
        Some(f) => die!(read_table(Path::new(f)), "Error loading table {f}: {}"),
        None => SymbolTable::default(),
    }
}

pub fn table_export() {
    print!("{}", lipi_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let table = die!(read_table(Path::new(file)), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants, virama={}",
        table.vowels().len(),
        table.consonants().len(),
        table.virama()
    );
}
