use std::io::{self, BufRead, Write};
use std::process;

use lipi_core::explain;
use lipi_core::{transliterate_with, SymbolTable};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Transliterate each line of `reader` into `writer`, one line out per line in.
pub fn convert_lines<R: BufRead, W: Write>(
    table: &SymbolTable,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", transliterate_with(table, &line))?;
    }
    writer.flush()
}

pub fn convert_cmd(table: &SymbolTable, text: &[String]) {
    if text.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        die!(
            convert_lines(table, stdin.lock(), stdout.lock()),
            "Error converting stdin: {}"
        );
    } else {
        println!("{}", transliterate_with(table, &text.join(" ")));
    }
}

pub fn explain_cmd(table: &SymbolTable, text: &str, json: bool) {
    let result = explain::explain(table, text);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&result),
            "JSON serialization failed: {}"
        );
        println!("{out}");
    } else {
        print!("{}", explain::format_text(&result));
    }
}
