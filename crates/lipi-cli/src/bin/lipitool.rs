use clap::{Parser, Subcommand};

use lipi_cli::commands::{accuracy_ops, config_ops, convert_ops, corpus_ops, guide_ops};
use lipi_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "lipitool", about = "Phonetic Telugu transliteration tool")]
struct Cli {
    /// Custom symbol table TOML (default: built-in table)
    #[arg(long, global = true)]
    table: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin line by line when no text is given)
    Convert {
        /// Romanized text
        text: Vec<String>,
    },
    /// Show how each span of the input was rendered
    Explain {
        /// Romanized text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the phonetic cheat-sheet
    Guide,
    /// Transliterate a file of lines into a JSONL corpus
    Corpus {
        /// Input file (one entry per line, '#' comments skipped)
        input_file: String,
        /// Output JSONL file
        output_file: String,
    },
    /// Run transliteration accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default symbol table as TOML
    TableExport,
    /// Validate a custom symbol table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let table = || config_ops::load_table(cli.table.as_deref());

    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(&table(), &text),
        Command::Explain { text, json } => convert_ops::explain_cmd(&table(), &text, json),
        Command::Guide => guide_ops::guide_cmd(&table()),
        Command::Corpus {
            input_file,
            output_file,
        } => corpus_ops::corpus_cmd(&table(), &input_file, &output_file),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(
            &table(),
            &corpus_file,
            category.as_deref(),
            verbose,
            json,
        ),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
    }
}
