// src/cli/mod.rs
// Command-line front end: load a recognized table, apply edits, export it.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::tables::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "gridmend")]
#[command(about = "Edit tables produced by a table recognizer and export them as TSV/CSV", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load recognizer output, apply edits and export the result
    Edit {
        /// Recognizer JSON document
        input: PathBuf,

        /// Replace a cell's text, e.g. `--set 0,2=Total` (repeatable)
        #[arg(long = "set", value_name = "ROW,COL=TEXT")]
        cell_edits: Vec<CellEdit>,

        /// Rows to delete, comma separated, indices of the loaded table
        #[arg(long, value_delimiter = ',', value_name = "ROWS")]
        delete_rows: Vec<usize>,

        /// Columns to delete, comma separated, indices of the loaded table
        #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
        delete_columns: Vec<usize>,

        /// Move a row, e.g. `--move-row 0:2` (repeatable, applied after deletions)
        #[arg(long = "move-row", value_name = "FROM:TO")]
        row_moves: Vec<IndexMove>,

        /// Move a column, e.g. `--move-column 3:0` (repeatable, applied after row moves)
        #[arg(long = "move-column", value_name = "FROM:TO")]
        column_moves: Vec<IndexMove>,

        /// Reject documents whose rows have different lengths instead of padding them
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Export an empty grid of the given size
    Blank {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        columns: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the settings file location and values
    Settings {
        /// Overwrite the settings file with defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (defaults to the one in settings)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to this file instead of stdout
    #[arg(long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write a timestamped file into this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// `ROW,COL=TEXT`
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub row: usize,
    pub column: usize,
    pub text: String,
}

impl FromStr for CellEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, text) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ROW,COL=TEXT, got '{}'", s))?;
        let (row, column) = coords
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL before '=', got '{}'", coords))?;
        Ok(Self {
            row: parse_index(row)?,
            column: parse_index(column)?,
            text: text.to_string(),
        })
    }
}

/// `FROM:TO`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMove {
    pub from: usize,
    pub to: usize,
}

impl FromStr for IndexMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
        Ok(Self {
            from: parse_index(from)?,
            to: parse_index(to)?,
        })
    }
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|e| format!("invalid index '{}': {}", s.trim(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_edit() {
        let edit: CellEdit = "2, 1=Net total".parse().unwrap();
        assert_eq!(
            edit,
            CellEdit { row: 2, column: 1, text: "Net total".to_string() }
        );
        let with_equals: CellEdit = "0,0=a=b".parse().unwrap();
        assert_eq!(with_equals.text, "a=b");
        assert!("0=x".parse::<CellEdit>().is_err());
        assert!("-1,0=x".parse::<CellEdit>().is_err());
    }

    #[test]
    fn test_parse_index_move() {
        assert_eq!("0:2".parse::<IndexMove>(), Ok(IndexMove { from: 0, to: 2 }));
        assert!("3".parse::<IndexMove>().is_err());
    }

    #[test]
    fn test_cli_edit_arguments() {
        let cli = Cli::try_parse_from([
            "gridmend",
            "edit",
            "scan.json",
            "--delete-rows",
            "0,2",
            "--move-column",
            "1:0",
            "--set",
            "0,0=Item",
            "--format",
            "csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Edit {
                delete_rows,
                column_moves,
                cell_edits,
                output,
                ..
            } => {
                assert_eq!(delete_rows, vec![0, 2]);
                assert_eq!(column_moves, vec![IndexMove { from: 1, to: 0 }]);
                assert_eq!(cell_edits.len(), 1);
                assert_eq!(output.format, Some(ExportFormat::Csv));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_output_and_output_dir_conflict() {
        let result = Cli::try_parse_from([
            "gridmend", "blank", "--rows", "1", "--columns", "1", "--output", "a.tsv",
            "--output-dir", "out",
        ]);
        assert!(result.is_err());
    }
}
