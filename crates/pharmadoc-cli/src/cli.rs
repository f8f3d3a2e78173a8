//! CLI argument definitions for the document generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pharmadoc_model::{DocumentClass, DocumentKind, SystemCategory};
use pharmadoc_report::Selection;

#[derive(Parser)]
#[command(
    name = "pharmadoc",
    version,
    about = "Pharmaceutical Document Generator - Validation and QMS document templates",
    long_about = "Generate plain-text validation and quality management documents for a\n\
                  computerized system.\n\n\
                  Documents are filled from per-category templates (HPLC, LIMS, ...) and\n\
                  written as .txt files ready for review and signature."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate one or more documents for a system.
    Generate(GenerateArgs),

    /// List system categories and their template records.
    Categories,

    /// List the document catalog.
    Documents(DocumentsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Name of the system. Used verbatim in the documents.
    #[arg(long = "system", short = 's', value_name = "NAME", default_value = "HPLC-01")]
    pub system_name: String,

    /// System category (code such as LIMS or the full label).
    #[arg(long = "category", short = 'c', value_name = "CATEGORY", default_value = "HPLC")]
    pub category: SystemCategory,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Document date as YYYY-MM-DD (default: today).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Directory for generated .txt files (default: current directory).
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print documents to stdout instead of writing files.
    #[arg(long = "stdout", conflicts_with = "output_dir")]
    pub stdout: bool,
}

/// Which documents to generate; exactly one must be given.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SelectionArgs {
    /// A single document type (code such as vmp, urs, dev, or its title).
    #[arg(long = "document", short = 'd', value_name = "TYPE")]
    pub document: Option<DocumentKind>,

    /// Every document of a class (Validation or QMS).
    #[arg(long = "class", value_name = "CLASS")]
    pub class: Option<DocumentClass>,

    /// All documents merged into one file.
    #[arg(long = "merged")]
    pub merged: bool,
}

impl SelectionArgs {
    pub fn selection(&self) -> Selection {
        match (self.document, self.class) {
            (Some(kind), _) => Selection::Single(kind),
            (None, Some(class)) => Selection::Class(class),
            (None, None) => Selection::Merged,
        }
    }
}

#[derive(Parser)]
pub struct DocumentsArgs {
    /// Print the catalog as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pharmadoc").chain(args.iter().copied()))
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match parse(args).unwrap().command {
            Command::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_single_document() {
        let args = generate_args(&[
            "generate", "--system", "HPLC-01", "--category", "hplc", "--document", "vmp",
            "--date", "2024-03-15",
        ]);
        assert_eq!(args.system_name, "HPLC-01");
        assert_eq!(args.category, SystemCategory::Hplc);
        assert_eq!(args.selection.selection(), Selection::Single(DocumentKind::Vmp));
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn generate_class_and_merged() {
        let args = generate_args(&["generate", "-s", "X", "--class", "qms"]);
        assert_eq!(args.category, SystemCategory::Hplc);
        assert_eq!(args.selection.selection(), Selection::Class(DocumentClass::Qms));

        let args = generate_args(&["generate", "-s", "X", "--merged", "--stdout"]);
        assert_eq!(args.selection.selection(), Selection::Merged);
        assert!(args.stdout);
    }

    #[test]
    fn selection_is_required_and_exclusive() {
        assert!(parse(&["generate", "-s", "X"]).is_err());
        assert!(parse(&["generate", "-s", "X", "--merged", "--document", "urs"]).is_err());
    }

    #[test]
    fn invalid_category_is_rejected() {
        assert!(parse(&["generate", "-s", "X", "-c", "PLC", "--merged"]).is_err());
    }

    #[test]
    fn stdout_conflicts_with_output_dir() {
        assert!(parse(&["generate", "-s", "X", "--merged", "--stdout", "-o", "out"]).is_err());
    }

    #[test]
    fn generate_defaults_to_hplc_system() {
        let args = generate_args(&["generate", "--document", "urs"]);
        assert_eq!(args.system_name, "HPLC-01");
        assert_eq!(args.category, SystemCategory::Hplc);
        assert_eq!(args.date, None);
        assert!(!args.stdout);
    }

    #[test]
    fn log_flags_are_global() {
        let cli = parse(&["categories", "--log-timestamps", "--log-target"]).unwrap();
        assert!(cli.log_timestamps);
        assert!(cli.log_target);

        let cli = parse(&["documents"]).unwrap();
        assert!(!cli.log_timestamps);
        assert!(!cli.log_target);
    }
}
