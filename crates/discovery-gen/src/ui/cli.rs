use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use discovery_gen::generator::samples::DEFAULT_SEED;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "discovery-gen")]
#[command(author, version, about = "Discovery schema to Rust type resolver", styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Discovery schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all named and nested schemas
  Schemas {
    /// Path to the Discovery JSON document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// List every schema property with its resolved Rust type and example values
  Fields(FieldsCommand),
}

#[derive(Args, Debug, Clone)]
pub struct FieldsCommand {
  /// Path to the Discovery JSON document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Seed for the sample value generator
  #[arg(long, value_name = "SEED", default_value_t = DEFAULT_SEED)]
  pub seed: u64,

  /// Override or add a type mapping (KEY=PATH, e.g. date-time=crate::MyDateTime)
  #[arg(long, value_name = "KEY=PATH")]
  pub customize: Option<Vec<String>>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
