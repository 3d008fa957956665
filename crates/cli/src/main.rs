mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::print_error;

/// asciify - convert text to and from \uXXXX escaped ASCII
#[derive(Parser)]
#[command(name = "asciify")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print machine-readable JSON where supported
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Escape non-ASCII characters as \uXXXX tokens
  Encode {
    /// Text to encode (read from stdin when omitted)
    text: Option<String>,

    /// Escape every character, including plain ASCII
    #[arg(short, long)]
    all: bool,
  },

  /// Replace \uXXXX tokens with the characters they name
  Decode {
    /// Text to decode (read from stdin when omitted)
    text: Option<String>,
  },

  /// Convert a UTF-8 file in place or into another file
  Convert {
    /// File to convert
    file: PathBuf,

    /// Decode tokens instead of escaping characters
    #[arg(short, long)]
    decode: bool,

    /// Escape every character, including plain ASCII
    #[arg(short, long, conflicts_with = "decode")]
    all: bool,

    /// Write the result here instead of overwriting FILE
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Show the detected operating system family
  Platform,

  /// Print an encode and a decode example
  Demo,
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(e) = run(cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Encode { text, all } => cmd::cmd_encode(text, all),
    Commands::Decode { text } => cmd::cmd_decode(text),
    Commands::Convert {
      file,
      decode,
      all,
      output,
    } => cmd::cmd_convert(&file, output.as_deref(), decode, all, cli.verbose, cli.json),
    Commands::Platform => cmd::cmd_platform(cli.json),
    Commands::Demo => {
      cmd::cmd_demo();
      Ok(())
    }
  }
}

/// Logs go to stderr so stdout only carries converted text.
fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
