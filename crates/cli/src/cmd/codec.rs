//! `asciify encode` and `asciify decode`.
//!
//! Text given on the command line is printed followed by a newline. Text
//! read from stdin is printed exactly as converted, so trailing newlines in
//! the input survive a pipe.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result, bail};
use tracing::debug;

use asciify_lib::escape::{decode, encode};

pub fn cmd_encode(text: Option<String>, all: bool) -> Result<()> {
  match text {
    Some(text) => println!("{}", encode(&text, all)),
    None => {
      let input = read_stdin()?;
      print!("{}", encode(&input, all));
    }
  }
  Ok(())
}

pub fn cmd_decode(text: Option<String>) -> Result<()> {
  match text {
    Some(text) => println!("{}", decode(&text)),
    None => {
      let input = read_stdin()?;
      print!("{}", decode(&input));
    }
  }
  Ok(())
}

fn read_stdin() -> Result<String> {
  let mut stdin = io::stdin();
  if stdin.is_terminal() {
    bail!("No text given. Pass it as an argument or pipe it on stdin.");
  }

  let mut input = String::new();
  stdin
    .read_to_string(&mut input)
    .context("Failed to read UTF-8 text from stdin")?;
  debug!(bytes = input.len(), "read input from stdin");
  Ok(input)
}
