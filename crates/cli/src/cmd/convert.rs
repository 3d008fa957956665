//! Implementation of the `asciify convert` command.

use std::path::Path;

use anyhow::{Context, Result};

use asciify_lib::convert::{Direction, convert_file};

use crate::output::{format_bytes, print_info, print_json, print_stat, print_success};

pub fn cmd_convert(file: &Path, output: Option<&Path>, decode: bool, all: bool, verbose: bool, json: bool) -> Result<()> {
  let direction = if decode { Direction::Decode } else { Direction::Encode };

  let report = convert_file(file, output, direction, all)
    .with_context(|| format!("Failed to {} {}", direction, file.display()))?;

  if json {
    return print_json(&report);
  }

  if report.changed {
    print_success(&format!(
      "{}d {} -> {}",
      capitalize(direction.as_str()),
      report.input.display(),
      report.output.display()
    ));
  } else {
    print_info(&format!("{} is already up to date", report.output.display()));
  }

  if verbose {
    print_stat("Read", &format_bytes(report.bytes_in as u64));
    print_stat("Written", &format_bytes(report.bytes_out as u64));
  }

  Ok(())
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
