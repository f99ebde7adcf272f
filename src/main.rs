//! tagfmt
//!
//! # What this program is
//! A small command-line tagger for MP3 (ID3v2) and MP4/M4A (iTunes atoms) files.
//! It sets a handful of common tags on every file given, then optionally prints
//! each file's resulting tags through a user template.
//!
//! # Pipeline (per file, strictly in order)
//! - detect the container from the file's first bytes
//! - apply the requested edits and save once (only if something changed)
//! - read the tags back, measure bitrate/duration
//! - render the template, escape characters, collect
//!
//! After the last file the collected strings are joined with the separator and
//! written to stdout, with no trailing separator.
//!
//! # Error policy
//! - Bad options (cover image, template, escape set): fatal, before any file is touched.
//! - Anything that goes wrong with one file: logged (`-v`), that file renders with
//!   empty tags, the run continues and still exits 0.

mod cli;
mod core;
mod logging;

#[cfg(test)]
mod test_fixtures;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use crate::cli::args::Args;
use crate::cli::config::RunConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = RunConfig::from_args(args).context("invalid options")?;
    log::info!("processing {} file(s)", config.files.len());

    let output = cli::run::run(&config);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
