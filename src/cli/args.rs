//! cli/args.rs
//! The command-line surface (clap derive).

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Change or print the metadata tags of audio files.
///
/// String options given as "" clear the field. Options left out are not touched.
#[derive(Parser, Debug)]
#[command(name = "tagfmt", version)]
pub struct Args {
    /// Set the artist name
    #[arg(short = 'a', long)]
    pub artist: Option<String>,

    /// Set the album name
    #[arg(short = 'A', long)]
    pub album: Option<String>,

    /// Set the title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Set the track number (0 together with a 0 total removes it)
    #[arg(short = 'n', long)]
    pub track: Option<u32>,

    /// Set the number of tracks on the album
    #[arg(short = 'N', long)]
    pub track_total: Option<u32>,

    /// Set the internet radio URL (MP3 only)
    #[arg(short = 'r', long)]
    pub wors: Option<String>,

    /// Set the release year
    #[arg(short = 'Y', long)]
    pub year: Option<String>,

    /// Set the front cover from an image file
    #[arg(short = 'c', long)]
    pub cover: Option<PathBuf>,

    /// Print the tags of each file using this template.
    ///
    /// Placeholders: {artist} {title} {album} {year} {track} {kbps} {wors}
    /// {len} (length in seconds) {path} (absolute path). Use {{ and }} for
    /// literal braces.
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Printed between the output of two files
    #[arg(short = 's', long, default_value = "\n")]
    pub separator: String,

    /// Characters to backslash-escape in every printed field
    #[arg(short = 'e', long, default_value = "")]
    pub escape: String,

    /// Log to stderr; repeat for more detail (-v warn, -vv info, -vvv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Audio files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
