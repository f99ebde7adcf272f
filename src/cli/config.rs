//! cli/config.rs
//! `RunConfig`: everything global, resolved once before the first file.
//!
//! Every failure here is fatal for the run and happens before any file is
//! opened, so a bad cover path or template never leaves a half-tagged batch.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::error::CoverError;
use crate::core::mime::load_cover;
use crate::core::types::{FieldEdit, TagEdits};

use super::args::Args;
use super::escape::Escaper;
use super::template::{Template, TemplateError};

#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Cover(#[from] CoverError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("invalid escape set: {0}")]
    Escape(#[from] regex::Error),
}

#[derive(Debug)]
pub struct RunConfig {
    pub files: Vec<PathBuf>,
    pub edits: TagEdits,
    /// `None`: nothing is printed.
    pub template: Option<Template>,
    pub escaper: Escaper,
    pub separator: String,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self, SetupError> {
        let cover = args.cover.as_deref().map(load_cover).transpose()?;
        let template = args.format.as_deref().map(Template::compile).transpose()?;
        let escaper = Escaper::new(&args.escape)?;

        let edits = TagEdits {
            artist: FieldEdit::from_option(args.artist),
            album: FieldEdit::from_option(args.album),
            title: FieldEdit::from_option(args.title),
            year: FieldEdit::from_option(args.year),
            radio_url: FieldEdit::from_option(args.wors),
            track: args.track,
            track_total: args.track_total,
            cover,
        };

        Ok(Self {
            files: args.files,
            edits,
            template,
            escaper,
            separator: args.separator,
        })
    }
}
