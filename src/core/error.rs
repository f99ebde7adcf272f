//! Error types for the core layer.
//!
//! - [`TagError`] is per file: the run logs it and moves on.
//! - [`CoverError`] is global: the cover is loaded once before any file is touched.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around an [`id3::Error`].
    #[error("{0}")]
    Id3(#[from] id3::Error),

    /// Wrapper around a [`mp4ameta::Error`].
    #[error("{0}")]
    Mp4(#[from] mp4ameta::Error),

    /// Atom-based containers store track numbers as 16-bit values.
    #[error("track value {value} does not fit in an MP4 trkn atom")]
    TrackOutOfRange { value: u32 },
}

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("cannot read cover image {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no known image type for cover {path:?}")]
    UnknownExtension { path: PathBuf },
}
