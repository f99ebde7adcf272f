//! cli/context.rs
//! `RenderContext`: every template field of one file, already stringified.

use std::path::{Path, PathBuf};

use crate::core::tags::render_track;
use crate::core::types::{DerivedMetrics, LogicalTagSet};

use super::escape::Escaper;

/// The fixed set of names a template may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Artist,
    Title,
    Album,
    Year,
    Track,
    Kbps,
    Wors,
    Len,
    Path,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Artist,
        Field::Title,
        Field::Album,
        Field::Year,
        Field::Track,
        Field::Kbps,
        Field::Wors,
        Field::Len,
        Field::Path,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Artist => "artist",
            Field::Title => "title",
            Field::Album => "album",
            Field::Year => "year",
            Field::Track => "track",
            Field::Kbps => "kbps",
            Field::Wors => "wors",
            Field::Len => "len",
            Field::Path => "path",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    values: [String; Field::ALL.len()],
}

impl RenderContext {
    /// Tags and metrics are whatever the file produced; absent tags become "".
    pub fn build(path: &Path, tags: &LogicalTagSet, metrics: DerivedMetrics) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        let values = Field::ALL.map(|field| match field {
            Field::Artist => text(&tags.artist),
            Field::Title => text(&tags.title),
            Field::Album => text(&tags.album),
            Field::Year => text(&tags.year),
            Field::Track => render_track(tags.track),
            Field::Kbps => metrics.bitrate_kbps.to_string(),
            Field::Wors => text(&tags.radio_url),
            Field::Len => metrics.duration_secs.to_string(),
            Field::Path => absolute_path(path).display().to_string(),
        });

        Self { values }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Same context with every value passed through `escaper`.
    pub fn escaped(&self, escaper: &Escaper) -> Self {
        Self {
            values: self.values.each_ref().map(|v| escaper.escape(v)),
        }
    }
}

/// Canonical path when the file exists, otherwise made absolute against the
/// current directory without touching the filesystem.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
