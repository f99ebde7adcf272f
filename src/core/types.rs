//! Core data types shared between the tag adapter and the output formatter.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No tag parsing code
//! - No template code
//!
//! `LogicalTagSet` is the format-independent view of ONE audio file's metadata,
//! whatever container it came from.

/// Metadata we care about, independent of the container's native keys.
///
/// `None` means the container has no corresponding entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalTagSet {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,

    /// (track index, track total). A total of 0 means "no total".
    pub track: Option<(u32, u32)>,

    /// Release year, kept as text (containers store it as text too).
    pub year: Option<String>,

    /// Internet radio station URL. Frame-based containers only.
    pub radio_url: Option<String>,

    pub cover: Option<CoverImage>,
}

/// Raw image bytes plus the MIME type they should be tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Numbers computed from the audio stream itself, not from tags.
/// Both are 0 when analysis fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub bitrate_kbps: u32,
    pub duration_secs: u64,
}

/// The plain-text logical fields. Track and cover have their own shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Artist,
    Album,
    Title,
    Year,
    RadioUrl,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::Artist,
        TextField::Album,
        TextField::Title,
        TextField::Year,
        TextField::RadioUrl,
    ];
}

/// What the caller asked for one field.
///
/// - `NotRequested`: leave the stored value untouched
/// - `Clear`: remove the stored value
/// - `Set(v)`: replace the stored value with `v`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldEdit<T> {
    #[default]
    NotRequested,
    Clear,
    Set(T),
}

impl<T> FieldEdit<T> {
    pub fn is_requested(&self) -> bool {
        !matches!(self, FieldEdit::NotRequested)
    }
}

impl FieldEdit<String> {
    /// Command-line shape:
    /// - option absent -> NotRequested
    /// - empty string -> Clear
    /// - anything else -> Set
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            None => FieldEdit::NotRequested,
            Some(v) if v.is_empty() => FieldEdit::Clear,
            Some(v) => FieldEdit::Set(v),
        }
    }
}

/// Every edit requested for a run. Applied identically to each file.
#[derive(Debug, Clone, Default)]
pub struct TagEdits {
    pub artist: FieldEdit<String>,
    pub album: FieldEdit<String>,
    pub title: FieldEdit<String>,
    pub year: FieldEdit<String>,
    pub radio_url: FieldEdit<String>,

    pub track: Option<u32>,
    pub track_total: Option<u32>,

    pub cover: Option<CoverImage>,
}

impl TagEdits {
    pub fn text(&self, field: TextField) -> &FieldEdit<String> {
        match field {
            TextField::Artist => &self.artist,
            TextField::Album => &self.album,
            TextField::Title => &self.title,
            TextField::Year => &self.year,
            TextField::RadioUrl => &self.radio_url,
        }
    }

    /// True when nothing at all was requested (a pure reporting run).
    pub fn is_empty(&self) -> bool {
        TextField::ALL.iter().all(|f| !self.text(*f).is_requested())
            && self.track.is_none()
            && self.track_total.is_none()
            && self.cover.is_none()
    }
}
