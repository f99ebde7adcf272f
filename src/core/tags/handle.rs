//! core/tags/handle.rs
//! `ContainerHandle`: one open audio file plus its in-memory native tag.
//!
//! Lifecycle: `open` -> zero or more setters -> `persist` -> `read_all` -> drop.
//! Nothing is shared between handles.

use std::path::{Path, PathBuf};

use super::super::error::TagError;
use super::super::types::{CoverImage, FieldEdit, LogicalTagSet, TextField};
use super::detect::{ContainerKind, detect};
use super::native::NativeTag;
use super::track::{TrackUpdate, merge_track};
use super::{atom, frame};

enum Native {
    FrameBased(id3::Tag),
    AtomBased(mp4ameta::Tag),
    Unsupported,
}

pub struct ContainerHandle {
    path: PathBuf,
    native: Native,
    /// Set by every setter, cleared by `persist`.
    dirty: bool,
}

impl ContainerHandle {
    /// Detect the container and load its tag. Unsupported files are opened
    /// without reading anything beyond the header.
    pub fn open(path: &Path) -> Result<Self, TagError> {
        let native = match detect(path)? {
            ContainerKind::FrameBased => Native::FrameBased(frame::read_or_create(path)?),
            ContainerKind::AtomBased => Native::AtomBased(atom::read(path)?),
            ContainerKind::Unsupported => Native::Unsupported,
        };

        Ok(Self {
            path: path.to_path_buf(),
            native,
            dirty: false,
        })
    }

    pub fn kind(&self) -> ContainerKind {
        match self.native {
            Native::FrameBased(_) => ContainerKind::FrameBased,
            Native::AtomBased(_) => ContainerKind::AtomBased,
            Native::Unsupported => ContainerKind::Unsupported,
        }
    }

    fn native(&self) -> Option<&dyn NativeTag> {
        match &self.native {
            Native::FrameBased(tag) => Some(tag),
            Native::AtomBased(tag) => Some(tag),
            Native::Unsupported => None,
        }
    }

    fn native_mut(&mut self) -> Option<&mut dyn NativeTag> {
        match &mut self.native {
            Native::FrameBased(tag) => Some(tag),
            Native::AtomBased(tag) => Some(tag),
            Native::Unsupported => None,
        }
    }

    pub fn read_field(&self, field: TextField) -> Option<String> {
        self.native()?.text(field)
    }

    /// Apply one text edit. `NotRequested` leaves the stored value alone.
    pub fn write_field(&mut self, field: TextField, edit: &FieldEdit<String>) {
        let Some(tag) = self.native_mut() else { return };
        if !tag.supports(field) {
            return;
        }

        match edit {
            FieldEdit::NotRequested => return,
            FieldEdit::Clear => tag.remove_text(field),
            FieldEdit::Set(value) => tag.set_text(field, value),
        }
        self.dirty = true;
    }

    pub fn read_track(&self) -> Option<(u32, u32)> {
        self.native()?.track_pair()
    }

    /// Merge the requested track components with the stored pair.
    /// Neither requested -> the track entry is untouched.
    pub fn write_track(&mut self, track: Option<u32>, total: Option<u32>) -> Result<(), TagError> {
        let existing = self.read_track();
        let Some(tag) = self.native_mut() else {
            return Ok(());
        };
        let Some(update) = merge_track(existing, track, total) else {
            return Ok(());
        };

        log::debug!("track {existing:?} -> {update:?}");
        match update {
            TrackUpdate::Write { track, total } => tag.set_track_pair(track, total)?,
            TrackUpdate::Remove => tag.remove_track_pair(),
        }
        self.dirty = true;
        Ok(())
    }

    pub fn read_cover(&self) -> Option<CoverImage> {
        self.native()?.cover()
    }

    pub fn write_cover(&mut self, cover: &CoverImage) {
        if let Some(tag) = self.native_mut() {
            tag.set_cover(cover);
            self.dirty = true;
        }
    }

    /// Whether there are in-memory changes not yet on disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the tag back to the file, if anything changed since the last persist.
    pub fn persist(&mut self) -> Result<(), TagError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(tag) = self.native() {
            tag.save(&self.path)?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Snapshot every logical field from the in-memory tag.
    pub fn read_all(&self) -> LogicalTagSet {
        LogicalTagSet {
            artist: self.read_field(TextField::Artist),
            album: self.read_field(TextField::Album),
            title: self.read_field(TextField::Title),
            track: self.read_track(),
            year: self.read_field(TextField::Year),
            radio_url: self.read_field(TextField::RadioUrl),
            cover: self.read_cover(),
        }
    }
}
