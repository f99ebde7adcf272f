//! core/tags/frame.rs
//! Frame-based tagging: ID3v2 frames via the `id3` crate.
//!
//! Logical field -> frame id:
//! - artist: TPE1
//! - album: TALB
//! - title: TIT2
//! - year: TDRL (release time)
//! - radio URL: WORS (a link frame, not a text frame)
//! - track: TRCK ("n" or "n/total")
//! - cover: APIC, picture type "front cover"

use std::path::Path;

use id3::frame::{Content, Picture, PictureType};
use id3::{Frame, Tag, TagLike, Version};

use super::super::error::TagError;
use super::super::types::{CoverImage, TextField};
use super::native::NativeTag;
use super::track::{format_track_pair, parse_track_pair};

const TRACK_FRAME: &str = "TRCK";

pub(crate) const fn frame_id(field: TextField) -> &'static str {
    match field {
        TextField::Artist => "TPE1",
        TextField::Album => "TALB",
        TextField::Title => "TIT2",
        TextField::Year => "TDRL",
        TextField::RadioUrl => "WORS",
    }
}

/// Read the file's ID3v2 tag, or start an empty one if it has none.
///
/// Any other read error is returned.
pub(crate) fn read_or_create(path: &Path) -> Result<Tag, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => {
            log::debug!("{}: no ID3v2 tag, starting an empty one", path.display());
            Ok(Tag::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Get a frame's string value. Text frames may carry several NUL-separated
/// values; only the first one is used.
fn frame_string(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => s.split('\0').next().map(str::to_owned),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}

impl NativeTag for Tag {
    fn supports(&self, _field: TextField) -> bool {
        true
    }

    fn text(&self, field: TextField) -> Option<String> {
        frame_string(self, frame_id(field))
    }

    fn set_text(&mut self, field: TextField, value: &str) {
        match field {
            TextField::RadioUrl => {
                self.add_frame(Frame::with_content(
                    frame_id(field),
                    Content::Link(value.to_string()),
                ));
            }
            _ => TagLike::set_text(self, frame_id(field), value),
        }
    }

    fn remove_text(&mut self, field: TextField) {
        let _ = self.remove(frame_id(field)); // TagLike::remove returns Vec<Frame>; discard it
    }

    fn track_pair(&self) -> Option<(u32, u32)> {
        frame_string(self, TRACK_FRAME).and_then(|s| parse_track_pair(&s))
    }

    fn set_track_pair(&mut self, track: u32, total: u32) -> Result<(), TagError> {
        TagLike::set_text(self, TRACK_FRAME, format_track_pair(track, total));
        Ok(())
    }

    fn remove_track_pair(&mut self) {
        let _ = self.remove(TRACK_FRAME);
    }

    fn cover(&self) -> Option<CoverImage> {
        let picture = self
            .pictures()
            .find(|p| p.picture_type == PictureType::CoverFront)
            .or_else(|| self.pictures().next())?;

        Some(CoverImage {
            data: picture.data.clone(),
            mime_type: picture.mime_type.clone(),
        })
    }

    fn set_cover(&mut self, cover: &CoverImage) {
        self.remove_picture_by_type(PictureType::CoverFront);
        self.add_frame(Picture {
            mime_type: cover.mime_type.clone(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data: cover.data.clone(),
        });
    }

    fn save(&self, path: &Path) -> Result<(), TagError> {
        self.write_to_path(path, Version::Id3v24)?;
        Ok(())
    }
}
