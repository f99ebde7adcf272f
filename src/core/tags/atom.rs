//! core/tags/atom.rs
//! Atom-based tagging: iTunes-style `ilst` atoms via the `mp4ameta` crate.
//!
//! Logical field -> atom:
//! - artist: ©ART
//! - album: ©alb
//! - title: ©nam
//! - year: ©day
//! - radio URL: none (silently unsupported)
//! - track: trkn (16-bit index and total)
//! - cover: covr

use std::path::Path;

use mp4ameta::{Data, Fourcc, Tag, ident};

use super::super::error::TagError;
use super::super::types::{CoverImage, TextField};
use super::native::NativeTag;

pub(crate) const fn atom_ident(field: TextField) -> Option<Fourcc> {
    match field {
        TextField::Artist => Some(ident::ARTIST),
        TextField::Album => Some(ident::ALBUM),
        TextField::Title => Some(ident::TITLE),
        TextField::Year => Some(ident::YEAR),
        TextField::RadioUrl => None,
    }
}

/// Read the file's metadata atoms. A file without any yields an empty tag.
pub(crate) fn read(path: &Path) -> Result<Tag, TagError> {
    Tag::read_from_path(path).map_err(Into::into)
}

/// `covr` only knows three image formats; anything else is stored as JPEG.
fn image_data(cover: &CoverImage) -> Data {
    match cover.mime_type.as_str() {
        "image/png" => Data::Png(cover.data.clone()),
        "image/bmp" => Data::Bmp(cover.data.clone()),
        _ => Data::Jpeg(cover.data.clone()),
    }
}

fn to_u16(value: u32) -> Result<u16, TagError> {
    u16::try_from(value).map_err(|_| TagError::TrackOutOfRange { value })
}

impl NativeTag for Tag {
    fn supports(&self, field: TextField) -> bool {
        atom_ident(field).is_some()
    }

    fn text(&self, field: TextField) -> Option<String> {
        let ident = atom_ident(field)?;
        self.strings_of(&ident).next().map(str::to_owned)
    }

    fn set_text(&mut self, field: TextField, value: &str) {
        if let Some(ident) = atom_ident(field) {
            self.set_data(ident, Data::Utf8(value.to_string()));
        }
    }

    fn remove_text(&mut self, field: TextField) {
        if let Some(ident) = atom_ident(field) {
            self.remove_data_of(&ident);
        }
    }

    fn track_pair(&self) -> Option<(u32, u32)> {
        // trkn stores 0 for a missing half; mp4ameta reports that as None.
        match self.track() {
            (None, None) => None,
            (track, total) => Some((
                track.map(u32::from).unwrap_or(0),
                total.map(u32::from).unwrap_or(0),
            )),
        }
    }

    fn set_track_pair(&mut self, track: u32, total: u32) -> Result<(), TagError> {
        let track = to_u16(track)?;
        let total = to_u16(total)?;
        self.set_track(track, total);
        Ok(())
    }

    fn remove_track_pair(&mut self) {
        self.remove_track();
    }

    fn cover(&self) -> Option<CoverImage> {
        self.data_of(&ident::ARTWORK).find_map(|data| {
            let (bytes, mime) = match data {
                Data::Jpeg(v) => (v, "image/jpeg"),
                Data::Png(v) => (v, "image/png"),
                Data::Bmp(v) => (v, "image/bmp"),
                _ => return None,
            };
            Some(CoverImage {
                data: bytes.clone(),
                mime_type: mime.to_string(),
            })
        })
    }

    fn set_cover(&mut self, cover: &CoverImage) {
        self.set_data(ident::ARTWORK, image_data(cover));
    }

    fn save(&self, path: &Path) -> Result<(), TagError> {
        self.write_to_path(path)?;
        Ok(())
    }
}
