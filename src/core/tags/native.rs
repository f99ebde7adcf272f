//! core/tags/native.rs
//! The seam between logical fields and a container's own tag storage.
//!
//! Each supported container kind implements [`NativeTag`] over its crate's tag type.
//! Setters only touch the in-memory tag; nothing reaches disk until [`NativeTag::save`].

use std::path::Path;

use super::super::error::TagError;
use super::super::types::{CoverImage, TextField};

pub(crate) trait NativeTag {
    /// Whether this container has a native key for `field` at all.
    fn supports(&self, field: TextField) -> bool;

    fn text(&self, field: TextField) -> Option<String>;
    /// Unsupported fields are ignored.
    fn set_text(&mut self, field: TextField, value: &str);
    fn remove_text(&mut self, field: TextField);

    /// `None` when absent or malformed.
    fn track_pair(&self) -> Option<(u32, u32)>;
    fn set_track_pair(&mut self, track: u32, total: u32) -> Result<(), TagError>;
    fn remove_track_pair(&mut self);

    fn cover(&self) -> Option<CoverImage>;
    fn set_cover(&mut self, cover: &CoverImage);

    fn save(&self, path: &Path) -> Result<(), TagError>;
}
