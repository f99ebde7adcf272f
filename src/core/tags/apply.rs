//! core/tags/apply.rs
//! The per-file tag step: open, apply the run's edits, persist once, read back.

use std::path::Path;

use super::super::error::TagError;
use super::super::types::{LogicalTagSet, TagEdits, TextField};
use super::detect::ContainerKind;
use super::handle::ContainerHandle;

/// Apply `edits` to one file and return its fields as they are afterwards.
///
/// - Unsupported files are left untouched and yield an empty set
/// - The file is written at most once, and only if something changed
pub fn apply_edits(path: &Path, edits: &TagEdits) -> Result<LogicalTagSet, TagError> {
    let mut handle = ContainerHandle::open(path)?;

    if handle.kind() == ContainerKind::Unsupported {
        log::info!("{}: unsupported container, skipping tags", path.display());
        return Ok(LogicalTagSet::default());
    }

    for field in TextField::ALL {
        handle.write_field(field, edits.text(field));
    }
    handle.write_track(edits.track, edits.track_total)?;
    if let Some(cover) = &edits.cover {
        handle.write_cover(cover);
    }

    let persisted = handle.is_dirty();
    handle.persist()?;
    log::info!(
        "{}: {:?} container, {}",
        path.display(),
        handle.kind(),
        if persisted { "saved" } else { "unchanged" }
    );

    Ok(handle.read_all())
}
