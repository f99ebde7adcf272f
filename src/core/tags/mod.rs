//! core/tags/mod.rs
//!
//! The tag adapter: one get/set surface over every supported container.
//! Used from outside:
//! - [`apply_edits`] is the whole per-file step (detect, open, edit, persist, read back).
//! - [`render_track`] gives the output form of a track pair.
//!
//! Inside, `detect` sniffs the container and `handle::ContainerHandle` holds
//! one open file's tag in memory.

mod apply;
mod atom;
mod detect;
mod frame;
mod handle;
mod native;
mod track;

pub use apply::apply_edits;
pub(crate) use track::render_track;
