//! cli/run.rs
//! The per-file pipeline and output accumulation.
//!
//! Per file: apply edits (tags) -> measure (metrics) -> render -> collect.
//! Per-file failures are logged and rendered with empty tags; they never
//! stop the run.

use std::path::Path;

use crate::core::error::TagError;
use crate::core::metrics;
use crate::core::tags::apply_edits;
use crate::core::types::LogicalTagSet;

use super::config::RunConfig;
use super::context::RenderContext;

/// Process every file in order and return the joined output (no trailing separator).
pub fn run(config: &RunConfig) -> String {
    if config.edits.is_empty() {
        log::debug!("no edits requested, files are only read");
    }

    let mut outputs: Vec<String> = Vec::with_capacity(config.files.len());

    for path in &config.files {
        let tags = settle(path, apply_edits(path, &config.edits));

        let Some(template) = &config.template else {
            continue;
        };

        let context = RenderContext::build(path, &tags, metrics::analyze(path));
        outputs.push(template.render(&context.escaped(&config.escaper)));
    }

    outputs.join(&config.separator)
}

/// What a file's tag step leaves us to render with.
///
/// A `TagError` only costs this one file its tags.
fn settle(path: &Path, result: Result<LogicalTagSet, TagError>) -> LogicalTagSet {
    match result {
        Ok(tags) => tags,
        Err(e) => {
            log::warn!("{}: {e}", path.display());
            LogicalTagSet::default()
        }
    }
}
