//! core/tags/track.rs
//! Track-pair helpers shared by both container kinds:
//! parsing native text, the merge-with-existing rule, and formatting.

/// What should happen to the native track entry after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackUpdate {
    Write { track: u32, total: u32 },
    Remove,
}

/// Parse a native track string:
/// - "3" -> Some((3, 0))
/// - "3/12" -> Some((3, 12))
/// - "", "x", "3/", "1/2/3" -> None (malformed is the same as absent)
pub(crate) fn parse_track_pair(s: &str) -> Option<(u32, u32)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut parts = s.split('/');
    let track = parts.next()?.trim().parse::<u32>().ok()?;
    let total = match parts.next() {
        Some(p) => p.trim().parse::<u32>().ok()?,
        None => 0,
    };

    if parts.next().is_some() {
        return None;
    }

    Some((track, total))
}

/// Resolve the requested components against what the container already holds.
///
/// Returns `None` when neither component was requested: the track entry is not touched.
pub(crate) fn merge_track(
    existing: Option<(u32, u32)>,
    track: Option<u32>,
    total: Option<u32>,
) -> Option<TrackUpdate> {
    if track.is_none() && total.is_none() {
        return None;
    }

    let (old_track, old_total) = existing.unwrap_or((0, 0));
    let track = track.unwrap_or(old_track);
    let total = total.unwrap_or(old_total);

    if track == 0 && total == 0 {
        Some(TrackUpdate::Remove)
    } else {
        Some(TrackUpdate::Write { track, total })
    }
}

/// Native text form: "n" or "n/total" (a zero total is left out).
pub(crate) fn format_track_pair(track: u32, total: u32) -> String {
    if total == 0 {
        track.to_string()
    } else {
        format!("{track}/{total}")
    }
}

/// Output form: zero-padded to two digits, "03" or "03/10"; empty when absent.
pub(crate) fn render_track(pair: Option<(u32, u32)>) -> String {
    match pair {
        None => String::new(),
        Some((track, 0)) => format!("{track:02}"),
        Some((track, total)) => format!("{track:02}/{total:02}"),
    }
}
