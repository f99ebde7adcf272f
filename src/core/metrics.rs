//! core/metrics.rs
//! Bitrate and duration, straight from the audio stream (Symphonia).
//!
//! No decoding happens here: packets are only counted and measured.
//! Anything that goes wrong yields `DerivedMetrics::default()` (0 kbps, 0 s).

use std::fs::File;
use std::path::Path;

use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use super::types::DerivedMetrics;

/// Analyze `path`. Never fails; see module docs.
pub fn analyze(path: &Path) -> DerivedMetrics {
    match probe_stream(path) {
        Ok(metrics) => metrics,
        Err(e) => {
            log::debug!("{}: no audio metrics ({e})", path.display());
            DerivedMetrics::default()
        }
    }
}

fn probe_stream(path: &Path) -> Result<DerivedMetrics, SymphoniaError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or(SymphoniaError::Unsupported("no audio track"))?;
    let track_id = track.id;
    let params = track.codec_params.clone();

    // Walk the packets once: total payload bytes, and frame count as a fallback.
    let mut payload_bytes: u64 = 0;
    let mut counted_frames: u64 = 0;
    loop {
        match format.next_packet() {
            Ok(packet) => {
                if packet.track_id() != track_id {
                    continue;
                }
                payload_bytes += packet.buf().len() as u64;
                counted_frames += packet.dur;
            }
            Err(SymphoniaError::IoError(_)) => break, // end of stream
            Err(e) => return Err(e),
        }
    }

    let n_frames = params.n_frames.unwrap_or(counted_frames);
    let time_base = params
        .time_base
        .or_else(|| params.sample_rate.map(|rate| TimeBase::new(1, rate)));

    let Some(seconds) = duration_secs(time_base, n_frames) else {
        return Ok(DerivedMetrics::default());
    };

    Ok(DerivedMetrics {
        bitrate_kbps: bitrate_kbps(payload_bytes, seconds),
        duration_secs: seconds.round() as u64,
    })
}

fn duration_secs(time_base: Option<TimeBase>, n_frames: u64) -> Option<f64> {
    let tb = time_base?;
    let t = tb.calc_time(n_frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let secs = t.seconds as f64 + t.frac;
    (secs > 0.0).then_some(secs)
}

/// Average bitrate in kbit/s, rounded.
fn bitrate_kbps(payload_bytes: u64, seconds: f64) -> u32 {
    if seconds <= 0.0 {
        return 0;
    }
    let kbps = (payload_bytes as f64 * 8.0) / seconds / 1000.0;
    kbps.round() as u32
}
