//! core/tags/detect.rs
//! Container detection by content, not by extension.
//!
//! Only the start of the file is looked at:
//! - `ID3` header: skip the tag and look at what follows
//! - `ftyp` box at offset 4: atom-based
//! - other known magics (FLAC, Ogg, RIFF, AIFF): unsupported
//! - MPEG audio frame header, possibly after some junk: frame-based

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// The container families the adapter knows how to tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// ID3v2 frames in front of an MPEG audio stream.
    FrameBased,
    /// iTunes-style `ilst` atoms inside an MPEG-4 container.
    AtomBased,
    /// Anything else. Never read from or written to.
    Unsupported,
}

/// How far into the file we look for the first MPEG frame.
const SCAN_LEN: u64 = 8 * 1024;

const FOREIGN_MAGICS: [&[u8; 4]; 4] = [b"fLaC", b"OggS", b"RIFF", b"FORM"];

/// Open `path` and classify its container.
pub fn detect(path: &Path) -> io::Result<ContainerKind> {
    let mut reader = BufReader::new(File::open(path)?);
    detect_from(&mut reader)
}

pub(crate) fn detect_from<R: Read + Seek>(reader: &mut R) -> io::Result<ContainerKind> {
    let head = read_head(reader, SCAN_LEN)?;

    if head.len() >= 10 && &head[..3] == b"ID3" {
        // Header (10) + synch-safe body size, plus a 10 byte footer if flagged.
        let mut skip = 10 + u64::from(unsynch([head[6], head[7], head[8], head[9]]));
        if head[5] & 0x10 != 0 {
            skip += 10;
        }

        reader.seek(SeekFrom::Start(skip))?;
        let after = read_head(reader, 4)?;

        // An ID3 tag can sit in front of FLAC too, which we do not handle.
        if after.starts_with(b"fLaC") {
            return Ok(ContainerKind::Unsupported);
        }
        return Ok(ContainerKind::FrameBased);
    }

    Ok(classify(&head))
}

fn read_head<R: Read>(reader: &mut R, len: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len as usize);
    reader.take(len).read_to_end(&mut buf)?;
    Ok(buf)
}

fn classify(head: &[u8]) -> ContainerKind {
    if head.len() >= 8 && &head[4..8] == b"ftyp" {
        return ContainerKind::AtomBased;
    }

    if FOREIGN_MAGICS.iter().any(|magic| head.starts_with(*magic)) {
        return ContainerKind::Unsupported;
    }

    if find_mpeg_stream(head).is_some() {
        return ContainerKind::FrameBased;
    }

    ContainerKind::Unsupported
}

/// Offset of the first MPEG audio frame in `buf`.
///
/// A header at offset 0 is trusted on its own. Anywhere else the next frame
/// header must follow at the computed frame length, so stray `0xFF` bytes in
/// junk data don't count.
fn find_mpeg_stream(buf: &[u8]) -> Option<usize> {
    (0..buf.len().saturating_sub(3)).find(|&pos| {
        let Some(len) = frame_len(&buf[pos..pos + 4]) else {
            return false;
        };
        if pos == 0 {
            return true;
        }
        buf.get(pos + len..pos + len + 4)
            .is_some_and(|next| frame_len(next).is_some())
    })
}

// kbit/s by bitrate index (1..=14)
const BITRATES_V1_L1: [u32; 15] = [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448];
const BITRATES_V1_L2: [u32; 15] = [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384];
const BITRATES_V1_L3: [u32; 15] = [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320];
const BITRATES_V2_L1: [u32; 15] = [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256];
const BITRATES_V2_L23: [u32; 15] = [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160];

/// Length in bytes of the MPEG audio frame whose 4 byte header is `header`,
/// or `None` if it is not a valid header.
///
/// ADTS (AAC) shares the sync word but always has layer `00`, so it is rejected.
fn frame_len(header: &[u8]) -> Option<usize> {
    let &[b0, b1, b2, _] = header else {
        return None;
    };
    if b0 != 0xFF || b1 & 0xE0 != 0xE0 {
        return None;
    }

    let version = (b1 >> 3) & 0b11; // 3: MPEG-1, 2: MPEG-2, 0: MPEG-2.5
    let layer = (b1 >> 1) & 0b11; // 3: I, 2: II, 1: III
    let bitrate_index = usize::from(b2 >> 4);
    let rate_index = usize::from((b2 >> 2) & 0b11);
    let padding = u32::from((b2 >> 1) & 1);

    if version == 1 || layer == 0 || bitrate_index == 0 || bitrate_index == 15 || rate_index == 3 {
        return None;
    }

    let mpeg1 = version == 3;
    let bitrate = 1000
        * match (mpeg1, layer) {
            (true, 3) => BITRATES_V1_L1[bitrate_index],
            (true, 2) => BITRATES_V1_L2[bitrate_index],
            (true, _) => BITRATES_V1_L3[bitrate_index],
            (false, 3) => BITRATES_V2_L1[bitrate_index],
            (false, _) => BITRATES_V2_L23[bitrate_index],
        };
    let sample_rate = match version {
        3 => [44_100, 48_000, 32_000][rate_index],
        2 => [22_050, 24_000, 16_000][rate_index],
        _ => [11_025, 12_000, 8_000][rate_index],
    };

    let len = match layer {
        3 => (12 * bitrate / sample_rate + padding) * 4,
        1 if !mpeg1 => 72 * bitrate / sample_rate + padding,
        _ => 144 * bitrate / sample_rate + padding,
    };
    Some(len as usize)
}

fn unsynch(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, b| (acc << 7) | u32::from(b & 0x7F))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::mp3_bytes;
    use std::io::Cursor;

    fn kind_of(bytes: &[u8]) -> ContainerKind {
        detect_from(&mut Cursor::new(bytes.to_vec())).unwrap()
    }

    #[test]
    fn test_mpeg_frame_is_frame_based() {
        assert_eq!(kind_of(&[0xFF, 0xFB, 0x90, 0x00, 0, 0]), ContainerKind::FrameBased);
    }

    #[test]
    fn test_adts_is_unsupported() {
        assert_eq!(kind_of(&[0xFF, 0xF1, 0x50, 0x80, 0, 0]), ContainerKind::Unsupported);
    }

    #[test]
    fn test_ftyp_is_atom_based() {
        let mut bytes = vec![0, 0, 0, 0x20];
        bytes.extend_from_slice(b"ftypM4A ");
        assert_eq!(kind_of(&bytes), ContainerKind::AtomBased);
    }

    #[test]
    fn test_id3_prefixed_mpeg_is_frame_based() {
        // ID3v2.4 header with a 4 byte body, then an MPEG frame.
        let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x04".to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        assert_eq!(kind_of(&bytes), ContainerKind::FrameBased);
    }

    #[test]
    fn test_id3_prefixed_flac_is_unsupported() {
        let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
        bytes.extend_from_slice(b"fLaC\x00\x00\x00\x22");
        assert_eq!(kind_of(&bytes), ContainerKind::Unsupported);
    }

    #[test]
    fn test_text_and_empty_are_unsupported() {
        assert_eq!(kind_of(b"hello, world"), ContainerKind::Unsupported);
        assert_eq!(kind_of(b""), ContainerKind::Unsupported);
    }

    #[test]
    fn test_frame_len() {
        // MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding / padding
        assert_eq!(frame_len(&[0xFF, 0xFB, 0x90, 0x00]), Some(417));
        assert_eq!(frame_len(&[0xFF, 0xFB, 0x92, 0x00]), Some(418));
        // MPEG-2 Layer III, 64 kbps, 22.05 kHz
        assert_eq!(frame_len(&[0xFF, 0xF3, 0x80, 0x00]), Some(208));
        // MPEG-1 Layer II, 192 kbps, 48 kHz
        assert_eq!(frame_len(&[0xFF, 0xFD, 0xA4, 0x00]), Some(576));
        // free / bad bitrate, reserved rate, ADTS, short input
        assert_eq!(frame_len(&[0xFF, 0xFB, 0x00, 0x00]), None);
        assert_eq!(frame_len(&[0xFF, 0xFB, 0xF0, 0x00]), None);
        assert_eq!(frame_len(&[0xFF, 0xFB, 0x9C, 0x00]), None);
        assert_eq!(frame_len(&[0xFF, 0xF1, 0x50, 0x80]), None);
        assert_eq!(frame_len(&[0xFF, 0xFB]), None);
    }

    #[test]
    fn test_mpeg_after_leading_junk_is_frame_based() {
        let mut bytes = vec![0, 0, 0, 0];
        bytes.extend_from_slice(&mp3_bytes(8));
        assert_eq!(kind_of(&bytes), ContainerKind::FrameBased);

        let mut bytes = b"garbage\xFF\xFB".to_vec();
        bytes.extend_from_slice(&mp3_bytes(2));
        assert_eq!(kind_of(&bytes), ContainerKind::FrameBased);
    }

    #[test]
    fn test_lone_sync_in_junk_is_unsupported() {
        // A valid-looking header not at the start, with nothing where the next frame would be.
        let mut bytes = vec![0u8; 16];
        bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        bytes.extend_from_slice(&[0u8; 600]);
        assert_eq!(kind_of(&bytes), ContainerKind::Unsupported);
    }

    #[test]
    fn test_foreign_magics_are_unsupported() {
        let mut flac = b"fLaC".to_vec();
        flac.extend_from_slice(&mp3_bytes(2));
        assert_eq!(kind_of(&flac), ContainerKind::Unsupported);

        assert_eq!(kind_of(b"OggS\x00\x02\x00\x00"), ContainerKind::Unsupported);
        assert_eq!(kind_of(b"RIFF\x24\x00\x00\x00WAVE"), ContainerKind::Unsupported);
    }

    #[test]
    fn test_unsynch() {
        assert_eq!(unsynch([0, 0, 0x02, 0x01]), 257);
        assert_eq!(unsynch([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(detect(Path::new("/nonexistent/file.mp3")).is_err());
    }
}
