//! Synthetic audio files for tests.
//!
//! MP3s are built from silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz,
//! stereo, no padding), which is enough for container sniffing, ID3 tagging
//! and stream probing without shipping binary fixtures.
//!
//! M4As are a bare box tree (`ftyp`, `moov` with one empty sound track, `mdat`),
//! enough for `mp4ameta` to read and write `ilst` atoms.

use std::path::{Path, PathBuf};

/// Frame header: sync, MPEG-1, Layer III, no CRC, 128 kbps, 44.1 kHz, stereo.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

/// 144 * 128000 / 44100, rounded down (no padding bit).
const FRAME_LEN: usize = 417;

pub fn mp3_bytes(frames: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        bytes.extend_from_slice(&FRAME_HEADER);
        bytes.resize(bytes.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    bytes
}

/// Write an untagged MP3 with `frames` frames into `dir`.
pub fn write_mp3(dir: &Path, name: &str, frames: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, mp3_bytes(frames)).unwrap();
    path
}

pub fn write_text_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_mp3_bytes_layout() {
    let bytes = mp3_bytes(3);
    assert_eq!(bytes.len(), 3 * FRAME_LEN);
    assert_eq!(&bytes[..4], &FRAME_HEADER);
    assert_eq!(&bytes[FRAME_LEN..FRAME_LEN + 4], &FRAME_HEADER);
    assert_eq!(bytes[4], 0);
}

/// One MP4 box: 32-bit size, fourcc, payload.
fn mp4_box(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(payload);
    out
}

/// A "full box": version 0, no flags, then `payload`.
fn mp4_full_box(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut body = vec![0u8; 4];
    body.extend_from_slice(payload);
    mp4_box(name, &body)
}

/// 3x3 identity matrix, 16.16 / 2.30 fixed point.
fn unity_matrix() -> Vec<u8> {
    [0x0001_0000u32, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000]
        .iter()
        .flat_map(|v| v.to_be_bytes())
        .collect()
}

/// A minimal M4A: `ftyp`, a `moov` with one empty sound track and no
/// metadata, and a small `mdat`.
pub fn m4a_bytes() -> Vec<u8> {
    let ftyp = mp4_box(b"ftyp", b"M4A \0\0\0\0M4A isom");

    let mut mvhd = Vec::new();
    mvhd.extend_from_slice(&[0u8; 8]); // creation, modification
    mvhd.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    mvhd.extend_from_slice(&0u32.to_be_bytes()); // duration
    mvhd.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate
    mvhd.extend_from_slice(&0x0100u16.to_be_bytes()); // volume
    mvhd.extend_from_slice(&[0u8; 10]);
    mvhd.extend_from_slice(&unity_matrix());
    mvhd.extend_from_slice(&[0u8; 24]);
    mvhd.extend_from_slice(&2u32.to_be_bytes()); // next track id
    let mvhd = mp4_full_box(b"mvhd", &mvhd);

    let mut tkhd = Vec::new();
    tkhd.extend_from_slice(&[0u8; 8]); // creation, modification
    tkhd.extend_from_slice(&1u32.to_be_bytes()); // track id
    tkhd.extend_from_slice(&[0u8; 4]);
    tkhd.extend_from_slice(&0u32.to_be_bytes()); // duration
    tkhd.extend_from_slice(&[0u8; 8]);
    tkhd.extend_from_slice(&[0u8; 4]); // layer, alternate group
    tkhd.extend_from_slice(&0x0100u16.to_be_bytes()); // volume
    tkhd.extend_from_slice(&[0u8; 2]);
    tkhd.extend_from_slice(&unity_matrix());
    tkhd.extend_from_slice(&[0u8; 8]); // width, height
    let tkhd = mp4_full_box(b"tkhd", &tkhd);

    let mut mdhd = Vec::new();
    mdhd.extend_from_slice(&[0u8; 8]); // creation, modification
    mdhd.extend_from_slice(&44_100u32.to_be_bytes()); // timescale
    mdhd.extend_from_slice(&0u32.to_be_bytes()); // duration
    mdhd.extend_from_slice(&0x55C4u16.to_be_bytes()); // language "und"
    mdhd.extend_from_slice(&[0u8; 2]);
    let mdhd = mp4_full_box(b"mdhd", &mdhd);

    let mut hdlr = vec![0u8; 4]; // pre-defined
    hdlr.extend_from_slice(b"soun");
    hdlr.extend_from_slice(&[0u8; 12]);
    hdlr.push(0); // empty name
    let hdlr = mp4_full_box(b"hdlr", &hdlr);

    let empty_table = 0u32.to_be_bytes();
    let stbl = mp4_box(
        b"stbl",
        &[
            mp4_full_box(b"stsd", &empty_table),
            mp4_full_box(b"stts", &empty_table),
            mp4_full_box(b"stsc", &empty_table),
            mp4_full_box(b"stsz", &[0u8; 8]), // sample size, sample count
            mp4_full_box(b"stco", &empty_table),
        ]
        .concat(),
    );
    let minf = mp4_box(b"minf", &stbl);
    let mdia = mp4_box(b"mdia", &[mdhd, hdlr, minf].concat());
    let trak = mp4_box(b"trak", &[tkhd, mdia].concat());
    let moov = mp4_box(b"moov", &[mvhd, trak].concat());

    let mdat = mp4_box(b"mdat", &[0u8; 16]);

    [ftyp, moov, mdat].concat()
}

/// Write an untagged M4A into `dir`.
pub fn write_m4a(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, m4a_bytes()).unwrap();
    path
}

#[test]
fn test_m4a_bytes_layout() {
    let bytes = m4a_bytes();
    assert_eq!(&bytes[4..8], b"ftyp");
    let ftyp_len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    assert_eq!(ftyp_len, 24);
    assert_eq!(&bytes[ftyp_len + 4..ftyp_len + 8], b"moov");
    let moov_len = u32::from_be_bytes(bytes[ftyp_len..ftyp_len + 4].try_into().unwrap()) as usize;
    assert_eq!(&bytes[ftyp_len + moov_len + 4..ftyp_len + moov_len + 8], b"mdat");
    assert_eq!(bytes.len(), ftyp_len + moov_len + 24);
}
