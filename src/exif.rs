//! Minimal EXIF reader/writer for JPEG files.
//!
//! Stamps the Artist tag (0x013B) into a JPEG's APP1 segment while carrying
//! every other metadata field through unchanged:
//!
//! - Parses the TIFF container inside APP1 into entry lists for IFD0, the
//!   Exif sub-IFD, the GPS sub-IFD, the Interoperability sub-IFD, and IFD1
//!   (plus IFD1's embedded thumbnail bytes). Both byte orders are handled.
//! - Re-serializes the container in its original byte order with freshly
//!   computed offsets, entries in ascending tag order per IFD.
//! - Splices the rebuilt segment into the JPEG byte stream. Everything from
//!   the scan data onward is byte-identical — pixels are never re-encoded.
//!
//! A file with no EXIF segment, or one whose container doesn't parse, gets
//! a fresh container holding just the Artist entry.
//!
//! Zero external dependencies — pure Rust.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a JPEG stream")]
    NotJpeg,
    #[error("malformed JPEG structure: {0}")]
    MalformedJpeg(String),
    #[error("EXIF payload too large for an APP1 segment ({0} bytes)")]
    Oversized(usize),
}

/// Artist, IFD0 (the standard authorship tag).
const TAG_ARTIST: u16 = 0x013B;
/// Pointer tags — never stored as plain entries, always recomputed on write.
const TAG_EXIF_IFD: u16 = 0x8769;
const TAG_GPS_IFD: u16 = 0x8825;
const TAG_INTEROP_IFD: u16 = 0xA005;
const TAG_THUMB_OFFSET: u16 = 0x0201;
const TAG_THUMB_LENGTH: u16 = 0x0202;

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

const EXIF_HEADER: &[u8] = b"Exif\0\0";

/// Largest APP1 payload: segment length field is u16 and counts itself.
const MAX_APP1_PAYLOAD: usize = 65533;

/// Set the Artist field of the JPEG at `path` to `artist`, in place.
///
/// All other metadata and the image data itself survive the rewrite. The
/// operation is not atomic — callers treat a failure as the item keeping
/// whatever content it already had.
pub fn stamp_artist(path: &Path, artist: &str) -> Result<(), ExifError> {
    let jpeg = std::fs::read(path)?;

    // Absent or unparsable container → start empty, keep the copy intact.
    let mut exif = find_exif_segment(&jpeg)?
        .and_then(|(start, end)| parse_tiff(&jpeg[start + 4 + EXIF_HEADER.len()..end]))
        .unwrap_or_default();

    set_ascii(&mut exif.ifd0, TAG_ARTIST, artist);

    let tiff = serialize_tiff(&exif);
    let app1 = build_app1(&tiff)?;
    let spliced = splice_app1(&jpeg, &app1)?;

    std::fs::write(path, spliced)?;
    Ok(())
}

/// Read the Artist field from a JPEG, best-effort.
///
/// Returns `None` on any failure — unreadable file, no EXIF segment, no
/// Artist entry.
pub fn read_artist(path: &Path) -> Option<String> {
    let jpeg = std::fs::read(path).ok()?;
    let (start, end) = find_exif_segment(&jpeg).ok()??;
    let exif = parse_tiff(&jpeg[start + 4 + EXIF_HEADER.len()..end])?;

    let entry = exif.ifd0.iter().find(|e| e.tag == TAG_ARTIST)?;
    let text = entry
        .value
        .split(|&b| b == 0)
        .next()
        .unwrap_or(&entry.value);
    let text = String::from_utf8_lossy(text).trim().to_string();
    (!text.is_empty()).then_some(text)
}

// ---------------------------------------------------------------------------
// TIFF container model
// ---------------------------------------------------------------------------

/// One IFD entry with its value bytes pulled out of line.
///
/// `value` is `count * type_size(kind)` bytes in the container's byte order;
/// keeping it raw means a rewrite in the same byte order copies it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    value: Vec<u8>,
}

/// Parsed EXIF container: everything a rewrite must carry through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExifData {
    big_endian: bool,
    ifd0: Vec<Entry>,
    exif: Vec<Entry>,
    gps: Vec<Entry>,
    interop: Vec<Entry>,
    ifd1: Vec<Entry>,
    /// IFD1's embedded JPEG thumbnail (tags 0x0201/0x0202), relocated on write.
    thumbnail: Vec<u8>,
}

/// TIFF type sizes in bytes per component.
fn type_size(kind: u16) -> usize {
    match kind {
        1 | 2 | 6 | 7 => 1, // BYTE, ASCII, SBYTE, UNDEFINED
        3 | 8 => 2,         // SHORT, SSHORT
        4 | 9 | 11 => 4,    // LONG, SLONG, FLOAT
        5 | 10 | 12 => 8,   // RATIONAL, SRATIONAL, DOUBLE
        _ => 1,
    }
}

fn rd16(data: &[u8], off: usize, be: bool) -> Option<u16> {
    let bytes = [*data.get(off)?, *data.get(off + 1)?];
    Some(if be {
        u16::from_be_bytes(bytes)
    } else {
        u16::from_le_bytes(bytes)
    })
}

fn rd32(data: &[u8], off: usize, be: bool) -> Option<u32> {
    let bytes = [
        *data.get(off)?,
        *data.get(off + 1)?,
        *data.get(off + 2)?,
        *data.get(off + 3)?,
    ];
    Some(if be {
        u32::from_be_bytes(bytes)
    } else {
        u32::from_le_bytes(bytes)
    })
}

fn push16(out: &mut Vec<u8>, be: bool, v: u16) {
    out.extend(if be { v.to_be_bytes() } else { v.to_le_bytes() });
}

fn push32(out: &mut Vec<u8>, be: bool, v: u32) {
    out.extend(if be { v.to_be_bytes() } else { v.to_le_bytes() });
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a TIFF container into entry lists. `None` on any structural problem
/// (the caller falls back to an empty container).
fn parse_tiff(data: &[u8]) -> Option<ExifData> {
    let be = match data.get(0..2)? {
        b"MM" => true,
        b"II" => false,
        _ => return None,
    };
    if rd16(data, 2, be)? != 42 {
        return None;
    }

    let ifd0_offset = rd32(data, 4, be)? as usize;
    let (mut ifd0, next_ifd) = read_ifd(data, ifd0_offset, be)?;

    let mut out = ExifData {
        big_endian: be,
        ..ExifData::default()
    };

    if let Some(off) = take_pointer(&mut ifd0, TAG_EXIF_IFD, be)
        && let Some((mut exif_entries, _)) = read_ifd(data, off, be)
    {
        if let Some(ioff) = take_pointer(&mut exif_entries, TAG_INTEROP_IFD, be)
            && let Some((interop, _)) = read_ifd(data, ioff, be)
        {
            out.interop = interop;
        }
        out.exif = exif_entries;
    }

    if let Some(off) = take_pointer(&mut ifd0, TAG_GPS_IFD, be)
        && let Some((gps, _)) = read_ifd(data, off, be)
    {
        out.gps = gps;
    }

    if next_ifd != 0
        && let Some((mut ifd1, _)) = read_ifd(data, next_ifd, be)
    {
        let thumb_off = take_pointer(&mut ifd1, TAG_THUMB_OFFSET, be);
        let thumb_len = take_pointer(&mut ifd1, TAG_THUMB_LENGTH, be);
        if let (Some(off), Some(len)) = (thumb_off, thumb_len)
            && off + len <= data.len()
        {
            out.thumbnail = data[off..off + len].to_vec();
        }
        out.ifd1 = ifd1;
    }

    out.ifd0 = ifd0;
    Some(out)
}

/// Read one IFD: entry list plus the next-IFD offset (0 = none).
fn read_ifd(data: &[u8], offset: usize, be: bool) -> Option<(Vec<Entry>, usize)> {
    let count = rd16(data, offset, be)? as usize;
    let mut entries = Vec::with_capacity(count);

    for i in 0..count {
        let eoff = offset + 2 + i * 12;
        let tag = rd16(data, eoff, be)?;
        let kind = rd16(data, eoff + 2, be)?;
        let value_count = rd32(data, eoff + 4, be)?;
        let byte_len = (value_count as usize).checked_mul(type_size(kind))?;

        let value = if byte_len <= 4 {
            data.get(eoff + 8..eoff + 8 + byte_len)?.to_vec()
        } else {
            let voff = rd32(data, eoff + 8, be)? as usize;
            data.get(voff..voff + byte_len)?.to_vec()
        };

        entries.push(Entry {
            tag,
            kind,
            count: value_count,
            value,
        });
    }

    let next_pos = offset + 2 + count * 12;
    let next = rd32(data, next_pos, be).unwrap_or(0) as usize;
    Some((entries, next))
}

/// Remove a pointer entry from `entries` and return its target offset.
fn take_pointer(entries: &mut Vec<Entry>, tag: u16, be: bool) -> Option<usize> {
    let idx = entries.iter().position(|e| e.tag == tag)?;
    let entry = entries.remove(idx);
    rd32(&entry.value, 0, be).map(|v| v as usize)
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Bytes an IFD occupies: table (count + entries + next pointer) plus its
/// out-of-line values, each padded to even length.
fn ifd_block_size(entries: &[Entry]) -> usize {
    let values: usize = entries
        .iter()
        .map(|e| {
            if e.value.len() > 4 {
                e.value.len() + e.value.len() % 2
            } else {
                0
            }
        })
        .sum();
    2 + entries.len() * 12 + 4 + values
}

/// Synthetic LONG entry (used for the recomputed pointer tags).
fn long_entry(tag: u16, value: u32, be: bool) -> Entry {
    let mut bytes = Vec::with_capacity(4);
    push32(&mut bytes, be, value);
    Entry {
        tag,
        kind: TYPE_LONG,
        count: 1,
        value: bytes,
    }
}

fn set_long(entries: &mut [Entry], tag: u16, value: u32, be: bool) {
    if let Some(entry) = entries.iter_mut().find(|e| e.tag == tag) {
        entry.value.clear();
        push32(&mut entry.value, be, value);
    }
}

/// Write one IFD at `out.len()`: entry table in ascending tag order, then
/// the out-of-line value area.
fn write_ifd(out: &mut Vec<u8>, be: bool, entries: &[Entry], next_ifd: u32) {
    let mut data_offset = out.len() + 2 + entries.len() * 12 + 4;
    let mut values = Vec::new();

    push16(out, be, entries.len() as u16);
    for e in entries {
        push16(out, be, e.tag);
        push16(out, be, e.kind);
        push32(out, be, e.count);
        if e.value.len() <= 4 {
            let mut inline = e.value.clone();
            inline.resize(4, 0);
            out.extend(inline);
        } else {
            push32(out, be, data_offset as u32);
            values.extend(&e.value);
            if e.value.len() % 2 == 1 {
                values.push(0);
            }
            data_offset += e.value.len() + e.value.len() % 2;
        }
    }
    push32(out, be, next_ifd);
    out.extend(values);
}

/// Serialize the container back to TIFF bytes with recomputed offsets.
fn serialize_tiff(exif: &ExifData) -> Vec<u8> {
    let be = exif.big_endian;

    let has_interop = !exif.interop.is_empty();
    let has_exif = !exif.exif.is_empty() || has_interop;
    let has_gps = !exif.gps.is_empty();
    let has_ifd1 = !exif.ifd1.is_empty() || !exif.thumbnail.is_empty();

    let mut ifd0 = exif.ifd0.clone();
    if has_exif {
        ifd0.push(long_entry(TAG_EXIF_IFD, 0, be));
    }
    if has_gps {
        ifd0.push(long_entry(TAG_GPS_IFD, 0, be));
    }

    let mut exif_ifd = exif.exif.clone();
    if has_interop {
        exif_ifd.push(long_entry(TAG_INTEROP_IFD, 0, be));
    }

    let mut ifd1 = exif.ifd1.clone();
    if !exif.thumbnail.is_empty() {
        ifd1.push(long_entry(TAG_THUMB_OFFSET, 0, be));
        ifd1.push(long_entry(TAG_THUMB_LENGTH, exif.thumbnail.len() as u32, be));
    }

    let mut interop = exif.interop.clone();
    let mut gps = exif.gps.clone();
    for list in [&mut ifd0, &mut exif_ifd, &mut interop, &mut gps, &mut ifd1] {
        list.sort_by_key(|e| e.tag);
    }

    // Fixed layout: IFD0, Exif, Interop, GPS, IFD1, thumbnail.
    let ifd0_offset = 8usize;
    let exif_offset = ifd0_offset + ifd_block_size(&ifd0);
    let interop_offset = exif_offset + if has_exif { ifd_block_size(&exif_ifd) } else { 0 };
    let gps_offset = interop_offset + if has_interop { ifd_block_size(&interop) } else { 0 };
    let ifd1_offset = gps_offset + if has_gps { ifd_block_size(&gps) } else { 0 };
    let thumb_offset = ifd1_offset + ifd_block_size(&ifd1);

    set_long(&mut ifd0, TAG_EXIF_IFD, exif_offset as u32, be);
    set_long(&mut ifd0, TAG_GPS_IFD, gps_offset as u32, be);
    set_long(&mut exif_ifd, TAG_INTEROP_IFD, interop_offset as u32, be);
    set_long(&mut ifd1, TAG_THUMB_OFFSET, thumb_offset as u32, be);

    let mut out = Vec::new();
    out.extend(if be { b"MM" } else { b"II" });
    push16(&mut out, be, 42);
    push32(&mut out, be, ifd0_offset as u32);

    write_ifd(&mut out, be, &ifd0, if has_ifd1 { ifd1_offset as u32 } else { 0 });
    if has_exif {
        write_ifd(&mut out, be, &exif_ifd, 0);
    }
    if has_interop {
        write_ifd(&mut out, be, &interop, 0);
    }
    if has_gps {
        write_ifd(&mut out, be, &gps, 0);
    }
    if has_ifd1 {
        write_ifd(&mut out, be, &ifd1, 0);
        out.extend(&exif.thumbnail);
    }

    out
}

/// Replace or insert an ASCII entry (value is NUL-terminated UTF-8).
fn set_ascii(entries: &mut Vec<Entry>, tag: u16, text: &str) {
    let mut value = text.as_bytes().to_vec();
    value.push(0);
    let entry = Entry {
        tag,
        kind: TYPE_ASCII,
        count: value.len() as u32,
        value,
    };
    match entries.iter_mut().find(|e| e.tag == tag) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
}

// ---------------------------------------------------------------------------
// JPEG segment surgery
// ---------------------------------------------------------------------------

/// Wrap TIFF bytes in an APP1 marker segment.
fn build_app1(tiff: &[u8]) -> Result<Vec<u8>, ExifError> {
    let payload = EXIF_HEADER.len() + tiff.len();
    if payload > MAX_APP1_PAYLOAD {
        return Err(ExifError::Oversized(payload));
    }

    let mut out = Vec::with_capacity(4 + payload);
    out.extend([0xFF, 0xE1]);
    out.extend(((payload + 2) as u16).to_be_bytes());
    out.extend(EXIF_HEADER);
    out.extend(tiff);
    Ok(out)
}

/// Locate the APP1 Exif segment, returning its (start, end) byte range.
///
/// Walks marker segments from SOI to SOS. `Ok(None)` means a valid JPEG
/// with no Exif segment.
fn find_exif_segment(jpeg: &[u8]) -> Result<Option<(usize, usize)>, ExifError> {
    if jpeg.len() < 2 || jpeg[0] != 0xFF || jpeg[1] != 0xD8 {
        return Err(ExifError::NotJpeg);
    }

    let mut pos = 2;
    while pos + 4 <= jpeg.len() {
        if jpeg[pos] != 0xFF {
            return Err(ExifError::MalformedJpeg(format!(
                "expected marker at byte {pos}"
            )));
        }
        let marker = jpeg[pos + 1];
        if marker == 0xFF {
            // fill byte
            pos += 1;
            continue;
        }
        // SOS: image data from here on, no more metadata segments.
        if marker == 0xDA || marker == 0xD9 {
            break;
        }
        let len = u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]) as usize;
        if len < 2 || pos + 2 + len > jpeg.len() {
            return Err(ExifError::MalformedJpeg(format!(
                "segment length out of range at byte {pos}"
            )));
        }
        let seg_end = pos + 2 + len;
        if marker == 0xE1 && jpeg[pos + 4..seg_end].starts_with(EXIF_HEADER) {
            return Ok(Some((pos, seg_end)));
        }
        pos = seg_end;
    }
    Ok(None)
}

/// Splice `app1` into the JPEG: replaces the existing Exif segment in place,
/// or inserts right after SOI when there is none. Every other byte of the
/// stream is carried through verbatim.
fn splice_app1(jpeg: &[u8], app1: &[u8]) -> Result<Vec<u8>, ExifError> {
    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    match find_exif_segment(jpeg)? {
        Some((start, end)) => {
            out.extend(&jpeg[..start]);
            out.extend(app1);
            out.extend(&jpeg[end..]);
        }
        None => {
            out.extend(&jpeg[..2]);
            out.extend(app1);
            out.extend(&jpeg[2..]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_test_jpeg;
    use tempfile::TempDir;

    #[test]
    fn stamp_file_without_exif() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fresh.jpeg");
        write_test_jpeg(&path, 32, 24);

        assert_eq!(read_artist(&path), None);
        stamp_artist(&path, "Ada Lovelace").unwrap();
        assert_eq!(read_artist(&path), Some("Ada Lovelace".to_string()));
    }

    #[test]
    fn restamp_replaces_instead_of_duplicating() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("twice.jpeg");
        write_test_jpeg(&path, 32, 24);

        stamp_artist(&path, "First").unwrap();
        stamp_artist(&path, "Second").unwrap();
        assert_eq!(read_artist(&path), Some("Second".to_string()));

        let jpeg = std::fs::read(&path).unwrap();
        let (start, end) = find_exif_segment(&jpeg).unwrap().unwrap();
        let exif = parse_tiff(&jpeg[start + 4 + EXIF_HEADER.len()..end]).unwrap();
        let artists = exif.ifd0.iter().filter(|e| e.tag == TAG_ARTIST).count();
        assert_eq!(artists, 1);
    }

    #[test]
    fn stamp_preserves_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("utf8.jpeg");
        write_test_jpeg(&path, 16, 16);

        stamp_artist(&path, "Åse Grünwald").unwrap();
        assert_eq!(read_artist(&path), Some("Åse Grünwald".to_string()));
    }

    #[test]
    fn stamp_preserves_other_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tagged.jpeg");
        write_test_jpeg(&path, 32, 24);

        // Seed the file with a container holding Make (IFD0) and
        // ExifVersion (Exif sub-IFD) entries.
        let mut seeded = ExifData::default();
        set_ascii(&mut seeded.ifd0, 0x010F, "TestCam Industries");
        seeded.exif.push(Entry {
            tag: 0x9000,
            kind: 7,
            count: 4,
            value: b"0232".to_vec(),
        });
        let jpeg = std::fs::read(&path).unwrap();
        let app1 = build_app1(&serialize_tiff(&seeded)).unwrap();
        std::fs::write(&path, splice_app1(&jpeg, &app1).unwrap()).unwrap();

        stamp_artist(&path, "Somebody").unwrap();

        let jpeg = std::fs::read(&path).unwrap();
        let (start, end) = find_exif_segment(&jpeg).unwrap().unwrap();
        let exif = parse_tiff(&jpeg[start + 4 + EXIF_HEADER.len()..end]).unwrap();

        let make = exif.ifd0.iter().find(|e| e.tag == 0x010F).unwrap();
        assert_eq!(make.value, b"TestCam Industries\0");
        let version = exif.exif.iter().find(|e| e.tag == 0x9000).unwrap();
        assert_eq!(version.value, b"0232");
        assert!(exif.ifd0.iter().any(|e| e.tag == TAG_ARTIST));
    }

    #[test]
    fn stamp_leaves_pixels_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pixels.jpeg");
        write_test_jpeg(&path, 48, 32);

        let before = std::fs::read(&path).unwrap();
        stamp_artist(&path, "Anyone").unwrap();
        let after = std::fs::read(&path).unwrap();

        // Everything from SOS onward must be byte-identical.
        let sos = |data: &[u8]| {
            data.windows(2)
                .position(|w| w == [0xFF, 0xDA])
                .expect("SOS marker")
        };
        assert_eq!(before[sos(&before)..], after[sos(&after)..]);
    }

    #[test]
    fn unparsable_container_is_treated_as_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage-exif.jpeg");
        write_test_jpeg(&path, 16, 16);

        // APP1 with an Exif header but junk where the TIFF should be.
        let jpeg = std::fs::read(&path).unwrap();
        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x10];
        app1.extend(EXIF_HEADER);
        app1.extend(b"junkjunk");
        std::fs::write(&path, splice_app1(&jpeg, &app1).unwrap()).unwrap();

        stamp_artist(&path, "Recovered").unwrap();
        assert_eq!(read_artist(&path), Some("Recovered".to_string()));
    }

    #[test]
    fn stamp_non_jpeg_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.jpeg");
        std::fs::write(&path, "plain text").unwrap();

        let result = stamp_artist(&path, "Nope");
        assert!(matches!(result, Err(ExifError::NotJpeg)));
    }

    #[test]
    fn oversized_artist_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("huge.jpeg");
        write_test_jpeg(&path, 16, 16);

        let result = stamp_artist(&path, &"x".repeat(70_000));
        assert!(matches!(result, Err(ExifError::Oversized(_))));
    }

    // ------------------------------------------------------------------
    // Container round-trips
    // ------------------------------------------------------------------

    fn sample_container(big_endian: bool) -> ExifData {
        let mut data = ExifData {
            big_endian,
            ..ExifData::default()
        };
        set_ascii(&mut data.ifd0, 0x010F, "Maker");
        set_ascii(&mut data.ifd0, TAG_ARTIST, "Round Tripper");
        data.exif.push(Entry {
            tag: 0x9000,
            kind: 7,
            count: 4,
            value: b"0232".to_vec(),
        });
        data.gps.push(long_entry(0x0000, 0x02030000, big_endian));
        data
    }

    #[test]
    fn round_trip_little_endian() {
        let data = sample_container(false);
        let parsed = parse_tiff(&serialize_tiff(&data)).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn round_trip_big_endian() {
        let data = sample_container(true);
        let parsed = parse_tiff(&serialize_tiff(&data)).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn round_trip_with_thumbnail() {
        let mut data = sample_container(false);
        data.ifd1.push(long_entry(0x0103, 6, false)); // Compression = JPEG
        data.thumbnail = vec![0xFF, 0xD8, 0x01, 0x02, 0x03, 0xFF, 0xD9];

        let parsed = parse_tiff(&serialize_tiff(&data)).unwrap();
        assert_eq!(parsed.thumbnail, data.thumbnail);
        assert_eq!(parsed.ifd1, data.ifd1);
    }

    #[test]
    fn serialize_sorts_entries_by_tag() {
        let mut data = ExifData::default();
        set_ascii(&mut data.ifd0, 0x0110, "Model X"); // Model
        set_ascii(&mut data.ifd0, 0x010F, "Maker");   // Make, lower tag
        let parsed = parse_tiff(&serialize_tiff(&data)).unwrap();
        let tags: Vec<u16> = parsed.ifd0.iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec![0x010F, 0x0110]);
    }
}
