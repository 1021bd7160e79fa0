//! # Built-in Signature Database (`classifier::signatures`)
//!
//! File: cli/src/classifier/signatures.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `SignatureSniffer` is the default [`TypeSniffer`] backend. It identifies
//! content from magic bytes at fixed offsets and reports the same
//! libmagic-style MIME labels the baseline catalog is written in
//! (`application/x-gzip`, `application/x-zip`, ...).
//!
//! ## Matching Order
//!
//! 1. The fixed-offset signature table, most specific entries first
//!    (e.g. Debian packages before generic `ar` archives). Short or printable
//!    magic (`BZh`, `FWS`, `ID3`, `OggS`, ...) also has to pass a structural
//!    check, and most such entries never match a header that reads as text.
//! 2. Container formats that need a second look: RIFF subtype, ISO-BMFF
//!    `ftyp` brand, QuickTime atoms, MPEG-TS packets at 0/188/376, `ustar`
//!    at 257 and the ProTracker `M.K.` tag at 1080 in a binary header.
//! 3. Fallbacks: `application/x-empty`, `text/plain` or
//!    `application/octet-stream`.
//!
//! File probes read at most [`HEADER_LEN`] bytes and put the file's access
//! time back afterwards.
//!
use super::sniffer::TypeSniffer;
use crate::core::error::{CompskipError, Result};
use anyhow::anyhow;
use std::fs::{self, File, FileTimes};
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Maximum number of leading bytes read from a file for identification.
pub const HEADER_LEN: usize = 4096;

const LABEL_EMPTY_BUFFER: &str = "application/x-empty";
const LABEL_EMPTY_FILE: &str = "inode/x-empty";
const LABEL_DIRECTORY: &str = "inode/directory";
const LABEL_TEXT: &str = "text/plain";
const LABEL_BINARY: &str = "application/octet-stream";

/// A magic byte sequence expected at a fixed offset, optionally confirmed by
/// a structural check on the rest of the header.
#[derive(Debug, Clone, Copy)]
struct Signature {
    offset: usize,
    magic: &'static [u8],
    label: &'static str,
    confirm: Option<fn(&[u8]) -> bool>,
}

impl Signature {
    const fn new(offset: usize, magic: &'static [u8], label: &'static str) -> Self {
        Self {
            offset,
            magic,
            label,
            confirm: None,
        }
    }

    /// A signature whose magic is short or printable enough to occur in
    /// ordinary text. `confirm` must also accept the header.
    const fn confirmed(
        offset: usize,
        magic: &'static [u8],
        label: &'static str,
        confirm: fn(&[u8]) -> bool,
    ) -> Self {
        Self {
            offset,
            magic,
            label,
            confirm: Some(confirm),
        }
    }

    fn matches(&self, data: &[u8]) -> bool {
        bytes_at(data, self.offset, self.magic)
            && self.confirm.map_or(true, |confirm| confirm(data))
    }
}

fn bytes_at(data: &[u8], offset: usize, magic: &[u8]) -> bool {
    data.get(offset..offset + magic.len()) == Some(magic)
}

/// The default signature table. Order matters: the first match wins.
const DEFAULT_SIGNATURES: &[Signature] = &[
    // Archives and compressors
    Signature::new(0, b"\x1f\x8b", "application/x-gzip"),
    Signature::new(0, b"\x1f\x9d", "application/x-compress"),
    Signature::confirmed(0, b"BZh", "application/x-bzip2", bzip2_block_size),
    Signature::confirmed(0, b"BZ0", "application/x-bzip", binary_body),
    Signature::new(0, b"\xfd7zXZ\x00", "application/x-xz"),
    Signature::new(0, b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
    Signature::new(0, b"Rar!\x1a\x07", "application/x-rar"),
    Signature::new(0, b"PK\x03\x04", "application/x-zip"),
    Signature::new(0, b"PK\x05\x06", "application/x-zip"),
    Signature::new(0, b"\x28\xb5\x2f\xfd", "application/zstd"),
    Signature::new(0, b"\x04\x22\x4d\x18", "application/x-lz4"),
    Signature::new(0, b"\x60\xea", "application/x-arj"),
    Signature::confirmed(2, b"-lh", "application/x-lharc", binary_body),
    Signature::confirmed(2, b"-lz", "application/x-lharc", binary_body),
    Signature::new(20, b"\xdc\xa7\xc4\xfd", "application/x-zoo"),
    Signature::confirmed(0, b"070707", "application/x-cpio", binary_body),
    Signature::confirmed(0, b"070701", "application/x-cpio", binary_body),
    Signature::confirmed(0, b"070702", "application/x-cpio", binary_body),
    Signature::new(0, b"\xc7\x71", "application/x-cpio"),
    Signature::confirmed(0, b"!<arch>\ndebian", "application/x-debian-package", binary_body),
    Signature::new(0, b"!<arch>\n", "application/x-archive"),
    Signature::new(0, b"\xed\xab\xee\xdb", "application/x-rpm"),
    // Documents and executables
    Signature::new(0, b"%PDF-", "application/pdf"),
    Signature::new(0, b"\x7fELF", "application/x-executable"),
    Signature::confirmed(0, b"FWS", "application/x-shockwave-flash", swf_version),
    Signature::confirmed(0, b"CWS", "application/x-shockwave-flash", swf_version),
    Signature::confirmed(0, b"ZWS", "application/x-shockwave-flash", swf_version),
    // Images
    Signature::new(0, b"\x89PNG\r\n\x1a\n", "image/png"),
    Signature::new(0, b"\xff\xd8\xff", "image/jpeg"),
    Signature::confirmed(0, b"GIF87a", "image/gif", binary_body),
    Signature::confirmed(0, b"GIF89a", "image/gif", binary_body),
    Signature::new(0, b"\x00\x00\x00\x0cjP  \r\n\x87\n", "image/jp2"),
    Signature::new(0, b"BM", "image/bmp"),
    // Audio
    Signature::confirmed(0, b"OggS", "application/ogg", ogg_page_version),
    Signature::confirmed(0, b"fLaC", "audio/x-flac", binary_body),
    Signature::confirmed(0, b"ID3", "audio/mpeg", id3v2_header),
    Signature::new(0, b"\xff\xfb", "audio/mpeg"),
    Signature::new(0, b"\xff\xfa", "audio/mpeg"),
    Signature::new(0, b"\xff\xf3", "audio/mpeg"),
    Signature::new(0, b"\xff\xf2", "audio/mpeg"),
    Signature::confirmed(0, b"MPCK", "audio/x-musepack", binary_body),
    Signature::confirmed(0, b"MP+", "audio/x-musepack", musepack_sv7),
    Signature::confirmed(0, b"MAC ", "audio/x-ape", binary_body),
    Signature::confirmed(0, b"wvpk", "audio/x-wavpack", binary_body),
    Signature::new(0, b".ra\xfd", "audio/x-pn-realaudio"),
    // Video
    Signature::confirmed(0, b".RMF", "application/vnd.rn-realmedia", binary_body),
    Signature::new(0, b"FLV\x01", "video/x-flv"),
    Signature::new(0, b"\x1a\x45\xdf\xa3", "video/x-matroska"),
    Signature::new(
        0,
        b"\x30\x26\xb2\x75\x8e\x66\xcf\x11",
        "video/x-ms-asf",
    ),
    Signature::new(0, b"\x00\x00\x01\xba", "video/mpeg"),
    Signature::new(0, b"\x00\x00\x01\xb3", "video/mpv"),
    Signature::new(0, b"\x00\x00\x01\xb0", "video/mp4v-es"),
    // Weak signature, keep last
    Signature::new(0, b"\x5d\x00\x00", "application/x-lzma"),
];

/// # Signature Sniffer (`SignatureSniffer`)
///
/// Default content sniffer backed by [`DEFAULT_SIGNATURES`]. Holds the most
/// recent probe error, mirroring the error slot a libmagic cookie carries.
#[derive(Debug)]
pub struct SignatureSniffer {
    signatures: &'static [Signature],
    last_error: Option<String>,
}

impl SignatureSniffer {
    /// Loads and validates the built-in signature database.
    pub fn load_default() -> Result<Self> {
        Self::from_table(DEFAULT_SIGNATURES)
    }

    fn from_table(signatures: &'static [Signature]) -> Result<Self> {
        if signatures.is_empty() {
            return Err(anyhow!(CompskipError::SignatureDatabase(
                "signature table is empty".to_string()
            )));
        }
        for signature in signatures {
            if signature.magic.is_empty() {
                return Err(anyhow!(CompskipError::SignatureDatabase(format!(
                    "signature for '{}' has no magic bytes",
                    signature.label
                ))));
            }
            if !is_well_formed_label(signature.label) {
                return Err(anyhow!(CompskipError::SignatureDatabase(format!(
                    "label '{}' is not a lowercase type/subtype",
                    signature.label
                ))));
            }
        }
        debug!("Loaded {} content signatures", signatures.len());
        Ok(Self {
            signatures,
            last_error: None,
        })
    }

    /// The error recorded by the most recent failed probe, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn identify(&self, data: &[u8]) -> &'static str {
        if data.is_empty() {
            return LABEL_EMPTY_BUFFER;
        }
        if let Some(signature) = self.signatures.iter().find(|s| s.matches(data)) {
            return signature.label;
        }
        if let Some(label) = identify_container(data) {
            return label;
        }
        if looks_like_text(data) {
            LABEL_TEXT
        } else {
            LABEL_BINARY
        }
    }
}

impl TypeSniffer for SignatureSniffer {
    fn probe_buffer(&mut self, data: &[u8]) -> Option<String> {
        self.last_error = None;
        Some(self.identify(data).to_string())
    }

    fn probe_file(&mut self, path: &Path) -> Option<String> {
        self.last_error = None;
        match read_header(path) {
            Ok(FileHeader::Directory) => Some(LABEL_DIRECTORY.to_string()),
            Ok(FileHeader::Bytes(bytes)) if bytes.is_empty() => Some(LABEL_EMPTY_FILE.to_string()),
            Ok(FileHeader::Bytes(bytes)) => Some(self.identify(&bytes).to_string()),
            Err(e) => {
                debug!("Cannot read '{}' for identification: {}", path.display(), e);
                self.last_error = Some(format!("cannot open '{}': {}", path.display(), e));
                None
            }
        }
    }

    fn backend(&self) -> &'static str {
        "signatures"
    }
}

fn is_well_formed_label(label: &str) -> bool {
    match label.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty()
                && !subtype.is_empty()
                && !subtype.contains('/')
                && label == label.to_lowercase()
                && !label.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Formats identified by structure rather than a single prefix.
fn identify_container(data: &[u8]) -> Option<&'static str> {
    if bytes_at(data, 0, b"RIFF") {
        match data.get(8..12) {
            Some(b"AVI ") => return Some("video/x-msvideo"),
            Some(b"WAVE") => return Some("audio/x-wav"),
            Some(b"WEBP") => return Some("image/webp"),
            _ => {}
        }
    }
    if bytes_at(data, 4, b"ftyp") {
        if let Some(brand) = data.get(8..12) {
            return Some(ftyp_label(brand));
        }
    }
    if bytes_at(data, 4, b"moov") || bytes_at(data, 4, b"mdat") {
        return Some("video/quicktime");
    }
    if is_transport_stream(data) {
        return Some("video/mp2t");
    }
    if bytes_at(data, 257, b"ustar") {
        return Some("application/x-tar");
    }
    if (bytes_at(data, 1080, b"M.K.") || bytes_at(data, 1080, b"M!K!")) && binary_body(data) {
        return Some("audio/x-mod");
    }
    None
}

/// MPEG-TS: three consecutive 188-byte packets with the sync byte and a
/// clear transport error bit.
fn is_transport_stream(data: &[u8]) -> bool {
    const PACKET: usize = 188;
    data.len() > 2 * PACKET
        && (0..3).all(|i| data[i * PACKET] == 0x47 && data[i * PACKET + 1] & 0x80 == 0)
        && binary_body(data)
}

fn binary_body(data: &[u8]) -> bool {
    !looks_like_text(data)
}

/// `BZh` is followed by the block size digit `1`-`9`.
fn bzip2_block_size(data: &[u8]) -> bool {
    matches!(data.get(3), Some(b'1'..=b'9')) && binary_body(data)
}

fn swf_version(data: &[u8]) -> bool {
    matches!(data.get(3), Some(1..=50)) && binary_body(data)
}

/// ID3v2 major version 2-4, never-0xff revision.
fn id3v2_header(data: &[u8]) -> bool {
    matches!(data.get(3), Some(2..=4)) && matches!(data.get(4), Some(r) if *r != 0xff)
}

/// Musepack SV7 keeps the stream version in the low nibble.
fn musepack_sv7(data: &[u8]) -> bool {
    matches!(data.get(3), Some(v) if v & 0x0f == 7) && binary_body(data)
}

/// Ogg page header version is always 0.
fn ogg_page_version(data: &[u8]) -> bool {
    data.get(4) == Some(&0)
}

/// Maps an ISO base media `ftyp` major brand to a label.
fn ftyp_label(brand: &[u8]) -> &'static str {
    match brand {
        b"qt  " => "video/quicktime",
        b"M4A " | b"M4B " | b"M4P " => "audio/mp4",
        b"jp2 " => "image/jp2",
        b"heic" | b"heix" | b"mif1" => "image/heic",
        b"avif" => "image/avif",
        _ if brand.starts_with(b"3gp") || brand.starts_with(b"3g2") => "video/3gpp",
        _ => "video/mp4",
    }
}

/// Printable UTF-8, tolerating a multi-byte sequence cut off at the end of a header read.
fn looks_like_text(data: &[u8]) -> bool {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&data[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return false,
    };
    !text.is_empty()
        && text
            .chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\x0c' | '\x1b'))
}

enum FileHeader {
    Directory,
    Bytes(Vec<u8>),
}

fn read_header(path: &Path) -> io::Result<FileHeader> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Ok(FileHeader::Directory);
    }
    let accessed = metadata.accessed().ok();

    let mut file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    (&mut file).take(HEADER_LEN as u64).read_to_end(&mut header)?;

    if let Some(accessed) = accessed {
        restore_access_time(&file, path, accessed);
    }
    Ok(FileHeader::Bytes(header))
}

/// Puts the access time back after a header read. Failure only loses the
/// original atime, so it is traced rather than raised.
fn restore_access_time(file: &File, path: &Path, accessed: SystemTime) {
    if let Err(e) = file.set_times(FileTimes::new().set_accessed(accessed)) {
        debug!(
            "Could not restore access time of '{}': {}",
            path.display(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::tempdir;

    fn sniffer() -> SignatureSniffer {
        SignatureSniffer::load_default().expect("built-in database must load")
    }

    fn gzip_bytes(payload: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        encoder.finish().unwrap()
    }

    fn probe(data: &[u8]) -> String {
        sniffer().probe_buffer(data).unwrap()
    }

    #[test]
    fn test_default_database_is_well_formed() {
        let sniffer = sniffer();
        assert_eq!(sniffer.backend(), "signatures");
        assert!(sniffer.last_error().is_none());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        static EMPTY: &[Signature] = &[];
        let err = SignatureSniffer::from_table(EMPTY).unwrap_err();
        assert!(err.to_string().contains("signature table is empty"));
    }

    #[test]
    fn test_malformed_label_is_rejected() {
        static BAD: &[Signature] = &[Signature::new(0, b"\x00", "Application/Thing")];
        let err = SignatureSniffer::from_table(BAD).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CompskipError>(),
            Some(CompskipError::SignatureDatabase(_))
        ));
    }

    #[test]
    fn test_real_gzip_stream() {
        assert_eq!(probe(&gzip_bytes(b"hello hello hello")), "application/x-gzip");
    }

    #[test]
    fn test_fixed_offset_signatures() {
        assert_eq!(probe(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"), "image/png");
        assert_eq!(probe(b"\xff\xd8\xff\xe0\x00\x10JFIF"), "image/jpeg");
        assert_eq!(probe(b"%PDF-1.7\n"), "application/pdf");
        assert_eq!(probe(b"FLV\x01\x05\x00\x00\x00\x09"), "video/x-flv");
        assert_eq!(probe(b"BZh91AY&SY\x8b\x1e\x02\xc0"), "application/x-bzip2");
        assert_eq!(probe(b"\xfd7zXZ\x00\x00\x04"), "application/x-xz");
        assert_eq!(probe(b"PK\x03\x04\x14\x00"), "application/x-zip");
        assert_eq!(probe(b"OggS\x00\x02"), "application/ogg");
    }

    #[test]
    fn test_debian_package_wins_over_plain_ar() {
        assert_eq!(
            probe(b"!<arch>\ndebian-binary   1342943816  0     0     100644  4         `\n2.0\n\xfd7zXZ\x00"),
            "application/x-debian-package"
        );
        assert_eq!(
            probe(b"!<arch>\nlibfoo.o/       0           0     0     644     8"),
            "application/x-archive"
        );
    }

    #[test]
    fn test_offset_signatures() {
        let mut lha = b"\x25\x00-lh5-".to_vec();
        lha.extend_from_slice(&[0u8; 16]);
        assert_eq!(probe(&lha), "application/x-lharc");

        let mut zoo = vec![b'Z'; 20];
        zoo.extend_from_slice(b"\xdc\xa7\xc4\xfd");
        assert_eq!(probe(&zoo), "application/x-zoo");
    }

    #[test]
    fn test_riff_subtypes() {
        assert_eq!(probe(b"RIFF\x24\x00\x00\x00AVI LIST"), "video/x-msvideo");
        assert_eq!(probe(b"RIFF\x24\x00\x00\x00WAVEfmt "), "audio/x-wav");
        assert_eq!(probe(b"RIFF\x24\x00\x00\x00WEBPVP8 "), "image/webp");
    }

    #[test]
    fn test_ftyp_brands() {
        assert_eq!(probe(b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00"), "video/mp4");
        assert_eq!(probe(b"\x00\x00\x00\x20ftypM4A \x00\x00\x00\x00"), "audio/mp4");
        assert_eq!(probe(b"\x00\x00\x00\x14ftypqt  \x20\x05\x03\x00"), "video/quicktime");
        assert_eq!(probe(b"\x00\x00\x00\x1cftyp3gp4\x00\x00\x02\x00"), "video/3gpp");
        assert_eq!(probe(b"\x00\x00\x00\x08moov"), "video/quicktime");
    }

    #[test]
    fn test_transport_stream() {
        let mut ts = vec![0u8; 564];
        for packet in ts.chunks_mut(188) {
            packet[0] = 0x47;
            packet[1] = 0x40;
        }
        assert_eq!(probe(&ts), "video/mp2t");

        ts[377] = 0xc0;
        assert_ne!(probe(&ts), "video/mp2t");
    }

    #[test]
    fn test_tar_and_mod_need_long_headers() {
        let mut tar = vec![0u8; 512];
        tar[..8].copy_from_slice(b"file.txt");
        tar[257..262].copy_from_slice(b"ustar");
        assert_eq!(probe(&tar), "application/x-tar");

        let mut module = vec![0u8; 1084];
        module[1080..1084].copy_from_slice(b"M.K.");
        assert_eq!(probe(&module), "audio/x-mod");
    }

    #[test]
    fn test_fallback_labels() {
        assert_eq!(probe(b""), "application/x-empty");
        assert_eq!(probe(b"just some words\nand a second line\n"), "text/plain");
        assert_eq!(probe("naïve café\n".as_bytes()), "text/plain");
        assert_eq!(probe(&[0x01, 0x02, 0x03, 0x00, 0xfe]), "application/octet-stream");
    }

    #[test]
    fn test_text_with_sync_byte_spacing_is_text() {
        let mut note = "Grocery list for the week. milk eggs bread butter cheese "
            .repeat(5)
            .into_bytes();
        note.truncate(188);
        note.extend_from_slice(b"Greens, apples, pears and a bag of rice\n");
        note.resize(376, b' ');
        note.extend_from_slice(b"Garlic too\n");
        assert_eq!(note[0], b'G');
        assert_eq!(note[188], b'G');
        assert_eq!(note[376], b'G');
        assert_eq!(probe(&note), "text/plain");
    }

    #[test]
    fn test_printable_magic_needs_binary_structure() {
        for text in [
            "BZh is how the bzip2 header starts\n",
            "BZh9 is the largest block size\n",
            "FWS, CWS and ZWS are SWF variants\n",
            "ID3 tags are metadata\n",
            "MP+ streams are musepack\n",
            "OggS pages\n",
            "GIF89a looks like this in a hex dump\n",
            "MAC address list\n",
            "070707 is the odc cpio magic\n",
        ] {
            assert_eq!(probe(text.as_bytes()), "text/plain", "{:?}", text);
        }

        let mut module = "Module notes\n".repeat(90).into_bytes();
        module.resize(1084, b' ');
        module[1080..1084].copy_from_slice(b"M.K.");
        assert_eq!(probe(&module), "text/plain");
    }

    #[test]
    fn test_confirmed_signatures_accept_real_headers() {
        assert_eq!(probe(b"FWS\x0a\x2c\x01\x00\x00"), "application/x-shockwave-flash");
        assert_eq!(probe(b"ID3\x04\x00\x00\x00\x00\x0f\x76"), "audio/mpeg");
        assert_eq!(probe(b"MP+\x17\x00\x00\x00\x00"), "audio/x-musepack");
        assert_eq!(probe(b"GIF89a\x01\x00\x01\x00\x80\x00"), "image/gif");
        assert_eq!(probe(b"fLaC\x00\x00\x00\x22"), "audio/x-flac");
    }

    #[test]
    fn test_text_cut_mid_character_is_still_text() {
        let mut data = "résumé ".repeat(10).into_bytes();
        data.push(0xc3); // first byte of a two-byte sequence
        assert_eq!(probe(&data), "text/plain");
    }

    #[test]
    fn test_probe_file_reads_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payload.gz");
        fs::write(&path, gzip_bytes(&vec![b'a'; 20_000])).unwrap();

        let mut sniffer = sniffer();
        assert_eq!(sniffer.probe_file(&path).as_deref(), Some("application/x-gzip"));
        assert!(sniffer.last_error().is_none());
    }

    #[test]
    fn test_probe_file_special_cases() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty");
        fs::write(&empty, b"").unwrap();

        let mut sniffer = sniffer();
        assert_eq!(sniffer.probe_file(&empty).as_deref(), Some("inode/x-empty"));
        assert_eq!(sniffer.probe_file(dir.path()).as_deref(), Some("inode/directory"));
    }

    #[test]
    fn test_probe_missing_file_records_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let mut sniffer = sniffer();
        assert_eq!(sniffer.probe_file(&missing), None);
        assert!(sniffer.last_error().unwrap().contains("cannot open"));

        // The next successful probe clears the error slot.
        assert!(sniffer.probe_buffer(b"text").is_some());
        assert!(sniffer.last_error().is_none());
    }

    #[test]
    fn test_probe_file_preserves_access_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").unwrap();

        let past = UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        OpenOptions::new()
            .write(true)
            .open(&path)
            .unwrap()
            .set_times(FileTimes::new().set_accessed(past))
            .unwrap();

        let mut sniffer = sniffer();
        assert_eq!(sniffer.probe_file(&path).as_deref(), Some("image/png"));
        assert_eq!(fs::metadata(&path).unwrap().accessed().unwrap(), past);
    }
}
