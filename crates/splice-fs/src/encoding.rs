//! Text encoding detection and faithful round-tripping
//!
//! Documents are decoded into a `String` for editing and re-encoded with the
//! encoding they were read in. Detection is driven by the byte order mark;
//! input without a BOM must be valid UTF-8.

use std::fmt;
use std::path::Path;

use crate::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// The encoding a document was stored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// UTF-8 without a byte order mark
    #[default]
    Utf8,
    /// UTF-8 prefixed with `EF BB BF`
    Utf8Bom,
    /// UTF-16 little endian, prefixed with `FF FE`
    Utf16Le,
    /// UTF-16 big endian, prefixed with `FE FF`
    Utf16Be,
}

impl TextEncoding {
    /// Infer the encoding from the leading bytes of a resource.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(UTF8_BOM) {
            Self::Utf8Bom
        } else if bytes.starts_with(UTF16_LE_BOM) {
            Self::Utf16Le
        } else if bytes.starts_with(UTF16_BE_BOM) {
            Self::Utf16Be
        } else {
            Self::Utf8
        }
    }

    /// The byte order mark written ahead of the text.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[],
            Self::Utf8Bom => UTF8_BOM,
            Self::Utf16Le => UTF16_LE_BOM,
            Self::Utf16Be => UTF16_BE_BOM,
        }
    }

    /// Decode raw bytes (including any BOM) into text.
    ///
    /// `path` is only used to give the error a location.
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<String> {
        let body = bytes.strip_prefix(self.bom()).ok_or_else(|| {
            Error::encoding(path, *self, "missing byte order mark")
        })?;

        match self {
            Self::Utf8 | Self::Utf8Bom => std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|e| Error::encoding(path, *self, e.to_string())),
            Self::Utf16Le | Self::Utf16Be => {
                if body.len() % 2 != 0 {
                    return Err(Error::encoding(
                        path,
                        *self,
                        format!("odd byte count {} for a 16-bit encoding", body.len()),
                    ));
                }
                let units: Vec<u16> = body
                    .chunks_exact(2)
                    .map(|pair| {
                        let pair = [pair[0], pair[1]];
                        if *self == Self::Utf16Le {
                            u16::from_le_bytes(pair)
                        } else {
                            u16::from_be_bytes(pair)
                        }
                    })
                    .collect();
                String::from_utf16(&units).map_err(|e| Error::encoding(path, *self, e.to_string()))
            }
        }
    }

    /// Encode text back into bytes, BOM first.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bom().len() + text.len());
        out.extend_from_slice(self.bom());
        match self {
            Self::Utf8 | Self::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => text
                .encode_utf16()
                .for_each(|unit| out.extend_from_slice(&unit.to_le_bytes())),
            Self::Utf16Be => text
                .encode_utf16()
                .for_each(|unit| out.extend_from_slice(&unit.to_be_bytes())),
        }
        out
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Utf8 => "UTF-8",
            Self::Utf8Bom => "UTF-8 (BOM)",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("doc.txt")
    }

    #[test]
    fn detects_from_bom() {
        assert_eq!(TextEncoding::detect(b"plain"), TextEncoding::Utf8);
        assert_eq!(TextEncoding::detect(b"\xEF\xBB\xBFhi"), TextEncoding::Utf8Bom);
        assert_eq!(TextEncoding::detect(b"\xFF\xFEh\x00"), TextEncoding::Utf16Le);
        assert_eq!(TextEncoding::detect(b"\xFE\xFF\x00h"), TextEncoding::Utf16Be);
        assert_eq!(TextEncoding::detect(b""), TextEncoding::Utf8);
    }

    #[test]
    fn utf8_bom_is_stripped_and_restored() {
        let bytes = b"\xEF\xBB\xBFhello";
        let enc = TextEncoding::detect(bytes);
        let text = enc.decode(path(), bytes).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(enc.encode(&text), bytes.to_vec());
    }

    #[test]
    fn utf16_le_round_trips() {
        let enc = TextEncoding::Utf16Le;
        let bytes = enc.encode("Grups · Cuina");
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        assert_eq!(enc.decode(path(), &bytes).unwrap(), "Grups · Cuina");
    }

    #[test]
    fn utf16_be_round_trips() {
        let enc = TextEncoding::Utf16Be;
        let bytes = enc.encode("x\u{1F600}y");
        assert_eq!(TextEncoding::detect(&bytes), TextEncoding::Utf16Be);
        assert_eq!(enc.decode(path(), &bytes).unwrap(), "x\u{1F600}y");
    }

    #[test]
    fn invalid_utf8_is_an_encoding_mismatch() {
        let err = TextEncoding::Utf8
            .decode(path(), b"ab\xFFcd")
            .unwrap_err();
        assert!(matches!(err, Error::EncodingMismatch { encoding: TextEncoding::Utf8, .. }));
    }

    #[test]
    fn odd_length_utf16_is_rejected() {
        let err = TextEncoding::Utf16Le
            .decode(path(), b"\xFF\xFEa\x00b")
            .unwrap_err();
        assert!(err.to_string().contains("odd byte count 3"));
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        // 0xD800 on its own is not a valid scalar value
        let err = TextEncoding::Utf16Le
            .decode(path(), b"\xFF\xFE\x00\xD8")
            .unwrap_err();
        assert!(matches!(err, Error::EncodingMismatch { .. }));
    }

    #[test]
    fn crlf_is_left_alone() {
        let bytes = b"a\r\nb\r\n";
        let text = TextEncoding::Utf8.decode(path(), bytes).unwrap();
        assert_eq!(TextEncoding::Utf8.encode(&text), bytes.to_vec());
    }
}
