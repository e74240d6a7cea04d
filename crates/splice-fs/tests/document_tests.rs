//! Tests for loading and committing documents

use pretty_assertions::assert_eq;
use rstest::rstest;
use splice_fs::{Document, Fingerprint, RobustnessConfig, TextEncoding};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_records_text_encoding_and_fingerprint() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("modal.tsx");
    fs::write(&path, "const a = 1;\n").unwrap();

    let doc = Document::load(&path).unwrap();

    assert_eq!(doc.text(), "const a = 1;\n");
    assert_eq!(doc.encoding(), TextEncoding::Utf8);
    assert_eq!(doc.location(), path.as_path());
    assert_eq!(doc.fingerprint(), &Fingerprint::of_bytes(b"const a = 1;\n"));
}

#[rstest]
#[case::utf8(TextEncoding::Utf8)]
#[case::utf8_bom(TextEncoding::Utf8Bom)]
#[case::utf16_le(TextEncoding::Utf16Le)]
#[case::utf16_be(TextEncoding::Utf16Be)]
fn unchanged_commit_reproduces_original_bytes(#[case] encoding: TextEncoding) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.txt");
    let original = encoding.encode("línia 1\r\nlínia 2 · PAX\n");
    fs::write(&path, &original).unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.encoding(), encoding);
    let written = doc
        .commit(doc.text(), true, RobustnessConfig::default())
        .unwrap();

    assert_eq!(written, original.len());
    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn commit_writes_in_loaded_encoding() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.txt");
    fs::write(&path, TextEncoding::Utf16Le.encode("old")).unwrap();

    let doc = Document::load(&path).unwrap();
    doc.commit("new", true, RobustnessConfig::default()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), TextEncoding::Utf16Le.encode("new"));
}

#[test]
fn from_text_fingerprints_encoded_bytes() {
    let doc = Document::from_text("mem.txt", "abc", TextEncoding::Utf8Bom);
    assert_eq!(doc.fingerprint(), &Fingerprint::of_bytes(b"\xEF\xBB\xBFabc"));
    assert_eq!(doc.text(), "abc");
}
