//! Snapshot tests for user-facing error messages

use splice_fs::{Error, TextEncoding};
use std::path::Path;

#[test]
fn encoding_mismatch_message() {
    let err = TextEncoding::Utf8
        .decode(Path::new("src/modal.tsx"), b"ok\xFF")
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Cannot decode src/modal.tsx as UTF-8: invalid utf-8 sequence of 1 bytes from index 2");
}

#[test]
fn concurrent_modification_message() {
    let err = Error::ConcurrentModification {
        path: "src/modal.tsx".into(),
        expected: "sha256:aa".into(),
        actual: "sha256:bb".into(),
    };
    insta::assert_snapshot!(err.to_string(), @"src/modal.tsx was modified since it was read (expected sha256:aa, found sha256:bb)");
}
