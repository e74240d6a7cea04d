//! End-to-end scenarios over a realistic document
//!
//! Exercises the re-application pattern: one edit repairs a region and
//! re-anchors it on a clean marker, a second edit with the clean marker can
//! then be re-run any number of times.

use pretty_assertions::assert_eq;
use splice_core::{EditPlan, EditRequest, Editor, Error};
use splice_fs::{Document, TextEncoding};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BROKEN_MARKER: &str = "          {          {/* Grups Cuina */}";
const CLEAN_MARKER: &str = "          {/* Grups Cuina */}";
const END_MARKER: &str = "{/* Responsable */}";

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/documents")
}

/// Copy the fixture document into a fresh temp dir.
fn setup() -> (TempDir, PathBuf, String) {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("QuadrantModal.tsx");
    fs::copy(fixtures().join("QuadrantModal.tsx"), &target).unwrap();
    let block = fs::read_to_string(fixtures().join("cuina-block.tsx")).unwrap();
    (temp, target, block)
}

#[test]
fn test_repair_then_reapply() {
    let (_temp, target, block) = setup();
    let original = fs::read_to_string(&target).unwrap();
    let editor = Editor::default();

    // First edit anchors on the malformed line and replaces it with a clean block
    let repair = EditRequest::new(&target, BROKEN_MARKER, END_MARKER)
        .unwrap()
        .with_replacement(block.clone());
    let report = editor.apply(&repair).unwrap();
    assert!(report.changed);

    let repaired = fs::read_to_string(&target).unwrap();
    assert!(!repaired.contains(BROKEN_MARKER));
    assert!(repaired.contains(&format!("{block}{END_MARKER}")));

    // Everything outside the region is untouched
    let start = original.find(BROKEN_MARKER).unwrap();
    let end = original.find(END_MARKER).unwrap();
    assert_eq!(&repaired[..start], &original[..start]);
    assert_eq!(&repaired[start + block.len()..], &original[end..]);

    // The malformed marker is gone, so re-running the repair fails cleanly
    let err = editor.apply(&repair).unwrap_err();
    assert_eq!(err.kind(), "MarkerNotFound");
    assert_eq!(fs::read_to_string(&target).unwrap(), repaired);

    // The clean marker version can be re-run with no effect
    let reapply = EditRequest::new(&target, CLEAN_MARKER, END_MARKER)
        .unwrap()
        .with_replacement(block);
    let second = editor.apply(&reapply).unwrap();
    assert!(!second.changed);
    assert_eq!(fs::read_to_string(&target).unwrap(), repaired);
}

#[test]
fn test_plan_mirrors_two_scripts() {
    let (temp, target, _block) = setup();
    fs::copy(
        fixtures().join("cuina-block.tsx"),
        temp.path().join("cuina-block.tsx"),
    )
    .unwrap();
    let plan_path = temp.path().join("edits.toml");
    fs::write(
        &plan_path,
        format!(
            r#"
[[edit]]
path = "QuadrantModal.tsx"
start = "{BROKEN_MARKER}"
end = "{END_MARKER}"
replacement_file = "cuina-block.tsx"

[[edit]]
path = "QuadrantModal.tsx"
start = "{CLEAN_MARKER}"
end = "{END_MARKER}"
replacement_file = "cuina-block.tsx"
"#
        ),
    )
    .unwrap();

    let plan = EditPlan::load(&plan_path).unwrap();
    let report = Editor::default().apply_plan(&plan).unwrap();

    assert_eq!(report.edits.len(), 2);
    assert!(report.edits[0].changed);
    assert!(!report.edits[1].changed);

    // Running the whole plan again stops at the first entry
    let err = Editor::default().apply_plan(&plan).unwrap_err();
    assert!(matches!(err, Error::PlanStep { index: 1, .. }));
    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("PAX {event.numPax"));
}

#[test]
fn test_concurrent_external_write_is_detected() {
    let (_temp, target, block) = setup();

    // Simulate the read half of the pipeline, then an external writer
    let document = Document::load(&target).unwrap();
    let outcome = splice_content::MarkerEdit::new(BROKEN_MARKER, END_MARKER)
        .unwrap()
        .with_replacement(block)
        .apply_to(document.text())
        .unwrap();
    fs::write(&target, "rewritten by someone else").unwrap();

    let err = document
        .commit(&outcome.text, true, Default::default())
        .unwrap_err();

    assert!(matches!(err, splice_fs::Error::ConcurrentModification { .. }));
    assert_eq!(fs::read_to_string(&target).unwrap(), "rewritten by someone else");
}

#[test]
fn test_bom_document_keeps_bom() {
    let (_temp, target, block) = setup();
    let text = fs::read_to_string(&target).unwrap();
    fs::write(&target, TextEncoding::Utf8Bom.encode(&text)).unwrap();

    let request = EditRequest::new(&target, BROKEN_MARKER, END_MARKER)
        .unwrap()
        .with_replacement(block);
    Editor::default().apply(&request).unwrap();

    let bytes = fs::read(&target).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_eq!(TextEncoding::detect(&bytes), TextEncoding::Utf8Bom);
}
