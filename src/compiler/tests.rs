use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::asset::{self, layout};

use super::{encode, pipeline};

fn make_project() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    (temp, root)
}

fn write_file(path: &Path, bytes: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

fn have_xxd() -> bool {
    which::which(encode::XXD_BIN).is_ok()
}

#[test]
fn test_dry_run_writes_nothing_and_succeeds() {
    let (_temp, root) = make_project();
    write_file(&layout::images_root(&root).join("player_idle.png"), b"\x89PNG");

    let summary = pipeline::run_all(&root, true).unwrap();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.succeeded, 1);
    assert!(!summary.failed());
    assert!(!root.join("src").exists());
}

#[test]
fn test_dry_run_succeeds_even_when_outputs_exist() {
    let (_temp, root) = make_project();
    write_file(&layout::images_root(&root).join("player_idle.png"), b"\x89PNG");

    let assets = asset::discover_all(&root).unwrap();
    write_file(&assets[0].output_impl, b"stale");
    write_file(&assets[0].output_header, b"stale");

    assert!(pipeline::compile(&assets[0], true).unwrap());
    assert_eq!(fs::read(&assets[0].output_impl).unwrap(), b"stale");
}

#[test]
fn test_deleted_source_is_a_per_asset_failure() {
    let (_temp, root) = make_project();
    let images = layout::images_root(&root);
    write_file(&images.join("a.png"), b"a");
    write_file(&images.join("b.png"), b"b");

    let assets = asset::discover_all(&root).unwrap();
    fs::remove_file(images.join("a.png")).unwrap();

    // the deleted asset fails before any encoding happens
    assert!(!pipeline::compile(&assets[0], false).unwrap());
    // its sibling is unaffected
    assert!(assets[1].source_path().exists());
}

#[test]
fn test_empty_tree_summary_never_fails() {
    let (_temp, root) = make_project();

    let summary = pipeline::run_all(&root, false).unwrap();

    assert_eq!(summary.total, 0);
    assert!(!summary.failed());
}

#[test]
fn test_failed_summary_sets_exit_failure_only_in_real_mode() {
    let real = pipeline::RunSummary {
        succeeded: 1,
        total: 2,
        dry_run: false,
    };
    assert!(real.failed());

    let dry = pipeline::RunSummary {
        succeeded: 1,
        total: 2,
        dry_run: true,
    };
    assert!(!dry.failed());

    let complete = pipeline::RunSummary {
        succeeded: 2,
        total: 2,
        dry_run: false,
    };
    assert!(!complete.failed());
}

#[test]
fn test_compile_writes_both_artifacts() {
    if !have_xxd() {
        return;
    }

    let (_temp, root) = make_project();
    write_file(
        &layout::images_root(&root).join("player_idle.png"),
        &[0x89, 0x50, 0x4e, 0x47],
    );

    let summary = pipeline::run_all(&root, false).unwrap();
    assert_eq!(summary.succeeded, 1);

    let assets = asset::discover_all(&root).unwrap();
    let implementation = fs::read_to_string(&assets[0].output_impl).unwrap();
    let header = fs::read_to_string(&assets[0].output_header).unwrap();

    assert!(header.contains("class PlayerIdleImage {"));
    assert!(implementation.contains("player_idle_png_len"));
    assert!(implementation.contains("ImageResourceBuilder()"));
}

#[test]
fn test_recompilation_is_byte_identical() {
    if !have_xxd() {
        return;
    }

    let (_temp, root) = make_project();
    write_file(&layout::images_root(&root).join("tileset.bmp"), &[1, 2, 3, 4, 5]);

    let assets = asset::discover_all(&root).unwrap();
    assert!(pipeline::compile(&assets[0], false).unwrap());
    let first_impl = fs::read(&assets[0].output_impl).unwrap();
    let first_header = fs::read(&assets[0].output_header).unwrap();

    assert!(pipeline::compile(&assets[0], false).unwrap());
    assert_eq!(fs::read(&assets[0].output_impl).unwrap(), first_impl);
    assert_eq!(fs::read(&assets[0].output_header).unwrap(), first_header);
}

#[test]
fn test_font_compilation_embeds_sidecar_geometry() {
    if !have_xxd() {
        return;
    }

    let (_temp, root) = make_project();
    let font_dir = layout::fonts_root(&root).join("mono");
    write_file(&font_dir.join("mono.png"), b"atlas");
    write_file(&font_dir.join("mono.json"), br#"{"atlas_width": 1024, "char_width": 32}"#);

    let summary = pipeline::run_all(&root, false).unwrap();
    assert_eq!(summary.succeeded, 1);

    let assets = asset::discover_all(&root).unwrap();
    let implementation = fs::read_to_string(&assets[0].output_impl).unwrap();

    assert!(implementation.contains(".atlas_width(1024)"));
    assert!(implementation.contains(".atlas_height(512)"));
    assert!(implementation.contains(".char_width(32)"));
    assert!(implementation.contains(".char_height(64)"));
    assert!(implementation.contains("FontResourceBuilder()"));
}
