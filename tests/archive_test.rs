use std::fs;
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;
use wedgen::archive::{entry_name, pack};

fn make_tree(root: &Path) {
    fs::create_dir_all(root.join("lib/screens")).unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(root.join("pubspec.yaml"), "name: wedding_app\n").unwrap();
    fs::write(root.join("lib/main.dart"), "void main() {}\n").unwrap();
    fs::write(root.join("lib/screens/rsvp.dart"), "class Rsvp {}\n").unwrap();
    fs::write(root.join("assets/rings.png"), [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]).unwrap();
}

#[test]
fn test_pack_preserves_relative_paths_and_content() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");
    let archive_path = temp_dir.path().join("out.zip");
    make_tree(&tree);

    pack(&tree, &archive_path).unwrap();

    let file = fs::File::open(&archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.len(), 4);

    let mut entry = archive.by_name("lib/screens/rsvp.dart").unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    assert_eq!(content, "class Rsvp {}\n");
}

#[test]
fn test_pack_is_lossless_for_binary_files() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");
    let archive_path = temp_dir.path().join("out.zip");
    make_tree(&tree);

    pack(&tree, &archive_path).unwrap();

    let file = fs::File::open(&archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name("assets/rings.png").unwrap();
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    assert_eq!(content, [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]);
}

#[test]
fn test_pack_skips_directory_entries() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");
    let archive_path = temp_dir.path().join("out.zip");
    make_tree(&tree);

    pack(&tree, &archive_path).unwrap();

    let file = fs::File::open(&archive_path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    for name in archive.file_names() {
        assert!(!name.ends_with('/'));
    }
}

#[test]
fn test_failed_pack_leaves_no_partial_archive() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("missing");
    let archive_path = temp_dir.path().join("out.zip");

    assert!(pack(&tree, &archive_path).is_err());
    assert!(!archive_path.exists());
}

#[test]
fn test_entry_name_uses_forward_slashes() {
    let name = entry_name(Path::new("lib").join("main.dart").as_path()).unwrap();
    assert_eq!(name, "lib/main.dart");
}
