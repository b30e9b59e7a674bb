use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wedgen::error::Error;
use wedgen::materialize::materialize;

fn make_template(root: &Path, with_scaffold: bool) {
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::create_dir_all(root.join("assets/images")).unwrap();
    fs::write(root.join("pubspec.yaml"), "name: wedding_app\n").unwrap();
    fs::write(root.join("lib/main.dart"), "void main() {}\n").unwrap();
    fs::write(root.join("assets/images/rings.png"), [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]).unwrap();
    if with_scaffold {
        fs::create_dir_all(root.join("test")).unwrap();
        fs::write(root.join("test/widget_test.dart"), "// scaffold\n").unwrap();
    }
}

#[test]
fn test_materialize_copies_full_tree() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let working = temp_dir.path().join("working");
    make_template(&template, false);

    materialize(&template, &working).unwrap();

    // Without a scaffold to strip, the copy is byte-identical.
    assert!(!dir_diff::is_different(&template, &working).unwrap());
}

#[test]
fn test_materialize_removes_scaffold() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let working = temp_dir.path().join("working");
    make_template(&template, true);

    materialize(&template, &working).unwrap();

    assert!(!working.join("test/widget_test.dart").exists());
    assert!(working.join("test").exists());
    assert!(template.join("test/widget_test.dart").exists());
}

#[test]
fn test_materialize_preserves_binary_content() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let working = temp_dir.path().join("working");
    make_template(&template, false);

    materialize(&template, &working).unwrap();

    let original = fs::read(template.join("assets/images/rings.png")).unwrap();
    let copied = fs::read(working.join("assets/images/rings.png")).unwrap();
    assert_eq!(original, copied);
}

#[test]
fn test_materialize_missing_template() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("missing");
    let working = temp_dir.path().join("working");

    match materialize(&template, &working) {
        Err(Error::TemplateSourceError(_)) => (),
        _ => panic!("Expected TemplateSourceError variant"),
    }
    assert!(!working.exists());
}

#[test]
fn test_materialize_occupied_destination() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let working = temp_dir.path().join("working");
    make_template(&template, false);
    fs::create_dir_all(&working).unwrap();

    match materialize(&template, &working) {
        Err(Error::WorkingTreeExistsError { .. }) => (),
        _ => panic!("Expected WorkingTreeExistsError variant"),
    }
}

#[test]
fn test_mutating_copy_leaves_template_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let working = temp_dir.path().join("working");
    make_template(&template, false);

    materialize(&template, &working).unwrap();
    fs::write(working.join("lib/main.dart"), "void main() { run(); }\n").unwrap();

    let original = fs::read_to_string(template.join("lib/main.dart")).unwrap();
    assert_eq!(original, "void main() {}\n");
}
