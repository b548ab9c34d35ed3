//! Tests for the shared image store.

use super::*;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    store: ImageStore,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();
    let store = ImageStore::new(root.join("themes").join("Images"));
    Fixture {
        _dir: dir,
        root,
        store,
    }
}

fn write_source(root: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join("pictures").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, bytes).unwrap();
    path
}

fn write_theme(root: &Path, name: &str, source: &str, stored: &str) -> PathBuf {
    let path = root.join("themes").join(format!("{name}.theme"));
    let mut settings = TomlSettings::open(&path).unwrap();
    if !source.is_empty() {
        settings.write_string(keys::BACKGROUND_IMAGE, source);
    }
    settings.write_string(keys::BACKGROUND_IMAGE_FILE, stored);
    settings.sync().unwrap();
    path
}

#[test]
fn import_names_copy_after_path_hash() {
    let f = fixture();
    let source = write_source(&f.root, "Desk.JPG", b"jpeg bytes");

    let stored = f.store.import_image(&source);

    let expected = format!("{}.jpg", source_hash(&source));
    assert_eq!(stored, expected);
    assert_eq!(stored.len(), 40 + ".jpg".len());
    assert_eq!(
        std::fs::read(f.store.path_of(&stored)).unwrap(),
        b"jpeg bytes"
    );
}

#[test]
fn source_hash_is_sha1_of_path_string() {
    // sha1("abc")
    assert_eq!(
        source_hash(Path::new("abc")),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn importing_same_source_twice_reuses_copy() {
    let f = fixture();
    let source = write_source(&f.root, "sky.png", b"png bytes");

    let first = f.store.import_image(&source);
    let second = f.store.import_image(&source);

    assert_eq!(first, second);
    assert_eq!(f.store.stored_images(), vec![first]);
}

#[test]
fn identical_content_from_another_path_is_deduplicated() {
    let f = fixture();
    let a = write_source(&f.root, "a.png", b"same picture");
    let b = write_source(&f.root, "elsewhere/b.png", b"same picture");

    let first = f.store.import_image(&a);
    let second = f.store.import_image(&b);

    assert_eq!(first, second);
    assert_eq!(f.store.stored_images().len(), 1);
}

#[test]
fn name_collision_gets_numeric_suffix() {
    let f = fixture();
    let source = write_source(&f.root, "wall.png", b"new picture");
    let base = source_hash(&source);

    // An unrelated file already sits at the derived name
    std::fs::create_dir_all(f.store.dir()).unwrap();
    std::fs::write(f.store.path_of(&format!("{base}.png")), b"old picture").unwrap();

    let stored = f.store.import_image(&source);
    assert_eq!(stored, format!("{base}-1.png"));

    std::fs::write(f.store.path_of(&format!("{base}-2.png")), b"other").unwrap();
    std::fs::write(&source, b"changed picture").unwrap();
    let third = f.store.import_image(&source);
    assert_eq!(third, format!("{base}-3.png"));

    assert_eq!(
        std::fs::read(f.store.path_of(&format!("{base}.png"))).unwrap(),
        b"old picture"
    );
    assert_eq!(
        std::fs::read(f.store.path_of(&stored)).unwrap(),
        b"new picture"
    );
    assert_eq!(f.store.stored_images().len(), 4);
}

#[test]
fn extensionless_source_keeps_trailing_dot() {
    let f = fixture();
    let source = write_source(&f.root, "noext", b"raw");
    let stored = f.store.import_image(&source);
    assert_eq!(stored, format!("{}.", source_hash(&source)));
}

#[test]
fn missing_source_returns_name_without_copy() {
    let f = fixture();
    let source = f.root.join("pictures").join("gone.png");

    let stored = f.store.import_image(&source);

    assert_eq!(stored, format!("{}.png", source_hash(&source)));
    assert!(!f.store.contains(&stored));
}

#[test]
fn reconcile_deletes_orphans_and_keeps_referenced() {
    let f = fixture();
    let used_source = write_source(&f.root, "used.png", b"used");
    let used = f.store.import_image(&used_source);
    let orphan_source = write_source(&f.root, "orphan.png", b"orphan");
    let orphan = f.store.import_image(&orphan_source);

    let theme = write_theme(&f.root, "Paper", used_source.to_str().unwrap(), &used);

    let report = f.store.reconcile_all(&[theme]);

    assert!(f.store.contains(&used));
    assert!(!f.store.contains(&orphan));
    assert_eq!(report.kept, vec![used]);
    assert_eq!(report.removed, vec![orphan]);
    assert!(report.imported.is_empty());
}

#[test]
fn reconcile_keeps_stored_image_without_source() {
    let f = fixture();
    let source = write_source(&f.root, "kept.png", b"kept");
    let stored = f.store.import_image(&source);
    let theme = write_theme(&f.root, "Bare", "", &stored);

    let report = f.store.reconcile_all(&[theme]);
    assert!(f.store.contains(&stored));
    assert!(report.removed.is_empty());
}

#[test]
fn reconcile_imports_legacy_source_only_theme() {
    let f = fixture();
    let source = write_source(&f.root, "legacy.png", b"legacy");
    let theme = write_theme(&f.root, "Legacy", source.to_str().unwrap(), "");

    let report = f.store.reconcile_all(std::slice::from_ref(&theme));

    let settings = TomlSettings::open(&theme).unwrap();
    let stored = settings.read_string(keys::BACKGROUND_IMAGE_FILE, "");
    assert_eq!(stored, format!("{}.png", source_hash(&source)));
    assert!(f.store.contains(&stored));
    assert_eq!(report.imported.len(), 1);
}

#[test]
fn reconcile_reimports_missing_copy() {
    let f = fixture();
    let source = write_source(&f.root, "again.png", b"again");
    let theme = write_theme(&f.root, "Again", source.to_str().unwrap(), "deleted.png");

    f.store.reconcile_all(std::slice::from_ref(&theme));

    let settings = TomlSettings::open(&theme).unwrap();
    let stored = settings.read_string(keys::BACKGROUND_IMAGE_FILE, "");
    assert_ne!(stored, "deleted.png");
    assert!(f.store.contains(&stored));
}

#[test]
fn reconcile_with_unreadable_theme_deletes_nothing() {
    let f = fixture();
    let source = write_source(&f.root, "mine.png", b"mine");
    let stored = f.store.import_image(&source);

    let broken = f.root.join("themes").join("Broken.theme");
    std::fs::write(&broken, "[Background\nImageFile = ").unwrap();

    let report = f.store.reconcile_all(&[broken]);
    assert!(f.store.contains(&stored));
    assert!(report.removed.is_empty());
}

#[test]
fn reconcile_with_no_themes_empties_store() {
    let f = fixture();
    let source = write_source(&f.root, "lonely.png", b"lonely");
    let stored = f.store.import_image(&source);

    let report = f.store.reconcile_all(&[]);
    assert_eq!(report.removed, vec![stored]);
    assert!(f.store.stored_images().is_empty());
}
