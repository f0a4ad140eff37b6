use snipdeck::catalog::Catalog;
use snipdeck::error::SnipError;
use snipdeck::model::{Category, Snippet};
use snipdeck::store::fs::FileStore;
use snipdeck::store::CatalogStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("buttons.json"));
    (dir, store)
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, store) = setup();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_preserves_catalog() {
    let (_dir, mut store) = setup();
    let mut catalog = Catalog::new();
    catalog.add("50% off", "CODE50", Category::Offer).unwrap();
    catalog.add("Basic", "9.99", Category::Price).unwrap();
    catalog.add("Summer", "SUMMER", Category::Offer).unwrap();
    catalog.add("Pro", "19.99 / month", Category::Price).unwrap();

    store.save(catalog.snippets()).unwrap();
    let loaded = Catalog::from_snippets(store.load().unwrap());

    assert_eq!(loaded, catalog);
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_dir, mut store) = setup();
    store
        .save(&[
            Snippet::new("a", "1", Category::Offer),
            Snippet::new("b", "2", Category::Offer),
        ])
        .unwrap();
    store
        .save(&[Snippet::new("c", "3", Category::Price)])
        .unwrap();

    assert_eq!(
        store.load().unwrap(),
        vec![Snippet::new("c", "3", Category::Price)]
    );
}

#[test]
fn test_save_writes_buttons_document() {
    let (dir, mut store) = setup();
    store
        .save(&[Snippet::new("50% off", "CODE50", Category::Offer)])
        .unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("buttons.json")).unwrap())
            .unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({"buttons": [{"label": "50% off", "text": "CODE50", "type": "offer"}]})
    );
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store
        .save(&[Snippet::new("a", "1", Category::Offer)])
        .unwrap();
    store.save(&[]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_creates_missing_parent_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deck").join("buttons.json");
    let mut store = FileStore::new(&path);

    store
        .save(&[Snippet::new("a", "1", Category::Price)])
        .unwrap();
    assert!(path.is_file());
}

#[test]
fn test_load_drops_record_missing_text() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("buttons.json"),
        r#"{"buttons": [
            {"label": "50% off", "text": "CODE50", "type": "offer"},
            {"label": "no text", "type": "price"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(
        store.load().unwrap(),
        vec![Snippet::new("50% off", "CODE50", Category::Offer)]
    );
}

#[test]
fn test_malformed_file_is_store_read_error() {
    let (dir, store) = setup();
    fs::write(dir.path().join("buttons.json"), "{ \"buttons\": [").unwrap();

    assert!(matches!(store.load(), Err(SnipError::StoreRead { .. })));
}

#[test]
fn test_failed_save_reports_write_error_and_leaves_no_tmp_file() {
    let dir = TempDir::new().unwrap();

    // A non-empty directory squatting on the target makes the rename fail.
    let target = dir.path().join("buttons.json");
    fs::create_dir_all(target.join("inner")).unwrap();
    let mut store = FileStore::new(&target);

    let err = store
        .save(&[Snippet::new("x", "y", Category::Offer)])
        .unwrap_err();
    assert!(matches!(err, SnipError::StoreWrite { .. }));

    // The target is left exactly as it was.
    assert!(target.join("inner").is_dir());
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
