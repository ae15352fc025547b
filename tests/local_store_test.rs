use std::time::Duration;

use calltone::application::ports::UploadStore;
use calltone::infrastructure::storage::LocalUploadStore;

fn create_test_store() -> (tempfile::TempDir, LocalUploadStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_upload_when_storing_then_file_is_persisted_with_original_content() {
    let (dir, store) = create_test_store();

    let name = store.store("call.wav", b"RIFFfake").await.unwrap();

    assert!(name.ends_with("_call.wav"));
    let contents = std::fs::read(dir.path().join(&name)).unwrap();
    assert_eq!(contents, b"RIFFfake");
}

#[tokio::test]
async fn given_same_filename_twice_when_storing_then_names_do_not_collide() {
    let (dir, store) = create_test_store();

    let first = store.store("call.wav", b"first").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = store.store("call.wav", b"second").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"first");
    assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"second");
}

#[tokio::test]
async fn given_stored_upload_when_storing_more_then_earlier_files_are_retained() {
    let (dir, store) = create_test_store();

    store.store("a.wav", b"a").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    store.store("b.mp3", b"b").await.unwrap();

    let count = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn given_filename_with_path_separators_when_storing_then_name_stays_inside_store() {
    let (dir, store) = create_test_store();

    let name = store.store("../../etc/passwd", b"data").await.unwrap();

    assert!(!name.contains('/'));
    assert!(dir.path().join(&name).exists());
}

#[tokio::test]
async fn given_missing_base_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads");

    let store = LocalUploadStore::new(nested.clone()).unwrap();
    store.store("call.wav", b"RIFF").await.unwrap();

    assert!(nested.is_dir());
}
