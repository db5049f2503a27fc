use std::path::PathBuf;

use bytes::Bytes;
use smartschool_storage::{DiskStorage, StorageBackend};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("smartschool-storage-test-{}", Uuid::new_v4()))
}

async fn cleanup(path: PathBuf) {
    let _ = tokio::fs::remove_dir_all(path).await;
}

#[tokio::test]
async fn stored_file_is_retrievable_under_the_returned_reference() {
    let root = temp_root();
    let storage = DiskStorage::new(root.clone(), "/uploads")
        .await
        .expect("create upload dir");

    let url = storage
        .store("image", "portrait.png", Bytes::from_static(b"png-bytes"))
        .await
        .expect("store should succeed");

    let filename = url
        .strip_prefix("/uploads/")
        .expect("reference is rooted at the serving prefix");
    assert!(filename.ends_with(".png"));

    let on_disk = tokio::fs::read(root.join(filename)).await.expect("read back");
    assert_eq!(on_disk, b"png-bytes");

    cleanup(root).await;
}

#[tokio::test]
async fn same_millisecond_stores_produce_distinct_references() {
    let root = temp_root();
    let storage = DiskStorage::new(root.clone(), "/uploads")
        .await
        .expect("create upload dir");

    // Back-to-back stores land in the same millisecond on any modern
    // machine; the references must differ anyway.
    let first = storage
        .store("images", "a.jpg", Bytes::from_static(b"one"))
        .await
        .expect("first store");
    let second = storage
        .store("images", "a.jpg", Bytes::from_static(b"two"))
        .await
        .expect("second store");

    assert_ne!(first, second);

    cleanup(root).await;
}

#[tokio::test]
async fn filename_without_extension_still_stores() {
    let root = temp_root();
    let storage = DiskStorage::new(root.clone(), "/uploads/")
        .await
        .expect("create upload dir");

    let url = storage
        .store("image", "blob", Bytes::from_static(b"raw"))
        .await
        .expect("store should succeed");

    // Trailing slash on the prefix must not double up.
    assert!(url.starts_with("/uploads/"));
    assert!(!url.contains("//"));

    cleanup(root).await;
}
