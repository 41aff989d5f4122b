use sg_core::flags::PERSISTED_FLAGS_KEY;
use sg_core::ports::{AppDirsPort, PersistentStorePort};
use sg_core::PersistedFlags;
use sg_infra::{DirsAppDirsAdapter, FileKeyValueStore};
use tempfile::TempDir;

#[tokio::test]
async fn flags_written_by_one_instance_are_read_by_the_next() {
    let dir = TempDir::new().unwrap();
    let app_dirs = DirsAppDirsAdapter::with_base_data_local_dir(dir.path().to_path_buf())
        .get_app_dirs()
        .unwrap();

    let writer = FileKeyValueStore::new(app_dirs.store_path());
    let flags = PersistedFlags {
        is_onboarded: true,
        ..PersistedFlags::default()
    };
    writer
        .set(PERSISTED_FLAGS_KEY, &flags.to_json().unwrap())
        .await
        .unwrap();

    let reader = FileKeyValueStore::new(app_dirs.store_path());
    let raw = reader.get(PERSISTED_FLAGS_KEY).await.unwrap().unwrap();
    assert_eq!(PersistedFlags::from_json(&raw).unwrap(), flags);
}

#[tokio::test]
async fn legacy_payload_on_disk_is_migrated_when_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"app_flags":"{\"isOnboarded\":true}"}"#).unwrap();

    let store = FileKeyValueStore::new(path);
    let raw = store.get(PERSISTED_FLAGS_KEY).await.unwrap().unwrap();
    let flags = PersistedFlags::from_json(&raw).unwrap();

    assert!(flags.is_onboarded);
    assert_eq!(flags.schema_version, sg_core::flags::CURRENT_SCHEMA_VERSION);
}
