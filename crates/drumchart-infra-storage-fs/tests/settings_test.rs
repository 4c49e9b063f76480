use drumchart_infra_storage_fs::FsStorage;
use drumchart_ports::storage::{SettingsDto, StorageError, StoragePort};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("drumchart-{name}-{nanos}"))
}

#[test]
fn missing_file_yields_defaults() {
    let storage = FsStorage::new(temp_dir("missing"));

    let settings = storage.load_settings().expect("defaults");

    assert_eq!(settings, SettingsDto::default());
}

#[test]
fn settings_roundtrip_through_disk() {
    let dir = temp_dir("roundtrip");
    let storage = FsStorage::new(dir.clone());
    let settings = SettingsDto {
        cymbal_flip: true,
        strict: false,
    };

    storage.save_settings(&settings).expect("save");
    let loaded = storage.load_settings().expect("load");

    assert_eq!(loaded, settings);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = temp_dir("partial");
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(dir.join("settings.json"), br#"{ "strict": true }"#).expect("write");

    let loaded = FsStorage::new(dir.clone()).load_settings().expect("load");

    assert!(loaded.strict);
    assert!(!loaded.cymbal_flip);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let dir = temp_dir("corrupt");
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(dir.join("settings.json"), b"{ nope").expect("write");

    let err = FsStorage::new(dir.clone()).load_settings().expect_err("corrupt");

    assert!(matches!(err, StorageError::Serde(_)));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_creates_directory_and_leaves_no_temp_file() {
    let dir = temp_dir("nested").join("deeper");
    let storage = FsStorage::new(dir.clone());

    storage
        .save_settings(&SettingsDto {
            cymbal_flip: false,
            strict: true,
        })
        .expect("save");

    assert!(storage.settings_path().exists());
    assert!(!dir.join("settings.json.tmp").exists());
    let _ = std::fs::remove_dir_all(dir.parent().unwrap_or(&dir));
}
