use drumchart_ports::storage::{SettingsDto, StorageError, StoragePort};
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.json";

/// Settings kept as pretty JSON in a single directory.
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn default_base_dir() -> Result<PathBuf, StorageError> {
        dirs_next::config_dir()
            .map(|base| base.join("drumchart"))
            .ok_or_else(|| StorageError::Io("config dir not found".to_string()))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }
}

impl Default for FsStorage {
    fn default() -> Self {
        Self::new(Self::default_base_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl StoragePort for FsStorage {
    fn load_settings(&self) -> Result<SettingsDto, StorageError> {
        let path = self.settings_path();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(SettingsDto::default());
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_slice(&data).map_err(|e| StorageError::Serde(e.to_string()))
    }

    /// Written to a sibling temp file first, then renamed over the old one.
    fn save_settings(&self, s: &SettingsDto) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| StorageError::Io(e.to_string()))?;
        let data = serde_json::to_vec_pretty(s).map_err(|e| StorageError::Serde(e.to_string()))?;

        let path = self.settings_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::Io(e.to_string()))
    }
}
