use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Durable key-value storage. Values are whole documents; there is no partial update.
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "remodel-planner")
                    .context("Could not determine data directory")?;
                proj_dirs.data_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self { data_dir })
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to replace {:?}", path))?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
