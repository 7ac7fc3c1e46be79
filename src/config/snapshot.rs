use crate::domain::model::LinkBioData;
use crate::domain::ports::SnapshotStore;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// JSON-file snapshot persistence. One file holds the whole aggregate;
/// `load` on a path that was never written yields `None`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<LinkBioData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Some(data))
    }

    async fn save(&self, data: &LinkBioData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
