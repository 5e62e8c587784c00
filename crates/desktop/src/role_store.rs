//! Role flag persisted as a small TOML file in the user's config directory

use std::fs;
use std::path::{Path, PathBuf};

use activity_points_core::{Role, RoleStore, StoreError};
use serde::{Deserialize, Serialize};

const SESSION_FILE: &str = "session.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "userRole", default, skip_serializing_if = "Option::is_none")]
    user_role: Option<Role>,
}

pub struct FileRoleStore {
    path: PathBuf,
}

impl FileRoleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory, or the working directory if there is none
    pub fn in_config_dir() -> Self {
        match directories::ProjectDirs::from("", "", "ActivityPoints") {
            Some(dirs) => Self::new(dirs.config_dir().join(SESSION_FILE)),
            None => {
                tracing::warn!("no config directory available, keeping session file in working directory");
                Self::new(SESSION_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, file: &SessionFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(file).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RoleStore for FileRoleStore {
    fn load(&self) -> Result<Option<Role>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let file: SessionFile = toml::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(file.user_role)
    }

    fn save(&mut self, role: Role) -> Result<(), StoreError> {
        self.write(&SessionFile { user_role: Some(role) })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
