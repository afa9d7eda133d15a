use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PATH_CONFIG_FILE: &str = "path.conf";

/// Knows where the vocabulary library lives when `--library` is not given.
///
/// The location defaults to the OS data directory and can be redirected with a one-line
/// `path.conf` in the OS config directory.
#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let config_path = Self::get_path_config_file()?;
        Self::write_path_config(&config_path, path)?;
        info!("Library path set to {:?} (stored in {:?}).", path, config_path);
        Ok(())
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(&config_path)?;
                info!("Removed custom library path {:?}.", config_path);
            }
        }
        Ok(())
    }

    fn write_path_config(config_path: &Path, library: &Path) -> Result<()> {
        if !library.is_absolute() {
            return Err(CliError::Argument(format!(
                "Library path must be absolute: {}",
                library.display()
            )));
        }
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, library.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    fn read_path_config(config_path: &Path) -> Result<Option<PathBuf>> {
        if !config_path.exists() {
            return Ok(None);
        }
        let custom_path_str = fs::read_to_string(config_path)?.trim().to_string();
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            return Ok(None);
        }
        Ok(Some(PathBuf::from(custom_path_str)))
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) => match Self::read_path_config(&config_path)? {
                Some(path) => Ok(path),
                None => Self::get_default_data_path(),
            },
            Err(_) => Self::get_default_data_path(),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("de", "fiches", "fiches")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(PATH_CONFIG_FILE))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn path_config_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config").join(PATH_CONFIG_FILE);
        let library = dir.path().join("Bibliothek");

        DataManager::write_path_config(&config_path, &library).unwrap();
        assert_eq!(
            DataManager::read_path_config(&config_path).unwrap(),
            Some(library)
        );
    }

    #[test]
    fn missing_or_empty_path_config_means_default() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(PATH_CONFIG_FILE);
        assert_eq!(DataManager::read_path_config(&config_path).unwrap(), None);

        fs::write(&config_path, "  \n").unwrap();
        assert_eq!(DataManager::read_path_config(&config_path).unwrap(), None);
    }

    #[test]
    fn relative_library_path_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(PATH_CONFIG_FILE);
        let result = DataManager::write_path_config(&config_path, Path::new("relative/lib"));
        assert!(matches!(result, Err(CliError::Argument(_))));
        assert!(!config_path.exists());
    }

    #[test]
    fn custom_path_is_reported_verbatim() {
        let manager = DataManager::with_custom_path(PathBuf::from("/srv/fiches"));
        assert_eq!(manager.get_data_path(), Path::new("/srv/fiches"));
    }
}
