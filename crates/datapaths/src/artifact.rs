//! # Configuration Artifacts
//!
//! The artifact directory is the base for the cache path. For the built-in
//! record it is [`DEFAULT_ARTIFACT_DIR`](crate::DEFAULT_ARTIFACT_DIR); an
//! on-disk [`ConfigArtifact`] file uses the directory that contains it.
//!
//! Artifact files are JSON, and carry only the (edited) data path:
//!
//! ```json
//! { "data_path": "your/path/to/the/dropbox/folder" }
//! ```

use std::{
    env,
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DATA_PATH, DPResult, DataPathsError, PathsConfig, PathsConfigOptions};

/// The absolute form of `dir`.
///
/// Lexical only: does not check existence, and does not resolve symlinks.
/// Absolute paths are returned unchanged; relative paths are resolved
/// against the current directory, and an empty path is the current directory.
pub fn absolute_dir<P: AsRef<Path>>(dir: P) -> DPResult<PathBuf> {
    let dir = dir.as_ref();
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    if dir.as_os_str().is_empty() {
        return env::current_dir().map_err(DataPathsError::CurrentDir);
    }
    std::path::absolute(dir).map_err(DataPathsError::CurrentDir)
}

/// The absolute directory containing the artifact file at `path`.
///
/// Lexical only; the file need not exist.
///
/// # Errors
/// * [`DataPathsError::NoParentDir`] if `path` has no parent (e.g. `/`).
pub fn artifact_dir_of<P: AsRef<Path>>(path: P) -> DPResult<PathBuf> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| DataPathsError::NoParentDir {
        path: path.to_path_buf(),
    })?;
    absolute_dir(parent)
}

/// On-disk configuration artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigArtifact {
    /// Where the downloaded dataset is located.
    pub data_path: String,
}

impl Default for ConfigArtifact {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

impl ConfigArtifact {
    /// Construct an artifact with the given data path.
    pub fn new<S: Into<String>>(data_path: S) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read an artifact file.
    pub fn load<P: AsRef<Path>>(path: P) -> DPResult<Self> {
        let path = path.as_ref();
        log::debug!("loading artifact: {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| DataPathsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| DataPathsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write this artifact as pretty JSON.
    ///
    /// Does not create missing parent directories.
    ///
    /// # Errors
    /// * [`DataPathsError::AlreadyExists`] if the file exists and `overwrite` is `false`.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
        overwrite: bool,
    ) -> DPResult<()> {
        let path = path.as_ref();
        log::debug!("saving artifact: {}", path.display());

        let mut text = serde_json::to_string_pretty(self).map_err(DataPathsError::Serialize)?;
        text.push('\n');

        let io_err = |source: io::Error| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                DataPathsError::AlreadyExists {
                    path: path.to_path_buf(),
                }
            } else {
                DataPathsError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        };

        if overwrite {
            fs::write(path, text).map_err(io_err)
        } else {
            use std::io::Write;
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(io_err)?;
            file.write_all(text.as_bytes()).map_err(io_err)
        }
    }
}

/// Load the [`PathsConfig`] described by the artifact file at `path`.
///
/// * `data_path` is taken from the file, verbatim.
/// * `cache_path` is `<directory containing the file>/cache`.
///
/// Only reads `path`; the cache directory is not created.
pub fn load_paths_config<P: AsRef<Path>>(path: P) -> DPResult<PathsConfig> {
    let path = path.as_ref();
    let artifact = ConfigArtifact::load(path)?;
    let artifact_dir = artifact_dir_of(path)?;

    PathsConfig::new(
        PathsConfigOptions::default()
            .with_artifact_dir(Some(artifact_dir))
            .with_data_path(Some(artifact.data_path)),
    )
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempdir::TempDir;

    use super::*;
    use crate::CACHE_DIR_NAME;

    #[test]
    fn test_absolute_dir() {
        let dir = PathBuf::from("/home/user/project");
        assert_eq!(absolute_dir(&dir).unwrap(), dir);

        // `..` is kept as written.
        assert_eq!(
            absolute_dir("/home/user/../project").unwrap(),
            PathBuf::from("/home/user/../project")
        );
    }

    #[test]
    #[serial]
    fn test_absolute_dir_relative() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolute_dir("").unwrap(), cwd);
        assert_eq!(absolute_dir("sub/dir").unwrap(), cwd.join("sub/dir"));
    }

    #[test]
    #[serial]
    fn test_artifact_dir_of() {
        assert_eq!(
            artifact_dir_of("/home/user/project/default_config.json").unwrap(),
            PathBuf::from("/home/user/project")
        );

        let cwd = env::current_dir().unwrap();
        assert_eq!(artifact_dir_of("default_config.json").unwrap(), cwd);

        match artifact_dir_of("/") {
            Err(DataPathsError::NoParentDir { path }) => assert_eq!(path, PathBuf::from("/")),
            other => panic!("expected NoParentDir, got {other:?}"),
        }
    }

    #[test]
    fn test_save_load_artifact() {
        TempDir::new("artifact_test")
            .and_then(|dir| {
                let path = dir.path().join("default_config.json");

                let artifact = ConfigArtifact::new("~/Dropbox/Hackathon/");
                artifact.save(&path, false).expect("failed to save artifact");

                let loaded = ConfigArtifact::load(&path).expect("failed to load artifact");
                assert_eq!(loaded, artifact);

                // No clobbering without overwrite.
                match ConfigArtifact::default().save(&path, false) {
                    Err(DataPathsError::AlreadyExists { path: p }) => assert_eq!(p, path),
                    other => panic!("expected AlreadyExists, got {other:?}"),
                }
                assert_eq!(ConfigArtifact::load(&path).unwrap(), artifact);

                ConfigArtifact::default()
                    .save(&path, true)
                    .expect("failed to overwrite artifact");
                assert_eq!(
                    ConfigArtifact::load(&path).unwrap(),
                    ConfigArtifact::default()
                );

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new("artifact_test").unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ConfigArtifact::load(&missing),
            Err(DataPathsError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "data_path = 'x'").unwrap();
        assert!(matches!(
            ConfigArtifact::load(&bad),
            Err(DataPathsError::Parse { .. })
        ));

        // The cache path is always derived, never authored.
        let derived = dir.path().join("derived.json");
        fs::write(&derived, r#"{"data_path": "x", "cache_path": "/tmp/cache"}"#).unwrap();
        assert!(matches!(
            ConfigArtifact::load(&derived),
            Err(DataPathsError::Parse { .. })
        ));

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "{}").unwrap();
        assert!(matches!(
            ConfigArtifact::load(&empty),
            Err(DataPathsError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_paths_config() {
        let dir = TempDir::new("artifact_test").unwrap();
        let path = dir.path().join("default_config.json");
        fs::write(&path, r#"{"data_path": "Data/Hackathon//"}"#).unwrap();

        let config = load_paths_config(&path).unwrap();
        assert_eq!(config.data_path(), "Data/Hackathon//");
        assert_eq!(config.artifact_dir(), dir.path());
        assert_eq!(config.cache_path(), dir.path().join(CACHE_DIR_NAME));

        // Loading is read-only.
        assert!(!config.cache_path().exists());
    }
}
