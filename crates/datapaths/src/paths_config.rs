//! # Paths Configuration

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    CACHE_DIR_NAME,
    DEFAULT_ARTIFACT_DIR,
    DEFAULT_DATA_PATH,
    DPResult,
    PathKey,
    artifact::absolute_dir,
};

/// Options for [`PathsConfig`].
#[derive(Clone, Default, Debug)]
pub struct PathsConfigOptions {
    /// Optional artifact directory; the cache path is derived from it.
    pub artifact_dir: Option<PathBuf>,

    /// Optional data path; kept verbatim.
    pub data_path: Option<String>,
}

impl PathsConfigOptions {
    /// Set the artifact directory.
    pub fn with_artifact_dir<P: AsRef<Path>>(
        mut self,
        artifact_dir: Option<P>,
    ) -> Self {
        self.artifact_dir = artifact_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data path.
    pub fn with_data_path<S: Into<String>>(
        mut self,
        data_path: Option<S>,
    ) -> Self {
        self.data_path = data_path.map(Into::into);
        self
    }
}

/// The path configuration record.
///
/// Serializes as `{"data_path": ..., "cache_path": ...}`.
///
/// Neither path is checked for existence, and no directories are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathsConfig {
    /// Dataset directory, as authored.
    data_path: String,

    /// `<artifact_dir>/cache`; absolute.
    cache_path: PathBuf,

    /// Absolute artifact directory.
    #[serde(skip)]
    artifact_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self::resolve()
    }
}

impl PathsConfig {
    /// Resolve the record for the built-in artifact.
    ///
    /// * `data_path` is [`DEFAULT_DATA_PATH`].
    /// * `cache_path` is `DEFAULT_ARTIFACT_DIR/cache`.
    ///
    /// Does no I/O, and does not depend on the current directory.
    pub fn resolve() -> Self {
        Self::from_absolute_dir(PathBuf::from(DEFAULT_ARTIFACT_DIR), DEFAULT_DATA_PATH)
    }

    /// Construct a new [`PathsConfig`].
    ///
    /// A relative `artifact_dir` is made absolute against the current
    /// directory, now; later directory changes do not move the cache path.
    ///
    /// # Errors
    /// * [`DataPathsError::CurrentDir`](crate::DataPathsError::CurrentDir) if a
    ///   relative artifact dir was given and the current directory is unavailable.
    pub fn new(options: PathsConfigOptions) -> DPResult<Self> {
        let artifact_dir = match options.artifact_dir {
            Some(dir) => absolute_dir(dir)?,
            None => PathBuf::from(DEFAULT_ARTIFACT_DIR),
        };

        let data_path = options
            .data_path
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        Ok(Self::from_absolute_dir(artifact_dir, data_path))
    }

    fn from_absolute_dir<S: Into<String>>(
        artifact_dir: PathBuf,
        data_path: S,
    ) -> Self {
        debug_assert!(artifact_dir.is_absolute());
        Self {
            data_path: data_path.into(),
            cache_path: artifact_dir.join(CACHE_DIR_NAME),
            artifact_dir,
        }
    }

    /// Get the data path, as authored.
    pub fn data_path(&self) -> &str {
        &self.data_path
    }

    /// Get the cache path.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Get the artifact directory the cache path was derived from.
    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }

    /// Is the data path still the placeholder?
    pub fn has_placeholder_data_path(&self) -> bool {
        self.data_path == DEFAULT_DATA_PATH
    }

    /// Get the path for `key`.
    pub fn get(
        &self,
        key: PathKey,
    ) -> &Path {
        match key {
            PathKey::DataPath => Path::new(&self.data_path),
            PathKey::CachePath => &self.cache_path,
        }
    }

    /// Get the path for the key named `name`.
    ///
    /// # Errors
    /// * [`DataPathsError::UnknownKey`](crate::DataPathsError::UnknownKey) for
    ///   anything but `"data_path"` and `"cache_path"`.
    pub fn get_by_name(
        &self,
        name: &str,
    ) -> DPResult<&Path> {
        Ok(self.get(PathKey::parse(name)?))
    }

    /// Iterate `(key, path)` pairs, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PathKey, &Path)> + '_ {
        PathKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Get a path under the cache directory.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between the cache path and `file`.
    /// * `file` - the final file name.
    pub fn cache_file<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        extend_path(&self.cache_path, context, file)
    }

    /// Get a path under the data directory.
    ///
    /// Like the data path itself, this is relative if the data path is.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between the data path and `file`.
    /// * `file` - the final file name.
    pub fn data_file<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        extend_path(&self.data_path, context, file)
    }
}

fn extend_path<P, C, F>(
    base: P,
    context: &[C],
    file: F,
) -> PathBuf
where
    P: AsRef<Path>,
    C: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = base.as_ref().to_path_buf();
    path.extend(context.iter().map(|c| c.as_ref()));
    path.push(file.as_ref());
    path
}
