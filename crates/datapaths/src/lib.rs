//! # datapaths
//!
//! The path configuration shared by the hackathon data tooling.
//!
//! A [`PathsConfig`] holds two paths:
//! * `data_path` - where the downloaded dataset lives; returned verbatim.
//! * `cache_path` - `<artifact dir>/cache`; always absolute.
//!
//! The process-wide record is available through [`paths()`]:
//!
//! ```
//! let paths = datapaths::paths();
//! assert!(paths.cache_path().is_absolute());
//! assert_eq!(paths.data_path(), datapaths::DEFAULT_DATA_PATH);
//! ```
//!
//! Resolving the record does no I/O. Use [`PathsConfigOptions`] to point at a
//! different artifact directory, or [`artifact::load_paths_config`] to read an
//! edited artifact file from disk.
#![warn(missing_docs)]

use std::sync::LazyLock;

pub mod artifact;
pub mod errors;
pub mod path_key;
pub mod paths_config;

pub use errors::{DPResult, DataPathsError};
pub use path_key::PathKey;
pub use paths_config::{PathsConfig, PathsConfigOptions};

/// Placeholder dataset location; edit to where the downloaded data is located.
pub const DEFAULT_DATA_PATH: &str = "your/path/to/the/dropbox/folder";

/// Name of the cache sub-directory under the artifact directory.
pub const CACHE_DIR_NAME: &str = "cache";

/// Directory of the built-in configuration artifact.
///
/// This is the manifest directory of this crate, which cargo always
/// provides as an absolute path.
pub const DEFAULT_ARTIFACT_DIR: &str = env!("CARGO_MANIFEST_DIR");

static PATHS: LazyLock<PathsConfig> = LazyLock::new(PathsConfig::resolve);

/// The process-wide [`PathsConfig`].
///
/// Built on first access from the built-in artifact; immutable afterwards.
pub fn paths() -> &'static PathsConfig {
    &PATHS
}
