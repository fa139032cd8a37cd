use std::path::PathBuf;

use anyhow::Context;
use datapaths::{
    PathsConfig,
    PathsConfigOptions,
    artifact::{ConfigArtifact, artifact_dir_of},
};

/// Configuration source argument group.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Artifact file; the cache path is derived from its directory.
    #[arg(long, conflicts_with = "artifact_dir")]
    config: Option<PathBuf>,

    /// Artifact directory; the cache path is `<DIR>/cache`.
    #[arg(long)]
    artifact_dir: Option<PathBuf>,

    /// Use this data path instead of the configured one.
    #[arg(long)]
    data_path: Option<String>,
}

impl SourceArgs {
    /// Resolve the selected [`PathsConfig`].
    ///
    /// Defaults to the built-in record.
    pub fn resolve(&self) -> anyhow::Result<PathsConfig> {
        let mut options = match &self.config {
            Some(path) => {
                let artifact = ConfigArtifact::load(path)
                    .with_context(|| format!("failed to load artifact {}", path.display()))?;

                PathsConfigOptions::default()
                    .with_artifact_dir(Some(artifact_dir_of(path)?))
                    .with_data_path(Some(artifact.data_path))
            }
            None => PathsConfigOptions::default().with_artifact_dir(self.artifact_dir.as_ref()),
        };

        if let Some(data_path) = &self.data_path {
            options = options.with_data_path(Some(data_path));
        }

        let config = PathsConfig::new(options).context("failed to resolve paths")?;

        if config.has_placeholder_data_path() {
            log::warn!(
                "data_path is still the placeholder {:?}; set it to where the downloaded data is located",
                config.data_path()
            );
        }
        log::debug!("resolved {config:?}");

        Ok(config)
    }
}
