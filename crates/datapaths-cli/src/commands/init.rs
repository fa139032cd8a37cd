use std::path::PathBuf;

use anyhow::Context;
use datapaths::{
    CACHE_DIR_NAME,
    artifact::{ConfigArtifact, artifact_dir_of},
};

/// Args for the init command.
#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the artifact file.
    pub path: PathBuf,

    /// Data path to write; defaults to the placeholder.
    #[arg(long)]
    pub data_path: Option<String>,

    /// Overwrite an existing artifact file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Run the init command.
    pub fn run(&self) -> anyhow::Result<()> {
        let artifact = match &self.data_path {
            Some(data_path) => ConfigArtifact::new(data_path),
            None => ConfigArtifact::default(),
        };

        artifact
            .save(&self.path, self.force)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        let cache_path = artifact_dir_of(&self.path)?.join(CACHE_DIR_NAME);
        log::info!("wrote {}", self.path.display());
        println!("data_path: {}", artifact.data_path);
        println!("cache_path: {}", cache_path.display());

        Ok(())
    }
}
