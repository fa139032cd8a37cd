use crate::source::SourceArgs;

/// Args for the get command.
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Key to print: `data_path` or `cache_path`.
    pub key: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl GetArgs {
    /// Run the get command.
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.source.resolve()?;
        let path = config.get_by_name(&self.key)?;
        println!("{}", path.display());
        Ok(())
    }
}
