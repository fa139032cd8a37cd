mod get;
mod init;
mod show;

pub use get::GetArgs;
pub use init::InitArgs;
pub use show::ShowArgs;

/// Subcommands for datapaths
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved paths.
    Show(ShowArgs),

    /// Print a single path by key.
    Get(GetArgs),

    /// Write an editable artifact file.
    Init(InitArgs),

    /// Print the command-line help as markdown.
    #[command(hide = true)]
    MarkdownHelp,
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::Show(cmd) => cmd.run(),
            Commands::Get(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::MarkdownHelp => {
                clap_markdown::print_help_markdown::<crate::Args>();
                Ok(())
            }
        }
    }
}
