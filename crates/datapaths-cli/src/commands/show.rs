use std::io::Write;

use datapaths::PathsConfig;

use crate::source::SourceArgs;

/// Args for the show command.
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print as a JSON object.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Run the show command.
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.source.resolve()?;
        let mut stdout = std::io::stdout().lock();
        write_config(&mut stdout, &config, self.json)
    }
}

fn write_config(
    writer: &mut dyn Write,
    config: &PathsConfig,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, config)?;
        writeln!(writer)?;
    } else {
        for (key, path) in config.iter() {
            writeln!(writer, "{key}: {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use datapaths::PathsConfigOptions;

    use super::*;

    fn sample() -> PathsConfig {
        PathsConfig::new(
            PathsConfigOptions::default()
                .with_artifact_dir(Some("/home/user/project"))
                .with_data_path(Some("your/path/to/the/dropbox/folder")),
        )
        .unwrap()
    }

    #[test]
    fn test_write_text() {
        let mut buf = Vec::new();
        write_config(&mut buf, &sample(), false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "data_path: your/path/to/the/dropbox/folder\ncache_path: /home/user/project/cache\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_config(&mut buf, &sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "data_path": "your/path/to/the/dropbox/folder",
                "cache_path": "/home/user/project/cache",
            })
        );
    }
}
