mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pathsync_core::config::DEFAULT_WORKSPACE_ROOT;
use pathsync_core::SyncConfig;
use tracing::Level;

#[derive(Parser)]
#[command(name = "update-python-paths")]
#[command(about = "Point VS Code Python extra paths at every library in the workspace")]
struct Cli {
    /// Workspace root containing `libs/` and `.vscode/settings.json`
    #[arg(long, default_value = DEFAULT_WORKSPACE_ROOT)]
    workspace: PathBuf,

    /// Libraries directory, overriding `<workspace>/libs`
    #[arg(long)]
    libs_dir: Option<PathBuf>,

    /// Settings file, overriding `<workspace>/.vscode/settings.json`
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write library paths sorted by name instead of directory listing order
    #[arg(long, action)]
    sort: bool,

    /// Fail if the settings are out of date instead of rewriting them
    #[arg(long, action)]
    check: bool,

    #[arg(long, action)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, action)]
    quiet: bool,
}

impl Cli {
    fn sync_config(&self) -> SyncConfig {
        let mut config = SyncConfig::for_workspace(&self.workspace).with_sort(self.sort);
        if let Some(ref libs_dir) = self.libs_dir {
            config = config.with_libs_root(libs_dir);
        }
        if let Some(ref settings) = self.settings {
            config = config.with_settings_path(settings);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.sync_config();
    if cli.check {
        commands::cmd_check(&config, cli.json, cli.quiet)
    } else {
        commands::cmd_sync(&config, cli.json, cli.quiet)
    }
}
