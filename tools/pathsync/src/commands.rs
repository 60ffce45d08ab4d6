//! Command implementations for the CLI.

use anyhow::Result;
use owo_colors::OwoColorize;
use pathsync_core::{SyncConfig, SyncReport};

use crate::formatting::{print_key_value, print_library_list, print_success, print_warning};

pub fn cmd_sync(config: &SyncConfig, json: bool, quiet: bool) -> Result<()> {
    let report = pathsync_core::sync(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        print_report("[Syncing Python paths...]", &report);
        if report.changed {
            print_success(&format!(
                "Updated {} library paths",
                report.libraries.len()
            ));
        } else {
            print_success("Settings already up to date");
        }
        println!();
    }

    Ok(())
}

pub fn cmd_check(config: &SyncConfig, json: bool, quiet: bool) -> Result<()> {
    let report = pathsync_core::check(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        print_report("[Checking Python paths...]", &report);
        if report.changed {
            print_warning("Settings are out of date");
        } else {
            print_success("Settings are up to date");
        }
        println!();
    }

    if report.changed {
        return Err(anyhow::anyhow!(
            "{} does not list the libraries in {}. Run update-python-paths to refresh it.",
            report.settings_path.display(),
            report.libs_root.display()
        ));
    }

    Ok(())
}

fn print_report(title: &str, report: &SyncReport) {
    println!("{}", title.bold().cyan());
    println!();
    print_key_value("Libraries:", &report.libs_root.display().to_string());
    print_key_value("Settings:", &report.settings_path.display().to_string());
    println!();
    print_library_list(&report.libraries);
    println!();
}
