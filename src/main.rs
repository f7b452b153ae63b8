// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for wm-keybindings
//!
//! Provides commands for listing, checking and migrating keybinding
//! files, and for printing the built-in defaults.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use wm_keybindings::config::{KeybindingStore, DEFAULT_KEYBINDINGS_PATH};
use wm_keybindings::core::codec::Schema;
use wm_keybindings::core::{encode_to_string, KeybindingTable};
use wm_keybindings::logging;

#[derive(Parser)]
#[command(name = "wm-keybindings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every action with its binding
    Show {
        /// Path to keybinding file
        #[arg(short, long, default_value = DEFAULT_KEYBINDINGS_PATH)]
        file: PathBuf,

        /// Start from an all-unbound table instead of the defaults
        #[arg(long)]
        no_defaults: bool,
    },

    /// Report the document schema and any ignored entries
    Check {
        /// Path to keybinding file
        #[arg(short, long, default_value = DEFAULT_KEYBINDINGS_PATH)]
        file: PathBuf,
    },

    /// Rewrite a legacy keybinding file in the current schema
    Migrate {
        /// Path to keybinding file
        #[arg(short, long, default_value = DEFAULT_KEYBINDINGS_PATH)]
        file: PathBuf,
    },

    /// Print the default keybinding document
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Show { file, no_defaults } => show_keybindings(&file, !no_defaults)?,
        Commands::Check { file } => check_keybindings(&file)?,
        Commands::Migrate { file } => migrate_keybindings(&file)?,
        Commands::Defaults => println!("{}", encode_to_string(&KeybindingTable::default())),
    }

    Ok(())
}

/// Expands `~` and opens the store
fn open_store(path: &Path) -> anyhow::Result<KeybindingStore> {
    let expanded_path = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );

    Ok(KeybindingStore::new(PathBuf::from(expanded_path.as_ref()))?)
}

/// List all keybindings in the file
fn show_keybindings(path: &Path, use_defaults: bool) -> anyhow::Result<()> {
    let store = open_store(path)?;
    let report = store.load(use_defaults)?;

    println!(
        "{}",
        format!("Keybindings from: {}\n", store.path().display()).bold()
    );

    for (action, binding) in report.table.iter() {
        match binding {
            Some(binding) => println!("{:<26} → {}", action.name().cyan(), binding),
            None => println!("{:<26} → {}", action.name().cyan(), "unbound".dimmed()),
        }
    }

    println!(
        "\n{} {} of {} actions bound",
        "✓".green(),
        report.table.bound_count(),
        wm_keybindings::Action::ALL.len()
    );

    Ok(())
}

/// Report schema and skipped entries; exits 1 if anything was skipped
fn check_keybindings(path: &Path) -> anyhow::Result<()> {
    let store = open_store(path)?;
    let report = store.load(true)?;

    println!("{} Parsing keybindings: {}", "→".cyan(), store.path().display());
    println!("{} Schema: {}", "✓".green(), report.schema);

    if report.schema == Schema::Legacy {
        println!(
            "{}",
            "⚠ Legacy format. Run `wm-keybindings migrate` to upgrade it.".yellow()
        );
    }

    if report.skipped.is_empty() {
        println!("{} {}", "✓".green().bold(), "All entries recognised!".bold());
        return Ok(());
    }

    println!(
        "{} Ignored {} entr{}:\n",
        "✗".red().bold(),
        report.skipped.len(),
        if report.skipped.len() == 1 { "y" } else { "ies" }
    );

    for (idx, entry) in report.skipped.iter().enumerate() {
        println!(
            "  {} {} → {}",
            format!("{}.", idx + 1).dimmed(),
            entry.name.magenta(),
            entry.reason
        );
    }

    println!(
        "\n{}",
        "⚠ These entries were probably written by a newer version and will be lost on save."
            .yellow()
    );
    std::process::exit(1);
}

/// Rewrite the file in the current schema (with backup)
fn migrate_keybindings(path: &Path) -> anyhow::Result<()> {
    let store = open_store(path)?;

    match store.migrate()? {
        Some(backup) => {
            println!("{} Migrated {}", "✓".green(), store.path().display());
            println!("  Backup: {}", backup.display().to_string().dimmed());
        }
        None => println!("{} Already in the current format, nothing to do", "✓".green()),
    }

    Ok(())
}
