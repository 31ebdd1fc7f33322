//! Fixture command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::format_value;
use crate::config::load_document;

#[derive(Args)]
pub struct FixtureArgs {
    /// Fixture document (JSON object)
    #[arg(value_name = "PATH", default_value = "veilFixture.json")]
    pub path: PathBuf,

    /// Print only this key
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,
}

pub fn run(args: FixtureArgs) -> Result<()> {
    let document = load_document(&args.path)?;

    match args.key {
        Some(key) => {
            let Some(value) = document.get(&key) else {
                anyhow::bail!("Key '{}' not found in {}", key, args.path.display());
            };
            println!("{}", format_value(Some(value)));
        }
        None => {
            let rendered =
                serde_json::to_string_pretty(&document).context("Failed to serialize fixture")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
