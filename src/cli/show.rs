//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{format_list, format_value};
use crate::config::{load_document, load_map};

#[derive(Args)]
pub struct ShowArgs {
    /// Veil map file (JSON, or YAML by extension)
    #[arg(short, long, value_name = "PATH", env = "VEIL_MAP", default_value = "veilMap.json")]
    pub map: PathBuf,

    /// Fixture document (JSON object)
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "VEIL_FIXTURE",
        default_value = "veilFixture.json"
    )]
    pub fixture: PathBuf,

    /// Fixture key to print
    #[arg(short, long, value_name = "KEY", default_value = "name")]
    pub key: String,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let map = load_map(&args.map)?;
    let document = load_document(&args.fixture)?;

    let value = document.get(&args.key);
    if value.is_none() {
        tracing::warn!("Key '{}' not found in {}", args.key, args.fixture.display());
    }

    println!("{}", format_list(&map.deidentify));
    println!("{}", format_value(value));

    Ok(())
}
