//! Map command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::format_list;
use crate::config::load_map;

#[derive(Args)]
pub struct MapArgs {
    /// Veil map file (JSON, or YAML by extension)
    #[arg(value_name = "PATH", default_value = "veilMap.json")]
    pub path: PathBuf,

    /// Print the map as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MapArgs) -> Result<()> {
    let map = load_map(&args.path)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&map).context("Failed to serialize map")?;
        println!("{}", rendered);
    } else {
        println!("deidentify: {}", format_list(&map.deidentify));
        println!("timeshift: {}", format_list(&map.timeshift));
    }

    Ok(())
}
