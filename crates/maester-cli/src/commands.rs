//! Handler functions for the CLI subcommands.
//!
//! Each handler builds a client from the loaded configuration, runs the
//! fetches, and prints a rendered view. Errors bubble up to `main`,
//! which owns the "Something went wrong" surface; the one exception is
//! a character that does not exist, which is a view of its own, not an
//! error.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use maester_client::ApiClient;
use maester_core::{CharacterId, Error, Page, Result};

use crate::config::{MaesterConfig, DEFAULT_CONFIG_FILE};
use crate::render::{self, MemberLookup};

/// `maester houses`: fetch one page of houses and resolve every sworn
/// member to a summary line.
pub async fn houses(config: &MaesterConfig, page: Page) -> Result<()> {
    let client = ApiClient::new(config.client_options())?;
    let houses = client.houses(page).await?;
    debug!(%page, houses = houses.len(), "fetched house page");

    // A reference shared by several houses on the page is fetched once;
    // every line still gets its own entry via the lookup.
    let mut seen = HashSet::new();
    let unique: Vec<String> = houses
        .iter()
        .flat_map(|h| &h.sworn_members)
        .filter(|url| seen.insert(url.as_str().to_string()))
        .cloned()
        .collect();
    let lookup: MemberLookup = client.members(&unique).await.into_iter().collect();

    print!("{}", render::houses_page(page, &houses, &lookup));
    Ok(())
}

/// `maester character <id>`: fetch and print the full record.
pub async fn character(config: &MaesterConfig, id: CharacterId) -> Result<()> {
    let client = ApiClient::new(config.client_options())?;
    match client.character(id).await {
        Ok(character) => {
            print!("{}", render::character_detail(&character));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("Character not found.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// `maester config path`: show the resolved config file location.
pub fn config_path(config_path: Option<&str>) -> Result<()> {
    match MaesterConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `maester config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "could not determine config directory for this platform",
        )),
    }
}

/// `maester config init`: write a commented default config file.
pub fn config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => MaesterConfig::default_config_path()
            .ok_or_else(|| Error::config("could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "config file already exists at {}; use --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, DEFAULT_CONFIG_FILE)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
