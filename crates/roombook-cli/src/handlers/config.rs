use anyhow::Result;

use crate::config::{self, Config};

pub fn show(base_url_flag: Option<&str>) -> Result<()> {
    let file_config = Config::load()?;
    let resolved = config::resolve_base_url(base_url_flag, &file_config);

    println!("Config file: {}", Config::default_path()?.display());
    match &file_config.base_url {
        Some(url) => println!("  base_url = {}", url),
        None => println!("  base_url = (not set)"),
    }
    println!("Resolved base URL: {}", resolved);
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    let mut file_config = Config::load()?;
    file_config.base_url = Some(url.trim_end_matches('/').to_string());
    file_config.save()?;
    println!("Base URL set to {}.", url.trim_end_matches('/'));
    Ok(())
}
