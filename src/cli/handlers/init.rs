use crate::config::{CONFIG_FILE_NAME, RosterConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(store_url: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    let mut config = RosterConfig::default();
    if let Some(url) = store_url {
        config.store.url = url;
    }
    config.save(&config_path)?;

    println!("{} {}", "Initialized".green(), config_path.display());
    println!("  Store:    {}", config.store.url);
    println!(
        "  Endpoint: http://{}{}",
        config.server.address(),
        config.server.path
    );

    Ok(())
}
