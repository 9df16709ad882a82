mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::graphql::{RosterSchema, build_schema};
use crate::store::StoreClient;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub config_path: Option<PathBuf>,
    pub store: StoreClient,
}

impl CommandContext {
    /// Resolve configuration from `--config`, an upward search, or defaults,
    /// then apply the `--store-url` override.
    pub fn load(config_path: Option<&Path>, store_url: Option<String>) -> Result<Self> {
        let (mut config, config_path) = match config_path {
            Some(path) => (
                RosterConfig::load_from(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                Some(path.to_path_buf()),
            ),
            None => {
                let cwd = std::env::current_dir()?;
                RosterConfig::load(&cwd).context("Failed to load roster configuration")?
            }
        };

        if let Some(url) = store_url {
            config.store.url = url;
        }

        let store = StoreClient::new(&config.store.url)
            .with_context(|| format!("Invalid store URL '{}'", config.store.url))?;

        tracing::debug!(
            config = ?config_path,
            store = %store.base_url(),
            "Configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
            store,
        })
    }

    pub fn schema(&self) -> RosterSchema {
        build_schema(self.store.clone(), self.config.server.max_depth)
    }
}

/// Run a request in-process and print the JSON response.
fn execute_and_print(
    ctx: &CommandContext,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(ctx.schema().execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
