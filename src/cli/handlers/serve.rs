use crate::graphql::run_server;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_explorer: bool,
) -> Result<()> {
    let settings = &mut ctx.config.server;
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    if no_explorer {
        settings.explorer = false;
    }

    let schema = ctx.schema();
    let settings = &ctx.config.server;
    let endpoint = format!("http://{}{}", settings.address(), settings.path);

    println!("{} GraphQL server on {}", "Starting".green(), endpoint.cyan());
    if settings.explorer {
        println!("GraphiQL explorer: {}", endpoint.cyan());
    }
    println!("Store: {}", ctx.store.base_url().as_str().cyan());

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, settings))
        .with_context(|| format!("GraphQL server on {} failed", settings.address()))?;
    Ok(())
}
