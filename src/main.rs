use anyhow::Result;
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref());

    let Cli {
        command,
        config,
        store_url,
        ..
    } = cli;
    let load = |store_url| CommandContext::load(config.as_deref(), store_url);

    match command {
        Commands::Init => handle_init(store_url),
        Commands::Serve {
            host,
            port,
            no_explorer,
        } => handle_serve(load(store_url)?, host, port, no_explorer),
        Commands::Query { query, variables } => handle_query(load(store_url)?, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load(store_url)?, mutation, variables),
        Commands::Schema => handle_schema(load(store_url)?),
    }
}
