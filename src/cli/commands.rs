use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    author,
    version,
    about = "A GraphQL gateway over a REST store of users and companies"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .roster.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the REST store (overrides config)
    #[arg(long, global = true, env = "ROSTER_STORE_URL")]
    pub store_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .roster.toml in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_explorer: bool,
    },

    /// Execute a GraphQL query against the store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "roster",
            "serve",
            "--port",
            "4100",
            "--no-explorer",
            "--store-url",
            "http://127.0.0.1:3001",
        ])
        .unwrap();
        assert_eq!(cli.store_url.as_deref(), Some("http://127.0.0.1:3001"));
        match cli.command {
            Commands::Serve {
                host,
                port,
                no_explorer,
            } => {
                assert!(host.is_none());
                assert_eq!(port, Some(4100));
                assert!(no_explorer);
            }
            _ => panic!("expected serve"),
        }
    }
}
