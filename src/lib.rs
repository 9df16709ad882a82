//! # Roster - a GraphQL gateway over a REST store
//!
//! Roster exposes users and companies held by a separate REST resource store
//! (json-server style) as one GraphQL graph. Users point at a company through
//! `companyId`; companies list their users through a reverse lookup. Every
//! non-trivial field is one HTTP call to the store, with no caching or batching.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store running on http://localhost:3000
//! roster serve
//!
//! # Query from the command line
//! roster query '{ user(id: "23") { firstName company { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Records exchanged with the store
//! - [`store`]: HTTP client for the REST store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.roster.toml` files and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Records exchanged with the REST store.
pub mod model;

pub mod store;
